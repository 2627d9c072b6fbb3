/// Batch transforms over a loaded song dataset
pub mod correlation;
pub mod normalized;
pub mod parallel;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::dataset::Dataset;
use crate::utils::AnalysisError;

// Re-export commonly used functions
pub use correlation::{correlate_platforms, CorrelationRecord, CorrelationReport};
pub use normalized::{extract_normalized, ProcessedData, SongRecord};
pub use parallel::{extract_parallel, ParallelRecord};

/// Identity and display columns carried into every extracted record
pub const TRACK_NAME: &str = "track_name";
pub const ARTISTS: &str = "artists";
pub const POPULARITY: &str = "popularity";

/// Values keyed by name, serialized as a map in insertion order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamedValues<T>(pub Vec<(String, T)>);

impl<T> NamedValues<T> {
    pub fn get(&self, name: &str) -> Option<&T> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(key, v)| (key.as_str(), v))
    }
}

impl<T: Serialize> Serialize for NamedValues<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Check that the dataset carries every listed column before touching rows
pub(crate) fn require_columns(
    dataset: &Dataset,
    features: &[String],
    extra: &[&str],
) -> Result<(), AnalysisError> {
    dataset.require_columns(features)?;
    dataset.require_columns(extra)
}
