use serde::Serialize;

use crate::dataset::Dataset;
use crate::hits::{hit_summary, PLATFORM_HIT_COLUMNS};
use crate::transform::{require_columns, NamedValues, ARTISTS, POPULARITY, TRACK_NAME};
use crate::utils::AnalysisError;

/// One song in the parallel-coordinates view
///
/// Serializes flat: every feature first, then the hit flag and identity fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallelRecord {
    #[serde(flatten)]
    pub features: NamedValues<f64>,
    pub is_hit_5_or_more: bool,
    pub track_name: String,
    pub artists: String,
    pub popularity: i64,
}

/// Extract raw feature values for every song, in dataset order
///
/// # Arguments
/// * `dataset` - Loaded songs with platform hit flags
/// * `features` - Numeric columns to carry, in output order
///
/// # Returns
/// * `Ok(records)` - Exactly one record per row
/// * `Err(AnalysisError)` - On a missing column or a non-numeric value
pub fn extract_parallel(
    dataset: &Dataset,
    features: &[String],
) -> Result<Vec<ParallelRecord>, AnalysisError> {
    require_columns(dataset, features, &PLATFORM_HIT_COLUMNS)?;
    require_columns(dataset, &[], &[TRACK_NAME, ARTISTS, POPULARITY])?;

    dataset
        .data
        .iter()
        .map(|point| -> Result<ParallelRecord, AnalysisError> {
            let hits = hit_summary(point)?;
            let values = features
                .iter()
                .map(|name| Ok((name.clone(), point.feature(name)?)))
                .collect::<Result<Vec<_>, AnalysisError>>()?;

            Ok(ParallelRecord {
                features: NamedValues(values),
                is_hit_5_or_more: hits.is_hit_5_or_more,
                track_name: point.text(TRACK_NAME)?.to_string(),
                artists: point.text(ARTISTS)?.to_string(),
                popularity: point.integer(POPULARITY)?,
            })
        })
        .collect()
}
