use serde::{Serialize, Serializer};
use tracing::warn;

use crate::dataset::Dataset;
use crate::hits::{platform_name, HIT_SUFFIX};
use crate::stats::{pearson, rank_by_magnitude};
use crate::utils::AnalysisError;

/// Pearson correlation of one MFCC coefficient with one platform's hit flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationRecord {
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "MFCC_Feature")]
    pub mfcc_feature: String,
    /// NaN when either series is constant; written as an empty cell
    #[serde(rename = "Correlation", serialize_with = "nan_as_missing")]
    pub correlation: f64,
}

fn nan_as_missing<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_none()
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Every platform/feature correlation, platform-major
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationReport {
    pub platforms: Vec<String>,
    pub records: Vec<CorrelationRecord>,
}

impl CorrelationReport {
    /// Records for one platform, in feature order
    pub fn for_platform<'a>(
        &'a self,
        platform: &str,
    ) -> impl Iterator<Item = &'a CorrelationRecord> + 'a {
        let platform = platform.to_string();
        self.records.iter().filter(move |r| r.platform == platform)
    }

    /// The `n` strongest correlations of a platform by absolute value
    pub fn top_correlations(&self, platform: &str, n: usize) -> Vec<&CorrelationRecord> {
        let records: Vec<&CorrelationRecord> = self.for_platform(platform).collect();
        let values: Vec<f64> = records.iter().map(|r| r.correlation).collect();

        rank_by_magnitude(&values)
            .into_iter()
            .take(n)
            .map(|idx| records[idx])
            .collect()
    }
}

/// Correlate each MFCC feature with every platform hit flag over all rows
///
/// Platforms are the dataset columns ending in `_Hit`, in file order.
///
/// # Returns
/// * `Ok(CorrelationReport)` - One record per (platform, feature) pair
/// * `Err(AnalysisError)` - On a missing column or a bad value
pub fn correlate_platforms(
    dataset: &Dataset,
    mfcc_features: &[String],
) -> Result<CorrelationReport, AnalysisError> {
    dataset.require_columns(mfcc_features)?;

    let mfcc_columns = mfcc_features
        .iter()
        .map(|name| dataset.feature_column(name))
        .collect::<Result<Vec<_>, _>>()?;

    let hit_columns = dataset.columns_with_suffix(HIT_SUFFIX);
    let mut platforms = Vec::with_capacity(hit_columns.len());
    let mut records = Vec::with_capacity(hit_columns.len() * mfcc_features.len());

    for hit_column in hit_columns {
        let platform = platform_name(hit_column).to_string();
        let hits = dataset.flag_column(hit_column)?;

        for (name, values) in mfcc_features.iter().zip(&mfcc_columns) {
            let correlation = pearson(values, &hits);
            if correlation.is_nan() {
                warn!(platform = %platform, feature = %name, "correlation undefined");
            }
            records.push(CorrelationRecord {
                platform: platform.clone(),
                mfcc_feature: name.clone(),
                correlation,
            });
        }
        platforms.push(platform);
    }

    Ok(CorrelationReport { platforms, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> Vec<String> {
        vec!["mfcc_1".to_string(), "mfcc_2".to_string()]
    }

    fn sample() -> Dataset {
        let csv_data = "track_name,Spotify_Hit,mfcc_1,Apple Music_Hit,mfcc_2,Shazam_Hit\n\
                        A,True,1.0,False,-3.0,True\n\
                        B,False,2.0,False,5.0,True\n\
                        C,True,3.0,False,-1.0,True\n\
                        D,False,4.0,False,2.0,True";
        Dataset::from_csv("songs".to_string(), csv_data).unwrap()
    }

    #[test]
    fn test_platform_major_order() {
        let report = correlate_platforms(&sample(), &features()).unwrap();

        assert_eq!(report.platforms, vec!["Spotify", "Apple Music", "Shazam"]);
        let pairs: Vec<(&str, &str)> = report
            .records
            .iter()
            .map(|r| (r.platform.as_str(), r.mfcc_feature.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Spotify", "mfcc_1"),
                ("Spotify", "mfcc_2"),
                ("Apple Music", "mfcc_1"),
                ("Apple Music", "mfcc_2"),
                ("Shazam", "mfcc_1"),
                ("Shazam", "mfcc_2"),
            ]
        );
    }

    #[test]
    fn test_values_match_pearson() {
        let report = correlate_platforms(&sample(), &features()).unwrap();
        let expected = pearson(&[1.0, 2.0, 3.0, 4.0], &[1.0, 0.0, 1.0, 0.0]);

        assert_eq!(report.records[0].correlation, expected);
        assert!(report.records[0].correlation < 0.0);
    }

    #[test]
    fn test_constant_platform_is_nan() {
        let report = correlate_platforms(&sample(), &features()).unwrap();

        for platform in ["Apple Music", "Shazam"] {
            let records: Vec<_> = report.for_platform(platform).collect();
            assert_eq!(records.len(), 2);
            assert!(records.iter().all(|r| r.correlation.is_nan()));
        }
    }

    #[test]
    fn test_top_correlations() {
        let report = CorrelationReport {
            platforms: vec!["Spotify".to_string()],
            records: [0.5, -0.8, 0.1, 0.05]
                .iter()
                .enumerate()
                .map(|(i, &correlation)| CorrelationRecord {
                    platform: "Spotify".to_string(),
                    mfcc_feature: format!("mfcc_{}", i + 1),
                    correlation,
                })
                .collect(),
        };

        let top: Vec<f64> = report
            .top_correlations("Spotify", 3)
            .iter()
            .map(|r| r.correlation)
            .collect();
        assert_eq!(top, vec![-0.8, 0.5, 0.1]);
        assert!(report.top_correlations("Deezer", 3).is_empty());
    }

    #[test]
    fn test_missing_mfcc_column() {
        let err = correlate_platforms(&sample(), &["mfcc_13".to_string()]).unwrap_err();
        assert_eq!(err, AnalysisError::missing_column("mfcc_13"));
    }
}
