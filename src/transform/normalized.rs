use ndarray::Array2;
use serde::Serialize;
use tracing::{debug, warn};

use crate::dataset::Dataset;
use crate::hits::{hit_summary, HitSummary, HIT_THRESHOLD, PLATFORM_HIT_COLUMNS};
use crate::transform::{require_columns, NamedValues, ARTISTS, POPULARITY, TRACK_NAME};
use crate::utils::{min_max_scale, AnalysisError, FeatureRange};

/// One cross-platform hit with its features scaled to [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRecord {
    pub track_name: String,
    pub artists: String,
    pub hit_count: u32,
    pub popularity: i64,
    pub features: NamedValues<f64>,
}

/// Normalized songs plus the ranges needed to undo the scaling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedData {
    pub songs: Vec<SongRecord>,
    pub feature_ranges: NamedValues<FeatureRange>,
}

/// Keep songs that hit on 5+ platforms and min-max scale their features
///
/// # Arguments
/// * `dataset` - Loaded songs with platform hit flags
/// * `features` - Numeric columns to scale, in output order
///
/// # Returns
/// * `Ok(ProcessedData)` - Scaled songs in dataset order, and per-feature
///   `{min, max}` taken over the kept songs before scaling
/// * `Err(AnalysisError)` - On a missing column, a bad value, or when no
///   song reaches the threshold
///
/// # Note
/// A feature whose kept values are all equal scales to 0.0 everywhere.
pub fn extract_normalized(
    dataset: &Dataset,
    features: &[String],
) -> Result<ProcessedData, AnalysisError> {
    require_columns(dataset, features, &PLATFORM_HIT_COLUMNS)?;
    require_columns(dataset, &[], &[TRACK_NAME, ARTISTS, POPULARITY])?;

    let mut summaries: Vec<HitSummary> = Vec::new();
    let kept = dataset.filter(format!("{}_hits", dataset.name), |point| {
        let hits = hit_summary(point)?;
        let keep = hits.hit_count >= HIT_THRESHOLD;
        if keep {
            summaries.push(hits);
        }
        Ok(keep)
    })?;

    if kept.is_empty() {
        return Err(AnalysisError::Validation(format!(
            "no song is a hit on {} or more platforms",
            HIT_THRESHOLD
        )));
    }
    debug!(kept = kept.len(), total = dataset.len(), "filtered cross-platform hits");

    let mut matrix = Array2::<f64>::zeros((kept.len(), features.len()));
    for (row_idx, point) in kept.data.iter().enumerate() {
        for (col_idx, name) in features.iter().enumerate() {
            matrix[[row_idx, col_idx]] = point.feature(name)?;
        }
    }

    let scaled = min_max_scale(&matrix)?;

    for (name, range) in features.iter().zip(&scaled.ranges) {
        if range.is_constant() {
            warn!(
                feature = %name,
                value = range.min,
                "feature has zero range; scaled to 0.0"
            );
        }
    }

    let mut songs = Vec::with_capacity(kept.len());
    for (row_idx, (point, hits)) in kept.data.iter().zip(&summaries).enumerate() {
        let values = features
            .iter()
            .enumerate()
            .map(|(col_idx, name)| (name.clone(), scaled.scaled[[row_idx, col_idx]]))
            .collect();

        songs.push(SongRecord {
            track_name: point.text(TRACK_NAME)?.to_string(),
            artists: point.text(ARTISTS)?.to_string(),
            hit_count: hits.hit_count,
            popularity: point.integer(POPULARITY)?,
            features: NamedValues(values),
        });
    }

    let feature_ranges = NamedValues(features.iter().cloned().zip(scaled.ranges).collect());

    Ok(ProcessedData {
        songs,
        feature_ranges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const HEADER: &str = "track_name,artists,popularity,energy,loudness,mode,Spotify_Hit,YouTube_Hit,\
        TikTok_Hit,Apple Music_Hit,SiriusXM_Hit,Deezer_Hit,Amazon_Hit,Pandora_Hit,Shazam_Hit";

    const NINE: &str = "True,True,True,True,True,True,True,True,True";
    const FIVE: &str = "True,True,True,True,True,False,False,False,False";
    const FOUR: &str = "True,True,True,True,False,False,False,False,False";

    fn dataset(rows: &[String]) -> Dataset {
        let csv_data = format!("{}\n{}", HEADER, rows.join("\n"));
        Dataset::from_csv("songs".to_string(), &csv_data).unwrap()
    }

    /// Original value recovered from a scaled song and the emitted ranges
    fn restore(processed: &ProcessedData, index: usize, feature: &str) -> f64 {
        let scaled = processed.songs[index].features.get(feature).unwrap();
        processed.feature_ranges.get(feature).unwrap().invert(*scaled)
    }

    fn features() -> Vec<String> {
        ["energy", "loudness", "mode"].iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Dataset {
        dataset(&[
            format!("Alpha,Ann,80,0.9,-4.0,1,{}", NINE),
            format!("Beta,Bob,60,0.7,-9.0,1,{}", FOUR),
            format!("Gamma,Cy,70,0.5,-6.0,1,{}", FIVE),
            format!("Delta,Di,50.0,0.1,-12.0,1,{}", FIVE),
        ])
    }

    #[test]
    fn test_keeps_exactly_the_hits() {
        let processed = extract_normalized(&sample(), &features()).unwrap();
        let names: Vec<&str> = processed.songs.iter().map(|s| s.track_name.as_str()).collect();

        assert_eq!(names, vec!["Alpha", "Gamma", "Delta"]);
        assert_eq!(processed.songs[0].hit_count, 9);
        assert_eq!(processed.songs[1].hit_count, 5);
        assert_eq!(processed.songs[2].popularity, 50);
    }

    #[test]
    fn test_ranges_come_from_filtered_subset_before_scaling() {
        let processed = extract_normalized(&sample(), &features()).unwrap();

        // Beta (0.7, -9.0) is filtered out and must not widen the range
        assert_eq!(
            processed.feature_ranges.get("energy"),
            Some(&FeatureRange { min: 0.1, max: 0.9 })
        );
        assert_eq!(
            processed.feature_ranges.get("loudness"),
            Some(&FeatureRange { min: -12.0, max: -4.0 })
        );
    }

    #[test]
    fn test_scaled_values_invert_to_originals() {
        let processed = extract_normalized(&sample(), &features()).unwrap();
        let originals = [(0, 0.9, -4.0), (1, 0.5, -6.0), (2, 0.1, -12.0)];

        for (idx, energy, loudness) in originals {
            for value in processed.songs[idx].features.iter().map(|(_, v)| *v) {
                assert!((0.0..=1.0).contains(&value));
            }
            assert_abs_diff_eq!(
                restore(&processed, idx, "energy"),
                energy,
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(
                restore(&processed, idx, "loudness"),
                loudness,
                epsilon = 1e-12
            );
        }
        assert_abs_diff_eq!(
            *processed.songs[1].features.get("energy").unwrap(),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_range_feature_scales_to_zero() {
        let processed = extract_normalized(&sample(), &features()).unwrap();

        assert_eq!(
            processed.feature_ranges.get("mode"),
            Some(&FeatureRange { min: 1.0, max: 1.0 })
        );
        for song in &processed.songs {
            assert_eq!(song.features.get("mode"), Some(&0.0));
        }
        assert_eq!(restore(&processed, 0, "mode"), 1.0);
    }

    #[test]
    fn test_tiny_spread_round_trips() {
        let data = dataset(&[
            format!("Alpha,Ann,80,1e-17,-4.0,1,{}", NINE),
            format!("Gamma,Cy,70,2e-17,-6.0,1,{}", NINE),
        ]);
        let processed = extract_normalized(&data, &features()).unwrap();

        assert_eq!(
            processed.feature_ranges.get("energy"),
            Some(&FeatureRange { min: 1e-17, max: 2e-17 })
        );
        assert_eq!(processed.songs[1].features.get("energy"), Some(&1.0));
        assert_eq!(restore(&processed, 0, "energy"), 1e-17);
        assert_eq!(restore(&processed, 1, "energy"), 2e-17);
    }

    #[test]
    fn test_no_hits_is_an_error() {
        let data = dataset(&[format!("Beta,Bob,60,0.7,-9.0,1,{}", FOUR)]);
        assert!(matches!(
            extract_normalized(&data, &features()),
            Err(AnalysisError::Validation(_))
        ));
    }

    #[test]
    fn test_output_json_shape() {
        let data = dataset(&[
            format!("Alpha,Ann,80,0.9,-4.0,1,{}", NINE),
            format!("Gamma,Cy,70,0.5,-6.0,0,{}", FIVE),
        ]);
        let processed = extract_normalized(&data, &features()).unwrap();

        assert_eq!(
            serde_json::to_string(&processed).unwrap(),
            concat!(
                r#"{"songs":["#,
                r#"{"track_name":"Alpha","artists":"Ann","hit_count":9,"popularity":80,"features":{"energy":1.0,"loudness":1.0,"mode":1.0}},"#,
                r#"{"track_name":"Gamma","artists":"Cy","hit_count":5,"popularity":70,"features":{"energy":0.0,"loudness":0.0,"mode":0.0}}"#,
                r#"],"feature_ranges":{"energy":{"min":0.5,"max":0.9},"loudness":{"min":-6.0,"max":-4.0},"mode":{"min":0.0,"max":1.0}}}"#
            )
        );
    }
}
