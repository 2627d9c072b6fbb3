use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::TransformConfig;
use crate::dataset::Dataset;
use crate::output::{build_correlation_csv, build_json, render_top_correlations};
use crate::transform::{
    correlate_platforms, extract_normalized, extract_parallel, CorrelationReport, ParallelRecord,
    ProcessedData,
};

/// Number of correlations reported per platform on the console
pub const TOP_CORRELATIONS: usize = 3;

/// The three batch transforms the engine can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Raw features for every song
    Parallel,
    /// Scaled features for cross-platform hits
    Normalized,
    /// MFCC-vs-platform correlation table
    Correlation,
}

impl TransformKind {
    /// Default input, output and feature list for this transform
    pub fn default_config(self) -> TransformConfig {
        match self {
            Self::Parallel => TransformConfig::parallel(),
            Self::Normalized => TransformConfig::normalized(),
            Self::Correlation => TransformConfig::correlation(),
        }
    }
}

/// Result of one end-to-end run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub kind: TransformKind,
    pub output: PathBuf,
    pub records: usize,
    /// Console report, produced by the correlation transform only
    pub report: Option<String>,
}

/// The insight engine: one loaded dataset and the transforms over it
#[derive(Debug)]
pub struct InsightEngine {
    dataset: Dataset,
}

impl InsightEngine {
    /// Create an engine over an already loaded dataset
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Load the dataset from a CSV file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let dataset = Dataset::from_path(path)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.get_field_names().len(),
            "loaded dataset"
        );
        Ok(Self::new(dataset))
    }

    /// Raw features for every song
    pub fn parallel_coordinates(
        &self,
        features: &[String],
    ) -> crate::Result<Vec<ParallelRecord>> {
        Ok(extract_parallel(&self.dataset, features)?)
    }

    /// Scaled features for songs that hit on 5+ platforms
    pub fn processed_data(&self, features: &[String]) -> crate::Result<ProcessedData> {
        Ok(extract_normalized(&self.dataset, features)?)
    }

    /// Correlation of each MFCC feature with each platform hit flag
    pub fn platform_correlations(
        &self,
        mfcc_features: &[String],
    ) -> crate::Result<CorrelationReport> {
        Ok(correlate_platforms(&self.dataset, mfcc_features)?)
    }

    /// Run a transform over the loaded dataset and write its output file
    pub fn execute(
        &self,
        kind: TransformKind,
        config: &TransformConfig,
    ) -> crate::Result<RunSummary> {
        let (bytes, records, report) = match kind {
            TransformKind::Parallel => {
                let records = self.parallel_coordinates(&config.features)?;
                (build_json(&records)?, records.len(), None)
            }
            TransformKind::Normalized => {
                let processed = self.processed_data(&config.features)?;
                info!(
                    songs = processed.songs.len(),
                    features = processed.feature_ranges.len(),
                    "normalized cross-platform hits"
                );
                (build_json(&processed)?, processed.songs.len(), None)
            }
            TransformKind::Correlation => {
                let report = self.platform_correlations(&config.features)?;
                let rendered = render_top_correlations(&report, TOP_CORRELATIONS);
                (
                    build_correlation_csv(&report.records)?,
                    report.records.len(),
                    Some(rendered),
                )
            }
        };

        fs::write(&config.output, bytes)
            .with_context(|| format!("failed to write {}", config.output.display()))?;
        info!(output = %config.output.display(), records, "wrote output");

        Ok(RunSummary {
            kind,
            output: config.output.clone(),
            records,
            report,
        })
    }
}

/// Load the configured input and run one transform end to end
pub fn run(kind: TransformKind, config: &TransformConfig) -> crate::Result<RunSummary> {
    let engine = InsightEngine::load(&config.input)?;
    engine.execute(kind, config)
}
