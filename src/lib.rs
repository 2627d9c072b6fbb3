//! Hit Insight Engine - batch data preparation for music hit analysis
//!
//! This library loads a song dataset with audio features and per-platform
//! hit flags, derives cross-platform hit counts, and produces the inputs of
//! the visualizations: raw and normalized feature extracts and an
//! MFCC-vs-platform correlation table.

pub mod config;
pub mod dataset;
pub mod engine;
pub mod hits;
pub mod output;
pub mod stats;
pub mod transform;
pub mod utils;

pub use config::TransformConfig;
pub use dataset::{DataPoint, Dataset};
pub use engine::{run, InsightEngine, RunSummary, TransformKind};
pub use hits::{aggregate_hits, HitSummary};
pub use stats::Statistics;

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;
