/// Output encoding modules
pub mod builder;
pub mod report;

// Re-export commonly used functions
pub use builder::{build_correlation_csv, build_json};
pub use report::render_top_correlations;
