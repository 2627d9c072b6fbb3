/// Utility modules for error handling, type conversions and scaling
pub mod error;
pub mod scaling;
pub mod type_convert;

// Re-export commonly used types
pub use error::AnalysisError;
pub use scaling::{min_max_scale, FeatureRange, MinMaxScaled};
pub use type_convert::{parse_feature, parse_flag, parse_integer};
