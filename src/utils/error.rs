use thiserror::Error;

/// Custom error type for analysis operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A column required by the transform is absent from the dataset
    #[error("MissingColumn: '{column}' not found in dataset")]
    MissingColumn { column: String },

    /// A cell could not be coerced to the type its column requires
    #[error("InvalidValue: row {row}, column '{column}': expected {expected}, got '{value}'")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
        expected: &'static str,
    },

    /// Validation errors (e.g., empty filtered subset, mismatched lengths)
    #[error("ValidationError: {0}")]
    Validation(String),

    /// Output encoding failed
    #[error("SerializationError: {0}")]
    Serialization(String),
}

impl AnalysisError {
    pub fn missing_column(column: &str) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
        }
    }

    pub fn invalid_value(column: &str, row: usize, value: &str, expected: &'static str) -> Self {
        Self::InvalidValue {
            column: column.to_string(),
            row,
            value: value.to_string(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::Validation("test error".to_string());
        assert_eq!(err.to_string(), "ValidationError: test error");

        let err = AnalysisError::missing_column("Spotify_Hit");
        assert_eq!(
            err.to_string(),
            "MissingColumn: 'Spotify_Hit' not found in dataset"
        );

        let err = AnalysisError::invalid_value("energy", 3, "loud", "a number");
        assert_eq!(
            err.to_string(),
            "InvalidValue: row 3, column 'energy': expected a number, got 'loud'"
        );

        let err = AnalysisError::Serialization("bad record".to_string());
        assert_eq!(err.to_string(), "SerializationError: bad record");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<AnalysisError>();
        assert_sync::<AnalysisError>();
    }
}
