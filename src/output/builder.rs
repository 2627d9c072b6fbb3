use serde::Serialize;

use crate::transform::CorrelationRecord;
use crate::utils::AnalysisError;

/// Build compact JSON for any extracted output
///
/// # Returns
/// * `Ok(Vec<u8>)` - UTF-8 JSON bytes; missing values become `null`
/// * `Err(AnalysisError)` - If serialization fails
pub fn build_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, AnalysisError> {
    serde_json::to_vec(value)
        .map_err(|e| AnalysisError::Serialization(format!("failed to encode JSON: {}", e)))
}

/// Build the correlation table as CSV
///
/// Columns are fixed: `Platform,MFCC_Feature,Correlation`. Undefined
/// correlations are written as empty cells.
pub fn build_correlation_csv(records: &[CorrelationRecord]) -> Result<Vec<u8>, AnalysisError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if records.is_empty() {
        writer
            .write_record(["Platform", "MFCC_Feature", "Correlation"])
            .map_err(|e| AnalysisError::Serialization(format!("failed to write header: {}", e)))?;
    }

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| AnalysisError::Serialization(format!("failed to write row: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| AnalysisError::Serialization(format!("failed to flush CSV: {}", e)))
}
