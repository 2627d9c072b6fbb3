use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::utils::{parse_feature, parse_flag, parse_integer, AnalysisError};

/// One song: raw cell text keyed by column name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    /// 1-based position of the record in its source file, for diagnostics
    pub row: usize,
    pub fields: HashMap<String, String>,
}

impl DataPoint {
    /// Create a new data point
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: HashMap::new(),
        }
    }

    /// Add a field to the data point
    pub fn add_field(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }

    /// Get a field value
    pub fn get_field(&self, key: &str) -> Option<&String> {
        self.fields.get(key)
    }

    fn require(&self, key: &str) -> Result<&str, AnalysisError> {
        self.get_field(key)
            .map(String::as_str)
            .ok_or_else(|| AnalysisError::missing_column(key))
    }

    /// Text field copied verbatim
    pub fn text(&self, key: &str) -> Result<&str, AnalysisError> {
        self.require(key)
    }

    /// Numeric feature; an empty cell is a missing value (NaN)
    pub fn feature(&self, key: &str) -> Result<f64, AnalysisError> {
        let raw = self.require(key)?;
        parse_feature(raw)
            .ok_or_else(|| AnalysisError::invalid_value(key, self.row, raw, "a number"))
    }

    /// Platform hit flag coerced to 0/1
    pub fn flag(&self, key: &str) -> Result<bool, AnalysisError> {
        let raw = self.require(key)?;
        parse_flag(raw)
            .ok_or_else(|| AnalysisError::invalid_value(key, self.row, raw, "a 0/1 flag"))
    }

    /// Integer field such as `popularity`
    pub fn integer(&self, key: &str) -> Result<i64, AnalysisError> {
        let raw = self.require(key)?;
        parse_integer(raw)
            .ok_or_else(|| AnalysisError::invalid_value(key, self.row, raw, "an integer"))
    }
}

/// A collection of data points with the header order of the source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub headers: Vec<String>,
    pub data: Vec<DataPoint>,
}

impl Dataset {
    /// Create a new empty dataset
    pub fn new(name: String, headers: Vec<String>) -> Self {
        Self {
            name,
            headers,
            data: Vec::new(),
        }
    }

    /// Add a data point to the dataset
    pub fn add_point(&mut self, point: DataPoint) {
        self.data.push(point);
    }

    /// Get the number of data points
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if dataset is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Column names in file order
    pub fn get_field_names(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Fail on the first column the dataset does not carry
    pub fn require_columns<S: AsRef<str>>(&self, columns: &[S]) -> Result<(), AnalysisError> {
        match columns.iter().find(|c| !self.has_column(c.as_ref())) {
            Some(missing) => Err(AnalysisError::missing_column(missing.as_ref())),
            None => Ok(()),
        }
    }

    /// Columns whose name ends with `suffix`, in file order
    pub fn columns_with_suffix(&self, suffix: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|h| h.ends_with(suffix))
            .map(String::as_str)
            .collect()
    }

    /// Every value of a numeric column, in row order
    pub fn feature_column(&self, column: &str) -> Result<Vec<f64>, AnalysisError> {
        self.require_columns(&[column])?;
        self.data.iter().map(|point| point.feature(column)).collect()
    }

    /// Every value of a hit-flag column as 0.0/1.0, in row order
    pub fn flag_column(&self, column: &str) -> Result<Vec<f64>, AnalysisError> {
        self.require_columns(&[column])?;
        self.data
            .iter()
            .map(|point| point.flag(column).map(|hit| if hit { 1.0 } else { 0.0 }))
            .collect()
    }

    /// Keep only the points matching `predicate`, preserving order
    pub fn filter<F>(&self, name: String, mut predicate: F) -> Result<Dataset, AnalysisError>
    where
        F: FnMut(&DataPoint) -> Result<bool, AnalysisError>,
    {
        let mut filtered = Dataset::new(name, self.headers.clone());
        for point in &self.data {
            if predicate(point)? {
                filtered.add_point(point.clone());
            }
        }
        Ok(filtered)
    }

    /// Load dataset from CSV text
    pub fn from_csv(name: String, csv_data: &str) -> crate::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_data.as_bytes());

        let headers = reader.headers()?.clone();
        let mut dataset = Dataset::new(name, headers.iter().map(str::to_string).collect());

        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let mut point = DataPoint::new(idx + 1);

            for (i, field) in record.iter().enumerate() {
                if let Some(header) = headers.get(i) {
                    point.add_field(header.to_string(), field.to_string());
                }
            }
            dataset.add_point(point);
        }

        Ok(dataset)
    }

    /// Load dataset from a CSV file; the file stem names the dataset
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string());

        Self::from_csv(name, &content)
            .with_context(|| format!("failed to parse CSV {}", path.display()))
    }
}
