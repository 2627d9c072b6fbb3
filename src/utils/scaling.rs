use ndarray::Array2;
use serde::Serialize;

use crate::stats::Statistics;
use crate::utils::AnalysisError;

/// Observed extrema of one feature column before scaling
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    /// Range of a column, ignoring missing (NaN) values
    ///
    /// `None` when the column holds no present value.
    pub fn of(values: &[f64]) -> Option<Self> {
        Statistics::compute(values).map(|stats| Self {
            min: stats.min,
            max: stats.max,
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when every observed value is the same
    pub fn is_constant(&self) -> bool {
        self.min == self.max
    }

    /// Map a scaled value back onto the original scale
    pub fn invert(&self, scaled: f64) -> f64 {
        scaled * self.span() + self.min
    }
}

/// Scaled matrix plus the pre-scaling range of every column
#[derive(Debug)]
pub struct MinMaxScaled {
    pub scaled: Array2<f64>,
    pub ranges: Vec<FeatureRange>,
}

/// Apply MinMax scaling: (x - min) / (max - min)
///
/// # Arguments
/// * `features` - Feature matrix to scale (rows=samples, cols=features)
///
/// # Returns
/// * `Ok(MinMaxScaled)` - Values in [0, 1] and the original column ranges
/// * `Err(AnalysisError)` - If the matrix has no rows, or a column has no
///   present value
///
/// # Note
/// Constant columns (min == max) are set to 0.0. Their range is still
/// reported as observed, so `invert` reconstructs the constant.
pub fn min_max_scale(features: &Array2<f64>) -> Result<MinMaxScaled, AnalysisError> {
    if features.nrows() == 0 {
        return Err(AnalysisError::Validation(
            "cannot scale an empty feature matrix".to_string(),
        ));
    }

    let mut scaled = features.clone();
    let mut ranges = Vec::with_capacity(features.ncols());

    for col_idx in 0..features.ncols() {
        let range = FeatureRange::of(&features.column(col_idx).to_vec()).ok_or_else(|| {
            AnalysisError::Validation(format!("column {} has no values to scale", col_idx))
        })?;

        let mut col = scaled.column_mut(col_idx);
        if range.is_constant() {
            col.mapv_inplace(|v| if v.is_nan() { v } else { 0.0 });
        } else {
            let span = range.span();
            col.mapv_inplace(|v| (v - range.min) / span);
        }

        ranges.push(range);
    }

    Ok(MinMaxScaled { scaled, ranges })
}
