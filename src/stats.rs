use std::cmp::Ordering;

/// Statistics computed from a numeric series, skipping missing (NaN) values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl Statistics {
    /// Compute statistics over the present values of a series
    pub fn compute(values: &[f64]) -> Option<Self> {
        let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();

        if present.is_empty() {
            return None;
        }

        let count = present.len();
        let sum: f64 = present.iter().sum();
        let mean = sum / count as f64;
        let min = present.iter().copied().fold(f64::INFINITY, f64::min);
        let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Statistics {
            count,
            mean,
            min,
            max,
        })
    }
}

/// Pearson correlation coefficient of two equally long series
///
/// Row pairs where either value is missing are dropped first.
///
/// # Returns
/// * r in [-1, 1]
/// * NaN when fewer than two pairs remain or either series is constant
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y)
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(&a, &b)| (a, b))
        .unzip();

    let (Some(sx), Some(sy)) = (Statistics::compute(&xs), Statistics::compute(&ys)) else {
        return f64::NAN;
    };
    if sx.count < 2 {
        return f64::NAN;
    }

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in xs.iter().zip(&ys) {
        let dx = a - sx.mean;
        let dy = b - sy.mean;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }

    (cov / denom).clamp(-1.0, 1.0)
}

/// Indices of `values` ordered by descending absolute magnitude
///
/// Ties keep their original order; NaN sorts after every number.
pub fn rank_by_magnitude(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        let (va, vb) = (values[a].abs(), values[b].abs());
        match (va.is_nan(), vb.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => vb.partial_cmp(&va).unwrap_or(Ordering::Equal),
        }
    });
    order
}
