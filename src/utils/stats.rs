//! Basic descriptive statistics shared by the analysis modules.
//!
//! These helpers operate on plain `f64` slices extracted from panel columns.

use itertools::izip;

/// Arithmetic mean of a slice
///
/// # Returns
/// `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance with an n - 1 denominator
///
/// # Returns
/// `None` when fewer than two values are present
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation with an n - 1 denominator
///
/// # Returns
/// `None` when fewer than two values are present
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Pearson correlation coefficient between two equal-length series
///
/// Returns `f64::NAN` when either series has zero variance, since the
/// coefficient is undefined there. Callers must not substitute zero.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());

    let n = xs.len() as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xx: f64 = xs.iter().map(|x| x * x).sum();
    let sum_yy: f64 = ys.iter().map(|y| y * y).sum();
    let sum_xy: f64 = izip!(xs, ys).map(|(x, y)| x * y).sum();

    let var_x = n.mul_add(sum_xx, -(sum_x * sum_x));
    let var_y = n.mul_add(sum_yy, -(sum_y * sum_y));
    let denom = (var_x * var_y).sqrt();

    if denom == 0.0 || !denom.is_finite() {
        return f64::NAN;
    }

    n.mul_add(sum_xy, -(sum_x * sum_y)) / denom
}
