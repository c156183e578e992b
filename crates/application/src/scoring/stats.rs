//! Descriptive statistics and correlation.
//!
//! Undefined results (empty input, a single sample, zero variance) are `None`
//! rather than NaN.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Summary of a sample, in the usual count / mean / std / quartiles layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Description {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); `None` below two samples
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    if is_constant(values) {
        return Some(0.0);
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Every value equal to the first. The mean of such a slice may be off by
/// an ulp, so zero variance is checked on the values themselves.
fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|v| *v == values[0])
}

/// Quantile of already sorted values, interpolating linearly between ranks
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let q = q.clamp(0.0, 1.0);
    let position = (sorted.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Pearson correlation coefficient.
///
/// `None` when the slices differ in length, hold fewer than two samples, or
/// either side has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 || is_constant(xs) || is_constant(ys) {
        return None;
    }

    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((covariance / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Describe a sample; `None` when it is empty
pub fn describe(values: &[f64]) -> Option<Description> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    Some(Description {
        count: sorted.len(),
        mean: mean(&sorted)?,
        std: sample_std(&sorted),
        min: *sorted.first()?,
        q25: quantile_sorted(&sorted, 0.25)?,
        median: quantile_sorted(&sorted, 0.5)?,
        q75: quantile_sorted(&sorted, 0.75)?,
        max: *sorted.last()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[80.0, 50.0]), Some(65.0));
    }

    #[test]
    fn test_sample_std() {
        assert_eq!(sample_std(&[42.0]), None);
        // var = ((2-4)^2 + (4-4)^2 + (6-4)^2) / 2 = 4
        assert!(approx(sample_std(&[2.0, 4.0, 6.0]).unwrap(), 2.0));
    }

    #[test]
    fn test_quantiles_interpolate() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!(approx(quantile_sorted(&sorted, 0.25).unwrap(), 1.75));
        assert!(approx(quantile_sorted(&sorted, 0.5).unwrap(), 2.5));
        assert!(approx(quantile_sorted(&sorted, 0.75).unwrap(), 3.25));
        assert_eq!(quantile_sorted(&[7.0], 0.75), Some(7.0));
    }

    #[test]
    fn test_pearson_perfect_and_inverse() {
        let xs = [1.0, 2.0, 3.0];
        assert!(approx(pearson(&xs, &[10.0, 20.0, 30.0]).unwrap(), 1.0));
        assert!(approx(pearson(&xs, &[3.0, 2.0, 1.0]).unwrap(), -1.0));
    }

    #[test]
    fn test_pearson_undefined_cases() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[5.0, 5.0]), None);
        assert_eq!(pearson(&[1.0, 2.0], &[1.0]), None);
    }

    #[test]
    fn test_constant_without_exact_float_form() {
        let constant = [33.3; 7];
        let varied = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 80.0];

        assert_eq!(pearson(&constant, &constant), None);
        assert_eq!(pearson(&constant, &varied), None);
        assert_eq!(pearson(&varied, &constant), None);
        assert_eq!(sample_std(&constant), Some(0.0));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&[]), None);

        let d = describe(&[80.0, 50.0]).unwrap();
        assert_eq!(d.count, 2);
        assert!(approx(d.mean, 65.0));
        assert!(approx(d.std.unwrap(), 21.213203435596427));
        assert_eq!(d.min, 50.0);
        assert!(approx(d.q25, 57.5));
        assert!(approx(d.median, 65.0));
        assert!(approx(d.q75, 72.5));
        assert_eq!(d.max, 80.0);

        let single = describe(&[70.0]).unwrap();
        assert_eq!(single.std, None);
        assert_eq!(single.median, 70.0);
    }
}
