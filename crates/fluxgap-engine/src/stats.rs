//! Statistics over a set of collected look-alike values.
//!
//! All three return the sentinel where the statistic is undefined; NaN
//! never escapes.

use fluxgap_common::{INVALID_VALUE, is_invalid};

/// Unweighted arithmetic mean.
pub fn mean(values: &[f64]) -> f64 {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    if mean.is_nan() { INVALID_VALUE } else { mean }
}

/// Sample standard deviation, `sqrt(Σ(v - mean)² / (n - 1))`.
///
/// Needs at least two values.
pub fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return INVALID_VALUE;
    }
    let mean = mean(values);
    if is_invalid(mean) {
        return INVALID_VALUE;
    }
    let mut sum_sq = 0.0;
    for &v in values {
        let d = v - mean;
        sum_sq += d * d;
    }
    let stddev = (sum_sq / (values.len() - 1) as f64).sqrt();
    if stddev.is_nan() { INVALID_VALUE } else { stddev }
}

/// Median by ascending sort: the middle element for odd counts, the mean of
/// the two middle elements for even counts. Empty input is the sentinel; a
/// singleton is itself.
pub fn median(values: &[f64]) -> f64 {
    match values.len() {
        0 => return INVALID_VALUE,
        1 => return values[0],
        _ => {}
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    };
    if median.is_nan() { INVALID_VALUE } else { median }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_basics() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
        assert_eq!(mean(&[5.0]), 5.0);
        assert_eq!(mean(&[]), INVALID_VALUE);
        assert_eq!(mean(&[1.0, f64::NAN]), INVALID_VALUE);
    }

    #[test]
    fn stddev_needs_two_values() {
        assert_eq!(sample_stddev(&[]), INVALID_VALUE);
        assert_eq!(sample_stddev(&[3.0]), INVALID_VALUE);
        assert_eq!(sample_stddev(&[2.0, 4.0, 6.0]), 2.0);
        assert_eq!(sample_stddev(&[5.0, 5.0, 5.0]), 0.0);
        assert_eq!(sample_stddev(&[1.0, f64::NAN, 2.0]), INVALID_VALUE);
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[]), INVALID_VALUE);
        assert_eq!(median(&[7.0]), 7.0);
        assert_eq!(median(&[8.0, 1.0, 3.0]), 3.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[-1.0, -5.0, 0.0, 10.0]), -0.5);
    }
}
