//! Numeric helpers for the statistics collector
//!
//! All helpers return 0.0 on empty input instead of dividing by zero.

/// Arithmetic mean of the values
pub fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Population standard deviation of the values around `mean`
pub fn population_std_dev(values: &[u32], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Fraction of `total` that `hits` represents
pub fn rate(hits: u64, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    hits as f64 / total as f64
}

/// Cumulative average after each value
pub fn running_mean(values: &[u32]) -> Vec<f64> {
    let mut sum = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            sum += v as f64;
            sum / (i + 1) as f64
        })
        .collect()
}
