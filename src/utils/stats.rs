//! Statistical utility functions.
//!
//! All spread measures here are population statistics (division by n),
//! which is what the analysis contract is defined in terms of.

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the population variance of a slice (n denominator).
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / values.len() as f64
}

/// Calculate the population standard deviation of a slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}
