//! Ordinary least squares forecasting.

use crate::utils::stats::mean;

/// Fitted line parameters, reusable for trend analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Linear regression forecaster.
///
/// Fits `value = slope * index + intercept` by ordinary least squares
/// and extrapolates past the end of the series, clamping forecasts at
/// zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRegression;

impl LinearRegression {
    pub fn new() -> Self {
        Self
    }

    /// Fit the series and forecast `periods` values, returning the
    /// fitted line for reuse.
    ///
    /// Degenerate inputs fall back to a flat forecast with zero
    /// slope: fewer than two points repeat the single value (or 0),
    /// and a zero index-variance denominator repeats the mean.
    pub fn fit_predict(&self, data: &[f64], periods: usize) -> (Vec<f64>, LinearFit) {
        if data.len() < 2 {
            let value = data.first().copied().unwrap_or(0.0);
            return (
                vec![value; periods],
                LinearFit {
                    slope: 0.0,
                    intercept: value,
                },
            );
        }

        let n = data.len();
        let x_mean = (n - 1) as f64 / 2.0;
        let y_mean = mean(data);

        let mut covariance = 0.0;
        let mut x_variance = 0.0;
        for (i, &y) in data.iter().enumerate() {
            let dx = i as f64 - x_mean;
            covariance += dx * (y - y_mean);
            x_variance += dx * dx;
        }

        if x_variance == 0.0 {
            return (
                vec![y_mean; periods],
                LinearFit {
                    slope: 0.0,
                    intercept: y_mean,
                },
            );
        }

        let slope = covariance / x_variance;
        let intercept = y_mean - slope * x_mean;

        let predictions = (0..periods)
            .map(|i| (slope * (n + i) as f64 + intercept).max(0.0))
            .collect();

        (predictions, LinearFit { slope, intercept })
    }

    /// Coefficient of determination for a fitted line.
    ///
    /// Returns 0 for series shorter than two points and 1 when the
    /// total sum of squares is zero (constant series).
    pub fn r_squared(&self, data: &[f64], fit: &LinearFit) -> f64 {
        if data.len() < 2 {
            return 0.0;
        }

        let y_mean = mean(data);
        let ss_tot: f64 = data.iter().map(|y| (y - y_mean).powi(2)).sum();
        if ss_tot == 0.0 {
            return 1.0;
        }

        let ss_res: f64 = data
            .iter()
            .enumerate()
            .map(|(i, &y)| (y - (fit.slope * i as f64 + fit.intercept)).powi(2))
            .sum();

        1.0 - ss_res / ss_tot
    }
}
