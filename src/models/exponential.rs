//! Single exponential smoothing.

/// Exponential smoothing forecaster.
///
/// Folds the series into a single smoothed level,
/// `l = α·y + (1-α)·l`, seeded with the first observation, and
/// forecasts that level flat across the horizon. The flat forecast is
/// intentional: trend is handled by [`crate::models::HoltWinters`],
/// and the auto-selection policy depends on this model staying flat.
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    alpha: f64,
}

impl ExponentialSmoothing {
    /// Create a smoother with the given level parameter, clamped into
    /// the open unit interval.
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0001, 0.9999),
        }
    }

    /// Get the smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Forecast `periods` values past the end of `data`.
    pub fn predict(&self, data: &[f64], periods: usize) -> Vec<f64> {
        let Some(&first) = data.first() else {
            return vec![0.0; periods];
        };

        let mut level = first;
        for &value in &data[1..] {
            level = self.alpha * value + (1.0 - self.alpha) * level;
        }
        vec![level; periods]
    }
}

impl Default for ExponentialSmoothing {
    fn default() -> Self {
        Self::new(0.3)
    }
}
