//! Double exponential smoothing (level + trend).

/// Holt-Winters double exponential smoothing forecaster.
///
/// Tracks a level and a trend component (no seasonal component):
/// - Level: `l_t = α × y_t + (1-α) × (l_{t-1} + b_{t-1})`
/// - Trend: `b_t = β × (l_t - l_{t-1}) + (1-β) × b_{t-1}`
/// - Forecast: `ŷ_{t+h} = l_t + h × b_t`, clamped at zero
#[derive(Debug, Clone)]
pub struct HoltWinters {
    alpha: f64,
    beta: f64,
}

impl HoltWinters {
    /// Create a forecaster with the given smoothing parameters, each
    /// clamped into the open unit interval.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0001, 0.9999),
            beta: beta.clamp(0.0001, 0.9999),
        }
    }

    /// Get the level smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Forecast `periods` values past the end of `data`.
    ///
    /// Series shorter than two points repeat the single value (or 0):
    /// there is no first difference to seed the trend with.
    pub fn predict(&self, data: &[f64], periods: usize) -> Vec<f64> {
        if data.len() < 2 {
            let value = data.first().copied().unwrap_or(0.0);
            return vec![value; periods];
        }

        let mut level = data[0];
        let mut trend = data[1] - data[0];

        for &y in &data[1..] {
            let prev_level = level;
            level = self.alpha * y + (1.0 - self.alpha) * (level + trend);
            trend = self.beta * (level - prev_level) + (1.0 - self.beta) * trend;
        }

        (1..=periods)
            .map(|i| (level + i as f64 * trend).max(0.0))
            .collect()
    }
}

impl Default for HoltWinters {
    fn default() -> Self {
        Self::new(0.5, 0.5)
    }
}
