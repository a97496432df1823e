//! Simple Moving Average forecasting.

/// Simple Moving Average forecaster.
///
/// Forecasts by repeatedly averaging the last `window` entries of a
/// working copy of the series that grows as each forecast value is
/// appended, so later steps converge toward the most recent window's
/// mean. Series shorter than the window forecast the mean of all
/// available data.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
}

impl MovingAverage {
    /// Create a moving-average forecaster. A zero window is treated
    /// as a window of one.
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }

    /// Get the window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Forecast `periods` values past the end of `data`.
    pub fn predict(&self, data: &[f64], periods: usize) -> Vec<f64> {
        if data.is_empty() {
            return vec![0.0; periods];
        }
        if data.len() < self.window {
            let avg = data.iter().sum::<f64>() / data.len() as f64;
            return vec![avg; periods];
        }

        let mut working = data.to_vec();
        let mut predictions = Vec::with_capacity(periods);
        for _ in 0..periods {
            let tail = &working[working.len() - self.window..];
            let next = tail.iter().sum::<f64>() / self.window as f64;
            predictions.push(next);
            working.push(next);
        }
        predictions
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self::new(3)
    }
}
