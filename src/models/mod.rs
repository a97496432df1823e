//! Forecasting strategies.
//!
//! Each strategy is a pure function of `(data, periods)` plus its
//! parameters; [`ForecastMethod`] is the tag the trend predictor
//! dispatches on.

mod exponential;
mod holt_winters;
mod linear;
mod sma;

pub use exponential::ExponentialSmoothing;
pub use holt_winters::HoltWinters;
pub use linear::{LinearFit, LinearRegression};
pub use sma::MovingAverage;

/// Strategy selector for [`crate::trend::TrendPredictor::predict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastMethod {
    /// Pick a strategy from the data: short series use the moving
    /// average, strongly trending series Holt-Winters, everything
    /// else linear regression.
    #[default]
    Auto,
    MovingAverage,
    Exponential,
    Linear,
    HoltWinters,
}

impl ForecastMethod {
    /// Display name reported in [`crate::core::PredictionResult::model_used`].
    ///
    /// `Auto` has no name of its own; it resolves to a concrete
    /// strategy before forecasting.
    pub fn label(&self) -> &'static str {
        match self {
            ForecastMethod::Auto => "auto",
            ForecastMethod::MovingAverage => "Simple Moving Average",
            ForecastMethod::Exponential => "Exponential Smoothing",
            ForecastMethod::Linear => "Linear Regression",
            ForecastMethod::HoltWinters => "Holt-Winters",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_reported_model_names() {
        assert_eq!(ForecastMethod::MovingAverage.label(), "Simple Moving Average");
        assert_eq!(ForecastMethod::Exponential.label(), "Exponential Smoothing");
        assert_eq!(ForecastMethod::Linear.label(), "Linear Regression");
        assert_eq!(ForecastMethod::HoltWinters.label(), "Holt-Winters");
    }

    #[test]
    fn default_method_is_auto() {
        assert_eq!(ForecastMethod::default(), ForecastMethod::Auto);
    }
}
