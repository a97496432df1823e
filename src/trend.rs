//! Trend classification and model-selecting forecast orchestration.

use crate::core::{ConfidenceInterval, PredictionResult, Trend};
use crate::models::{
    ExponentialSmoothing, ForecastMethod, HoltWinters, LinearRegression, MovingAverage,
};
use crate::utils::stats::{mean, population_std_dev};

/// Default forecast horizon, in periods.
pub const DEFAULT_HORIZON: usize = 6;

/// Relative slope beyond which a series counts as trending.
const TREND_SLOPE_THRESHOLD: f64 = 0.05;
/// Trend strength above which auto-selection prefers Holt-Winters.
const STRONG_TREND_THRESHOLD: f64 = 0.5;
/// Series shorter than this fall back to the moving average.
const MIN_LEN_FOR_REGRESSION: usize = 5;

/// Outcome of trend classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendAnalysis {
    pub direction: Trend,
    /// Score in `[0, 1]` combining relative slope magnitude and R².
    pub strength: f64,
}

/// Classifies a series' trend and forecasts it with a strategy chosen
/// per series.
///
/// # Example
///
/// ```
/// use activity_forecast::models::ForecastMethod;
/// use activity_forecast::trend::TrendPredictor;
///
/// let predictor = TrendPredictor::new();
/// let data = [12.0, 15.0, 19.0, 24.0, 28.0, 33.0];
/// let result = predictor.predict(&data, 3, ForecastMethod::Auto);
///
/// assert_eq!(result.predicted_values.len(), 3);
/// assert!(result.confidence_interval.lower >= 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrendPredictor {
    sma: MovingAverage,
    smoothing: ExponentialSmoothing,
    regression: LinearRegression,
    holt: HoltWinters,
}

impl TrendPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the series' trend direction and strength.
    ///
    /// Uses the regression slope relative to the series mean, weighted
    /// by goodness of fit. Series shorter than two points are stable
    /// with zero strength.
    pub fn analyze_trend(&self, data: &[f64]) -> TrendAnalysis {
        if data.len() < 2 {
            return TrendAnalysis {
                direction: Trend::Stable,
                strength: 0.0,
            };
        }

        let (_, fit) = self.regression.fit_predict(data, 1);
        let r_squared = self.regression.r_squared(data, &fit);

        let mean_value = mean(data);
        let relative_slope = if mean_value != 0.0 {
            fit.slope / mean_value
        } else {
            0.0
        };

        let direction = if relative_slope > TREND_SLOPE_THRESHOLD {
            Trend::Increasing
        } else if relative_slope < -TREND_SLOPE_THRESHOLD {
            Trend::Decreasing
        } else {
            Trend::Stable
        };

        TrendAnalysis {
            direction,
            strength: (relative_slope.abs() * r_squared * 10.0).min(1.0),
        }
    }

    /// Forecast `periods` values with the given method.
    ///
    /// An empty series yields a zero-filled result with model `"none"`.
    /// `metric_name` and `prediction_labels` are left for the caller
    /// to fill in.
    pub fn predict(&self, data: &[f64], periods: usize, method: ForecastMethod) -> PredictionResult {
        if data.is_empty() {
            return PredictionResult::empty(periods);
        }

        let analysis = self.analyze_trend(data);
        let resolved = self.resolve_method(method, data.len(), analysis.strength);

        let predicted_values = match resolved {
            ForecastMethod::MovingAverage => self.sma.predict(data, periods),
            ForecastMethod::Exponential => self.smoothing.predict(data, periods),
            ForecastMethod::Linear => self.regression.fit_predict(data, periods).0,
            ForecastMethod::HoltWinters => self.holt.predict(data, periods),
            // resolve_method never returns Auto
            ForecastMethod::Auto => unreachable!("auto method must be resolved"),
        };

        let confidence_interval = confidence_interval(data, &predicted_values);

        PredictionResult {
            metric_name: String::new(),
            current_value: data[data.len() - 1],
            predicted_values,
            prediction_labels: Vec::new(),
            confidence_interval,
            trend: analysis.direction,
            trend_strength: analysis.strength,
            model_used: resolved.label().to_string(),
        }
    }

    fn resolve_method(
        &self,
        method: ForecastMethod,
        len: usize,
        trend_strength: f64,
    ) -> ForecastMethod {
        match method {
            ForecastMethod::Auto => {
                if len < MIN_LEN_FOR_REGRESSION {
                    ForecastMethod::MovingAverage
                } else if trend_strength > STRONG_TREND_THRESHOLD {
                    ForecastMethod::HoltWinters
                } else {
                    ForecastMethod::Linear
                }
            }
            explicit => explicit,
        }
    }
}

/// ±2σ band around the mean forecast, using the historical data's
/// population spread. Short series fall back to a ±20% band around
/// the first forecast value.
fn confidence_interval(data: &[f64], predictions: &[f64]) -> ConfidenceInterval {
    if data.len() < 2 {
        let base = predictions.first().copied().unwrap_or(0.0);
        return ConfidenceInterval {
            lower: base * 0.8,
            upper: base * 1.2,
        };
    }

    let std_dev = population_std_dev(data);
    let center = if predictions.is_empty() {
        0.0
    } else {
        mean(predictions)
    };

    ConfidenceInterval {
        lower: (center - 2.0 * std_dev).max(0.0),
        upper: center + 2.0 * std_dev,
    }
}
