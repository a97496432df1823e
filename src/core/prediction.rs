//! Forecast result structure shared by the trend and health predictors.

use serde::{Deserialize, Serialize};

/// Direction of a series trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

/// A ±2σ band around the mean forecast.
///
/// This is a descriptive band, not a formal statistical confidence
/// level. Invariant: `0 <= lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Result of a single-metric forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Metric the forecast applies to; set by the caller that owns
    /// the metric name (empty until then).
    pub metric_name: String,
    /// Last observed value.
    pub current_value: f64,
    /// One entry per requested forecast period.
    pub predicted_values: Vec<f64>,
    /// Period labels for the forecast horizon; empty when the input
    /// labels cannot be continued.
    pub prediction_labels: Vec<String>,
    pub confidence_interval: ConfidenceInterval,
    pub trend: Trend,
    /// Combined slope-magnitude / goodness-of-fit score in `[0, 1]`.
    pub trend_strength: f64,
    /// Display name of the model that produced the forecast.
    pub model_used: String,
}

impl PredictionResult {
    /// A zero-filled result for an empty input series.
    pub fn empty(periods: usize) -> Self {
        Self {
            metric_name: "unknown".to_string(),
            current_value: 0.0,
            predicted_values: vec![0.0; periods],
            prediction_labels: Vec::new(),
            confidence_interval: ConfidenceInterval {
                lower: 0.0,
                upper: 0.0,
            },
            trend: Trend::Stable,
            trend_strength: 0.0,
            model_used: "none".to_string(),
        }
    }

    /// Forecast horizon length.
    pub fn horizon(&self) -> usize {
        self.predicted_values.len()
    }
}
