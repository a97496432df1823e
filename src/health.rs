//! Project health assessment built on top of the trend predictor.

use serde::{Deserialize, Serialize};

use crate::core::{PeriodSeries, PredictionResult, Trend};
use crate::models::ForecastMethod;
use crate::trend::TrendPredictor;

/// Predicted activity score below which the low-activity risk fires.
const LOW_ACTIVITY_SCORE: f64 = 30.0;

/// Combined direction of the project outlook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallTrend {
    Positive,
    Neutral,
    Negative,
}

/// Severity of an identified risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Medium,
    High,
}

/// Category of an identified risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    ActivityDecline,
    LowActivity,
}

/// A single identified risk with a suggested mitigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub level: RiskLevel,
    pub kind: RiskKind,
    pub description: String,
    pub suggestion: String,
}

/// Combined trend verdict with a human-readable outlook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallPrediction {
    pub overall_trend: OverallTrend,
    pub outlook: String,
}

/// Full health assessment for a project's activity series.
///
/// The per-metric forecasts are absent when the input series was
/// empty; the overall verdict is then neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub commit_trend: Option<PredictionResult>,
    pub activity_trend: Option<PredictionResult>,
    pub overall: OverallPrediction,
    pub risks: Vec<Risk>,
    pub recommendations: Vec<String>,
}

/// Forecasts a project's health from its monthly commit counts.
///
/// Runs the trend predictor over the raw counts and over a normalized
/// activity score (each value scaled to `[0, 100]` by the series
/// maximum), then merges the two trend directions into an overall
/// outlook with risks and recommendations.
#[derive(Debug, Clone, Default)]
pub struct ProjectHealthPredictor {
    predictor: TrendPredictor,
}

impl ProjectHealthPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assess project health over the given forecast horizon.
    pub fn predict_health(&self, monthly_commits: &PeriodSeries, periods: usize) -> HealthAssessment {
        let values = monthly_commits.values();
        let labels = monthly_commits.future_labels(periods);

        let commit_trend = (!values.is_empty()).then(|| {
            let mut result = self.predictor.predict(&values, periods, ForecastMethod::Auto);
            result.metric_name = "commits".to_string();
            result.prediction_labels = labels.clone();
            result
        });

        let scores = activity_scores(&values);
        let activity_trend = (!scores.is_empty()).then(|| {
            let mut result = self.predictor.predict(&scores, periods, ForecastMethod::Auto);
            result.metric_name = "activity".to_string();
            result.prediction_labels = labels;
            result
        });

        let overall = overall_prediction(commit_trend.as_ref(), activity_trend.as_ref());
        let risks = assess_risks(commit_trend.as_ref(), activity_trend.as_ref());
        let recommendations = recommendations_for(overall.overall_trend);

        HealthAssessment {
            commit_trend,
            activity_trend,
            overall,
            risks,
            recommendations,
        }
    }
}

/// Normalize counts to a 0-100 activity score against the series
/// maximum. An all-zero series stays all zero.
fn activity_scores(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / max * 100.0).collect()
}

fn overall_prediction(
    commit_trend: Option<&PredictionResult>,
    activity_trend: Option<&PredictionResult>,
) -> OverallPrediction {
    let trends: Vec<Trend> = commit_trend
        .iter()
        .chain(activity_trend.iter())
        .map(|r| r.trend)
        .collect();

    let increasing = trends.iter().filter(|t| **t == Trend::Increasing).count();
    let decreasing = trends.iter().filter(|t| **t == Trend::Decreasing).count();

    let (overall_trend, outlook) = if increasing > decreasing {
        (
            OverallTrend::Positive,
            "Activity is trending upward; the project outlook is good",
        )
    } else if decreasing > increasing {
        (
            OverallTrend::Negative,
            "Activity is declining and deserves attention",
        )
    } else {
        (
            OverallTrend::Neutral,
            "Activity is steady; the project is in a stable phase",
        )
    };

    OverallPrediction {
        overall_trend,
        outlook: outlook.to_string(),
    }
}

fn assess_risks(
    commit_trend: Option<&PredictionResult>,
    activity_trend: Option<&PredictionResult>,
) -> Vec<Risk> {
    let mut risks = Vec::new();

    if commit_trend.is_some_and(|r| r.trend == Trend::Decreasing) {
        risks.push(Risk {
            level: RiskLevel::Medium,
            kind: RiskKind::ActivityDecline,
            description: "Commit activity is trending downward".to_string(),
            suggestion: "Attract more contributors to the project".to_string(),
        });
    }

    if let Some(activity) = activity_trend {
        let min_predicted = activity
            .predicted_values
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        if !activity.predicted_values.is_empty() && min_predicted < LOW_ACTIVITY_SCORE {
            risks.push(Risk {
                level: RiskLevel::High,
                kind: RiskKind::LowActivity,
                description: "Projected activity is likely to stay low".to_string(),
                suggestion: "Increase outreach and community engagement".to_string(),
            });
        }
    }

    risks
}

fn recommendations_for(overall: OverallTrend) -> Vec<String> {
    let texts: &[&str] = match overall {
        OverallTrend::Positive => &[
            "Keep the current development cadence and continue onboarding new contributors",
            "Consider cutting a new release to sustain community momentum",
        ],
        OverallTrend::Negative => &[
            "Investigate the causes of declining activity and draft an improvement plan",
            "Engage the community more actively; respond to issues and pull requests promptly",
            "Consider adding new features to renew user interest",
        ],
        OverallTrend::Neutral => &[
            "Keep existing functionality stable",
            "Publish regular updates to keep the project active",
        ],
    };
    texts.iter().map(|t| t.to_string()).collect()
}
