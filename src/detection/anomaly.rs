//! Anomaly and trend-break detection.
//!
//! Flags statistical outliers via population z-scores and structural
//! shifts via a sliding-window mean comparison.

use serde::{Deserialize, Serialize};

use crate::utils::stats::{mean, population_std_dev};

/// Default sliding-window size for trend-break detection.
pub const DEFAULT_BREAK_WINDOW: usize = 3;

/// Z-score magnitude beyond which an anomaly is rated high severity.
const HIGH_SEVERITY_Z: f64 = 3.0;
/// Relative mean shift beyond which a trend break is recorded.
const BREAK_CHANGE_THRESHOLD: f64 = 0.5;

/// Direction of an anomalous value relative to the mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    Spike,
    Drop,
}

/// Severity of an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

/// A single flagged outlier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub index: usize,
    pub value: f64,
    pub z_score: f64,
    pub kind: AnomalyKind,
    pub severity: Severity,
    /// Period label of the point, when labels were supplied.
    pub label: Option<String>,
}

/// Series statistics backing an anomaly scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyStatistics {
    pub mean: f64,
    pub std_dev: f64,
    /// Upper flagging threshold, `mean + sensitivity * std_dev`.
    pub threshold: f64,
}

/// Result of an anomaly scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub anomalies: Vec<Anomaly>,
    pub has_anomalies: bool,
    /// `None` when the series was too short or had zero spread.
    pub statistics: Option<AnomalyStatistics>,
}

impl AnomalyReport {
    fn empty() -> Self {
        Self {
            anomalies: Vec::new(),
            has_anomalies: false,
            statistics: None,
        }
    }
}

/// A detected mean shift between adjacent windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBreak {
    pub index: usize,
    pub before_avg: f64,
    pub after_avg: f64,
    /// Relative change between the window means, in percent.
    pub change_pct: f64,
    pub direction: BreakDirection,
}

/// Direction of a trend break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakDirection {
    Up,
    Down,
}

/// Result of a trend-break scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBreakReport {
    pub breaks: Vec<TrendBreak>,
    pub has_breaks: bool,
}

/// Detects outliers and structural breaks in a series.
///
/// # Example
///
/// ```
/// use activity_forecast::detection::AnomalyDetector;
///
/// let detector = AnomalyDetector::new(2.0);
/// let data = [5.0, 6.0, 5.0, 6.0, 5.0, 6.0, 5.0, 60.0];
/// let report = detector.detect_anomalies(&data, None);
///
/// assert!(report.has_anomalies);
/// assert_eq!(report.anomalies[0].index, 7);
/// ```
#[derive(Debug, Clone)]
pub struct AnomalyDetector {
    sensitivity: f64,
}

impl AnomalyDetector {
    /// Create a detector flagging values more than `sensitivity`
    /// standard deviations from the mean.
    pub fn new(sensitivity: f64) -> Self {
        Self { sensitivity }
    }

    /// Get the flagging threshold in standard deviations.
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Scan a series for outliers.
    ///
    /// Series shorter than three points, or with zero spread, yield an
    /// empty report with no statistics. When `labels` is provided,
    /// each anomaly carries the label at its index.
    pub fn detect_anomalies(&self, data: &[f64], labels: Option<&[&str]>) -> AnomalyReport {
        if data.len() < 3 {
            return AnomalyReport::empty();
        }

        let mean = mean(data);
        let std_dev = population_std_dev(data);
        if std_dev == 0.0 {
            return AnomalyReport::empty();
        }

        let anomalies: Vec<Anomaly> = data
            .iter()
            .enumerate()
            .filter_map(|(index, &value)| {
                let z_score = (value - mean) / std_dev;
                if z_score.abs() <= self.sensitivity {
                    return None;
                }
                Some(Anomaly {
                    index,
                    value,
                    z_score,
                    kind: if z_score > 0.0 {
                        AnomalyKind::Spike
                    } else {
                        AnomalyKind::Drop
                    },
                    severity: if z_score.abs() > HIGH_SEVERITY_Z {
                        Severity::High
                    } else {
                        Severity::Medium
                    },
                    label: labels
                        .and_then(|l| l.get(index))
                        .map(|l| l.to_string()),
                })
            })
            .collect();

        AnomalyReport {
            has_anomalies: !anomalies.is_empty(),
            statistics: Some(AnomalyStatistics {
                mean,
                std_dev,
                threshold: mean + self.sensitivity * std_dev,
            }),
            anomalies,
        }
    }

    /// Scan a series for mean shifts between adjacent windows.
    ///
    /// For each interior index the means of the `window` values before
    /// and after are compared; a relative change above 50% records a
    /// break. Series shorter than `2 * window` yield an empty report.
    pub fn detect_trend_breaks(&self, data: &[f64], window: usize) -> TrendBreakReport {
        if window == 0 || data.len() < 2 * window {
            return TrendBreakReport {
                breaks: Vec::new(),
                has_breaks: false,
            };
        }

        let mut breaks = Vec::new();
        for i in window..data.len() - window {
            let before_avg = mean(&data[i - window..i]);
            let after_avg = mean(&data[i..i + window]);

            if before_avg == 0.0 {
                continue;
            }
            let change_rate = (after_avg - before_avg) / before_avg;
            if change_rate.abs() > BREAK_CHANGE_THRESHOLD {
                breaks.push(TrendBreak {
                    index: i,
                    before_avg,
                    after_avg,
                    change_pct: change_rate * 100.0,
                    direction: if change_rate > 0.0 {
                        BreakDirection::Up
                    } else {
                        BreakDirection::Down
                    },
                });
            }
        }

        TrendBreakReport {
            has_breaks: !breaks.is_empty(),
            breaks,
        }
    }
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self::new(2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constant_series_has_no_anomalies() {
        let report = AnomalyDetector::default().detect_anomalies(&[5.0; 5], None);
        assert!(!report.has_anomalies);
        assert!(report.anomalies.is_empty());
        assert!(report.statistics.is_none());
    }

    #[test]
    fn short_series_has_no_anomalies() {
        let report = AnomalyDetector::default().detect_anomalies(&[1.0, 100.0], None);
        assert!(!report.has_anomalies);
        assert!(report.statistics.is_none());
    }

    #[test]
    fn single_spike_is_flagged() {
        let data = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 100.0];
        let report = AnomalyDetector::default().detect_anomalies(&data, None);

        assert!(report.has_anomalies);
        assert_eq!(report.anomalies.len(), 1);

        let anomaly = &report.anomalies[0];
        assert_eq!(anomaly.index, 7);
        assert_eq!(anomaly.kind, AnomalyKind::Spike);
        // Population z-score of the outlier is sqrt(7) ~ 2.65.
        assert_relative_eq!(anomaly.z_score, 7.0_f64.sqrt(), epsilon = 1e-10);
        assert_eq!(anomaly.severity, Severity::Medium);
    }

    #[test]
    fn extreme_spike_is_high_severity() {
        // Eleven ones and one outlier: z = sqrt(11) > 3.
        let mut data = vec![1.0; 11];
        data.push(100.0);
        let report = AnomalyDetector::default().detect_anomalies(&data, None);

        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].severity, Severity::High);
    }

    #[test]
    fn drops_are_flagged_as_drops() {
        let mut data = vec![50.0; 11];
        data.push(0.0);
        let report = AnomalyDetector::default().detect_anomalies(&data, None);

        assert_eq!(report.anomalies.len(), 1);
        assert_eq!(report.anomalies[0].kind, AnomalyKind::Drop);
        assert!(report.anomalies[0].z_score < 0.0);
    }

    #[test]
    fn labels_are_attached_to_anomalies() {
        let data = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 100.0];
        let labels = [
            "2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06", "2024-07", "2024-08",
        ];
        let report = AnomalyDetector::default().detect_anomalies(&data, Some(&labels[..]));

        assert_eq!(report.anomalies[0].label.as_deref(), Some("2024-08"));
    }

    #[test]
    fn statistics_carry_the_threshold() {
        let data = [10.0, 12.0, 8.0, 11.0, 9.0];
        let detector = AnomalyDetector::new(2.0);
        let report = detector.detect_anomalies(&data, None);

        let stats = report.statistics.expect("statistics present");
        assert_relative_eq!(stats.mean, 10.0, epsilon = 1e-10);
        assert_relative_eq!(
            stats.threshold,
            stats.mean + 2.0 * stats.std_dev,
            epsilon = 1e-10
        );
    }

    #[test]
    fn trend_break_detects_a_level_shift() {
        let data = [10.0, 10.0, 10.0, 30.0, 30.0, 30.0, 30.0];
        let report = AnomalyDetector::default().detect_trend_breaks(&data, DEFAULT_BREAK_WINDOW);

        assert!(report.has_breaks);

        let brk = &report.breaks[0];
        assert_eq!(brk.index, 3);
        assert_relative_eq!(brk.before_avg, 10.0, epsilon = 1e-10);
        assert_relative_eq!(brk.after_avg, 30.0, epsilon = 1e-10);
        assert_relative_eq!(brk.change_pct, 200.0, epsilon = 1e-10);
        assert_eq!(brk.direction, BreakDirection::Up);
    }

    #[test]
    fn trend_break_detects_downward_shifts() {
        let data = [40.0, 40.0, 40.0, 10.0, 10.0, 10.0, 10.0];
        let report = AnomalyDetector::default().detect_trend_breaks(&data, 3);

        assert!(report.has_breaks);
        assert_eq!(report.breaks[0].direction, BreakDirection::Down);
        assert_relative_eq!(report.breaks[0].change_pct, -75.0, epsilon = 1e-10);
    }

    #[test]
    fn short_series_has_no_breaks() {
        let data = [10.0, 10.0, 30.0, 30.0, 30.0];
        let report = AnomalyDetector::default().detect_trend_breaks(&data, 3);
        assert!(!report.has_breaks);
        assert!(report.breaks.is_empty());
    }

    #[test]
    fn gradual_change_is_not_a_break() {
        let data = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0];
        let report = AnomalyDetector::default().detect_trend_breaks(&data, 3);
        assert!(!report.has_breaks);
    }

    #[test]
    fn zero_before_window_is_skipped() {
        let data = [0.0, 0.0, 0.0, 50.0, 50.0, 50.0, 50.0];
        let report = AnomalyDetector::default().detect_trend_breaks(&data, 3);
        assert!(!report.has_breaks);
    }
}
