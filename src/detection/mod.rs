//! Detection utilities for activity series.
//!
//! This module provides tools for detecting:
//! - Statistical outliers and structural trend breaks
//! - Calendar-month seasonality patterns

mod anomaly;
mod seasonality;

pub use anomaly::{
    Anomaly, AnomalyDetector, AnomalyKind, AnomalyReport, AnomalyStatistics, BreakDirection,
    Severity, TrendBreak, TrendBreakReport, DEFAULT_BREAK_WINDOW,
};
pub use seasonality::{SeasonalAnalyzer, SeasonalityReport};
