//! # activity-forecast
//!
//! Statistical forecasting and anomaly detection for repository
//! activity time series.
//!
//! Turns an ordered series of per-period counts (e.g. commits per
//! month) into a multi-model forward projection with a confidence
//! band, a trend classification, a seasonal decomposition, and a set
//! of flagged anomalies and trend breaks.
//!
//! The crate performs no I/O and keeps no state between calls: every
//! operation is a pure function of its inputs, and degenerate inputs
//! (empty or too-short series) degrade to documented defaults instead
//! of raising errors.
//!
//! ```
//! use activity_forecast::prelude::*;
//!
//! let series = PeriodSeries::from_pairs([
//!     ("2024-01", 40.0),
//!     ("2024-02", 46.0),
//!     ("2024-03", 55.0),
//!     ("2024-04", 62.0),
//!     ("2024-05", 70.0),
//!     ("2024-06", 81.0),
//! ])
//! .unwrap();
//!
//! let assessment = ProjectHealthPredictor::new().predict_health(&series, 6);
//! assert!(assessment.commit_trend.is_some());
//! ```

pub mod core;
pub mod detection;
pub mod error;
pub mod health;
pub mod models;
pub mod trend;
pub mod utils;

pub use error::{Result, SeriesError};

pub mod prelude {
    pub use crate::core::{ConfidenceInterval, PeriodSeries, PredictionResult, Trend};
    pub use crate::detection::{AnomalyDetector, SeasonalAnalyzer};
    pub use crate::error::{Result, SeriesError};
    pub use crate::health::{HealthAssessment, OverallTrend, ProjectHealthPredictor};
    pub use crate::models::ForecastMethod;
    pub use crate::trend::{TrendPredictor, DEFAULT_HORIZON};
}
