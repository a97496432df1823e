//! Error types for the activity-forecast library.

use thiserror::Error;

/// Result type alias for series construction.
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Errors raised when assembling a [`crate::core::PeriodSeries`].
///
/// Construction is the only fallible boundary in the crate: once a
/// series exists, every analysis function degrades to a documented
/// default instead of returning an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Two entries share the same period label.
    #[error("duplicate period label: {0}")]
    DuplicatePeriod(String),

    /// A value is negative or not finite.
    #[error("invalid value {value} for period {period}")]
    InvalidValue { period: String, value: f64 },
}
