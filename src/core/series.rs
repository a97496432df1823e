//! PeriodSeries data structure for representing per-period counts.

use crate::error::{Result, SeriesError};
use chrono::{Datelike, Months, NaiveDate};

/// An ordered series of `(period_label, value)` pairs.
///
/// Labels are typically `"YYYY-MM"` month keys produced by an upstream
/// aggregation layer. Entries are kept in the order supplied by the
/// caller; labels must be unique and values must be finite and
/// non-negative.
///
/// # Example
///
/// ```
/// use activity_forecast::core::PeriodSeries;
///
/// let series = PeriodSeries::from_pairs([
///     ("2024-01", 42.0),
///     ("2024-02", 38.0),
///     ("2024-03", 51.0),
/// ])
/// .unwrap();
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.last_value(), Some(51.0));
/// assert_eq!(series.future_labels(2), vec!["2024-04", "2024-05"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodSeries {
    entries: Vec<(String, f64)>,
}

impl PeriodSeries {
    /// Create a series from owned `(label, value)` pairs.
    ///
    /// Returns an error on duplicate labels or on values that are
    /// negative or not finite.
    pub fn new(entries: Vec<(String, f64)>) -> Result<Self> {
        for (i, (label, value)) in entries.iter().enumerate() {
            if !value.is_finite() || *value < 0.0 {
                return Err(SeriesError::InvalidValue {
                    period: label.clone(),
                    value: *value,
                });
            }
            if entries[..i].iter().any(|(seen, _)| seen == label) {
                return Err(SeriesError::DuplicatePeriod(label.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Create a series from borrowed labels.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(label, value)| (label.to_string(), value))
                .collect(),
        )
    }

    /// Number of periods in the series.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the series has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values in period order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }

    /// Labels in period order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(l, _)| l.as_str()).collect()
    }

    /// Iterate over `(label, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }

    /// The most recent value, if any.
    pub fn last_value(&self) -> Option<f64> {
        self.entries.last().map(|(_, v)| *v)
    }

    /// Calendar month (1-12) parsed from a `"YYYY-MM"` label.
    pub fn month_of(label: &str) -> Option<u32> {
        label
            .split('-')
            .nth(1)
            .and_then(|m| m.parse::<u32>().ok())
            .filter(|m| (1..=12).contains(m))
    }

    /// Continue the `"YYYY-MM"` label sequence past the end of the
    /// series for a forecast horizon.
    ///
    /// Returns an empty vector when the series is empty or the last
    /// label does not parse as a month key.
    pub fn future_labels(&self, periods: usize) -> Vec<String> {
        let Some((last, _)) = self.entries.last() else {
            return Vec::new();
        };
        let Some(date) = parse_month_key(last) else {
            return Vec::new();
        };

        (1..=periods as u32)
            .filter_map(|i| date.checked_add_months(Months::new(i)))
            .map(|d| format!("{:04}-{:02}", d.year(), d.month()))
            .collect()
    }
}

fn parse_month_key(label: &str) -> Option<NaiveDate> {
    let mut parts = label.split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_duplicate_labels() {
        let result = PeriodSeries::from_pairs([("2024-01", 1.0), ("2024-01", 2.0)]);
        assert_eq!(
            result,
            Err(SeriesError::DuplicatePeriod("2024-01".to_string()))
        );
    }

    #[test]
    fn construction_rejects_invalid_values() {
        assert!(PeriodSeries::from_pairs([("2024-01", -1.0)]).is_err());
        assert!(PeriodSeries::from_pairs([("2024-01", f64::NAN)]).is_err());
        assert!(PeriodSeries::from_pairs([("2024-01", f64::INFINITY)]).is_err());
    }

    #[test]
    fn accessors_preserve_order() {
        let series =
            PeriodSeries::from_pairs([("2023-11", 5.0), ("2023-12", 7.0), ("2024-01", 3.0)])
                .unwrap();

        assert_eq!(series.values(), vec![5.0, 7.0, 3.0]);
        assert_eq!(series.labels(), vec!["2023-11", "2023-12", "2024-01"]);
        assert_eq!(series.last_value(), Some(3.0));
        assert!(!series.is_empty());
    }

    #[test]
    fn month_of_parses_month_keys() {
        assert_eq!(PeriodSeries::month_of("2024-03"), Some(3));
        assert_eq!(PeriodSeries::month_of("2024-12"), Some(12));
        assert_eq!(PeriodSeries::month_of("2024-13"), None);
        assert_eq!(PeriodSeries::month_of("2024"), None);
        assert_eq!(PeriodSeries::month_of("garbage"), None);
    }

    #[test]
    fn future_labels_continue_the_sequence() {
        let series = PeriodSeries::from_pairs([("2023-11", 1.0), ("2023-12", 2.0)]).unwrap();
        assert_eq!(
            series.future_labels(3),
            vec!["2024-01", "2024-02", "2024-03"]
        );
    }

    #[test]
    fn future_labels_handle_year_rollover_and_bad_labels() {
        let series = PeriodSeries::from_pairs([("2024-10", 1.0)]).unwrap();
        assert_eq!(series.future_labels(4), vec!["2024-11", "2024-12", "2025-01", "2025-02"]);

        let series = PeriodSeries::from_pairs([("week-4", 1.0)]).unwrap();
        assert!(series.future_labels(3).is_empty());

        assert!(PeriodSeries::default().future_labels(3).is_empty());
    }
}
