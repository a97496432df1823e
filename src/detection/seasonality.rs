//! Calendar-month seasonality analysis.
//!
//! Decomposes a multi-year monthly series into per-calendar-month
//! averages and judges seasonality by their coefficient of variation.

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::core::PeriodSeries;
use crate::utils::stats::{mean, population_std_dev};

/// Coefficient of variation above which a series counts as seasonal.
const SEASONALITY_CV_THRESHOLD: f64 = 0.2;

/// Fixed season buckets, by calendar month.
const WINTER: [u32; 3] = [12, 1, 2];
const SPRING: [u32; 3] = [3, 4, 5];
const SUMMER: [u32; 3] = [6, 7, 8];
const FALL: [u32; 3] = [9, 10, 11];

/// Result of seasonality analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityReport {
    pub has_seasonality: bool,
    /// Spread of the per-month averages relative to their mean.
    pub coefficient_of_variation: f64,
    /// Month-name → average pairs, ordered January through December
    /// (months with no data are omitted).
    pub monthly_averages: Vec<(String, f64)>,
    /// Top three months by average, descending.
    pub peak_months: Vec<String>,
    /// Bottom three months, as the tail of the descending ranking.
    pub low_months: Vec<String>,
    pub pattern: String,
}

impl SeasonalityReport {
    /// Report for a series with no usable monthly signal.
    fn flat() -> Self {
        Self {
            has_seasonality: false,
            coefficient_of_variation: 0.0,
            monthly_averages: Vec::new(),
            peak_months: Vec::new(),
            low_months: Vec::new(),
            pattern: String::new(),
        }
    }
}

/// Analyzes calendar-month seasonality of a monthly count series.
///
/// # Example
///
/// ```
/// use activity_forecast::core::PeriodSeries;
/// use activity_forecast::detection::SeasonalAnalyzer;
///
/// let series = PeriodSeries::from_pairs([
///     ("2022-12", 50.0),
///     ("2023-06", 10.0),
///     ("2023-12", 60.0),
///     ("2024-06", 12.0),
/// ])
/// .unwrap();
///
/// let report = SeasonalAnalyzer::new().analyze_seasonality(&series);
/// assert!(report.has_seasonality);
/// assert_eq!(report.peak_months[0], "December");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalAnalyzer;

impl SeasonalAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Decompose a `"YYYY-MM"`-keyed series into per-month averages
    /// and a seasonality verdict.
    ///
    /// Labels that do not parse as month keys are skipped. A series
    /// with no parsable months, or an all-zero month-average mean,
    /// yields a flat report.
    pub fn analyze_seasonality(&self, monthly_data: &PeriodSeries) -> SeasonalityReport {
        let mut buckets: [Vec<f64>; 12] = Default::default();
        for (label, value) in monthly_data.iter() {
            if let Some(month) = PeriodSeries::month_of(label) {
                buckets[(month - 1) as usize].push(value);
            }
        }

        // (month number, average), in calendar order.
        let averages: Vec<(u32, f64)> = buckets
            .iter()
            .enumerate()
            .filter(|(_, values)| !values.is_empty())
            .map(|(i, values)| (i as u32 + 1, mean(values)))
            .collect();

        if averages.is_empty() {
            return SeasonalityReport::flat();
        }

        let avg_values: Vec<f64> = averages.iter().map(|(_, v)| *v).collect();
        let overall_mean = mean(&avg_values);
        if overall_mean == 0.0 {
            return SeasonalityReport::flat();
        }

        let cv = population_std_dev(&avg_values) / overall_mean;
        let has_seasonality = cv > SEASONALITY_CV_THRESHOLD;

        let mut ranked = averages.clone();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let peak: Vec<u32> = ranked.iter().take(3).map(|(m, _)| *m).collect();
        let low: Vec<u32> = ranked
            .iter()
            .skip(ranked.len().saturating_sub(3))
            .map(|(m, _)| *m)
            .collect();

        SeasonalityReport {
            has_seasonality,
            coefficient_of_variation: cv,
            monthly_averages: averages
                .iter()
                .filter_map(|(m, v)| month_name(*m).map(|name| (name.to_string(), *v)))
                .collect(),
            peak_months: month_names(&peak),
            low_months: month_names(&low),
            pattern: describe_pattern(&peak, has_seasonality).to_string(),
        }
    }
}

fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

fn month_names(months: &[u32]) -> Vec<String> {
    months
        .iter()
        .filter_map(|m| month_name(*m).map(str::to_string))
        .collect()
}

fn describe_pattern(peak_months: &[u32], has_seasonality: bool) -> &'static str {
    if !has_seasonality {
        return "Activity is evenly distributed with no clear seasonality";
    }

    let top_two = &peak_months[..peak_months.len().min(2)];
    let concentrated_in = |season: &[u32; 3]| top_two.iter().all(|m| season.contains(m));

    if concentrated_in(&WINTER) {
        "Activity peaks are concentrated in winter"
    } else if concentrated_in(&SPRING) {
        "Activity peaks are concentrated in spring"
    } else if concentrated_in(&SUMMER) {
        "Activity peaks are concentrated in summer"
    } else if concentrated_in(&FALL) {
        "Activity peaks are concentrated in fall"
    } else {
        "Seasonal variation exists but is not concentrated in one season"
    }
}
