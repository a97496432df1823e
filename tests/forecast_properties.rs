//! Property-based tests for the forecasting strategies.
//!
//! These tests verify invariants that should hold for all valid
//! inputs, using randomly generated series data.

use activity_forecast::models::{
    ExponentialSmoothing, ForecastMethod, HoltWinters, LinearRegression, MovingAverage,
};
use activity_forecast::trend::TrendPredictor;
use proptest::prelude::*;

/// Strategy for generating valid count series.
/// Avoids extreme values that could cause numerical issues.
fn valid_values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| prop::collection::vec(0.0..1000.0_f64, len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn sma_forecast_length_matches_horizon(
        values in valid_values_strategy(0, 60),
        horizon in 1usize..20
    ) {
        let predictions = MovingAverage::default().predict(&values, horizon);
        prop_assert_eq!(predictions.len(), horizon);
    }

    #[test]
    fn exponential_forecast_length_matches_horizon(
        values in valid_values_strategy(0, 60),
        horizon in 1usize..20
    ) {
        let predictions = ExponentialSmoothing::default().predict(&values, horizon);
        prop_assert_eq!(predictions.len(), horizon);
    }

    #[test]
    fn linear_forecast_length_matches_horizon(
        values in valid_values_strategy(0, 60),
        horizon in 1usize..20
    ) {
        let (predictions, _) = LinearRegression::new().fit_predict(&values, horizon);
        prop_assert_eq!(predictions.len(), horizon);
    }

    #[test]
    fn holt_winters_forecast_length_matches_horizon(
        values in valid_values_strategy(0, 60),
        horizon in 1usize..20
    ) {
        let predictions = HoltWinters::default().predict(&values, horizon);
        prop_assert_eq!(predictions.len(), horizon);
    }

    #[test]
    fn predictor_forecast_length_matches_horizon(
        values in valid_values_strategy(0, 60),
        horizon in 1usize..20
    ) {
        let result = TrendPredictor::new().predict(&values, horizon, ForecastMethod::Auto);
        prop_assert_eq!(result.predicted_values.len(), horizon);
    }

    #[test]
    fn linear_and_holt_forecasts_are_non_negative(
        values in valid_values_strategy(2, 60),
        horizon in 1usize..20
    ) {
        let (linear, _) = LinearRegression::new().fit_predict(&values, horizon);
        prop_assert!(linear.iter().all(|p| *p >= 0.0));

        let holt = HoltWinters::default().predict(&values, horizon);
        prop_assert!(holt.iter().all(|p| *p >= 0.0));
    }

    #[test]
    fn confidence_interval_is_ordered_and_non_negative(
        values in valid_values_strategy(0, 60),
        horizon in 1usize..20
    ) {
        let result = TrendPredictor::new().predict(&values, horizon, ForecastMethod::Auto);
        let interval = result.confidence_interval;
        prop_assert!(interval.lower >= 0.0);
        prop_assert!(interval.lower <= interval.upper);
    }

    #[test]
    fn trend_strength_stays_in_unit_interval(
        values in valid_values_strategy(0, 60)
    ) {
        let analysis = TrendPredictor::new().analyze_trend(&values);
        prop_assert!((0.0..=1.0).contains(&analysis.strength));
    }

    #[test]
    fn constant_series_forecasts_the_constant(
        value in 1.0..500.0_f64,
        len in 5usize..40,
        horizon in 1usize..10
    ) {
        let values = vec![value; len];
        let tolerance = value * 1e-9;

        for p in MovingAverage::default().predict(&values, horizon) {
            prop_assert!((p - value).abs() < tolerance);
        }
        for p in ExponentialSmoothing::default().predict(&values, horizon) {
            prop_assert!((p - value).abs() < tolerance);
        }
        for p in HoltWinters::default().predict(&values, horizon) {
            prop_assert!((p - value).abs() < tolerance);
        }
        let (linear, fit) = LinearRegression::new().fit_predict(&values, horizon);
        prop_assert!(fit.slope.abs() < tolerance);
        for p in linear {
            prop_assert!((p - value).abs() < tolerance);
        }
    }

    #[test]
    fn predictions_are_deterministic(
        values in valid_values_strategy(0, 60),
        horizon in 1usize..10
    ) {
        let predictor = TrendPredictor::new();
        let first = predictor.predict(&values, horizon, ForecastMethod::Auto);
        let second = predictor.predict(&values, horizon, ForecastMethod::Auto);
        prop_assert_eq!(first, second);
    }
}
