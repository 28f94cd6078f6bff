//! Tests for core state types and constants.

use strum::IntoEnumIterator;
use vitalview::api::DEFAULT_BASE_URL;
use vitalview::settings::UserSettings;
use vitalview::state::{
    ChartData, MetricKind, Screen, ToastType, FETCH_WINDOW, HISTORY_WINDOW, SERIES_COLORS,
};
use vitalview::units::VitalUnit;

#[test]
fn test_history_window_fits_inside_fetch_window() {
    assert!(HISTORY_WINDOW >= 2, "need at least two points for a line");
    assert!(HISTORY_WINDOW <= FETCH_WINDOW);
    assert_eq!(HISTORY_WINDOW, 5);
    assert_eq!(FETCH_WINDOW, 10);
}

#[test]
fn test_metric_catalog() {
    let metrics: Vec<MetricKind> = MetricKind::iter().collect();
    assert_eq!(
        metrics,
        vec![MetricKind::Glucose, MetricKind::Pressure, MetricKind::Weight]
    );
    assert_eq!(MetricKind::Glucose.unit(), VitalUnit::MilligramsPerDeciliter);
    assert_eq!(MetricKind::Pressure.unit(), VitalUnit::MillimetersOfMercury);
    assert_eq!(MetricKind::Weight.unit(), VitalUnit::Pounds);
    assert_eq!(MetricKind::Pressure.series_count(), 2);
    assert_eq!(MetricKind::Weight.series_count(), 1);
}

#[test]
fn test_metric_display_names() {
    assert_eq!(MetricKind::Glucose.to_string(), "Blood Glucose");
    assert_eq!(MetricKind::Pressure.to_string(), "Blood Pressure");
    assert_eq!(MetricKind::Weight.to_string(), "Weight");
}

#[test]
fn test_glucose_labels_drop_year_prefix() {
    assert_eq!(MetricKind::Glucose.trim_label("2024-01-08"), "01-08");
    assert_eq!(MetricKind::Weight.trim_label("2024-01-08"), "2024-01-08");
    // Labels shorter than a date pass through untouched
    assert_eq!(MetricKind::Glucose.trim_label("Jan"), "Jan");
}

#[test]
fn test_enough_series_colors_for_dual_axis() {
    let max_series = MetricKind::iter().map(|m| m.series_count()).max().unwrap();
    assert!(SERIES_COLORS.len() >= max_series);
}

#[test]
fn test_chart_data_bounds_for_single_series() {
    let chart = ChartData::new(
        vec!["a".into(), "b".into(), "c".into()],
        vec![vec![90.0, 110.0, 100.0]],
    );
    assert_eq!(chart.bounds(), Some((90.0, 110.0)));
    assert_eq!(chart.last_value(), Some(100.0));
}

#[test]
fn test_empty_chart_data_has_no_bounds() {
    assert_eq!(ChartData::default().bounds(), None);
    assert_eq!(ChartData::default().last_value(), None);
}

#[test]
fn test_initial_screen_is_login() {
    assert_eq!(Screen::default(), Screen::Login);
}

#[test]
fn test_toast_colors_distinct() {
    assert_ne!(ToastType::Info.color(), ToastType::Success.color());
    assert_ne!(ToastType::Success.color(), ToastType::Warning.color());
}

#[test]
fn test_settings_round_trip_base_url() {
    let mut settings = UserSettings::default();
    settings.api_base_url = "https://records.example.test/api".to_owned();
    let json = serde_json::to_string(&settings).unwrap();
    let restored: UserSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.api_base_url, "https://records.example.test/api");
}

#[test]
fn test_settings_missing_fields_fall_back_to_defaults() {
    let restored: UserSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(restored.api_base_url, DEFAULT_BASE_URL);
    assert_eq!(restored.version, 1);
}
