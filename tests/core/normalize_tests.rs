//! End-to-end normalization tests: raw JSON pages through chart data.
//!
//! The unit tests in `src/normalize.rs` cover windowing and ordering with
//! hand-built records; these decode realistic server payloads first.

use vitalview::api::types::{BloodPressureRecord, GlucoseRecord, PaginatedResponse, WeightRecord};
use vitalview::normalize::{normalize_glucose, normalize_pressure, normalize_weight};
use vitalview::state::HISTORY_WINDOW;

#[test]
fn test_glucose_page_decodes_and_normalizes() {
    // Newest-first, as the server sends it
    let json = r#"{
        "total_pages": 1,
        "total": 2,
        "data": [
            {"date_of_visit": "2024-02-01", "result": 110},
            {"date_of_visit": "2024-01-01", "result": 90}
        ]
    }"#;
    let page: PaginatedResponse<GlucoseRecord> = serde_json::from_str(json).unwrap();
    let chart = normalize_glucose(&page);

    assert_eq!(chart.labels, vec!["2024-01-01", "2024-02-01"]);
    assert_eq!(chart.series, vec![vec![90.0, 110.0]]);
}

#[test]
fn test_pressure_page_produces_shared_label_axis() {
    let json = r#"{
        "total_pages": 1,
        "total": 2,
        "data": [
            {"date_of_visit": "2024-02-01", "readings": {"sit": {"systolic": 130, "diastolic": 85}}},
            {"date_of_visit": "2024-01-01", "readings": {"sit": {"systolic": 120, "diastolic": 80}}}
        ]
    }"#;
    let page: PaginatedResponse<BloodPressureRecord> = serde_json::from_str(json).unwrap();
    let chart = normalize_pressure(&page);

    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.labels.len(), chart.series[0].len());
    assert_eq!(chart.labels.len(), chart.series[1].len());
    assert_eq!(chart.series[0], vec![120.0, 130.0]);
    assert_eq!(chart.series[1], vec![80.0, 85.0]);
}

#[test]
fn test_weight_null_entries_are_dropped_not_defaulted() {
    let json = r#"{
        "total_pages": 1,
        "total": 3,
        "data": [
            {"date_of_visit": "2024-03-01", "weight": 178},
            {"date_of_visit": "2024-02-01", "weight": null},
            {"date_of_visit": "2024-01-01", "weight": 181}
        ]
    }"#;
    let page: PaginatedResponse<WeightRecord> = serde_json::from_str(json).unwrap();
    let chart = normalize_weight(&page);

    assert_eq!(chart.labels, vec!["2024-01-01", "2024-03-01"]);
    assert_eq!(chart.series[0], vec![181.0, 178.0]);
}

#[test]
fn test_long_history_is_windowed_chronologically() {
    // Twelve visits; the page carries ten (the fetch window), newest first
    let records: Vec<String> = (0..10)
        .map(|i| {
            format!(
                r#"{{"date_of_visit": "2024-{:02}-01", "result": {}}}"#,
                12 - i,
                100 + (12 - i)
            )
        })
        .collect();
    let json = format!(
        r#"{{"total_pages": 2, "total": 12, "data": [{}]}}"#,
        records.join(",")
    );
    let page: PaginatedResponse<GlucoseRecord> = serde_json::from_str(&json).unwrap();
    let chart = normalize_glucose(&page);

    assert_eq!(chart.point_count(), HISTORY_WINDOW);
    // The five most recent visits, oldest of them first
    assert_eq!(chart.labels.first().map(String::as_str), Some("2024-08-01"));
    assert_eq!(chart.labels.last().map(String::as_str), Some("2024-12-01"));
    let values = &chart.series[0];
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_empty_page_yields_zero_points_for_every_metric() {
    let json = r#"{"total_pages": 0, "total": 0, "data": []}"#;

    let glucose: PaginatedResponse<GlucoseRecord> = serde_json::from_str(json).unwrap();
    let pressure: PaginatedResponse<BloodPressureRecord> = serde_json::from_str(json).unwrap();
    let weight: PaginatedResponse<WeightRecord> = serde_json::from_str(json).unwrap();

    assert!(normalize_glucose(&glucose).is_empty());
    assert!(normalize_pressure(&pressure).is_empty());
    assert!(normalize_weight(&weight).is_empty());
    assert_eq!(normalize_pressure(&pressure).series.len(), 2);
}
