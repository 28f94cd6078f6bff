//! Overlay geometry and interaction tests across module boundaries.

use eframe::egui;
use vitalview::geometry::ChartGeometry;
use vitalview::overlay::{popup_lines, OverlayInteraction, OverlayState};
use vitalview::state::ChartData;
use vitalview::units::VitalUnit;

fn pressure_fixture() -> ChartData {
    ChartData::new(
        vec![
            "2024-01-08".into(),
            "2024-02-05".into(),
            "2024-03-04".into(),
            "2024-04-01".into(),
            "2024-04-29".into(),
        ],
        vec![
            vec![120.0, 122.0, 118.0, 130.0, 125.0],
            vec![80.0, 78.0, 82.0, 85.0, 79.0],
        ],
    )
}

#[test]
fn test_pressure_axis_spans_diastolic_min_to_systolic_max() {
    assert_eq!(pressure_fixture().bounds(), Some((78.0, 130.0)));
}

#[test]
fn test_systolic_peak_is_topmost_marker() {
    let chart = pressure_fixture();
    let geometry = ChartGeometry::new(850.0, 600.0, chart.bounds().unwrap());

    let mut all_markers = geometry.markers(&chart, 0);
    all_markers.extend(geometry.markers(&chart, 1));
    let topmost = all_markers
        .iter()
        .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap())
        .unwrap();

    assert_eq!(topmost.index, 3);
    assert_eq!(topmost.value, 130.0);
}

#[test]
fn test_every_marker_is_finite_and_inside_the_rect() {
    let chart = pressure_fixture();
    let geometry = ChartGeometry::new(850.0, 600.0, chart.bounds().unwrap());

    for series_index in 0..chart.series.len() {
        for marker in geometry.markers(&chart, series_index) {
            assert!(marker.x.is_finite() && marker.y.is_finite());
            assert!(marker.x >= 0.0 && marker.x <= 850.0);
            assert!(marker.y >= 0.0 && marker.y <= 600.0);
        }
    }
}

#[test]
fn test_press_marker_then_release_produces_popup_then_clears() {
    let chart = pressure_fixture();
    let geometry = ChartGeometry::new(850.0, 600.0, chart.bounds().unwrap());
    let markers = geometry.markers(&chart, 0);
    let mut overlay = OverlayInteraction::default();

    let marker = &markers[3];
    overlay.press(marker.index, Some(egui::pos2(marker.x, marker.y)));
    let (index, _anchor) = overlay.active().expect("press should hold the marker");
    assert_eq!(index, 3);

    let (label, value) = popup_lines(&chart, VitalUnit::MillimetersOfMercury, index).unwrap();
    assert_eq!(label, "2024-04-01");
    assert_eq!(value, "130/85 mmHg");

    overlay.release();
    assert_eq!(overlay.state(), OverlayState::Idle);
}

#[test]
fn test_upper_and_lower_overlays_are_independent() {
    let chart = pressure_fixture();
    let geometry = ChartGeometry::new(850.0, 600.0, chart.bounds().unwrap());
    let mut upper = OverlayInteraction::default();
    let mut lower = OverlayInteraction::default();

    let lower_marker = &geometry.markers(&chart, 1)[2];
    lower.press(lower_marker.index, Some(egui::pos2(lower_marker.x, lower_marker.y)));

    assert!(upper.active().is_none());
    assert!(lower.is_pressed(2));

    // Both series' popups show the joined reading for the shared index
    let (_, value) = popup_lines(&chart, VitalUnit::MillimetersOfMercury, 2).unwrap();
    assert_eq!(value, "118/82 mmHg");
}

#[test]
fn test_single_reading_still_renders_one_marker() {
    let chart = ChartData::new(vec!["2024-01-01".into()], vec![vec![180.0]]);
    let geometry = ChartGeometry::new(850.0, 600.0, chart.bounds().unwrap());
    let markers = geometry.markers(&chart, 0);

    assert_eq!(markers.len(), 1);
    assert!(markers[0].x.is_finite() && markers[0].y.is_finite());

    let (label, value) = popup_lines(&chart, VitalUnit::Pounds, 0).unwrap();
    assert_eq!(label, "2024-01-01");
    assert_eq!(value, "180 lbs");
}
