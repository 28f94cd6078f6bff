//! Raw health-history payloads normalized into chart-ready series.
//!
//! History endpoints return records most-recent-first; charts plot
//! left-to-right oldest-to-newest. One generic pass handles all three
//! metrics, parameterized by a per-record projection, so the glucose,
//! pressure and weight screens share the same windowing and ordering rules.

use crate::api::types::{BloodPressureRecord, GlucoseRecord, PaginatedResponse, WeightRecord};
use crate::state::{ChartData, FETCH_WINDOW, HISTORY_WINDOW};

/// Normalize a glucose history page (`result` field, single series).
pub fn normalize_glucose(page: &PaginatedResponse<GlucoseRecord>) -> ChartData {
    normalize_page(page, 1, |record| {
        let result = record.result?;
        Some((record.date_of_visit.clone(), vec![result]))
    })
}

/// Normalize a blood-pressure history page into two series (systolic,
/// diastolic) sharing one label axis. Visits without a seated reading are
/// skipped rather than defaulted.
pub fn normalize_pressure(page: &PaginatedResponse<BloodPressureRecord>) -> ChartData {
    normalize_page(page, 2, |record| {
        let sit = record.readings.as_ref()?.sit?;
        Some((
            record.date_of_visit.clone(),
            vec![sit.systolic, sit.diastolic],
        ))
    })
}

/// Normalize a weight history page (`weight` field, single series).
pub fn normalize_weight(page: &PaginatedResponse<WeightRecord>) -> ChartData {
    normalize_page(page, 1, |record| {
        let weight = record.weight?;
        Some((record.date_of_visit.clone(), vec![weight]))
    })
}

/// Shared normalization pass.
///
/// Considers the `min(total, FETCH_WINDOW)` most recent records, reverses
/// them into chronological order, drops records the projection rejects, and
/// keeps the last [`HISTORY_WINDOW`] points. Absent or empty input yields an
/// empty [`ChartData`].
fn normalize_page<T>(
    page: &PaginatedResponse<T>,
    series_count: usize,
    project: impl Fn(&T) -> Option<(String, Vec<f64>)>,
) -> ChartData {
    let considered = (page.total as usize).min(FETCH_WINDOW).min(page.data.len());

    let mut labels = Vec::new();
    let mut series = vec![Vec::new(); series_count];

    for record in page.data[..considered].iter().rev() {
        let Some((label, values)) = project(record) else {
            continue;
        };
        if values.len() != series_count || values.iter().any(|v| !v.is_finite()) {
            continue;
        }
        labels.push(label);
        for (column, value) in series.iter_mut().zip(values) {
            column.push(value);
        }
    }

    if labels.len() > HISTORY_WINDOW {
        let cut = labels.len() - HISTORY_WINDOW;
        labels.drain(..cut);
        for column in &mut series {
            column.drain(..cut);
        }
    }

    ChartData::new(labels, series)
}
