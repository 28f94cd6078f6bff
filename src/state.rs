//! Core application state types and constants.
//!
//! This module contains the fundamental data structures used throughout the
//! application: the chart-ready data model, the metric catalog, screen
//! routing, and the events background fetches report back to the UI.

use strum::{Display, EnumIter};

use crate::api::client::ApiError;
use crate::api::types::{LoginResponse, PaginatedResponse, ParticipantSummary};
use crate::units::VitalUnit;

// ============================================================================
// Constants
// ============================================================================

/// Number of most-recent readings plotted per metric
pub const HISTORY_WINDOW: usize = 5;

/// Number of history records requested per metric (plotting keeps the last
/// [`HISTORY_WINDOW`] of these)
pub const FETCH_WINDOW: usize = 10;

/// Participant rows requested per lookup page
pub const LOOKUP_PAGE_SIZE: u32 = 15;

/// Accent color used for headers, sidebars and popup borders
pub const ACCENT_GREEN: [u8; 3] = [185, 206, 136];

/// Line/marker colors per series (systolic red, diastolic blue)
pub const SERIES_COLORS: &[[u8; 3]] = &[
    [214, 40, 40],  // Red (primary series)
    [71, 108, 155], // Blue (secondary series)
];

// ============================================================================
// Metrics
// ============================================================================

/// A vital-sign metric with its own chart screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MetricKind {
    #[strum(serialize = "Blood Glucose")]
    Glucose,
    #[strum(serialize = "Blood Pressure")]
    Pressure,
    Weight,
}

impl MetricKind {
    pub fn unit(&self) -> VitalUnit {
        match self {
            MetricKind::Glucose => VitalUnit::MilligramsPerDeciliter,
            MetricKind::Pressure => VitalUnit::MillimetersOfMercury,
            MetricKind::Weight => VitalUnit::Pounds,
        }
    }

    /// Blood pressure plots systolic and diastolic on one shared axis
    pub fn series_count(&self) -> usize {
        match self {
            MetricKind::Pressure => 2,
            _ => 1,
        }
    }

    /// Shorten an x-axis label for display. Glucose dates drop the year
    /// prefix so five labels fit under the chart.
    pub fn trim_label<'a>(&self, label: &'a str) -> &'a str {
        match self {
            MetricKind::Glucose => label.get(5..).unwrap_or(label),
            _ => label,
        }
    }
}

// ============================================================================
// Chart data
// ============================================================================

/// Chart-ready readings: one shared label axis and one or more value series
/// of equal length, chronological (oldest first).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Vec<f64>>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, series: Vec<Vec<f64>>) -> Self {
        debug_assert!(
            series.iter().all(|s| s.len() == labels.len()),
            "every series must match the label axis"
        );
        Self { labels, series }
    }

    pub fn point_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Shared vertical bounds: the minimum over the lowest series and the
    /// maximum over the highest, so overlaid series use one scale.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let high = self.series.first()?;
        let low = self.series.last()?;
        if high.is_empty() {
            return None;
        }
        let max = high.iter().copied().fold(f64::MIN, f64::max);
        let min = low.iter().copied().fold(f64::MAX, f64::min);
        Some((min, max))
    }

    /// Most recent reading of the primary series
    pub fn last_value(&self) -> Option<f64> {
        self.series.first()?.last().copied()
    }
}

// ============================================================================
// Screen routing
// ============================================================================

/// The screen currently shown. Data moves between screens by value through
/// [`crate::app::VitalViewApp`]; nothing outlives a patient hand-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    PatientSearch,
    Portal,
    Stats,
}

// ============================================================================
// Fetched patient data
// ============================================================================

/// Everything the portal and stats screens need for one patient, normalized
/// on receipt. Dropped wholesale when the tablet is handed back.
#[derive(Clone, Debug)]
pub struct PatientVitals {
    pub participant: ParticipantSummary,
    pub last_visited: Option<String>,
    pub glucose: ChartData,
    pub pressure: ChartData,
    pub weight: ChartData,
}

impl PatientVitals {
    pub fn chart(&self, metric: MetricKind) -> &ChartData {
        match metric {
            MetricKind::Glucose => &self.glucose,
            MetricKind::Pressure => &self.pressure,
            MetricKind::Weight => &self.weight,
        }
    }
}

/// Result of a background API call, drained by the UI each frame
pub enum ApiEvent {
    LoginFinished(Result<LoginResponse, ApiError>),
    LookupFinished(Result<PaginatedResponse<ParticipantSummary>, ApiError>),
    PatientLoaded(Result<Box<PatientVitals>, ApiError>),
}

// ============================================================================
// Toasts
// ============================================================================

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Default)]
pub enum ToastType {
    /// Informational message (blue)
    #[default]
    Info,
    /// Success message (green)
    Success,
    /// Warning message (amber)
    Warning,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [71, 108, 155],
            ToastType::Success => [113, 120, 78],
            ToastType::Warning => [253, 193, 73],
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        match self {
            ToastType::Warning => [30, 30, 30],
            _ => [255, 255, 255],
        }
    }
}
