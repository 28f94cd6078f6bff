//! UI rendering modules for the VitalView application.
//!
//! Each screen is an `impl VitalViewApp` block in its own file:
//!
//! - `login` - Clinician login form
//! - `patient_search` - Session-authorized participant lookup
//! - `portal` - Patient portal home (last visit, settings, exit)
//! - `stats` - Stats shell: metric tab sidebar and last-visit header
//! - `metric_chart` - Per-metric line chart with marker overlays and popups
//! - `toast` - Toast notification system

pub mod login;
pub mod metric_chart;
pub mod patient_search;
pub mod portal;
pub mod stats;
pub mod toast;

use eframe::egui;

/// Header/sidebar accent as an egui color
pub fn accent_color() -> egui::Color32 {
    let [r, g, b] = crate::state::ACCENT_GREEN;
    egui::Color32::from_rgb(r, g, b)
}
