//! VitalView - a patient-facing vitals viewer for clinic tablets
//!
//! VitalView is a fullscreen application for clinic tablets. A clinician
//! signs in and looks up a participant; the patient then browses their
//! recent blood glucose, blood pressure and weight history as interactive
//! line charts.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use vitalview::app::VitalViewApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Configure native options; 1366x1024 is the tablet design resolution
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1366.0, 1024.0])
            .with_min_inner_size([1000.0, 768.0])
            .with_title("VitalView")
            .with_app_id("VitalView"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "VitalView",
        native_options,
        Box::new(|cc| Ok(Box::new(VitalViewApp::new(cc)))),
    )
}
