//! Patient lookup screen.
//!
//! Each keystroke fires a fresh lookup; whichever response arrives last
//! wins, which is fine at clinic typing speeds. Selecting a row fetches the
//! participant's overview and histories before moving to the portal.

use eframe::egui;

use crate::app::VitalViewApp;
use crate::ui::accent_color;

impl VitalViewApp {
    pub fn render_patient_search(&mut self, ui: &mut egui::Ui) {
        ui.painter().rect_filled(ui.max_rect(), 0.0, accent_color());

        let field_width = (ui.available_width() * 0.5).max(320.0);
        let font_16 = self.scaled_font(16.0);

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.15);
            ui.label(
                egui::RichText::new("Patient Search")
                    .size(self.scaled_font(40.0))
                    .strong()
                    .color(egui::Color32::BLACK),
            );
            ui.add_space(30.0);

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search.query)
                    .hint_text("Search for a patient")
                    .desired_width(field_width)
                    .font(egui::FontId::proportional(font_16)),
            );
            if response.changed() {
                if self.search.query.trim().is_empty() {
                    self.search.results.clear();
                    self.search.pending = false;
                } else {
                    self.start_lookup();
                }
            }

            if self.search.pending {
                ui.add_space(8.0);
                ui.spinner();
            }

            if let Some(id) = self.search.loading_patient {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(
                        egui::RichText::new(format!("Loading records for patient {}...", id))
                            .size(font_16)
                            .color(egui::Color32::BLACK),
                    );
                });
            }

            if !self.search.query.trim().is_empty() && !self.search.results.is_empty() {
                ui.add_space(12.0);
                let results = self.search.results.clone();
                egui::ScrollArea::vertical()
                    .id_salt("patient_results")
                    .max_height(ui.available_height() * 0.5)
                    .show(ui, |ui| {
                        ui.set_width(field_width);
                        for participant in &results {
                            let row = format!(
                                "{} - {}",
                                participant.display_name(),
                                participant.program
                            );
                            let clicked = ui
                                .add_sized(
                                    [field_width, 40.0],
                                    egui::Button::new(
                                        egui::RichText::new(row)
                                            .size(font_16)
                                            .color(egui::Color32::BLACK),
                                    )
                                    .fill(egui::Color32::WHITE),
                                )
                                .clicked();
                            if clicked && self.search.loading_patient.is_none() {
                                self.start_patient_load(participant);
                            }
                        }
                    });
            }
        });

        // Bottom-left escape hatch back to the login screen
        let back_rect = egui::Rect::from_min_size(
            ui.max_rect().left_bottom() + egui::vec2(50.0, -70.0),
            egui::vec2(120.0, 40.0),
        );
        if ui
            .put(
                back_rect,
                egui::Button::new(egui::RichText::new("Go Back").color(egui::Color32::BLACK))
                    .fill(egui::Color32::WHITE)
                    .corner_radius(10),
            )
            .clicked()
        {
            self.sign_out();
        }
    }
}
