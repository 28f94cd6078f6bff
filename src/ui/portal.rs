//! Patient portal home screen.
//!
//! Shown once a patient's records are loaded: view the last visit's stats,
//! adjust device settings, or hand the tablet back. The exit path asks for
//! confirmation before dropping the loaded patient.

use eframe::egui;

use crate::app::VitalViewApp;
use crate::state::{Screen, ToastType};
use crate::ui::accent_color;

impl VitalViewApp {
    pub fn render_portal(&mut self, ui: &mut egui::Ui) {
        let Some(patient) = &self.patient else {
            // Nothing loaded; fall back to search
            self.screen = Screen::PatientSearch;
            return;
        };
        let patient_name = patient.participant.display_name();

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);
            ui.label(
                egui::RichText::new(patient_name)
                    .size(self.scaled_font(36.0))
                    .strong(),
            );
            ui.add_space(30.0);

            let button_size = egui::vec2((ui.available_width() * 0.5).max(320.0), 56.0);
            if self.portal_button(ui, "View Last Visit", button_size) {
                self.screen = Screen::Stats;
            }
            if self.portal_button(ui, "Settings", button_size) {
                self.settings_open = true;
            }
        });

        // Exit control in the top-left corner
        let exit_rect = egui::Rect::from_min_size(
            ui.max_rect().left_top() + egui::vec2(20.0, 20.0),
            egui::vec2(40.0, 40.0),
        );
        if ui
            .put(
                exit_rect,
                egui::Button::new(egui::RichText::new("X").strong()).corner_radius(20),
            )
            .clicked()
        {
            self.exit_modal_open = true;
        }

        self.render_settings_window(ui.ctx());
        self.render_exit_modal(ui.ctx());
    }

    fn portal_button(&self, ui: &mut egui::Ui, label: &str, size: egui::Vec2) -> bool {
        let clicked = ui
            .add_sized(
                size,
                egui::Button::new(
                    egui::RichText::new(label)
                        .size(self.scaled_font(22.0))
                        .color(egui::Color32::BLACK),
                )
                .fill(egui::Color32::WHITE)
                .corner_radius(10),
            )
            .clicked();
        ui.add_space(12.0);
        clicked
    }

    fn render_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }
        let mut open = true;
        let mut save_requested = false;
        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("API base URL");
                ui.add(
                    egui::TextEdit::singleline(&mut self.settings.api_base_url)
                        .desired_width(360.0),
                );
                ui.add_space(10.0);
                save_requested = ui.button("Save").clicked();
            });
        if save_requested {
            match self.settings.save() {
                Ok(()) => self.show_toast("Settings saved", ToastType::Success),
                Err(e) => {
                    tracing::warn!("failed to save settings: {}", e);
                    self.show_toast("Could not save settings", ToastType::Warning);
                }
            }
            self.settings_open = false;
        } else {
            self.settings_open = open;
        }
    }

    fn render_exit_modal(&mut self, ctx: &egui::Context) {
        if !self.exit_modal_open {
            return;
        }
        egui::Window::new("Confirm Exit")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .frame(
                egui::Frame::NONE
                    .fill(egui::Color32::WHITE)
                    .stroke(egui::Stroke::new(4.0, accent_color()))
                    .corner_radius(16)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Are you sure you want to exit?")
                        .size(self.scaled_font(20.0))
                        .color(egui::Color32::BLACK),
                );
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    if ui
                        .add_sized([120.0, 36.0], egui::Button::new("Yes"))
                        .clicked()
                    {
                        self.return_tablet();
                    }
                    if ui
                        .add_sized([120.0, 36.0], egui::Button::new("No"))
                        .clicked()
                    {
                        self.exit_modal_open = false;
                    }
                });
            });
    }
}
