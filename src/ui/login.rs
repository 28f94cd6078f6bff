//! Clinician login screen.

use eframe::egui;

use crate::app::VitalViewApp;
use crate::ui::accent_color;

impl VitalViewApp {
    pub fn render_login(&mut self, ui: &mut egui::Ui) {
        ui.painter().rect_filled(ui.max_rect(), 0.0, accent_color());

        let field_width = (ui.available_width() * 0.4).max(280.0);
        let font_16 = self.scaled_font(16.0);

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.label(
                egui::RichText::new("Clinician Login")
                    .size(self.scaled_font(40.0))
                    .strong()
                    .color(egui::Color32::BLACK),
            );
            ui.add_space(30.0);

            ui.add(
                egui::TextEdit::singleline(&mut self.login.username)
                    .hint_text("Username")
                    .desired_width(field_width)
                    .font(egui::FontId::proportional(font_16)),
            );
            ui.add_space(10.0);
            let password_response = ui.add(
                egui::TextEdit::singleline(&mut self.login.password)
                    .password(true)
                    .hint_text("Password")
                    .desired_width(field_width)
                    .font(egui::FontId::proportional(font_16)),
            );
            ui.add_space(20.0);

            if let Some(error) = &self.login.error {
                ui.label(
                    egui::RichText::new(error)
                        .color(egui::Color32::from_rgb(135, 30, 28))
                        .size(font_16),
                );
                ui.add_space(10.0);
            }

            let submitted = password_response.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui
                .add_enabled(
                    !self.login.pending,
                    egui::Button::new(
                        egui::RichText::new("Enter")
                            .size(self.scaled_font(24.0))
                            .color(egui::Color32::BLACK),
                    )
                    .fill(egui::Color32::WHITE)
                    .corner_radius(50)
                    .min_size(egui::vec2(300.0, 48.0)),
                )
                .clicked();

            if (clicked || submitted) && !self.login.pending {
                self.start_login();
            }

            if self.login.pending {
                ui.add_space(16.0);
                ui.spinner();
            }
        });
    }
}
