//! Toast notification system for user feedback.

use eframe::egui;

use crate::app::VitalViewApp;

/// How long a toast stays on screen
const TOAST_SECONDS: u64 = 3;

impl VitalViewApp {
    /// Render toast notifications in the bottom right corner
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some((message, shown_at, toast_type)) = self.toast_message.clone() else {
            return;
        };
        if shown_at.elapsed().as_secs() >= TOAST_SECONDS {
            self.toast_message = None;
            return;
        }

        let [r, g, b] = toast_type.color();
        let [tr, tg, tb] = toast_type.text_color();
        let margin = 20.0;

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, -margin))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(r, g, b))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .show(ui, |ui| {
                        ui.set_min_width(200.0);
                        ui.set_max_width(400.0);
                        ui.label(
                            egui::RichText::new(&message)
                                .color(egui::Color32::from_rgb(tr, tg, tb))
                                .size(self.scaled_font(14.0)),
                        );
                    });
            });
    }
}
