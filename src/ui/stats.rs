//! Stats shell: last-visit header, metric tab sidebar, and the active chart.

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::VitalViewApp;
use crate::state::{MetricKind, Screen};
use crate::ui::accent_color;

impl VitalViewApp {
    pub fn render_stats(&mut self, ui: &mut egui::Ui) {
        let Some(patient) = &self.patient else {
            self.screen = Screen::PatientSearch;
            return;
        };
        let last_visited = patient
            .last_visited
            .clone()
            .unwrap_or_else(|| "N/A".to_owned());

        // Header bar
        let header_height = (90.0 * self.ui_scale).max(60.0);
        let (header_rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), header_height),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(header_rect, 0.0, accent_color());
        ui.painter().text(
            header_rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("Last Visit: {}", last_visited),
            egui::FontId::proportional(self.scaled_font(32.0)),
            egui::Color32::BLACK,
        );
        let back_rect = egui::Rect::from_min_size(
            header_rect.left_top() + egui::vec2(16.0, (header_height - 40.0) / 2.0),
            egui::vec2(90.0, 40.0),
        );
        if ui
            .put(
                back_rect,
                egui::Button::new(egui::RichText::new("Back").color(egui::Color32::BLACK))
                    .fill(egui::Color32::WHITE)
                    .corner_radius(10),
            )
            .clicked()
        {
            self.screen = Screen::Portal;
        }

        // Sidebar tabs + chart content
        ui.horizontal_top(|ui| {
            let avail = ui.available_rect_before_wrap();
            let sidebar_width = avail.width() * 0.25;
            let sidebar_rect =
                egui::Rect::from_min_size(avail.min, egui::vec2(sidebar_width, avail.height()));
            ui.painter().rect_filled(sidebar_rect, 0.0, accent_color());

            ui.allocate_ui_with_layout(
                egui::vec2(sidebar_width, ui.available_height()),
                egui::Layout::top_down_justified(egui::Align::Center),
                |ui| {
                    ui.add_space(30.0);
                    for metric in MetricKind::iter() {
                        let active = self.stats.active_metric == metric;
                        let fill = if active {
                            egui::Color32::from_gray(235)
                        } else {
                            egui::Color32::WHITE
                        };
                        let clicked = ui
                            .add_sized(
                                [sidebar_width * 0.85, 64.0],
                                egui::Button::new(
                                    egui::RichText::new(metric.to_string())
                                        .size(self.scaled_font(22.0))
                                        .color(egui::Color32::BLACK),
                                )
                                .fill(fill)
                                .corner_radius(16),
                            )
                            .clicked();
                        if clicked && !active {
                            self.stats.select_metric(metric);
                        }
                        ui.add_space(20.0);
                    }
                },
            );

            ui.add_space(16.0);
            ui.vertical(|ui| {
                let metric = self.stats.active_metric;
                self.render_metric_chart(ui, metric);
            });
        });
    }
}
