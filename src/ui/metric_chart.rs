//! Per-metric chart screen: the plotted line, synthetic marker overlays,
//! axis-label overlays, and the press popup.
//!
//! The plot widget draws only the line. Markers, tap targets and axis labels
//! are painted on top from [`ChartGeometry`], which recomputes every pixel
//! position from the freshly measured rect each frame.

use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use crate::app::VitalViewApp;
use crate::geometry::ChartGeometry;
use crate::overlay::popup_lines;
use crate::state::{ChartData, MetricKind, SERIES_COLORS};
use crate::ui::accent_color;

fn series_color(series_index: usize) -> egui::Color32 {
    let [r, g, b] = SERIES_COLORS[series_index % SERIES_COLORS.len()];
    egui::Color32::from_rgb(r, g, b)
}

impl VitalViewApp {
    pub fn render_metric_chart(&mut self, ui: &mut egui::Ui, metric: MetricKind) {
        let Some(patient) = &self.patient else {
            return;
        };
        let chart = patient.chart(metric).clone();
        let unit = metric.unit();

        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(metric.to_string())
                .size(self.scaled_font(42.0))
                .strong(),
        );
        let latest = match chart.last_value() {
            Some(value) => unit.format(value),
            None => format!("-- {}", unit.symbol()),
        };
        ui.label(egui::RichText::new(format!("Last Visit: {}", latest)).size(self.scaled_font(26.0)));
        ui.add_space(8.0);

        self.render_chart_canvas(ui, metric, &chart);
    }

    fn render_chart_canvas(&mut self, ui: &mut egui::Ui, metric: MetricKind, chart: &ChartData) {
        let chart_height = (600.0 * self.ui_scale).max(240.0);
        let chart_width = (850.0 * self.ui_scale).max(340.0);
        let count = chart.point_count();

        let plot = Plot::new(format!("vital_chart_{}", metric))
            .width(chart_width)
            .height(chart_height)
            .show_axes([false, false])
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom([false, false])
            .allow_drag([false, false])
            .allow_scroll([false, false])
            .allow_boxed_zoom(false);

        let response = plot.show(ui, |plot_ui| {
            let Some((min, max)) = chart.bounds() else {
                return;
            };
            // Slight padding keeps a flat line off the frame edge
            let pad = ((max - min) * 0.05).max(1.0);
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [-0.5, min - pad],
                [count as f64 - 0.5, max + pad],
            ));

            for (series_index, series) in chart.series.iter().enumerate() {
                let points: PlotPoints = series
                    .iter()
                    .enumerate()
                    .map(|(i, v)| [i as f64, *v])
                    .collect();
                plot_ui.line(
                    Line::new(metric.to_string(), points)
                        .color(series_color(series_index))
                        .width(3.0),
                );
            }
        });

        let rect = response.response.rect;
        let Some(bounds) = chart.bounds() else {
            // No readings: the empty frame stands alone, zero markers
            return;
        };

        // Geometry is rebuilt from the measured rect every pass
        let geometry = ChartGeometry::new(rect.width(), rect.height(), bounds);
        let painter = ui.painter().clone();
        let label_font = egui::FontId::proportional(self.scaled_font(16.0));
        let label_color = egui::Color32::from_gray(70);

        // X-axis labels, one under each marker column
        for (index, label) in chart.labels.iter().enumerate() {
            let position = egui::pos2(
                rect.left() + geometry.x_at(index, count),
                rect.top() + geometry.x_label_y(),
            );
            painter.text(
                position,
                egui::Align2::CENTER_TOP,
                metric.trim_label(label),
                label_font.clone(),
                label_color,
            );
        }

        // Y-axis labels interpolated between the shared min and max
        for (y, value) in geometry.y_ticks(count) {
            painter.text(
                egui::pos2(rect.left() + 8.0, rect.top() + y),
                egui::Align2::LEFT_CENTER,
                format!("{:.0}", value),
                label_font.clone(),
                label_color,
            );
        }

        // Marker dots and tap targets, one overlay instance per series
        let marker_radius = (9.0 * self.ui_scale).max(5.0);
        let tap_side = (44.0 * self.ui_scale).max(28.0);
        let series_shown = chart.series.len().min(self.stats.overlays.len());
        for series_index in 0..series_shown {
            for marker in geometry.markers(chart, series_index) {
                let center = rect.left_top() + egui::vec2(marker.x, marker.y);
                let pressed = self.stats.overlays[series_index].is_pressed(marker.index);

                painter.circle_filled(center, marker_radius, series_color(series_index));
                if pressed {
                    painter.circle_stroke(
                        center,
                        marker_radius + 4.0,
                        egui::Stroke::new(2.0, egui::Color32::BLACK),
                    );
                }

                let hit = egui::Rect::from_center_size(center, egui::vec2(tap_side, tap_side));
                let id = ui.id().with(("marker", metric, series_index, marker.index));
                let marker_response = ui.interact(hit, id, egui::Sense::click_and_drag());
                if marker_response.is_pointer_button_down_on() {
                    let measured = (center.x.is_finite() && center.y.is_finite())
                        .then_some(center);
                    self.stats.overlays[series_index].press(marker.index, measured);
                }
            }
        }

        // Press-release or an explicit close request both hide the popup
        let pointer_up = !ui.input(|i| i.pointer.primary_down());
        let close_requested = ui.input(|i| i.key_pressed(egui::Key::Escape));
        for overlay in &mut self.stats.overlays {
            if overlay.active().is_some() {
                if close_requested {
                    overlay.dismiss();
                } else if pointer_up {
                    overlay.release();
                }
            }
        }

        // Anchored popup for the held marker
        let unit = metric.unit();
        for (series_index, overlay) in self.stats.overlays.iter().enumerate() {
            let Some((index, anchor)) = overlay.active() else {
                continue;
            };
            let Some((label, value_line)) = popup_lines(chart, unit, index) else {
                continue;
            };
            let anchor = anchor.max(ui.ctx().screen_rect().left_top());
            egui::Area::new(ui.id().with(("marker_popup", metric, series_index)))
                .fixed_pos(anchor)
                .order(egui::Order::Foreground)
                .show(ui.ctx(), |ui| {
                    egui::Frame::NONE
                        .fill(egui::Color32::WHITE)
                        .stroke(egui::Stroke::new(6.0, accent_color()))
                        .corner_radius(16)
                        .inner_margin(egui::Margin::symmetric(20, 14))
                        .show(ui, |ui| {
                            ui.set_min_width(180.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new(label)
                                        .size(self.scaled_font(22.0))
                                        .color(egui::Color32::BLACK),
                                );
                                ui.label(
                                    egui::RichText::new(value_line)
                                        .size(self.scaled_font(22.0))
                                        .color(egui::Color32::BLACK),
                                );
                            });
                        });
                });
        }
    }
}
