// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::status::{DiagnosticLevel, SimulationStatus};

const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(130, 130, 130);
const VALUE_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);
const HEADER_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);

#[derive(Debug)]
pub struct StatusPane {
    pub visible: bool,
    pub collapsed: bool,
}

impl StatusPane {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            collapsed: false,
        }
    }

    /// Render the status pane as a floating window
    pub fn render(&mut self, ctx: &egui::Context, status: &SimulationStatus) {
        if !self.visible {
            // Small button to re-open the pane when hidden
            egui::Window::new("show_status")
                .title_bar(false)
                .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0))
                .fixed_size(egui::vec2(140.0, 35.0))
                .resizable(false)
                .frame(egui::Frame::window(&ctx.style())
                    .fill(egui::Color32::from_rgba_unmultiplied(25, 30, 35, 200))
                    .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(60, 80, 100)))
                    .corner_radius(6.0))
                .show(ctx, |ui| {
                    if ui.button(egui::RichText::new("📊 Show Status")
                        .color(egui::Color32::from_rgb(150, 200, 220))
                        .size(11.0))
                        .clicked() {
                        self.visible = true;
                    }
                });
            return;
        }

        egui::Window::new("Simulation Status")
            .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0))
            .fixed_size(egui::vec2(260.0, if self.collapsed { 40.0 } else { 360.0 }))
            .resizable(false)
            .collapsible(false)
            .title_bar(false)
            .frame(egui::Frame::window(&ctx.style())
                .fill(egui::Color32::from_rgba_unmultiplied(25, 30, 35, 230))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(60, 80, 100)))
                .corner_radius(6.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("◈ STATUS")
                        .color(egui::Color32::from_rgb(100, 180, 220))
                        .size(12.0)
                        .strong());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(egui::RichText::new("✕")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(200, 100, 100)))
                            .on_hover_text("Hide status pane")
                            .clicked() {
                            self.visible = false;
                        }

                        ui.add_space(4.0);

                        let collapse_icon = if self.collapsed { "▼" } else { "▲" };
                        if ui.button(egui::RichText::new(collapse_icon).size(10.0))
                            .on_hover_text(if self.collapsed { "Expand" } else { "Collapse" })
                            .clicked() {
                            self.collapsed = !self.collapsed;
                        }
                    });
                });

                if self.collapsed {
                    return;
                }

                ui.separator();

                egui::ScrollArea::vertical()
                    .max_height(320.0)
                    .show(ui, |ui| {
                        Self::render_simulation_section(ui, status);
                        ui.add_space(6.0);
                        Self::render_performance_section(ui, status);
                        ui.add_space(6.0);
                        Self::render_diagnostics_section(ui, status);
                    });
            });
    }

    fn render_simulation_section(ui: &mut egui::Ui, status: &SimulationStatus) {
        section_header(ui, "SIMULATION");

        ui.horizontal(|ui| {
            let (color, text, icon) = if status.paused {
                (egui::Color32::from_rgb(255, 200, 100), "PAUSED", "‖")
            } else {
                (egui::Color32::from_rgb(100, 255, 100), "RUNNING", "●")
            };
            ui.label(egui::RichText::new(icon).color(color).size(10.0));
            ui.label(egui::RichText::new(text)
                .color(color)
                .size(10.0)
                .monospace()
                .strong());
        });

        let seed = status.seed.map_or_else(|| "random".to_string(), |seed| seed.to_string());
        value_row(ui, "Seed:", &seed);
        value_row(ui, "Uptime:", &format_duration(status.uptime_seconds()));
        value_row(ui, "Flights:", &format!("{} visible / {} total",
            status.visible_flights, status.total_flights));
        value_row(ui, "Filter runs:", &status.filter_changes.to_string());
    }

    fn render_performance_section(ui: &mut egui::Ui, status: &SimulationStatus) {
        section_header(ui, "PERFORMANCE");

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Frame:").color(LABEL_COLOR).size(9.0));

            let frame_color = if status.average_frame_ms < 17.0 {
                egui::Color32::from_rgb(100, 255, 100)
            } else if status.average_frame_ms < 34.0 {
                egui::Color32::from_rgb(255, 200, 100)
            } else {
                egui::Color32::from_rgb(255, 100, 100)
            };

            ui.label(egui::RichText::new(format!("{:.1}ms ({:.0} FPS)",
                status.average_frame_ms, status.fps()))
                .color(frame_color)
                .size(9.0)
                .monospace());
        });

        value_row(ui, "Ticks:", &format!("{} frames / {} drifted",
            status.frames, status.drift_ticks));
    }

    fn render_diagnostics_section(ui: &mut egui::Ui, status: &SimulationStatus) {
        section_header(ui, "DIAGNOSTICS");

        if status.diagnostics.is_empty() {
            ui.label(egui::RichText::new("No messages")
                .color(egui::Color32::from_rgb(100, 100, 100))
                .size(8.0)
                .italics());
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("diagnostics")
            .max_height(84.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                // Newest first
                for diagnostic in status.diagnostics.iter().rev() {
                    ui.horizontal(|ui| {
                        let (icon, color) = match diagnostic.level {
                            DiagnosticLevel::Info => ("ℹ", egui::Color32::from_rgb(100, 180, 255)),
                            DiagnosticLevel::Warning => ("⚠", egui::Color32::from_rgb(255, 200, 100)),
                        };
                        ui.label(egui::RichText::new(icon).color(color).size(9.0));

                        let time_str = diagnostic.timestamp.format("%H:%M:%S").to_string();
                        ui.label(egui::RichText::new(time_str)
                            .color(egui::Color32::from_rgb(100, 100, 100))
                            .size(8.0)
                            .monospace());

                        ui.label(egui::RichText::new(truncate(&diagnostic.message, 28))
                            .color(egui::Color32::from_rgb(180, 180, 180))
                            .size(8.0));
                    });
                }
            });
    }
}

fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title)
        .color(HEADER_COLOR)
        .size(10.0)
        .strong());
    ui.add_space(3.0);
}

fn value_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(LABEL_COLOR).size(9.0));
        ui.label(egui::RichText::new(value)
            .color(VALUE_COLOR)
            .size(9.0)
            .monospace());
    });
}

fn truncate(message: &str, max_chars: usize) -> String {
    if message.chars().count() > max_chars {
        let head: String = message.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        message.to_string()
    }
}

fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(3_725), "1h 2m 5s");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 28), "short");
        assert_eq!(truncate("→→→→", 2), "→→...");
    }
}
