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

//! Summary counters and the per-flight telemetry list.

use radar_core::present::{summary_view, telemetry_entry};
use radar_core::RadarSession;

use super::map_view::status_color;

/// Draw the panel and return the number of telemetry rows shown
pub fn show(ui: &mut egui::Ui, session: &RadarSession) -> usize {
    let summary = summary_view(session.summary());

    ui.label(egui::RichText::new("◈ AIRSPACE")
        .color(egui::Color32::from_rgb(100, 200, 100))
        .size(14.0)
        .strong());

    egui::Grid::new("summary_grid")
        .num_columns(2)
        .spacing([12.0, 2.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("ACTIVE")
                .color(egui::Color32::from_rgb(150, 150, 150))
                .size(10.0)
                .monospace());
            ui.label(egui::RichText::new(&summary.active).size(16.0).monospace().strong());
            ui.end_row();

            ui.label(egui::RichText::new("AVG ALT")
                .color(egui::Color32::from_rgb(150, 150, 150))
                .size(10.0)
                .monospace());
            ui.label(egui::RichText::new(&summary.average_altitude).size(16.0).monospace().strong());
            ui.end_row();
        });

    ui.label(egui::RichText::new(&summary.snapshot)
        .color(egui::Color32::from_rgb(150, 150, 150))
        .size(10.0)
        .italics());

    ui.add_space(6.0);
    ui.separator();

    ui.label(egui::RichText::new("◈ TELEMETRY")
        .color(egui::Color32::from_rgb(100, 200, 100))
        .size(14.0)
        .strong());
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("telemetry_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut rows = 0;
            for record in session.visible_records() {
                let entry = telemetry_entry(record);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());

                    ui.label(egui::RichText::new(&entry.title)
                        .color(egui::Color32::from_rgb(200, 220, 255))
                        .size(11.0)
                        .monospace()
                        .strong());

                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&entry.airline)
                            .color(egui::Color32::from_rgb(180, 180, 180))
                            .size(10.0));
                        ui.label(egui::RichText::new(entry.status_label)
                            .color(status_color(entry.status))
                            .size(10.0)
                            .strong());
                    });

                    ui.label(egui::RichText::new(&entry.detail)
                        .color(egui::Color32::from_rgb(150, 150, 150))
                        .size(9.0)
                        .monospace());
                });
                ui.add_space(3.0);
                rows += 1;
            }
            rows
        })
        .inner
}
