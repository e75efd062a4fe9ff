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

//! Filter and playback controls.
//!
//! Widgets edit a local copy of the selections; any difference from the
//! session's applied criteria is turned into [`RadarCommand`]s.

use radar_core::present::{altitude_label, pause_button_label, status_label};
use radar_core::store::{MAX_ALTITUDE_FT, MIN_ALTITUDE_FT};
use radar_core::{AirlineFilter, FilterCriteria, FlightStatus, RadarCommand, StatusFilter};

const ALTITUDE_STEP_FT: f64 = 500.0;

/// Current widget values of the filter controls
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControls {
    airline: AirlineFilter,
    search: String,
    status: StatusFilter,
    max_altitude: f64,
}

impl FilterControls {
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self {
            airline: criteria.airline.clone(),
            search: criteria.search.clone(),
            status: criteria.status,
            max_altitude: criteria.max_altitude,
        }
    }

    /// Draw the controls and return the commands that bring `applied` in line with them
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        applied: &FilterCriteria,
        airlines: &[String],
        paused: bool,
    ) -> Vec<RadarCommand> {
        ui.label(egui::RichText::new("◈ FILTERS")
            .color(egui::Color32::from_rgb(100, 200, 100))
            .size(14.0)
            .strong());
        ui.add_space(4.0);

        egui::Grid::new("filter_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Airline");
                let selected = match &self.airline {
                    AirlineFilter::All => "All airlines".to_string(),
                    AirlineFilter::Named(name) => name.clone(),
                };
                egui::ComboBox::from_id_salt("airline_filter")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.airline, AirlineFilter::All, "All airlines");
                        for airline in airlines {
                            ui.selectable_value(
                                &mut self.airline,
                                AirlineFilter::Named(airline.clone()),
                                airline.as_str(),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Flight");
                ui.add(egui::TextEdit::singleline(&mut self.search)
                    .hint_text("Search by flight id")
                    .desired_width(160.0));
                ui.end_row();

                ui.label("Status");
                let selected = match self.status {
                    StatusFilter::All => "All statuses",
                    StatusFilter::Only(status) => status_label(status),
                };
                egui::ComboBox::from_id_salt("status_filter")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.status, StatusFilter::All, "All statuses");
                        for status in FlightStatus::ALL {
                            ui.selectable_value(&mut self.status, StatusFilter::Only(status), status_label(status));
                        }
                    });
                ui.end_row();

                ui.label("Max altitude");
                ui.horizontal(|ui| {
                    ui.add(egui::Slider::new(&mut self.max_altitude, MIN_ALTITUDE_FT..=MAX_ALTITUDE_FT)
                        .step_by(ALTITUDE_STEP_FT)
                        .show_value(false));
                    ui.label(egui::RichText::new(altitude_label(self.max_altitude)).monospace());
                });
                ui.end_row();
            });

        ui.add_space(6.0);

        let mut commands = changes(&Self::from_criteria(applied), self);
        if ui.button(pause_button_label(paused)).clicked() {
            commands.push(RadarCommand::TogglePause);
        }
        commands
    }
}

/// Commands needed to move the session from `before` to `after`
fn changes(before: &FilterControls, after: &FilterControls) -> Vec<RadarCommand> {
    let mut commands = Vec::new();
    if before.airline != after.airline {
        commands.push(RadarCommand::SetAirline(after.airline.clone()));
    }
    if before.search != after.search {
        commands.push(RadarCommand::SetSearch(after.search.clone()));
    }
    if before.status != after.status {
        commands.push(RadarCommand::SetStatus(after.status));
    }
    if before.max_altitude.to_bits() != after.max_altitude.to_bits() {
        commands.push(RadarCommand::SetMaxAltitude(after.max_altitude));
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_change_no_commands() {
        let controls = FilterControls::from_criteria(&FilterCriteria::default());
        assert!(changes(&controls, &controls.clone()).is_empty());
    }

    #[test]
    fn test_each_edit_becomes_a_command() {
        let before = FilterControls::from_criteria(&FilterCriteria::default());
        let mut after = before.clone();
        after.search = "sy".to_string();
        after.status = StatusFilter::Only(FlightStatus::Enroute);
        after.max_altitude = 35_000.0;

        assert_eq!(
            changes(&before, &after),
            vec![
                RadarCommand::SetSearch("sy".to_string()),
                RadarCommand::SetStatus(StatusFilter::Only(FlightStatus::Enroute)),
                RadarCommand::SetMaxAltitude(35_000.0),
            ]
        );
    }

    #[test]
    fn test_airline_change() {
        let before = FilterControls::from_criteria(&FilterCriteria::default());
        let mut after = before.clone();
        after.airline = AirlineFilter::Named("Polaris".to_string());
        assert_eq!(
            changes(&before, &after),
            vec![RadarCommand::SetAirline(AirlineFilter::Named("Polaris".to_string()))]
        );
    }
}
