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

mod config;
mod status;
mod ui;

use clap::Parser;
use config::AppConfig;
use eframe::egui;
use log::{error, info, warn};
use radar_core::{
    default_seed, AnimationDriver, DriftConfig, EntityStore, FilterCriteria, RadarCommand, RadarSession, SurfaceSize,
};
use status::{DiagnosticLevel, SimulationStatus};
use ui::{map_view, telemetry_panel, FilterControls, StatusPane};

/// Synthetic flight radar with drifting aircraft, filters and live telemetry
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Seed for the drift generator (reproducible motion)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with motion paused
    #[arg(long)]
    paused: bool,

    /// Print the configuration file path and exit
    #[arg(long)]
    config_path: bool,

    /// Overwrite the configuration file with defaults before starting
    #[arg(long)]
    reset_config: bool,
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.config_path {
        match AppConfig::get_config_path() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => error!("Could not resolve configuration path: {e}"),
        }
        return Ok(());
    }

    if cli.reset_config {
        match AppConfig::default().save() {
            Ok(()) => info!("Configuration reset to defaults"),
            Err(e) => warn!("Failed to reset configuration: {e}"),
        }
    }

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load configuration ({e}); using defaults");
        AppConfig::default()
    });
    if cli.seed.is_some() {
        config.rng_seed = cli.seed;
    }
    config.start_paused |= cli.paused;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_title("Skyline Radar"),
        ..Default::default()
    };

    info!("Starting radar window");
    eframe::run_native(
        "Skyline Radar",
        options,
        Box::new(move |_cc| Ok(Box::new(RadarApp::new(&config)))),
    )
}

struct RadarApp {
    session: RadarSession,
    controls: FilterControls,
    status: SimulationStatus,
    status_pane: StatusPane,
    telemetry_panel_width: f32,
    last_surface: Option<SurfaceSize>,
}

impl RadarApp {
    fn new(config: &AppConfig) -> Self {
        let store = EntityStore::with_seeds(default_seed()).unwrap_or_else(|e| {
            error!("Seed data rejected: {e}");
            EntityStore::new()
        });
        let total_flights = store.len();

        let mut driver = AnimationDriver::seeded(config.drift, config.rng_seed).unwrap_or_else(|e| {
            error!("Drift settings rejected: {e}; using defaults");
            AnimationDriver::seeded(DriftConfig::default(), config.rng_seed)
                .expect("default drift settings are valid")
        });
        driver.set_paused(config.start_paused);

        let criteria = FilterCriteria {
            max_altitude: config.default_max_altitude,
            ..FilterCriteria::default()
        };
        let controls = FilterControls::from_criteria(&criteria);
        let session = RadarSession::new(store, driver, criteria);

        let mut status = SimulationStatus::new(config.rng_seed, total_flights);
        status.visible_flights = session.summary().count;
        status.set_paused(session.is_paused());
        status.add_diagnostic(DiagnosticLevel::Info, format!("Loaded {total_flights} flights"));

        Self {
            session,
            controls,
            status,
            status_pane: StatusPane::new(config.show_status_pane),
            telemetry_panel_width: config.telemetry_panel_width,
            last_surface: None,
        }
    }

    /// Filter controls followed by the telemetry list. Returns the telemetry row count.
    fn side_panel(&mut self, ui: &mut egui::Ui) -> usize {
        let airlines: Vec<String> = self
            .session
            .airline_options()
            .into_iter()
            .map(str::to_string)
            .collect();
        let paused = self.session.is_paused();

        let commands = self.controls.show(ui, self.session.criteria(), &airlines, paused);
        // Apply before drawing so telemetry matches this frame's markers
        for command in commands {
            self.dispatch(command);
        }

        ui.add_space(6.0);
        ui.separator();
        telemetry_panel::show(ui, &self.session)
    }

    fn dispatch(&mut self, command: RadarCommand) {
        if self.session.dispatch(command) {
            self.status.record_filter_change(self.session.summary().count);
        }
        self.status.set_paused(self.session.is_paused());
    }
}

impl eframe::App for RadarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let report = self.session.frame(ctx.input(|i| i.time));
        self.status.record_frame(&report);

        egui::SidePanel::right("radar_side_panel")
            .exact_width(self.telemetry_panel_width)
            .show(ctx, |ui| self.side_panel(ui));

        let surface = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| map_view::show(ui, &self.session))
            .inner;
        if self.last_surface != Some(surface) {
            // Viewport resized
            self.last_surface = Some(surface);
            self.dispatch(RadarCommand::Refresh);
        }

        self.status_pane.render(ctx, &self.status);

        // Reschedule for the next display refresh
        ctx.request_repaint();
    }
}
