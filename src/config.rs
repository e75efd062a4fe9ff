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

//! Application configuration management.
//!
//! Preferences are stored as TOML through `confy`. Every field has a serde
//! default so older or hand-edited files keep loading; drift tuning values that
//! fail validation are replaced by the built-in defaults.

use log::warn;
use radar_core::store::{MAX_ALTITUDE_FT, MIN_ALTITUDE_FT};
use radar_core::DriftConfig;
use serde::{Deserialize, Serialize};

/// Name used for the configuration directory.
pub const APP_NAME: &str = "skyline-radar";

const CONFIG_NAME: &str = "config";

/// Application configuration stored in TOML format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Configuration schema version for migrations
    #[serde(default = "default_config_version")]
    pub config_version: u32,

    /// Drift tuning (retarget chance, correction rate, axis scales, jitter)
    #[serde(default)]
    pub drift: DriftConfig,

    /// Initial position of the altitude slider in feet
    #[serde(default = "default_max_altitude")]
    pub default_max_altitude: f64,

    /// Start with motion paused
    #[serde(default)]
    pub start_paused: bool,

    /// Telemetry panel width in pixels
    #[serde(default = "default_telemetry_panel_width")]
    pub telemetry_panel_width: f32,

    /// Show the simulation status pane
    #[serde(default = "default_true")]
    pub show_status_pane: bool,

    /// Fixed RNG seed for reproducible drift; random when absent
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_config_version() -> u32 {
    1
}

fn default_max_altitude() -> f64 {
    MAX_ALTITUDE_FT
}

fn default_telemetry_panel_width() -> f32 {
    320.0
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            drift: DriftConfig::default(),
            default_max_altitude: default_max_altitude(),
            start_paused: false,
            telemetry_panel_width: default_telemetry_panel_width(),
            show_status_pane: true,
            rng_seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, creating it with defaults on first run
    pub fn load() -> Result<Self, confy::ConfyError> {
        let config: AppConfig = confy::load(APP_NAME, CONFIG_NAME)?;
        Ok(config.sanitized())
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, CONFIG_NAME, self)
    }

    /// Get the config file path for display to user
    pub fn get_config_path() -> Result<std::path::PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)
    }

    /// Replace out-of-range values with defaults, logging each replacement
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if let Err(e) = self.drift.validate() {
            warn!("Ignoring drift settings: {e}; using defaults");
            self.drift = DriftConfig::default();
        }
        if !(MIN_ALTITUDE_FT..=MAX_ALTITUDE_FT).contains(&self.default_max_altitude) {
            warn!(
                "default_max_altitude {} outside {MIN_ALTITUDE_FT}..={MAX_ALTITUDE_FT} ft; clamping",
                self.default_max_altitude
            );
            self.default_max_altitude = if self.default_max_altitude.is_nan() {
                default_max_altitude()
            } else {
                self.default_max_altitude.clamp(MIN_ALTITUDE_FT, MAX_ALTITUDE_FT)
            };
        }
        if !(self.telemetry_panel_width.is_finite() && self.telemetry_panel_width >= 160.0) {
            self.telemetry_panel_width = default_telemetry_panel_width();
        }
        self
    }
}
