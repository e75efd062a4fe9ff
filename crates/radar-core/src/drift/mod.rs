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

//! Bounded random-walk drift for simulated flights.
//!
//! Each call nudges the heading toward a slowly wandering attractor, moves the
//! aircraft along that heading and jitters its altitude. The latitude and
//! longitude scale factors are visual tuning values, not a flight-dynamics
//! model, so they live in [`DriftConfig`] next to the other knobs.

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{FlightRecord, LAT_LIMIT, MAX_ALTITUDE_FT, MIN_ALTITUDE_FT};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Invalid drift tuning values.
#[derive(Debug, Error, PartialEq)]
pub enum DriftConfigError {
    #[error("retarget probability {0} must be within [0, 1]")]
    RetargetProbability(f64),

    #[error("heading correction rate {0} must be within (0, 1]")]
    CorrectionRate(f64),

    #[error("'{field}' must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Tuning constants for [`advance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Chance per call of picking a new target heading.
    pub retarget_probability: f64,
    /// Width in degrees of the uniform offset used when retargeting.
    pub retarget_spread_degrees: f64,
    /// Fraction of the remaining heading error corrected per call.
    pub heading_correction_rate: f64,
    /// Scale applied to the north-south displacement.
    pub lat_scale: f64,
    /// Scale applied to the east-west displacement.
    pub lon_scale: f64,
    /// Maximum altitude change per call in feet, either direction.
    pub altitude_jitter_feet: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            retarget_probability: 0.015,
            retarget_spread_degrees: 20.0,
            heading_correction_rate: 0.02,
            lat_scale: 0.5,
            lon_scale: 0.7,
            altitude_jitter_feet: 30.0,
        }
    }
}

impl DriftConfig {
    pub fn validate(&self) -> Result<(), DriftConfigError> {
        if !(0.0..=1.0).contains(&self.retarget_probability) {
            return Err(DriftConfigError::RetargetProbability(self.retarget_probability));
        }
        if !(self.heading_correction_rate > 0.0 && self.heading_correction_rate <= 1.0) {
            return Err(DriftConfigError::CorrectionRate(self.heading_correction_rate));
        }
        for (field, value) in [
            ("retarget_spread_degrees", self.retarget_spread_degrees),
            ("lat_scale", self.lat_scale),
            ("lon_scale", self.lon_scale),
            ("altitude_jitter_feet", self.altitude_jitter_feet),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DriftConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}

/// Wrap `value` into `[0, 360)`.
#[must_use]
pub fn wrap_heading(value: f64) -> f64 {
    let wrapped = value.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Wrap a longitude into `[-180, 180)`.
#[must_use]
pub fn wrap_longitude(value: f64) -> f64 {
    let wrapped = (value + 180.0).rem_euclid(360.0);
    if wrapped >= 360.0 { -180.0 } else { wrapped - 180.0 }
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]`.
#[must_use]
pub fn shortest_angle_diff(from: f64, to: f64) -> f64 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}

/// Advance one record by `elapsed_seconds` of simulated time.
pub fn advance<R>(record: &mut FlightRecord, elapsed_seconds: f64, config: &DriftConfig, rng: &mut R)
where
    R: Rng + ?Sized,
{
    if config.retarget_probability > 0.0 && rng.random_bool(config.retarget_probability) {
        let half_spread = config.retarget_spread_degrees / 2.0;
        let offset = if half_spread > 0.0 {
            rng.random_range(-half_spread..half_spread)
        } else {
            0.0
        };
        record.target_heading = (record.heading + offset).clamp(0.0, 360.0);
        trace!("{} retargeted to {:.1}°", record.id(), record.target_heading);
    }

    let diff = shortest_angle_diff(record.heading, record.target_heading);
    record.heading = wrap_heading(record.heading + diff * config.heading_correction_rate);

    let distance = record.speed() / SECONDS_PER_HOUR * elapsed_seconds;
    let heading_rad = record.heading.to_radians();
    record.lat = (record.lat + distance * heading_rad.cos() * config.lat_scale).clamp(-LAT_LIMIT, LAT_LIMIT);
    record.lon = wrap_longitude(record.lon + distance * heading_rad.sin() * config.lon_scale);

    if config.altitude_jitter_feet > 0.0 {
        let shift = rng.random_range(-config.altitude_jitter_feet..config.altitude_jitter_feet);
        record.altitude = (record.altitude + shift).clamp(MIN_ALTITUDE_FT, MAX_ALTITUDE_FT);
    }
}
