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

//! Frame-driven animation loop.
//!
//! The host calls [`AnimationDriver::tick`] once per display refresh with a
//! monotonic timestamp. The driver turns consecutive timestamps into elapsed
//! time and drifts every record unless paused. Time comes from the caller (or a
//! [`TimeSource`]), so tests can feed synthetic frame times.

use std::time::Instant;

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::drift::{self, DriftConfig, DriftConfigError};
use crate::store::EntityStore;

/// A monotonic clock measured in seconds.
pub trait TimeSource {
    fn now_seconds(&self) -> f64;
}

/// Wall clock backed by [`Instant`], measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl TimeSource for MonotonicClock {
    fn now_seconds(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-advanced clock for synthetic frame sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    #[must_use]
    pub fn starting_at(seconds: f64) -> Self {
        Self { now: seconds }
    }

    pub fn advance(&mut self, seconds: f64) {
        self.now += seconds;
    }
}

impl TimeSource for ManualClock {
    fn now_seconds(&self) -> f64 {
        self.now
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Sequence number, starting at 1.
    pub tick: u64,
    pub elapsed_seconds: f64,
    /// Whether the records were drifted this tick.
    pub advanced: bool,
}

/// Drives the drift simulator once per frame.
#[derive(Debug)]
pub struct AnimationDriver<R = SmallRng> {
    config: DriftConfig,
    rng: R,
    last_timestamp: Option<f64>,
    paused: bool,
    ticks: u64,
}

impl AnimationDriver<SmallRng> {
    /// Driver with a seeded generator; `None` draws a random seed.
    pub fn seeded(config: DriftConfig, seed: Option<u64>) -> Result<Self, DriftConfigError> {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        debug!("Animation driver seeded with {seed}");
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AnimationDriver<R> {
    /// Driver using `rng` for drift. Rejects tuning values that fail validation.
    pub fn with_rng(config: DriftConfig, rng: R) -> Result<Self, DriftConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            last_timestamp: None,
            paused: false,
            ticks: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Takes effect on the next tick.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!("Simulation {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    /// Flip the pause flag and return the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Number of ticks processed so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Process one frame at `timestamp` seconds.
    ///
    /// The first frame only establishes the time base. Timestamps that go
    /// backwards count as zero elapsed time.
    pub fn tick(&mut self, timestamp: f64, store: &mut EntityStore) -> TickReport {
        let elapsed_seconds = self
            .last_timestamp
            .map_or(0.0, |last| (timestamp - last).max(0.0));
        let first = self.last_timestamp.is_none();
        self.last_timestamp = Some(timestamp);
        self.ticks += 1;

        let advanced = !first && !self.paused;
        if advanced {
            for record in store.records_mut() {
                drift::advance(record, elapsed_seconds, &self.config, &mut self.rng);
            }
        }

        TickReport {
            tick: self.ticks,
            elapsed_seconds,
            advanced,
        }
    }

    /// Process one frame, reading the time from `clock`.
    pub fn tick_with<T: TimeSource + ?Sized>(&mut self, clock: &T, store: &mut EntityStore) -> TickReport {
        self.tick(clock.now_seconds(), store)
    }
}
