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

//! Simulation core for the Skyline Radar demo.
//!
//! The crate is toolkit-agnostic and split into layers that can be used on
//! their own:
//!
//! - **Store**: the fixed, ordered set of [`FlightRecord`]s built from seed data
//! - **Drift**: the bounded random walk applied to each record per frame
//! - **Filter**: visible-set selection and summary statistics
//! - **Present**: marker geometry and display strings derived from state
//! - **Driver**: the per-frame loop with an injectable time source
//! - **Session**: command dispatch tying the layers together for a UI
//!
//! # Quick Start
//!
//! ```
//! use radar_core::{
//!     default_seed, AirlineFilter, AnimationDriver, DriftConfig, EntityStore, FilterCriteria,
//!     RadarCommand, RadarSession,
//! };
//!
//! let store = EntityStore::with_seeds(default_seed()).expect("seed data is valid");
//! let driver = AnimationDriver::seeded(DriftConfig::default(), Some(7)).expect("default drift config is valid");
//! let mut session = RadarSession::new(store, driver, FilterCriteria::default());
//!
//! session.dispatch(RadarCommand::SetAirline(AirlineFilter::Named("Skyline Air".to_string())));
//! assert_eq!(session.summary().count, 1);
//!
//! // One frame at 60 Hz
//! session.frame(0.0);
//! session.frame(1.0 / 60.0);
//! ```

pub mod driver;
pub mod drift;
pub mod filter;
pub mod present;
pub mod session;
pub mod store;

pub use driver::{AnimationDriver, ManualClock, MonotonicClock, TickReport, TimeSource};
pub use drift::{DriftConfig, DriftConfigError};
pub use filter::{select_visible, summarize, AirlineFilter, FilterCriteria, StatusFilter, Summary};
pub use present::{MarkerView, SummaryView, SurfaceSize, TelemetryEntry};
pub use session::{RadarCommand, RadarSession};
pub use store::{default_seed, EntityStore, FlightRecord, FlightSeed, FlightStatus, StoreError};
