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

//! Flight records and the entity store that owns them.
//!
//! Records are created exactly once from a seed list and keep their creation
//! order for the lifetime of the store. Identity fields (`id`, `airline`,
//! `route`, `status`, `speed`) are read-only after creation; the kinematic
//! fields are only written by the drift simulator.

mod seed;

pub use seed::default_seed;

use std::collections::HashMap;

use log::info;
use thiserror::Error;

/// Latitude band the simulation keeps aircraft inside.
pub const LAT_LIMIT: f64 = 70.0;
/// Lowest simulated altitude in feet.
pub const MIN_ALTITUDE_FT: f64 = 24_000.0;
/// Highest simulated altitude in feet.
pub const MAX_ALTITUDE_FT: f64 = 43_000.0;

/// Errors raised while populating the store.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("entity store is already initialized")]
    AlreadyInitialized,

    #[error("duplicate flight id: {0}")]
    DuplicateId(String),

    #[error("invalid seed for flight '{id}': {reason}")]
    InvalidSeed { id: String, reason: String },
}

/// Flight phase shown on the radar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightStatus {
    Enroute,
    Ascending,
    Descending,
}

impl FlightStatus {
    /// All statuses in selector order.
    pub const ALL: [FlightStatus; 3] = [Self::Enroute, Self::Ascending, Self::Descending];

    /// Lowercase key used for styling and logs.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Enroute => "enroute",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Construction input for a [`FlightRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSeed {
    pub id: String,
    pub airline: String,
    pub route: String,
    pub status: FlightStatus,
    pub lat: f64,
    pub lon: f64,
    pub altitude: f64,
    pub speed: f64,
    pub heading: f64,
}

impl FlightSeed {
    fn validate(&self) -> Result<(), StoreError> {
        let invalid = |reason: String| StoreError::InvalidSeed {
            id: self.id.clone(),
            reason,
        };

        if self.id.is_empty() {
            return Err(invalid("id is empty".to_string()));
        }
        if !(-LAT_LIMIT..=LAT_LIMIT).contains(&self.lat) {
            return Err(invalid(format!("latitude {} outside ±{LAT_LIMIT}", self.lat)));
        }
        if !(-180.0..180.0).contains(&self.lon) {
            return Err(invalid(format!("longitude {} outside [-180, 180)", self.lon)));
        }
        if !(MIN_ALTITUDE_FT..=MAX_ALTITUDE_FT).contains(&self.altitude) {
            return Err(invalid(format!("altitude {} ft outside simulated band", self.altitude)));
        }
        if !(0.0..360.0).contains(&self.heading) {
            return Err(invalid(format!("heading {} outside [0, 360)", self.heading)));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(invalid(format!("speed {} kt is not a valid ground speed", self.speed)));
        }
        Ok(())
    }
}

/// One simulated aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    id: String,
    airline: String,
    route: String,
    status: FlightStatus,
    speed: f64,
    pub(crate) lat: f64,
    pub(crate) lon: f64,
    pub(crate) altitude: f64,
    pub(crate) heading: f64,
    pub(crate) target_heading: f64,
}

impl FlightRecord {
    /// Build a record from a seed. The drift attractor starts at the seed heading.
    #[must_use]
    pub fn from_seed(seed: FlightSeed) -> Self {
        Self {
            id: seed.id,
            airline: seed.airline,
            route: seed.route,
            status: seed.status,
            speed: seed.speed,
            lat: seed.lat,
            lon: seed.lon,
            altitude: seed.altitude,
            heading: seed.heading,
            target_heading: seed.heading,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn airline(&self) -> &str {
        &self.airline
    }

    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    #[must_use]
    pub fn status(&self) -> FlightStatus {
        self.status
    }

    /// Ground speed in knots.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Altitude in feet.
    #[must_use]
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Heading in degrees, north = 0.
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[must_use]
    pub fn target_heading(&self) -> f64 {
        self.target_heading
    }
}

/// Ordered, fixed collection of flight records.
#[derive(Debug, Default)]
pub struct EntityStore {
    records: Vec<FlightRecord>,
    index: HashMap<String, usize>,
    initialized: bool,
}

impl EntityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already populated with `seeds`.
    pub fn with_seeds(seeds: impl IntoIterator<Item = FlightSeed>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.initialize(seeds)?;
        Ok(store)
    }

    /// Populate the store. Succeeds at most once, even with an empty seed list;
    /// a failed call leaves the store empty and may be retried.
    pub fn initialize(&mut self, seeds: impl IntoIterator<Item = FlightSeed>) -> Result<(), StoreError> {
        if self.initialized {
            return Err(StoreError::AlreadyInitialized);
        }

        let mut records = Vec::new();
        let mut index = HashMap::new();
        for seed in seeds {
            seed.validate()?;
            if index.contains_key(&seed.id) {
                return Err(StoreError::DuplicateId(seed.id));
            }
            index.insert(seed.id.clone(), records.len());
            records.push(FlightRecord::from_seed(seed));
        }

        info!("Entity store initialized with {} flights", records.len());
        self.records = records;
        self.index = index;
        self.initialized = true;
        Ok(())
    }

    /// All records in creation order.
    #[must_use]
    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [FlightRecord] {
        &mut self.records
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FlightRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Position of a record in creation order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct airlines in first-seen order.
    #[must_use]
    pub fn airlines(&self) -> Vec<&str> {
        let mut airlines: Vec<&str> = Vec::new();
        for record in &self.records {
            if !airlines.contains(&record.airline()) {
                airlines.push(record.airline());
            }
        }
        airlines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(id: &str) -> FlightSeed {
        FlightSeed {
            id: id.to_string(),
            airline: "Test Air".to_string(),
            route: "AAA → BBB".to_string(),
            status: FlightStatus::Enroute,
            lat: 10.0,
            lon: 20.0,
            altitude: 30_000.0,
            speed: 450.0,
            heading: 90.0,
        }
    }

    #[test]
    fn test_initialize_preserves_order() {
        let store = EntityStore::with_seeds(default_seed()).unwrap();
        let ids: Vec<&str> = store.records().iter().map(FlightRecord::id).collect();
        assert_eq!(ids, ["SY204", "AT901", "NW332", "EK120", "PN410", "VR008"]);
    }

    #[test]
    fn test_lookup_by_id() {
        let store = EntityStore::with_seeds(default_seed()).unwrap();
        let flight = store.get("EK120").unwrap();
        assert_eq!(flight.airline(), "Eclipse");
        assert_eq!(flight.status(), FlightStatus::Descending);
        assert_eq!(flight.target_heading(), flight.heading());
        assert!(store.get("ZZ999").is_none());
        assert_eq!(store.position("NW332"), Some(2));
    }

    #[test]
    fn test_initialize_only_once() {
        let mut store = EntityStore::with_seeds(vec![seed("A1")]).unwrap();
        assert_eq!(
            store.initialize(vec![seed("B2")]),
            Err(StoreError::AlreadyInitialized)
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_initialize_still_counts() {
        let mut store = EntityStore::new();
        assert_eq!(store.initialize(Vec::new()), Ok(()));
        assert_eq!(store.initialize(default_seed()), Err(StoreError::AlreadyInitialized));
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_initialize_can_retry() {
        let mut store = EntityStore::new();
        assert!(store.initialize(vec![seed("A1"), seed("A1")]).is_err());
        assert_eq!(store.initialize(vec![seed("A1")]), Ok(()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut store = EntityStore::new();
        let result = store.initialize(vec![seed("A1"), seed("A1")]);
        assert_eq!(result, Err(StoreError::DuplicateId("A1".to_string())));
        assert!(store.is_empty());
    }

    #[test]
    fn test_out_of_range_seed_rejected() {
        let mut bad = seed("A1");
        bad.altitude = 12_000.0;
        let err = EntityStore::with_seeds(vec![bad]).unwrap_err();
        assert!(matches!(err, StoreError::InvalidSeed { ref id, .. } if id == "A1"));

        let mut bad = seed("B2");
        bad.lon = 180.0;
        assert!(EntityStore::with_seeds(vec![bad]).is_err());
    }

    #[test]
    fn test_airlines_first_seen_order() {
        let mut second = seed("B2");
        second.airline = "Other".to_string();
        let store = EntityStore::with_seeds(vec![seed("A1"), second, seed("C3")]).unwrap();
        assert_eq!(store.airlines(), ["Test Air", "Other"]);
    }
}
