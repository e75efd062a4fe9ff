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

//! Command-driven radar session.
//!
//! [`RadarSession`] owns the entity store, the animation driver and the active
//! filter criteria. UI input is expressed as [`RadarCommand`] values; each
//! command updates the criteria (or pause flag) and refreshes the cached visible
//! set and summary. Animation frames go through [`RadarSession::frame`].

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::driver::{AnimationDriver, TickReport};
use crate::filter::{select_visible, summarize, AirlineFilter, FilterCriteria, StatusFilter, Summary};
use crate::present::{self, MarkerView, SurfaceSize};
use crate::store::{EntityStore, FlightRecord};

/// User input translated into a state change.
#[derive(Debug, Clone, PartialEq)]
pub enum RadarCommand {
    SetAirline(AirlineFilter),
    SetSearch(String),
    SetStatus(StatusFilter),
    SetMaxAltitude(f64),
    TogglePause,
    SetPaused(bool),
    /// Recompute the visible set without changing criteria (viewport resize).
    Refresh,
}

/// Store, driver and filter state for one radar view.
#[derive(Debug)]
pub struct RadarSession<R = SmallRng> {
    store: EntityStore,
    driver: AnimationDriver<R>,
    criteria: FilterCriteria,
    visible: Vec<usize>,
    summary: Summary,
}

impl<R: Rng> RadarSession<R> {
    #[must_use]
    pub fn new(store: EntityStore, driver: AnimationDriver<R>, criteria: FilterCriteria) -> Self {
        let mut session = Self {
            store,
            driver,
            criteria,
            visible: Vec::new(),
            summary: Summary::default(),
        };
        session.apply_filters();
        session
    }

    /// Apply one command. Returns `true` when the visible set was recomputed.
    pub fn dispatch(&mut self, command: RadarCommand) -> bool {
        match command {
            RadarCommand::SetAirline(airline) => self.criteria.airline = airline,
            RadarCommand::SetSearch(search) => self.criteria.search = search,
            RadarCommand::SetStatus(status) => self.criteria.status = status,
            RadarCommand::SetMaxAltitude(feet) => self.criteria.max_altitude = feet,
            RadarCommand::Refresh => {}
            RadarCommand::TogglePause => {
                self.driver.toggle_pause();
                return false;
            }
            RadarCommand::SetPaused(paused) => {
                self.driver.set_paused(paused);
                return false;
            }
        }
        self.apply_filters();
        true
    }

    fn apply_filters(&mut self) {
        let visible = select_visible(self.store.records(), &self.criteria);
        self.summary = summarize(&visible);
        self.visible = visible
            .iter()
            .filter_map(|record| self.store.position(record.id()))
            .collect();
        debug!(
            "Filters applied ({:?}, search '{}', {:?}, <= {} ft): {} visible",
            self.criteria.airline,
            self.criteria.search,
            self.criteria.status,
            self.criteria.max_altitude,
            self.summary.count
        );
    }

    /// Advance the animation by one frame.
    pub fn frame(&mut self, timestamp: f64) -> TickReport {
        self.driver.tick(timestamp, &mut self.store)
    }

    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    #[must_use]
    pub fn records(&self) -> &[FlightRecord] {
        self.store.records()
    }

    /// Records in the current selection, in store order.
    pub fn visible_records(&self) -> impl Iterator<Item = &FlightRecord> + '_ {
        self.visible.iter().map(|&i| &self.store.records()[i])
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.binary_search(&index).is_ok()
    }

    #[must_use]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Airline selector entries in first-seen order.
    #[must_use]
    pub fn airline_options(&self) -> Vec<&str> {
        self.store.airlines()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.driver.is_paused()
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.driver.ticks()
    }

    /// Marker geometry for every record on a surface of the given size.
    #[must_use]
    pub fn marker_views(&self, surface: SurfaceSize) -> Vec<MarkerView> {
        present::marker_views(self.store.records(), |i| self.is_visible(i), surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drift::DriftConfig;
    use crate::store::{default_seed, FlightStatus};

    fn session() -> RadarSession {
        RadarSession::new(
            EntityStore::with_seeds(default_seed()).unwrap(),
            AnimationDriver::seeded(DriftConfig::default(), Some(3)).unwrap(),
            FilterCriteria::default(),
        )
    }

    fn visible_ids(session: &RadarSession) -> Vec<String> {
        session.visible_records().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_initial_selection_covers_all() {
        let session = session();
        assert_eq!(session.summary().count, 6);
        assert_eq!(session.summary().average_altitude, Some(33_000));
        assert!((0..6).all(|i| session.is_visible(i)));
    }

    #[test]
    fn test_filter_commands_update_selection() {
        let mut session = session();
        assert!(session.dispatch(RadarCommand::SetAirline(AirlineFilter::Named("Skyline Air".to_string()))));
        assert_eq!(visible_ids(&session), ["SY204"]);
        assert!(!session.is_visible(1));

        session.dispatch(RadarCommand::SetAirline(AirlineFilter::All));
        session.dispatch(RadarCommand::SetStatus(StatusFilter::Only(FlightStatus::Descending)));
        assert_eq!(visible_ids(&session), ["EK120"]);

        session.dispatch(RadarCommand::SetMaxAltitude(30_000.0));
        assert_eq!(session.summary().count, 0);
        assert_eq!(session.summary().average_altitude, None);
    }

    #[test]
    fn test_search_command() {
        let mut session = session();
        session.dispatch(RadarCommand::SetSearch("vr".to_string()));
        assert_eq!(visible_ids(&session), ["VR008"]);
        assert_eq!(session.criteria().search, "vr");
    }

    #[test]
    fn test_pause_commands_do_not_refilter() {
        let mut session = session();
        assert!(!session.dispatch(RadarCommand::TogglePause));
        assert!(session.is_paused());
        assert!(!session.dispatch(RadarCommand::SetPaused(false)));
        assert!(!session.is_paused());
    }

    #[test]
    fn test_paused_frames_freeze_state() {
        let mut session = session();
        session.frame(0.0);
        session.dispatch(RadarCommand::SetPaused(true));
        let before = session.records().to_vec();
        session.frame(5.0);
        assert_eq!(session.records(), before.as_slice());
        assert_eq!(session.ticks(), 2);
    }

    #[test]
    fn test_selection_only_refreshes_on_command() {
        let mut session = session();
        session.dispatch(RadarCommand::SetMaxAltitude(28_000.0));
        assert_eq!(visible_ids(&session), ["AT901"]);

        // Drift may push AT901 over the ceiling; membership holds until the next command.
        session.frame(0.0);
        for frame in 1..600 {
            session.frame(f64::from(frame) / 60.0);
        }
        assert_eq!(visible_ids(&session), ["AT901"]);

        session.dispatch(RadarCommand::Refresh);
        let refreshed = visible_ids(&session);
        let altitude = session.store().get("AT901").unwrap().altitude();
        assert_eq!(refreshed.is_empty(), altitude > 28_000.0);
    }

    #[test]
    fn test_marker_views_match_selection() {
        let mut session = session();
        session.dispatch(RadarCommand::SetSearch("nw".to_string()));
        let markers = session.marker_views(SurfaceSize { width: 800.0, height: 400.0 });
        let shown: Vec<&str> = markers.iter().filter(|m| m.visible).map(|m| m.id.as_str()).collect();
        assert_eq!(shown, ["NW332"]);
        assert_eq!(markers.len(), 6);
    }

    #[test]
    fn test_airline_options() {
        let session = session();
        assert_eq!(
            session.airline_options(),
            ["Skyline Air", "AtlasJet", "Northwind", "Eclipse", "Polaris", "Voyager"]
        );
    }
}
