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

//! Visible-set selection and summary statistics.

use crate::store::{FlightRecord, FlightStatus, MAX_ALTITUDE_FT};

/// Airline selector value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AirlineFilter {
    #[default]
    All,
    Named(String),
}

impl AirlineFilter {
    fn matches(&self, airline: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == airline,
        }
    }
}

/// Status selector value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(FlightStatus),
}

impl StatusFilter {
    fn matches(self, status: FlightStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// The current combination of filter selections.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub airline: AirlineFilter,
    /// Raw text from the search box; trimmed and lowercased when matching.
    pub search: String,
    pub status: StatusFilter,
    /// Inclusive altitude ceiling in feet.
    pub max_altitude: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            airline: AirlineFilter::All,
            search: String::new(),
            status: StatusFilter::All,
            max_altitude: MAX_ALTITUDE_FT,
        }
    }
}

impl FilterCriteria {
    /// Whether a single record passes every active filter.
    #[must_use]
    pub fn matches(&self, record: &FlightRecord) -> bool {
        let term = self.search.trim().to_lowercase();
        self.matches_with_term(record, &term)
    }

    fn matches_with_term(&self, record: &FlightRecord, term: &str) -> bool {
        self.airline.matches(record.airline())
            && (term.is_empty() || record.id().to_lowercase().contains(term))
            && self.status.matches(record.status())
            && record.altitude() <= self.max_altitude
    }
}

/// Records matching `criteria`, in store order.
#[must_use]
pub fn select_visible<'a>(records: &'a [FlightRecord], criteria: &FilterCriteria) -> Vec<&'a FlightRecord> {
    let term = criteria.search.trim().to_lowercase();
    records
        .iter()
        .filter(|record| criteria.matches_with_term(record, &term))
        .collect()
}

/// Count and mean altitude of a visible set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    /// Mean altitude rounded to whole feet; `None` when nothing is visible.
    pub average_altitude: Option<i64>,
}

#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, reason = "flight counts and altitudes are small")]
pub fn summarize(visible: &[&FlightRecord]) -> Summary {
    if visible.is_empty() {
        return Summary::default();
    }
    let total: f64 = visible.iter().map(|record| record.altitude()).sum();
    let mean = total / visible.len() as f64;
    Summary {
        count: visible.len(),
        average_altitude: Some(mean.round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{default_seed, EntityStore, FlightSeed};

    fn seeded() -> EntityStore {
        EntityStore::with_seeds(default_seed()).unwrap()
    }

    fn ids<'a>(records: &[&'a FlightRecord]) -> Vec<&'a str> {
        records.iter().map(|&record| record.id()).collect()
    }

    fn at_altitude(id: &str, altitude: f64) -> FlightRecord {
        FlightRecord::from_seed(FlightSeed {
            id: id.to_string(),
            airline: "Test Air".to_string(),
            route: "AAA → BBB".to_string(),
            status: FlightStatus::Enroute,
            lat: 0.0,
            lon: 0.0,
            altitude,
            speed: 400.0,
            heading: 0.0,
        })
    }

    #[test]
    fn test_default_criteria_shows_everything() {
        let store = seeded();
        let visible = select_visible(store.records(), &FilterCriteria::default());
        assert_eq!(visible.len(), 6);
    }

    #[test]
    fn test_airline_filter() {
        let store = seeded();
        let criteria = FilterCriteria {
            airline: AirlineFilter::Named("Skyline Air".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&select_visible(store.records(), &criteria)), ["SY204"]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let store = seeded();
        let criteria = FilterCriteria {
            search: "  ek1 ".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&select_visible(store.records(), &criteria)), ["EK120"]);

        let criteria = FilterCriteria {
            search: "0".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(
            ids(&select_visible(store.records(), &criteria)),
            ["SY204", "AT901", "EK120", "PN410", "VR008"]
        );
    }

    #[test]
    fn test_status_filter() {
        let store = seeded();
        let criteria = FilterCriteria {
            status: StatusFilter::Only(FlightStatus::Ascending),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&select_visible(store.records(), &criteria)), ["AT901", "PN410"]);
    }

    #[test]
    fn test_altitude_threshold_is_inclusive() {
        let store = seeded();
        let below = FilterCriteria { max_altitude: 27_999.0, ..FilterCriteria::default() };
        assert!(select_visible(store.records(), &below).is_empty());

        let exact = FilterCriteria { max_altitude: 28_000.0, ..FilterCriteria::default() };
        assert_eq!(ids(&select_visible(store.records(), &exact)), ["AT901"]);

        let thirty = FilterCriteria { max_altitude: 30_000.0, ..FilterCriteria::default() };
        assert_eq!(ids(&select_visible(store.records(), &thirty)), ["AT901", "PN410"]);
    }

    #[test]
    fn test_combined_filters() {
        let store = seeded();
        let criteria = FilterCriteria {
            airline: AirlineFilter::Named("Northwind".to_string()),
            search: "nw".to_string(),
            status: StatusFilter::Only(FlightStatus::Enroute),
            max_altitude: 38_000.0,
        };
        assert!(select_visible(store.records(), &criteria).is_empty());
    }

    #[test]
    fn test_selection_is_idempotent() {
        let store = seeded();
        let criteria = FilterCriteria {
            status: StatusFilter::Only(FlightStatus::Enroute),
            ..FilterCriteria::default()
        };
        let first = ids(&select_visible(store.records(), &criteria));
        let second = ids(&select_visible(store.records(), &criteria));
        assert_eq!(first, second);
        assert_eq!(first, ["SY204", "NW332", "VR008"]);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), Summary { count: 0, average_altitude: None });
    }

    #[test]
    fn test_summarize_mean() {
        let flights = [
            at_altitude("A", 30_000.0),
            at_altitude("B", 32_000.0),
            at_altitude("C", 31_000.0),
        ];
        let visible: Vec<&FlightRecord> = flights.iter().collect();
        assert_eq!(summarize(&visible), Summary { count: 3, average_altitude: Some(31_000) });
    }

    #[test]
    fn test_summarize_rounds_to_nearest_foot() {
        let flights = [at_altitude("A", 30_000.0), at_altitude("B", 30_001.0)];
        let visible: Vec<&FlightRecord> = flights.iter().collect();
        assert_eq!(summarize(&visible).average_altitude, Some(30_001));
    }
}
