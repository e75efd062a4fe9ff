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

use super::{FlightSeed, FlightStatus};

/// The six demo flights loaded at startup.
#[must_use]
pub fn default_seed() -> Vec<FlightSeed> {
    [
        ("SY204", "Skyline Air", "SFO → JFK", FlightStatus::Enroute, 39.5, -103.4, 36_000.0, 510.0, 78.0),
        ("AT901", "AtlasJet", "LAX → DFW", FlightStatus::Ascending, 34.4, -111.6, 28_000.0, 460.0, 95.0),
        ("NW332", "Northwind", "SEA → ORD", FlightStatus::Enroute, 42.3, -118.2, 39_000.0, 520.0, 102.0),
        ("EK120", "Eclipse", "MIA → BOS", FlightStatus::Descending, 33.1, -77.8, 31_000.0, 480.0, 42.0),
        ("PN410", "Polaris", "DEN → IAD", FlightStatus::Ascending, 37.7, -98.4, 29_500.0, 470.0, 70.0),
        ("VR008", "Voyager", "AUS → ATL", FlightStatus::Enroute, 33.5, -92.2, 34_500.0, 500.0, 88.0),
    ]
    .into_iter()
    .map(|(id, airline, route, status, lat, lon, altitude, speed, heading)| FlightSeed {
        id: id.to_string(),
        airline: airline.to_string(),
        route: route.to_string(),
        status,
        lat,
        lon,
        altitude,
        speed,
        heading,
    })
    .collect()
}
