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

//! Pure state-to-view helpers.
//!
//! Nothing here knows about a GUI toolkit: the functions turn flight state into
//! marker geometry and the strings shown in tooltips, the telemetry list and the
//! summary panel. The UI layer only draws what these return.

use crate::filter::Summary;
use crate::store::{FlightRecord, FlightStatus};

/// Placeholder shown for the average altitude when nothing is visible.
pub const NO_DATA: &str = "--";

/// Pixel size of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

/// Everything needed to draw one aircraft marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub id: String,
    pub status: FlightStatus,
    pub visible: bool,
    pub x: f32,
    pub y: f32,
    /// Rotation in degrees clockwise from north.
    pub rotation: f32,
    pub tooltip: String,
    /// Short accessible label, "ID ROUTE".
    pub label: String,
}

/// One row of the telemetry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryEntry {
    pub title: String,
    pub airline: String,
    pub status: FlightStatus,
    pub status_label: &'static str,
    pub detail: String,
}

/// Text for the summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub active: String,
    pub average_altitude: String,
    pub snapshot: String,
}

#[must_use]
pub fn status_label(status: FlightStatus) -> &'static str {
    match status {
        FlightStatus::Enroute => "En-route",
        FlightStatus::Ascending => "Ascending",
        FlightStatus::Descending => "Descending",
    }
}

#[must_use]
pub fn pause_button_label(paused: bool) -> &'static str {
    if paused { "Resume Motion" } else { "Pause Motion" }
}

/// Format an integer with comma thousands separators.
#[must_use]
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Altitude rounded to whole feet, e.g. "36,000 ft".
#[must_use]
#[allow(clippy::cast_possible_truncation, reason = "altitudes are far inside i64 range")]
pub fn altitude_label(feet: f64) -> String {
    format!("{} ft", format_thousands(feet.round() as i64))
}

/// Map a position onto the surface: longitude left to right, latitude top to bottom.
#[must_use]
#[allow(clippy::cast_possible_truncation, reason = "pixel coordinates")]
pub fn marker_position(lat: f64, lon: f64, surface: SurfaceSize) -> (f32, f32) {
    let x = (lon + 180.0) / 360.0 * f64::from(surface.width);
    let y = (90.0 - lat) / 180.0 * f64::from(surface.height);
    (x as f32, y as f32)
}

#[must_use]
pub fn tooltip_text(record: &FlightRecord) -> String {
    format!(
        "{}\n{}\n{}\n{} · {} · {} kt",
        record.id(),
        record.route(),
        record.airline(),
        status_label(record.status()),
        altitude_label(record.altitude()),
        record.speed()
    )
}

#[must_use]
pub fn marker_label(record: &FlightRecord) -> String {
    format!("{} {}", record.id(), record.route())
}

#[must_use]
pub fn telemetry_entry(record: &FlightRecord) -> TelemetryEntry {
    TelemetryEntry {
        title: format!("{} · {}", record.id(), record.route()),
        airline: record.airline().to_string(),
        status: record.status(),
        status_label: status_label(record.status()),
        detail: format!(
            "{} · {} kt · {}°",
            altitude_label(record.altitude()),
            record.speed(),
            record.heading().round()
        ),
    }
}

#[must_use]
#[allow(clippy::cast_possible_wrap, reason = "visible counts are tiny")]
pub fn summary_view(summary: &Summary) -> SummaryView {
    SummaryView {
        active: format_thousands(summary.count as i64),
        average_altitude: summary
            .average_altitude
            .map_or_else(|| NO_DATA.to_string(), |feet| format!("{} ft", format_thousands(feet))),
        snapshot: format!("{} aircraft currently in monitored airspace.", summary.count),
    }
}

/// Build the marker for one record.
#[must_use]
#[allow(clippy::cast_possible_truncation, reason = "rotation in degrees")]
pub fn marker_view(record: &FlightRecord, visible: bool, surface: SurfaceSize) -> MarkerView {
    let (x, y) = marker_position(record.lat(), record.lon(), surface);
    MarkerView {
        id: record.id().to_string(),
        status: record.status(),
        visible,
        x,
        y,
        rotation: record.heading() as f32,
        tooltip: tooltip_text(record),
        label: marker_label(record),
    }
}

/// Markers for every record in store order; `is_visible` receives the record's index.
pub fn marker_views<F>(records: &[FlightRecord], mut is_visible: F, surface: SurfaceSize) -> Vec<MarkerView>
where
    F: FnMut(usize) -> bool,
{
    records
        .iter()
        .enumerate()
        .map(|(i, record)| marker_view(record, is_visible(i), surface))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{default_seed, EntityStore};

    const SURFACE: SurfaceSize = SurfaceSize { width: 720.0, height: 360.0 };

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(36_000), "36,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-4_500), "-4,500");
    }

    #[test]
    fn test_altitude_label_rounds() {
        assert_eq!(altitude_label(36_000.0), "36,000 ft");
        assert_eq!(altitude_label(29_499.6), "29,500 ft");
    }

    #[test]
    fn test_marker_position_corners() {
        assert_eq!(marker_position(90.0, -180.0, SURFACE), (0.0, 0.0));
        assert_eq!(marker_position(0.0, 0.0, SURFACE), (360.0, 180.0));
        assert_eq!(marker_position(-90.0, 0.0, SURFACE), (360.0, 360.0));
    }

    #[test]
    fn test_tooltip_and_telemetry_text() {
        let store = EntityStore::with_seeds(default_seed()).unwrap();
        let flight = store.get("SY204").unwrap();

        assert_eq!(
            tooltip_text(flight),
            "SY204\nSFO → JFK\nSkyline Air\nEn-route · 36,000 ft · 510 kt"
        );
        assert_eq!(marker_label(flight), "SY204 SFO → JFK");

        let entry = telemetry_entry(flight);
        assert_eq!(entry.title, "SY204 · SFO → JFK");
        assert_eq!(entry.airline, "Skyline Air");
        assert_eq!(entry.status_label, "En-route");
        assert_eq!(entry.detail, "36,000 ft · 510 kt · 78°");
    }

    #[test]
    fn test_summary_view() {
        let view = summary_view(&Summary { count: 2, average_altitude: Some(32_750) });
        assert_eq!(view.active, "2");
        assert_eq!(view.average_altitude, "32,750 ft");
        assert_eq!(view.snapshot, "2 aircraft currently in monitored airspace.");

        let empty = summary_view(&Summary::default());
        assert_eq!(empty.active, "0");
        assert_eq!(empty.average_altitude, NO_DATA);
    }

    #[test]
    fn test_marker_views_follow_visibility() {
        let store = EntityStore::with_seeds(default_seed()).unwrap();
        let markers = marker_views(store.records(), |i| i % 2 == 0, SURFACE);
        assert_eq!(markers.len(), 6);
        assert!(markers[0].visible);
        assert!(!markers[1].visible);
        assert_eq!(markers[0].id, "SY204");
        assert!((markers[0].rotation - 78.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_pause_label() {
        assert_eq!(pause_button_label(false), "Pause Motion");
        assert_eq!(pause_button_label(true), "Resume Motion");
    }
}
