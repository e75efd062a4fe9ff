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

use chrono::{DateTime, Utc};
use radar_core::TickReport;
use std::collections::VecDeque;

const MAX_DIAGNOSTICS: usize = 50;
// Smoothing factor for the frame time moving average
const FRAME_TIME_ALPHA: f64 = 0.1;

/// Diagnostic message with timestamp
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub timestamp: DateTime<Utc>,
    pub level: DiagnosticLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiagnosticLevel {
    Info,
    Warning,
}

/// Frame loop metrics and diagnostics shown in the status pane
#[derive(Debug)]
pub struct SimulationStatus {
    pub started_at: DateTime<Utc>,
    pub seed: Option<u64>,

    // Frame loop
    pub frames: u64,
    pub drift_ticks: u64,
    pub paused: bool,
    pub last_frame_ms: f64,
    pub average_frame_ms: f64,
    /// Frames with a positive duration, i.e. samples in the average
    pub timed_frames: u64,

    // Filtering
    pub filter_changes: u64,
    pub visible_flights: usize,
    pub total_flights: usize,

    // Diagnostic messages (keep last 50)
    pub diagnostics: VecDeque<DiagnosticMessage>,
}

impl SimulationStatus {
    pub fn new(seed: Option<u64>, total_flights: usize) -> Self {
        Self {
            started_at: Utc::now(),
            seed,
            frames: 0,
            drift_ticks: 0,
            paused: false,
            last_frame_ms: 0.0,
            average_frame_ms: 0.0,
            timed_frames: 0,
            filter_changes: 0,
            visible_flights: total_flights,
            total_flights,
            diagnostics: VecDeque::with_capacity(MAX_DIAGNOSTICS),
        }
    }

    /// Record one animation tick
    pub fn record_frame(&mut self, report: &TickReport) {
        self.frames = report.tick;
        if report.advanced {
            self.drift_ticks += 1;
        }
        if report.elapsed_seconds <= 0.0 {
            return;
        }

        let frame_ms = report.elapsed_seconds * 1000.0;
        self.last_frame_ms = frame_ms;
        self.timed_frames += 1;
        if self.timed_frames == 1 {
            self.average_frame_ms = frame_ms;
        } else {
            self.average_frame_ms =
                FRAME_TIME_ALPHA * frame_ms + (1.0 - FRAME_TIME_ALPHA) * self.average_frame_ms;
        }
    }

    /// Smoothed frames per second, zero before the second frame
    pub fn fps(&self) -> f64 {
        if self.average_frame_ms > 0.0 {
            1000.0 / self.average_frame_ms
        } else {
            0.0
        }
    }

    /// Record that the visible set was recomputed
    pub fn record_filter_change(&mut self, visible: usize) {
        self.filter_changes += 1;
        self.visible_flights = visible;
        if visible == 0 {
            self.add_diagnostic(DiagnosticLevel::Warning, "Filters hide every flight".to_string());
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        let message = if paused { "Motion paused" } else { "Motion resumed" };
        self.add_diagnostic(DiagnosticLevel::Info, message.to_string());
    }

    /// Add a diagnostic message
    pub fn add_diagnostic(&mut self, level: DiagnosticLevel, message: String) {
        self.diagnostics.push_back(DiagnosticMessage {
            timestamp: Utc::now(),
            level,
            message,
        });

        while self.diagnostics.len() > MAX_DIAGNOSTICS {
            self.diagnostics.pop_front();
        }
    }

    #[allow(clippy::cast_sign_loss, reason = "clamped to non-negative first")]
    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(tick: u64, elapsed_seconds: f64, advanced: bool) -> TickReport {
        TickReport { tick, elapsed_seconds, advanced }
    }

    #[test]
    fn test_frame_average() {
        let mut status = SimulationStatus::new(None, 6);
        status.record_frame(&report(1, 0.0, false));
        assert_eq!(status.fps(), 0.0);

        status.record_frame(&report(2, 0.020, true));
        assert!((status.average_frame_ms - 20.0).abs() < 1e-9);
        assert!((status.fps() - 50.0).abs() < 1e-9);

        status.record_frame(&report(3, 0.030, true));
        assert!((status.average_frame_ms - 21.0).abs() < 1e-9);
        assert_eq!(status.frames, 3);
        assert_eq!(status.drift_ticks, 2);
    }

    #[test]
    fn test_first_timed_frame_seeds_average() {
        let mut status = SimulationStatus::new(None, 6);
        status.record_frame(&report(1, 0.0, false));
        status.record_frame(&report(2, 0.0, true));
        assert_eq!(status.timed_frames, 0);

        // A zero-length frame between samples must not reset the average
        status.record_frame(&report(3, 0.010, true));
        status.record_frame(&report(4, 0.0, true));
        status.record_frame(&report(5, 0.020, true));
        assert_eq!(status.timed_frames, 2);
        assert!((status.average_frame_ms - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_pause_diagnostics() {
        let mut status = SimulationStatus::new(Some(1), 6);
        status.set_paused(true);
        status.set_paused(true);
        status.set_paused(false);
        let messages: Vec<&str> = status.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, ["Motion paused", "Motion resumed"]);
    }

    #[test]
    fn test_diagnostics_bounded() {
        let mut status = SimulationStatus::new(None, 6);
        for i in 0..80 {
            status.add_diagnostic(DiagnosticLevel::Info, format!("message {i}"));
        }
        assert_eq!(status.diagnostics.len(), MAX_DIAGNOSTICS);
        assert_eq!(status.diagnostics.front().unwrap().message, "message 30");
    }

    #[test]
    fn test_empty_selection_warns() {
        let mut status = SimulationStatus::new(None, 6);
        status.record_filter_change(0);
        assert_eq!(status.filter_changes, 1);
        assert_eq!(status.diagnostics.back().unwrap().level, DiagnosticLevel::Warning);
    }
}
