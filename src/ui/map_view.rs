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

//! Radar surface: grid, aircraft markers and hover tooltips.

use radar_core::present::MarkerView;
use radar_core::{FlightStatus, RadarSession, SurfaceSize};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(8, 22, 18);
const GRID: egui::Color32 = egui::Color32::from_rgba_premultiplied(40, 110, 80, 90);
const MARKER_LENGTH: f32 = 9.0;
// Hover radius slightly larger than the icon
const HOVER_RADIUS: f32 = 12.0;

pub fn status_color(status: FlightStatus) -> egui::Color32 {
    match status {
        FlightStatus::Enroute => egui::Color32::from_rgb(120, 220, 120),
        FlightStatus::Ascending => egui::Color32::from_rgb(100, 200, 255),
        FlightStatus::Descending => egui::Color32::from_rgb(255, 170, 60),
    }
}

/// Triangle pointing along `rotation_deg` (clockwise from north, screen y down)
pub fn marker_outline(center: egui::Pos2, rotation_deg: f32, length: f32) -> [egui::Pos2; 3] {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let rotate = |x: f32, y: f32| egui::pos2(center.x + x * cos - y * sin, center.y + x * sin + y * cos);
    [
        rotate(0.0, -length),
        rotate(-length * 0.6, length * 0.7),
        rotate(length * 0.6, length * 0.7),
    ]
}

/// Draw the radar and return the surface size it occupied
pub fn show(ui: &mut egui::Ui, session: &RadarSession) -> SurfaceSize {
    let (response, painter) = ui.allocate_painter(
        egui::vec2(ui.available_width(), ui.available_height()),
        egui::Sense::hover(),
    );
    let rect = response.rect;
    let surface = SurfaceSize {
        width: rect.width(),
        height: rect.height(),
    };

    painter.rect_filled(rect, 0.0, BACKGROUND);
    draw_grid(&painter, rect);

    for marker in session.marker_views(surface).iter().filter(|m| m.visible) {
        draw_marker(ui, &painter, rect, marker);
    }

    painter.text(
        rect.left_top() + egui::vec2(10.0, 10.0),
        egui::Align2::LEFT_TOP,
        format!("{} flights tracked", session.records().len()),
        egui::FontId::monospace(11.0),
        egui::Color32::from_rgb(100, 200, 100),
    );

    surface
}

fn draw_grid(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = egui::Stroke::new(1.0, GRID);

    // Meridians every 30°, parallels every 30°
    for step in 1..12 {
        let x = rect.left() + rect.width() * step as f32 / 12.0;
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
    }
    for step in 1..6 {
        let y = rect.top() + rect.height() * step as f32 / 6.0;
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
    }

    let center = rect.center();
    let max_radius = rect.width().min(rect.height()) / 2.0;
    for ring in 1..=4 {
        painter.circle_stroke(center, max_radius * ring as f32 / 4.0, stroke);
    }
}

fn draw_marker(ui: &egui::Ui, painter: &egui::Painter, rect: egui::Rect, marker: &MarkerView) {
    let center = rect.left_top() + egui::vec2(marker.x, marker.y);
    let color = status_color(marker.status);

    painter.add(egui::Shape::convex_polygon(
        marker_outline(center, marker.rotation, MARKER_LENGTH).to_vec(),
        color,
        egui::Stroke::new(1.0, egui::Color32::BLACK),
    ));

    painter.text(
        center + egui::vec2(MARKER_LENGTH + 3.0, 0.0),
        egui::Align2::LEFT_CENTER,
        &marker.id,
        egui::FontId::monospace(10.0),
        color,
    );

    let hover_rect = egui::Rect::from_center_size(center, egui::Vec2::splat(HOVER_RADIUS * 2.0));
    ui.interact(hover_rect, ui.id().with(("marker", &marker.id)), egui::Sense::hover())
        .on_hover_text(marker.tooltip.as_str())
        .widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, &marker.label));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: egui::Pos2, b: egui::Pos2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_marker_points_north_at_zero() {
        let outline = marker_outline(egui::pos2(100.0, 100.0), 0.0, 10.0);
        assert!(close(outline[0], egui::pos2(100.0, 90.0)));
    }

    #[test]
    fn test_marker_points_east_at_ninety() {
        let outline = marker_outline(egui::pos2(0.0, 0.0), 90.0, 10.0);
        assert!(close(outline[0], egui::pos2(10.0, 0.0)));
    }

    #[test]
    fn test_status_colors_distinct() {
        let colors: Vec<_> = FlightStatus::ALL.iter().map(|s| status_color(*s)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}
