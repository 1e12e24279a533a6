//! Paints the board's draw commands onto an egui canvas.

use super::state::TacticsBoardApp;
use crate::constants::PITCH_DASH_LENGTH;
use crate::render::{DrawCommand, Stroke};
use crate::types::{Color, Point};
use eframe::egui;
use eframe::epaint::StrokeKind;

fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

impl TacticsBoardApp {
    fn to_screen(&self, point: Point) -> egui::Pos2 {
        self.world_to_screen(egui::pos2(point.0, point.1))
    }

    fn screen_stroke(&self, stroke: Stroke) -> egui::Stroke {
        egui::Stroke::new(stroke.width * self.canvas.zoom_factor, color32(stroke.color))
    }

    /// Paints every draw command in order.
    pub fn paint_commands(&self, painter: &egui::Painter, commands: &[DrawCommand]) {
        let zoom = self.canvas.zoom_factor;
        for command in commands {
            match command {
                DrawCommand::Fill { min, max, color } => {
                    let rect = egui::Rect::from_min_max(self.to_screen(*min), self.to_screen(*max));
                    painter.rect_filled(rect, 0.0, color32(*color));
                }
                DrawCommand::Rect { min, max, stroke } => {
                    let rect = egui::Rect::from_min_max(self.to_screen(*min), self.to_screen(*max));
                    painter.rect_stroke(rect, 0.0, self.screen_stroke(*stroke), StrokeKind::Middle);
                }
                DrawCommand::Line { from, to, stroke } => {
                    painter.line_segment(
                        [self.to_screen(*from), self.to_screen(*to)],
                        self.screen_stroke(*stroke),
                    );
                }
                DrawCommand::Polyline {
                    points,
                    stroke,
                    dashed,
                } => {
                    let points: Vec<egui::Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
                    let stroke = self.screen_stroke(*stroke);
                    if *dashed {
                        let dash = PITCH_DASH_LENGTH * zoom;
                        painter.extend(egui::Shape::dashed_line(&points, stroke, dash, dash));
                    } else {
                        painter.add(egui::Shape::line(points, stroke));
                    }
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    fill,
                    stroke,
                } => {
                    let fill = fill.map(color32).unwrap_or(egui::Color32::TRANSPARENT);
                    let stroke = stroke
                        .map(|s| self.screen_stroke(s))
                        .unwrap_or(egui::Stroke::NONE);
                    painter.circle(self.to_screen(*center), radius * zoom, fill, stroke);
                }
                DrawCommand::Text {
                    pos,
                    text,
                    color,
                    size,
                } => {
                    painter.text(
                        self.to_screen(*pos),
                        egui::Align2::CENTER_CENTER,
                        text,
                        egui::FontId::proportional((size * zoom).max(1.0)),
                        color32(*color),
                    );
                }
            }
        }
    }
}
