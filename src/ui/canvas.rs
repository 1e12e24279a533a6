//! Canvas placement and marker dragging.
//!
//! This module fits the board onto the canvas, converts between screen and
//! board coordinates, and turns pointer press/motion/release into marker moves.

use super::state::TacticsBoardApp;
use crate::constants::BOARD_SIZE;
use eframe::egui;

impl TacticsBoardApp {
    /// Converts screen coordinates to board coordinates.
    pub fn screen_to_world(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        (screen_pos - self.canvas.offset) / self.canvas.zoom_factor
    }

    /// Converts board coordinates to screen coordinates.
    pub fn world_to_screen(&self, world_pos: egui::Pos2) -> egui::Pos2 {
        world_pos * self.canvas.zoom_factor + self.canvas.offset
    }

    /// Scales and centres the board inside the canvas rectangle.
    pub fn fit_board_to(&mut self, canvas_rect: egui::Rect) {
        let board = egui::vec2(BOARD_SIZE.0, BOARD_SIZE.1);
        let zoom = (canvas_rect.width() / board.x)
            .min(canvas_rect.height() / board.y)
            .max(f32::EPSILON);
        let margin = (canvas_rect.size() - board * zoom) * 0.5;
        self.canvas.zoom_factor = zoom;
        self.canvas.offset = canvas_rect.min.to_vec2() + margin;
    }

    /// Handles marker dragging with the primary mouse button.
    ///
    /// A drag only starts if the press lands on a marker; moving onto a marker
    /// with the button already held does nothing. Each motion moves the marker
    /// and recomputes its passing lines before the frame is painted.
    pub fn handle_marker_dragging(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if ui.input(|i| i.pointer.primary_down()) {
            let Some(current_pos) = response.interact_pointer_pos() else {
                return;
            };
            let world_pos = self.screen_to_world(current_pos);

            if let Some(marker_id) = self.interaction.dragging_marker {
                let target = world_pos + self.interaction.drag_offset;
                self.board.move_marker(marker_id, target.x, target.y);
            } else if !self.interaction.press_handled {
                self.interaction.press_handled = true;
                self.start_marker_drag(world_pos);
            }
        } else {
            if let Some(marker_id) = self.interaction.dragging_marker.take() {
                log::debug!("released marker {marker_id}");
            }
            self.interaction.press_handled = false;
            self.interaction.drag_offset = egui::Vec2::ZERO;
        }
    }

    /// Starts dragging whatever marker sits under `world_pos`, if any.
    fn start_marker_drag(&mut self, world_pos: egui::Pos2) {
        let Some(marker_id) = self.board.marker_at((world_pos.x, world_pos.y)) else {
            return;
        };
        if let Some((x, y)) = self.board.registry().position(marker_id) {
            self.interaction.dragging_marker = Some(marker_id);
            self.interaction.drag_offset = egui::pos2(x, y) - world_pos;
        }
    }
}
