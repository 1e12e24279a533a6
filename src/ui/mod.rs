//! User interface for the tactics board.
//!
//! # Module Organization
//!
//! - `state` - The main TacticsBoardApp and its UI state
//! - `canvas` - Fitting the board to the canvas and marker dragging
//! - `rendering` - Painting draw commands with egui

mod canvas;
mod rendering;
mod state;

pub use state::TacticsBoardApp;

use crate::constants::{DANGER_ZONE_SLIDER, MAX_LENGTH_SLIDER};
use crate::controls::{self, ControlAction};
use crate::engine::TeamFilter;
use crate::geometry::ProximityModel;
use eframe::egui;

impl eframe::App for TacticsBoardApp {
    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl TacticsBoardApp {
    /// Lays out the control panel and the board canvas.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("control_panel")
            .resizable(false)
            .exact_width(200.0)
            .show(ctx, |ui| {
                self.draw_control_panel(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }

    /// Applies a control action and keeps the widgets in sync with the board.
    pub fn apply_control(&mut self, action: ControlAction) {
        self.board.apply(action);
        let config = self.board.config();
        self.controls.max_length_slider = controls::slider_from_max_length(config.max_length);
        self.controls.danger_zone_slider =
            controls::slider_from_danger_zone(config.danger_zone_radius);
    }

    /// Draws the reset/toggle buttons and the engine sliders.
    fn draw_control_panel(&mut self, ui: &mut egui::Ui) {
        let mut actions = Vec::new();

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            if ui.button("Reset Ball and Positions").clicked() {
                actions.push(ControlAction::ResetAll);
            }
            ui.add_space(10.0);
            let toggle_label = if self.board.config().lines_visible {
                "Toggle Passing Lines Off"
            } else {
                "Toggle Passing Lines On"
            };
            if ui.button(toggle_label).clicked() {
                actions.push(ControlAction::TogglePassingLines);
            }

            ui.separator();
            ui.strong("Max Passing Length");
            ui.small("Distance (m)");
            let slider = egui::Slider::new(
                &mut self.controls.max_length_slider,
                MAX_LENGTH_SLIDER.0..=MAX_LENGTH_SLIDER.1,
            )
            .show_value(false);
            if ui.add(slider).changed() {
                actions.push(ControlAction::SetMaxLength(self.controls.max_length_slider));
            }
            ui.label(controls::metres_label(self.controls.max_length_slider));

            ui.separator();
            ui.strong("Opponent Danger Zone");
            ui.small("Threshold (m)");
            let slider = egui::Slider::new(
                &mut self.controls.danger_zone_slider,
                DANGER_ZONE_SLIDER.0..=DANGER_ZONE_SLIDER.1,
            )
            .show_value(false);
            if ui.add(slider).changed() {
                actions.push(ControlAction::SetDangerZone(self.controls.danger_zone_slider));
            }
            ui.label(format!("{}m", self.controls.danger_zone_slider));

            ui.separator();
            let mut teams = self.board.config().teams;
            egui::ComboBox::from_label("Lines for")
                .selected_text(teams.label())
                .show_ui(ui, |ui| {
                    for option in [TeamFilter::Home, TeamFilter::Away, TeamFilter::Both] {
                        ui.selectable_value(&mut teams, option, option.label());
                    }
                });
            if teams != self.board.config().teams {
                actions.push(ControlAction::SetTeams(teams));
            }

            let mut proximity = self.board.config().proximity;
            egui::ComboBox::from_label("Proximity")
                .selected_text(proximity.label())
                .show_ui(ui, |ui| {
                    for option in [ProximityModel::Parametric, ProximityModel::AxisClamped] {
                        ui.selectable_value(&mut proximity, option, option.label());
                    }
                });
            if proximity != self.board.config().proximity {
                actions.push(ControlAction::SetProximity(proximity));
            }

            ui.checkbox(&mut self.controls.show_coordinates, "Show coordinates");
        });

        for action in actions {
            self.apply_control(action);
        }
    }

    /// Allocates the canvas, handles dragging and paints the board.
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        self.fit_board_to(response.rect);

        // Dragging mutates the board before painting so each frame is consistent
        self.handle_marker_dragging(ui, &response);

        let commands = self.board.render(&self.render_options());
        self.paint_commands(&painter, &commands);
    }
}
