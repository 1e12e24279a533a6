//! Application state management structures.
//!
//! This module contains the state the desktop host keeps alongside the board:
//! how the board is fitted onto the canvas, the drag in progress, and the
//! current positions of the control-panel widgets.

use crate::board::Board;
use crate::controls;
use crate::layout::Layout;
use crate::render::RenderOptions;
use crate::types::MarkerId;
use eframe::egui;

/// State related to canvas placement.
///
/// The board has a fixed size; every frame it is scaled to fit the canvas and
/// centred in it.
pub struct CanvasState {
    /// Screen position of the board origin
    pub offset: egui::Vec2,
    /// Screen pixels per board unit
    pub zoom_factor: f32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            offset: egui::Vec2::ZERO,
            zoom_factor: 1.0,
        }
    }
}

/// State related to pointer interaction with markers.
#[derive(Default)]
pub struct InteractionState {
    /// Marker currently being dragged
    pub dragging_marker: Option<MarkerId>,
    /// Offset from the pointer to the marker centre, in board units
    pub drag_offset: egui::Vec2,
    /// Whether the current button press has already been hit tested
    pub press_handled: bool,
}

/// Widget values of the control panel.
pub struct ControlPanelState {
    /// Max passing length slider, in board units
    pub max_length_slider: i32,
    /// Danger zone slider, in metres
    pub danger_zone_slider: i32,
    /// Whether the "(x,y)" captions are drawn
    pub show_coordinates: bool,
}

impl ControlPanelState {
    /// Widget values reflecting the board's current configuration.
    pub fn from_board(board: &Board) -> Self {
        let config = board.config();
        Self {
            max_length_slider: controls::slider_from_max_length(config.max_length),
            danger_zone_slider: controls::slider_from_danger_zone(config.danger_zone_radius),
            show_coordinates: true,
        }
    }
}

/// The main application structure holding the board and its UI state.
///
/// This struct implements the `eframe::App` trait and handles all user
/// interface rendering and interaction logic.
pub struct TacticsBoardApp {
    /// The board being displayed
    pub board: Board,
    /// Canvas placement
    pub canvas: CanvasState,
    /// Pointer interaction
    pub interaction: InteractionState,
    /// Control panel widgets
    pub controls: ControlPanelState,
}

impl Default for TacticsBoardApp {
    fn default() -> Self {
        Self::new(&Layout::default())
    }
}

impl TacticsBoardApp {
    /// Creates the app for a starting layout and the engine settings it carries.
    pub fn new(layout: &Layout) -> Self {
        let board = Board::new(layout, layout.config);
        let controls = ControlPanelState::from_board(&board);
        Self {
            board,
            canvas: CanvasState::default(),
            interaction: InteractionState::default(),
            controls,
        }
    }

    /// Render options for the current frame.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_pitch: true,
            show_coordinates: self.controls.show_coordinates,
            dragging: self.interaction.dragging_marker,
        }
    }
}
