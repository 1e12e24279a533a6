//! # Tactics Board
//!
//! An interactive hockey tactics board: a fixed-size pitch with draggable
//! player markers for two teams and a draggable ball. Between teammates the
//! board draws passing lines that:
//! - thin out as the pass gets longer,
//! - disappear beyond a configurable maximum passing length,
//! - turn red when an opponent stands within the danger zone of the pass.
//!
//! ## Features
//! - Real-time passing-line recompute on every drag motion
//! - Reset of all markers to the starting layout
//! - Sliders for maximum passing length and opponent danger zone
//! - Starting layouts loadable from JSON

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod board;
pub mod constants;
pub mod controls;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod registry;
pub mod render;
mod types;
mod ui;

// Re-export public types and functions
pub use board::Board;
pub use engine::{EngineConfig, LineEngine, PassingLine, TeamFilter};
pub use error::BoardError;
pub use layout::Layout;
pub use registry::{EntityRegistry, MarkerMoved};
pub use types::*;
pub use ui::TacticsBoardApp;

use eframe::egui;

/// Runs the tactics board application for the given starting layout.
///
/// This function opens the board window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use tactics_board::{run_app, Layout};
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app(Layout::default())
/// }
/// ```
pub fn run_app(layout: Layout) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1920.0, 1080.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Hockey Pitch",
        options,
        Box::new(move |_cc| Ok(Box::new(TacticsBoardApp::new(&layout)))),
    )
}
