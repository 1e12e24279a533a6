//! Error type shared by the registry, the passing-line engine and layout loading.

use crate::types::MarkerId;
use thiserror::Error;

/// Errors surfaced by board operations.
///
/// None of these are fatal to an interactive session: the board logs them and
/// keeps rendering its last good state.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A move or recompute referenced a marker that was never registered.
    #[error("unknown marker {0}")]
    UnknownMarker(MarkerId),
    /// A marker was asked to move to a NaN or infinite coordinate.
    #[error("marker {id} cannot move to non-finite position ({x}, {y})")]
    InvalidPosition {
        /// Marker that was being moved
        id: MarkerId,
        /// Requested x coordinate
        x: f32,
        /// Requested y coordinate
        y: f32,
    },
    /// A layout table without any players.
    #[error("layout contains no players")]
    EmptyLayout,
    /// A layout entry with a non-finite start position.
    #[error("layout entry {label} has a non-finite start position")]
    InvalidLayoutEntry {
        /// Label of the offending entry
        label: String,
    },
    /// The layout JSON could not be parsed.
    #[error("failed to parse layout: {0}")]
    Layout(#[from] serde_json::Error),
    /// The layout file could not be read.
    #[error("failed to read layout file: {0}")]
    Io(#[from] std::io::Error),
}
