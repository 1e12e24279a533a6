//! Core data types for the tactics board.
//!
//! This module defines the markers placed on the board (players and the ball),
//! the teams they belong to, and the small colour type shared by the
//! presentation layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for board markers.
pub type MarkerId = Uuid;

/// A position on the board as (x, y) in board units (10 units per metre).
pub type Point = (f32, f32);

/// The two sides on the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    /// The side the board is analysing (drawn in black and red)
    Home,
    /// The opposition (drawn in white and blue)
    Away,
}

impl Team {
    /// Returns the other side.
    pub fn opponent(self) -> Team {
        match self {
            Team::Home => Team::Away,
            Team::Away => Team::Home,
        }
    }

    /// Human readable team name.
    pub fn display_name(self) -> &'static str {
        match self {
            Team::Home => "Essendon",
            Team::Away => "Opponent",
        }
    }
}

/// Playing role of a marker as far as passing lines are concerned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    /// Takes part in passing lines
    #[default]
    Outfield,
    /// Goalkeeper; excluded from passing lines
    Keeper,
}

impl Role {
    /// Whether markers with this role are left out of passing lines.
    pub fn is_excluded(self) -> bool {
        matches!(self, Role::Keeper)
    }
}

/// What a marker represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// A player belonging to a team
    Player {
        /// The player's side
        team: Team,
        /// The player's role
        role: Role,
    },
    /// The ball, which belongs to no team
    Ball,
}

/// A draggable entity on the board.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Unique identifier for this marker
    pub id: MarkerId,
    /// Position label (e.g. "GK", "CF")
    pub label: String,
    /// Player or ball
    pub kind: MarkerKind,
    /// Current position on the board
    pub position: Point,
    /// Position recorded at creation, restored by a reset
    pub home_position: Point,
}

impl Marker {
    /// Creates a new marker with a fresh id, placed at its start position.
    pub fn new(label: String, kind: MarkerKind, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            kind,
            position,
            home_position: position,
        }
    }

    /// The marker's team, or `None` for the ball.
    pub fn team(&self) -> Option<Team> {
        match self.kind {
            MarkerKind::Player { team, .. } => Some(team),
            MarkerKind::Ball => None,
        }
    }

    /// Whether this marker takes part in passing lines.
    pub fn is_line_eligible(&self) -> bool {
        matches!(self.kind, MarkerKind::Player { role, .. } if !role.is_excluded())
    }

    /// Whether this marker is a player on the side opposing `team`.
    pub fn opposes(&self, team: Team) -> bool {
        self.team() == Some(team.opponent())
    }

    /// Drawn radius of the marker.
    pub fn radius(&self) -> f32 {
        match self.kind {
            MarkerKind::Player { .. } => crate::constants::PLAYER_RADIUS,
            MarkerKind::Ball => crate::constants::BALL_RADIUS,
        }
    }
}

/// An opaque RGB colour used by draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Pure red.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Pure blue.
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Ball yellow.
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    /// Pitch green.
    pub const PITCH_GREEN: Color = Color::rgb(0, 128, 0);

    /// Builds a colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
