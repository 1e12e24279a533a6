//! Starting layout of the board: where every player and the ball begin.
//!
//! The built-in layout is the 11-a-side hockey set-up with both sides in their
//! kick-off shape. Alternative layouts can be loaded from JSON.

use crate::engine::EngineConfig;
use crate::error::BoardError;
use crate::types::{Point, Role, Team};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One player entry in a layout table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerSlot {
    /// Side the player plays for
    pub team: Team,
    /// Position label shown on the marker
    pub label: String,
    /// Start x coordinate
    pub x: f32,
    /// Start y coordinate
    pub y: f32,
    /// Defaults to a keeper for "GK", outfield otherwise
    #[serde(default)]
    pub role: Option<Role>,
}

impl PlayerSlot {
    /// Role of the slot, inferring a keeper from the "GK" label when unset.
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or(if self.label == "GK" {
            Role::Keeper
        } else {
            Role::Outfield
        })
    }
}

/// A complete starting layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    /// Player start positions, in creation order
    pub players: Vec<PlayerSlot>,
    /// Ball start position
    #[serde(default = "default_ball_start")]
    pub ball: Point,
    /// Engine settings the board starts with
    #[serde(default)]
    pub config: EngineConfig,
}

fn default_ball_start() -> Point {
    (859.0, 503.0)
}

const DEFAULT_PLAYERS: &[(Team, &str, f32, f32)] = &[
    (Team::Away, "GK", 860.0, 89.0),
    (Team::Away, "LB", 796.0, 232.0),
    (Team::Away, "RB", 936.0, 232.0),
    (Team::Away, "LH", 624.0, 311.0),
    (Team::Away, "CH", 859.0, 311.0),
    (Team::Away, "RH", 1100.0, 311.0),
    (Team::Away, "LI", 997.0, 421.0),
    (Team::Away, "RI", 736.0, 421.0),
    (Team::Away, "LW", 1104.0, 476.0),
    (Team::Away, "RW", 610.0, 476.0),
    (Team::Away, "CF", 855.0, 459.0),
    (Team::Home, "GK", 859.0, 912.0),
    (Team::Home, "LB", 775.0, 782.0),
    (Team::Home, "RB", 931.0, 782.0),
    (Team::Home, "LH", 624.0, 696.0),
    (Team::Home, "CH", 863.0, 696.0),
    (Team::Home, "RH", 1101.0, 696.0),
    (Team::Home, "LI", 734.0, 591.0),
    (Team::Home, "RI", 1000.0, 591.0),
    (Team::Home, "LW", 607.0, 525.0),
    (Team::Home, "RW", 1104.0, 523.0),
    (Team::Home, "CF", 856.0, 521.0),
];

impl Default for Layout {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS
                .iter()
                .map(|&(team, label, x, y)| PlayerSlot {
                    team,
                    label: label.to_string(),
                    x,
                    y,
                    role: None,
                })
                .collect(),
            ball: default_ball_start(),
            config: EngineConfig::default(),
        }
    }
}

impl Layout {
    /// Parses and validates a layout from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let layout: Layout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reads and validates a layout from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the layout to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Rejects layouts the board cannot represent.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.players.is_empty() {
            return Err(BoardError::EmptyLayout);
        }
        if let Some(slot) = self
            .players
            .iter()
            .find(|slot| !slot.x.is_finite() || !slot.y.is_finite())
        {
            return Err(BoardError::InvalidLayoutEntry {
                label: slot.label.clone(),
            });
        }
        if !self.ball.0.is_finite() || !self.ball.1.is_finite() {
            return Err(BoardError::InvalidLayoutEntry {
                label: "Ball".to_string(),
            });
        }
        Ok(())
    }
}
