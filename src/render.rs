//! Presentation adapter: turns board state into draw commands.
//!
//! Nothing here draws. [`render`] produces a flat list of primitives in
//! painting order (pitch, passing lines, players, ball) which the host surface
//! paints as-is. The output depends only on its inputs, so calling it on every
//! pointer motion is safe.

use crate::constants::*;
use crate::engine::LineEngine;
use crate::registry::EntityRegistry;
use crate::types::*;
use std::f32::consts::PI;

/// Outline description for a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Width in board units
    pub width: f32,
    /// Stroke colour
    pub color: Color,
}

impl Stroke {
    /// Builds a stroke.
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// A single primitive for the host surface, in board coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled background rectangle
    Fill {
        /// Top-left corner
        min: Point,
        /// Bottom-right corner
        max: Point,
        /// Fill colour
        color: Color,
    },
    /// Outlined rectangle
    Rect {
        /// Top-left corner
        min: Point,
        /// Bottom-right corner
        max: Point,
        /// Outline
        stroke: Stroke,
    },
    /// Straight line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Line stroke
        stroke: Stroke,
    },
    /// Open polyline, optionally dashed
    Polyline {
        /// Vertices in order
        points: Vec<Point>,
        /// Line stroke
        stroke: Stroke,
        /// Whether the line is dashed
        dashed: bool,
    },
    /// Circle with optional fill and outline
    Circle {
        /// Centre point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill colour, if filled
        fill: Option<Color>,
        /// Outline, if outlined
        stroke: Option<Stroke>,
    },
    /// Text centred on a point
    Text {
        /// Anchor point
        pos: Point,
        /// Content
        text: String,
        /// Text colour
        color: Color,
        /// Font size
        size: f32,
    },
}

/// Colours a team's markers are drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamStyle {
    /// Marker fill
    pub fill: Color,
    /// Marker outline
    pub outline: Color,
    /// Label colour
    pub text: Color,
}

/// Marker colours for `team`.
pub fn team_style(team: Team) -> TeamStyle {
    match team {
        Team::Home => TeamStyle {
            fill: Color::BLACK,
            outline: Color::RED,
            text: Color::WHITE,
        },
        Team::Away => TeamStyle {
            fill: Color::WHITE,
            outline: Color::BLUE,
            text: Color::BLUE,
        },
    }
}

/// Presentation switches that do not affect engine state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Draw the pitch markings
    pub show_pitch: bool,
    /// Draw the "(x,y)" caption under each player
    pub show_coordinates: bool,
    /// Marker currently being dragged, outlined in blue
    pub dragging: Option<MarkerId>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_pitch: true,
            show_coordinates: true,
            dragging: None,
        }
    }
}

/// Produces every draw command for the current board state.
pub fn render(
    registry: &EntityRegistry,
    engine: &LineEngine,
    options: &RenderOptions,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    if options.show_pitch {
        commands.extend(pitch_commands());
    }

    // Passing lines sit below the players
    for line in engine.visible_lines() {
        let (Some(from), Some(to)) = (registry.position(line.key.0), registry.position(line.key.1))
        else {
            continue;
        };
        let color = if line.highlighted {
            Color::RED
        } else {
            Color::BLACK
        };
        commands.push(DrawCommand::Line {
            from,
            to,
            stroke: Stroke::new(line.thickness, color),
        });
    }

    for marker in registry.markers() {
        if let MarkerKind::Player { team, .. } = marker.kind {
            push_player(&mut commands, marker, team, options);
        }
    }

    // Ball last so it is always on top
    if let Some(ball) = registry.ball().and_then(|id| registry.get(id)) {
        commands.push(DrawCommand::Circle {
            center: ball.position,
            radius: BALL_RADIUS,
            fill: Some(Color::YELLOW),
            stroke: None,
        });
    }

    commands
}

fn push_player(commands: &mut Vec<DrawCommand>, marker: &Marker, team: Team, options: &RenderOptions) {
    let style = team_style(team);
    let outline = if options.dragging == Some(marker.id) {
        Color::BLUE
    } else {
        style.outline
    };
    let (x, y) = marker.position;

    commands.push(DrawCommand::Circle {
        center: marker.position,
        radius: PLAYER_RADIUS,
        fill: Some(style.fill),
        stroke: Some(Stroke::new(PLAYER_OUTLINE_WIDTH, outline)),
    });
    commands.push(DrawCommand::Text {
        pos: marker.position,
        text: marker.label.clone(),
        color: style.text,
        size: PLAYER_FONT_SIZE,
    });
    if options.show_coordinates {
        commands.push(DrawCommand::Text {
            pos: (x, y + COORD_CAPTION_OFFSET),
            text: format!("({:.0},{:.0})", x, y),
            color: Color::WHITE,
            size: PLAYER_FONT_SIZE,
        });
    }
}

/// Static field markings: outline, centre and 25-yard lines, goals, shooting
/// circles with their dashed outer circles, and penalty spots.
pub fn pitch_commands() -> Vec<DrawCommand> {
    let left = PITCH_CENTER_X - PITCH_WIDTH / 2.0;
    let right = PITCH_CENTER_X + PITCH_WIDTH / 2.0;
    let top = PITCH_MARGIN_TOP;
    let bottom = PITCH_MARGIN_TOP + PITCH_LENGTH;
    let solid = Stroke::new(PITCH_LINE_WIDTH, Color::WHITE);
    let dashed = Stroke::new(PITCH_DASH_WIDTH, Color::WHITE);

    let mut commands = vec![
        DrawCommand::Fill {
            min: (0.0, 0.0),
            max: BOARD_SIZE,
            color: Color::PITCH_GREEN,
        },
        DrawCommand::Rect {
            min: (left, top),
            max: (right, bottom),
            stroke: solid,
        },
    ];

    for fraction in [0.5, 0.25, 0.75] {
        let y = top + PITCH_LENGTH * fraction;
        commands.push(DrawCommand::Line {
            from: (left, y),
            to: (right, y),
            stroke: solid,
        });
    }

    let goal_left = PITCH_CENTER_X - GOAL_WIDTH / 2.0;
    let goal_right = PITCH_CENTER_X + GOAL_WIDTH / 2.0;
    commands.push(DrawCommand::Rect {
        min: (goal_left, top - GOAL_DEPTH),
        max: (goal_right, top),
        stroke: solid,
    });
    commands.push(DrawCommand::Rect {
        min: (goal_left, bottom),
        max: (goal_right, bottom + GOAL_DEPTH),
        stroke: solid,
    });

    for (back_line, into_pitch) in [(top, 1.0), (bottom, -1.0)] {
        commands.push(DrawCommand::Polyline {
            points: half_circle(back_line, D_RADIUS, into_pitch),
            stroke: solid,
            dashed: false,
        });
        commands.push(DrawCommand::Polyline {
            points: half_circle(back_line, D_RADIUS + OUTER_D_GAP, into_pitch),
            stroke: dashed,
            dashed: true,
        });
        commands.push(DrawCommand::Circle {
            center: (
                PITCH_CENTER_X,
                back_line + into_pitch * PENALTY_SPOT_OFFSET,
            ),
            radius: PENALTY_SPOT_RADIUS,
            fill: Some(Color::WHITE),
            stroke: None,
        });
    }

    commands
}

/// Half circle centred on the middle of a back line, bulging into the pitch
/// (`direction` is +1 from the top line, -1 from the bottom line).
fn half_circle(back_line: f32, radius: f32, direction: f32) -> Vec<Point> {
    (0..=ARC_SEGMENTS)
        .map(|i| {
            let theta = PI * i as f32 / ARC_SEGMENTS as f32;
            (
                PITCH_CENTER_X + radius * theta.cos(),
                back_line + direction * radius * theta.sin(),
            )
        })
        .collect()
}
