//! Shared application-wide constants.
//! Centralizes tweakable values used by the passing-line engine, the pitch
//! diagram and the control surface.

// Markers
/// Radius of a player marker in board units.
pub const PLAYER_RADIUS: f32 = 10.0;
/// Radius of the ball marker in board units.
pub const BALL_RADIUS: f32 = 4.0;
/// Width of a player marker outline.
pub const PLAYER_OUTLINE_WIDTH: f32 = 3.0;
/// Font size of the position label drawn inside a player marker.
pub const PLAYER_FONT_SIZE: f32 = 8.0;
/// Vertical offset of the coordinate caption below a player marker.
pub const COORD_CAPTION_OFFSET: f32 = 20.0;
/// Extra slack added to marker radii when hit testing a pointer press.
pub const HIT_SLOP: f32 = 3.0;

// Passing lines
/// Thickness of a passing line of zero length.
pub const LINE_MAX_THICKNESS: f32 = 10.0;
/// Thinnest a visible passing line may get.
pub const LINE_MIN_THICKNESS: f32 = 2.0;
/// Length over which a passing line loses one unit of thickness.
pub const LINE_THINNING_RATE: f32 = 30.0;
/// Default maximum passing distance (30m).
pub const DEFAULT_MAX_LENGTH: f32 = 300.0;
/// Default opponent danger zone (5m).
pub const DEFAULT_DANGER_ZONE: f32 = 50.0;
/// Accepted range for the maximum line length set programmatically.
pub const MAX_LENGTH_RANGE: (f32, f32) = (1.0, 5000.0);
/// Accepted range for the danger zone radius set programmatically.
pub const DANGER_ZONE_RANGE: (f32, f32) = (0.5, 1000.0);

// Control surface
/// Board units per metre shown on the sliders.
pub const UNITS_PER_METRE: i32 = 10;
/// Max passing length slider range, in board units.
pub const MAX_LENGTH_SLIDER: (i32, i32) = (50, 400);
/// Danger zone slider range, in metres.
pub const DANGER_ZONE_SLIDER: (i32, i32) = (1, 10);

// Pitch geometry
/// Length of the pitch (91.4m).
pub const PITCH_LENGTH: f32 = 914.0;
/// Width of the pitch (55m).
pub const PITCH_WIDTH: f32 = 550.0;
/// Space above the pitch outline.
pub const PITCH_MARGIN_TOP: f32 = 50.0;
/// Horizontal centre of the pitch.
pub const PITCH_CENTER_X: f32 = 860.0;
/// Goal mouth width.
pub const GOAL_WIDTH: f32 = 37.0;
/// Goal depth behind the back line.
pub const GOAL_DEPTH: f32 = 8.0;
/// Radius of the shooting circle ("D").
pub const D_RADIUS: f32 = 146.0;
/// Gap between the shooting circle and the dashed outer circle.
pub const OUTER_D_GAP: f32 = 50.0;
/// Distance of the penalty spot from the back line.
pub const PENALTY_SPOT_OFFSET: f32 = 64.7;
/// Radius of the penalty spot.
pub const PENALTY_SPOT_RADIUS: f32 = 1.5;
/// Stroke width of solid pitch markings.
pub const PITCH_LINE_WIDTH: f32 = 2.0;
/// Stroke width of dashed pitch markings.
pub const PITCH_DASH_WIDTH: f32 = 1.2;
/// Dash and gap length of dashed pitch markings.
pub const PITCH_DASH_LENGTH: f32 = 5.0;
/// Segments used to approximate a half circle.
pub const ARC_SEGMENTS: usize = 48;
/// Size of the whole board surface.
pub const BOARD_SIZE: (f32, f32) = (1720.0, 1080.0);
