//! Control surface: the knobs that parameterize the passing-line engine.
//!
//! Widgets produce [`ControlAction`]s; the board applies them. Slider values
//! arrive in widget units (board units for the passing length, metres for the
//! danger zone) and are converted here.

use crate::constants::*;
use crate::engine::TeamFilter;
use crate::geometry::ProximityModel;

/// A request coming from one of the board's controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    /// Put every marker and the ball back where it started
    ResetAll,
    /// Flip passing lines on or off
    TogglePassingLines,
    /// New value of the max passing length slider, in board units
    SetMaxLength(i32),
    /// New value of the danger zone slider, in metres
    SetDangerZone(i32),
    /// Choose whose passing lines are drawn
    SetTeams(TeamFilter),
    /// Choose how opponent proximity is measured
    SetProximity(ProximityModel),
}

/// Converts the max passing length slider value to an engine length.
pub fn max_length_from_slider(value: i32) -> f32 {
    value.clamp(MAX_LENGTH_SLIDER.0, MAX_LENGTH_SLIDER.1) as f32
}

/// Slider position showing an engine max length.
pub fn slider_from_max_length(length: f32) -> i32 {
    (length.round() as i32).clamp(MAX_LENGTH_SLIDER.0, MAX_LENGTH_SLIDER.1)
}

/// Converts the danger zone slider value (metres) to an engine radius.
pub fn danger_zone_from_slider(metres: i32) -> f32 {
    (metres.clamp(DANGER_ZONE_SLIDER.0, DANGER_ZONE_SLIDER.1) * UNITS_PER_METRE) as f32
}

/// Slider position (metres) showing an engine danger radius.
pub fn slider_from_danger_zone(radius: f32) -> i32 {
    ((radius / UNITS_PER_METRE as f32).round() as i32)
        .clamp(DANGER_ZONE_SLIDER.0, DANGER_ZONE_SLIDER.1)
}

/// Display text for a length in board units, truncated to whole metres.
pub fn metres_label(units: i32) -> String {
    format!("{}m", units / UNITS_PER_METRE)
}
