//! The board session: one registry, one passing-line engine, one config.
//!
//! Every mutation runs to completion before returning: a move updates the
//! registry, publishes the resulting [`MarkerMoved`] to the engine and leaves
//! the board ready to render. Errors are logged and absorbed so an interactive
//! session always keeps its last good state.

use crate::controls::{self, ControlAction};
use crate::engine::{EngineConfig, LineEngine};
use crate::error::BoardError;
use crate::layout::Layout;
use crate::registry::{EntityRegistry, MarkerMoved};
use crate::render::{render, DrawCommand, RenderOptions};
use crate::types::*;

/// A tactics board with its markers and passing lines.
#[derive(Debug, Clone)]
pub struct Board {
    registry: EntityRegistry,
    engine: LineEngine,
}

impl Default for Board {
    fn default() -> Self {
        let layout = Layout::default();
        Self::new(&layout, layout.config)
    }
}

impl Board {
    /// Creates a board from a layout and an initial configuration.
    pub fn new(layout: &Layout, config: EngineConfig) -> Self {
        let registry = EntityRegistry::from_layout(layout);
        let engine = LineEngine::initialize(&registry, config);
        log::info!(
            "board ready: {} markers, {} passing lines",
            registry.len(),
            engine.lines().len()
        );
        Self { registry, engine }
    }

    /// Moves a marker and recomputes the passing lines it affects.
    pub fn try_move_marker(&mut self, id: MarkerId, x: f32, y: f32) -> Result<MarkerMoved, BoardError> {
        let event = self.registry.move_marker(id, x, y)?;
        let touched = self.engine.on_marker_moved(&self.registry, &event)?;
        log::trace!("marker {id} moved to ({x}, {y}), {touched} lines recomputed");
        Ok(event)
    }

    /// Like [`Self::try_move_marker`] but logs failures instead of returning
    /// them. Returns whether the move happened.
    pub fn move_marker(&mut self, id: MarkerId, x: f32, y: f32) -> bool {
        match self.try_move_marker(id, x, y) {
            Ok(_) => true,
            Err(err) => {
                log::warn!("ignoring move: {err}");
                false
            }
        }
    }

    /// Restores every marker and the ball to the layout positions.
    pub fn reset_all(&mut self) {
        let moved = self.registry.reset_all();
        self.engine.recompute_all(&self.registry);
        log::info!("reset {} markers to their start positions", moved.len());
    }

    /// Flips passing lines on or off, returning the new state.
    pub fn toggle_passing_lines(&mut self) -> bool {
        self.engine.toggle_visibility(&self.registry)
    }

    /// Replaces the engine configuration.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.engine.set_config(&self.registry, config);
    }

    /// Sets the maximum passing length in board units.
    pub fn set_max_length(&mut self, max_length: f32) {
        self.set_config(EngineConfig {
            max_length,
            ..*self.config()
        });
    }

    /// Sets the danger zone radius in board units.
    pub fn set_danger_zone(&mut self, danger_zone_radius: f32) {
        self.set_config(EngineConfig {
            danger_zone_radius,
            ..*self.config()
        });
    }

    /// Applies a control-surface request.
    pub fn apply(&mut self, action: ControlAction) {
        log::debug!("control action {action:?}");
        match action {
            ControlAction::ResetAll => self.reset_all(),
            ControlAction::TogglePassingLines => {
                self.toggle_passing_lines();
            }
            ControlAction::SetMaxLength(value) => {
                self.set_max_length(controls::max_length_from_slider(value))
            }
            ControlAction::SetDangerZone(metres) => {
                self.set_danger_zone(controls::danger_zone_from_slider(metres))
            }
            ControlAction::SetTeams(teams) => self.set_config(EngineConfig {
                teams,
                ..*self.config()
            }),
            ControlAction::SetProximity(proximity) => self.set_config(EngineConfig {
                proximity,
                ..*self.config()
            }),
        }
    }

    /// Draw commands for the current state.
    pub fn render(&self, options: &RenderOptions) -> Vec<DrawCommand> {
        render(&self.registry, &self.engine, options)
    }

    /// The markers.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// The passing lines.
    pub fn engine(&self) -> &LineEngine {
        &self.engine
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    /// Topmost marker under a board position.
    pub fn marker_at(&self, point: Point) -> Option<MarkerId> {
        self.registry.marker_at(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TeamFilter;
    use crate::geometry::ProximityModel;

    fn home(board: &Board, label: &str) -> MarkerId {
        board
            .registry()
            .team_members(Team::Home)
            .find(|m| m.label == label)
            .map(|m| m.id)
            .expect("player in default layout")
    }

    #[test]
    fn test_move_then_reset_restores_positions_and_lines() {
        let mut board = Board::default();
        let initial_lines = board.engine().lines().to_vec();
        let ids: Vec<_> = board.registry().markers().iter().map(|m| m.id).collect();

        for (i, id) in ids.iter().enumerate() {
            assert!(board.move_marker(*id, 100.0 + i as f32 * 40.0, 200.0 + i as f32 * 25.0));
        }
        assert_ne!(board.engine().lines(), initial_lines.as_slice());

        board.reset_all();

        for marker in board.registry().markers() {
            assert_eq!(marker.position, marker.home_position);
        }
        assert_eq!(board.engine().lines(), initial_lines.as_slice());
    }

    #[test]
    fn test_unknown_move_is_absorbed() {
        let mut board = Board::default();
        let before = board.render(&RenderOptions::default());

        assert!(!board.move_marker(uuid::Uuid::new_v4(), 1.0, 1.0));
        assert!(!board.move_marker(home(&board, "CF"), f32::NAN, 1.0));

        assert_eq!(board.render(&RenderOptions::default()), before);
    }

    #[test]
    fn test_try_move_reports_errors() {
        let mut board = Board::default();
        let err = board.try_move_marker(uuid::Uuid::new_v4(), 0.0, 0.0).unwrap_err();
        assert!(matches!(err, BoardError::UnknownMarker(_)));
    }

    #[test]
    fn test_dragging_home_player_updates_its_lines() {
        let mut board = Board::default();
        let cf = home(&board, "CF");
        let ch = home(&board, "CH");

        board.move_marker(cf, 863.0, 650.0);

        let line = board.engine().line(cf, ch).unwrap();
        assert!((line.length - 46.0).abs() < 1e-3);
        assert!(line.visible);
    }

    #[test]
    fn test_control_actions_update_config() {
        let mut board = Board::default();

        board.apply(ControlAction::SetMaxLength(120));
        assert_eq!(board.config().max_length, 120.0);
        assert!(board
            .engine()
            .lines()
            .iter()
            .all(|l| !l.visible || l.length < 120.0));

        board.apply(ControlAction::SetDangerZone(3));
        assert_eq!(board.config().danger_zone_radius, 30.0);

        board.apply(ControlAction::SetTeams(TeamFilter::Away));
        assert!(board.engine().visible_lines().all(|l| l.team == Team::Away));

        board.apply(ControlAction::SetProximity(ProximityModel::AxisClamped));
        assert_eq!(board.config().proximity, ProximityModel::AxisClamped);

        board.apply(ControlAction::TogglePassingLines);
        assert!(!board.config().lines_visible);
        assert_eq!(board.engine().visible_lines().count(), 0);
    }

    #[test]
    fn test_reset_action_delegates_to_registry() {
        let mut board = Board::default();
        let ball = board.registry().ball().unwrap();
        board.move_marker(ball, 10.0, 10.0);

        board.apply(ControlAction::ResetAll);

        assert_eq!(board.registry().position(ball), Some((859.0, 503.0)));
    }

    #[test]
    fn test_opponent_dragged_onto_line_highlights_it() {
        let mut board = Board::default();
        let lw = home(&board, "LW");
        let li = home(&board, "LI");
        let away_rw = board
            .registry()
            .team_members(Team::Away)
            .find(|m| m.label == "RW")
            .map(|m| m.id)
            .unwrap();

        let (ax, ay) = board.registry().position(lw).unwrap();
        let (bx, by) = board.registry().position(li).unwrap();
        board.move_marker(away_rw, (ax + bx) / 2.0, (ay + by) / 2.0);

        assert!(board.engine().line(lw, li).unwrap().highlighted);
    }

    #[test]
    fn test_render_twice_is_identical() {
        let board = Board::default();
        let options = RenderOptions::default();
        assert_eq!(board.render(&options), board.render(&options));
    }
}
