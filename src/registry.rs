//! Entity registry: owns every marker on the board.
//!
//! Markers are created once from a [`Layout`] and live for the whole session.
//! Moving a marker only updates its position; the caller receives a
//! [`MarkerMoved`] event and is responsible for forwarding it to whatever
//! depends on marker positions.

use crate::constants::HIT_SLOP;
use crate::error::BoardError;
use crate::geometry::distance;
use crate::layout::Layout;
use crate::types::*;
use std::collections::HashMap;

/// Notification produced by [`EntityRegistry::move_marker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerMoved {
    /// The marker that moved
    pub id: MarkerId,
    /// Position before the move
    pub from: Point,
    /// Position after the move
    pub to: Point,
}

/// Holds all markers (players and the ball) in creation order.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    markers: Vec<Marker>,
    index: HashMap<MarkerId, usize>,
    ball: Option<MarkerId>,
}

impl EntityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry holding every player of `layout` followed by the ball.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut registry = Self::new();
        for slot in &layout.players {
            registry.create_marker(
                slot.team,
                &slot.label,
                slot.x,
                slot.y,
                slot.effective_role().is_excluded(),
            );
        }
        registry.create_ball(layout.ball.0, layout.ball.1);
        log::debug!(
            "registry built with {} players and a ball",
            registry.markers.len() - 1
        );
        registry
    }

    /// Registers a player marker and returns its id.
    ///
    /// `excluded` marks the player as a keeper, leaving it out of passing lines.
    pub fn create_marker(
        &mut self,
        team: Team,
        label: &str,
        x: f32,
        y: f32,
        excluded: bool,
    ) -> MarkerId {
        let role = if excluded { Role::Keeper } else { Role::Outfield };
        self.insert(Marker::new(
            label.to_string(),
            MarkerKind::Player { team, role },
            (x, y),
        ))
    }

    /// Registers the ball and returns its id. A board has at most one ball;
    /// registering another replaces which marker [`Self::ball`] reports.
    pub fn create_ball(&mut self, x: f32, y: f32) -> MarkerId {
        let id = self.insert(Marker::new("Ball".to_string(), MarkerKind::Ball, (x, y)));
        self.ball = Some(id);
        id
    }

    fn insert(&mut self, marker: Marker) -> MarkerId {
        let id = marker.id;
        self.index.insert(id, self.markers.len());
        self.markers.push(marker);
        id
    }

    /// Moves a marker, returning the resulting event.
    ///
    /// Fails without touching any state if the marker is unknown or the new
    /// position is not finite.
    pub fn move_marker(&mut self, id: MarkerId, x: f32, y: f32) -> Result<MarkerMoved, BoardError> {
        let slot = *self.index.get(&id).ok_or(BoardError::UnknownMarker(id))?;
        if !x.is_finite() || !y.is_finite() {
            return Err(BoardError::InvalidPosition { id, x, y });
        }
        let marker = &mut self.markers[slot];
        let from = marker.position;
        marker.position = (x, y);
        Ok(MarkerMoved {
            id,
            from,
            to: (x, y),
        })
    }

    /// Restores every marker, the ball included, to its start position.
    ///
    /// Returns the events for markers that actually moved.
    pub fn reset_all(&mut self) -> Vec<MarkerMoved> {
        self.markers
            .iter_mut()
            .filter(|m| m.position != m.home_position)
            .map(|m| {
                let from = m.position;
                m.position = m.home_position;
                MarkerMoved {
                    id: m.id,
                    from,
                    to: m.home_position,
                }
            })
            .collect()
    }

    /// Looks up a marker by id.
    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.index.get(&id).map(|&slot| &self.markers[slot])
    }

    /// Current position of a marker.
    pub fn position(&self, id: MarkerId) -> Option<Point> {
        self.get(id).map(|m| m.position)
    }

    /// All markers in creation order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Players of one team in creation order.
    pub fn team_members(&self, team: Team) -> impl Iterator<Item = &Marker> + '_ {
        self.markers.iter().filter(move |m| m.team() == Some(team))
    }

    /// Id of the ball, if one was registered.
    pub fn ball(&self) -> Option<MarkerId> {
        self.ball
    }

    /// Number of registered markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether no markers are registered.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Finds the topmost marker under `point`.
    ///
    /// The ball is drawn above the players and later players above earlier
    /// ones, so the search runs in reverse drawing order.
    pub fn marker_at(&self, point: Point) -> Option<MarkerId> {
        let hit = |m: &Marker| distance(m.position, point) <= m.radius() + HIT_SLOP;

        if let Some(ball) = self.ball.and_then(|id| self.get(id)) {
            if hit(ball) {
                return Some(ball.id);
            }
        }
        self.markers
            .iter()
            .rev()
            .filter(|m| m.team().is_some())
            .find(|m| hit(m))
            .map(|m| m.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_layout_registers_players_and_ball() {
        let registry = EntityRegistry::from_layout(&Layout::default());
        assert_eq!(registry.len(), 23);
        let ball = registry.ball().expect("ball registered");
        assert_eq!(registry.position(ball), Some((859.0, 503.0)));
        assert_eq!(registry.team_members(Team::Home).count(), 11);
        let keepers = registry
            .markers()
            .iter()
            .filter(|m| m.team().is_some() && !m.is_line_eligible())
            .count();
        assert_eq!(keepers, 2);
    }

    #[test]
    fn test_move_marker_updates_position_and_reports_event() {
        let mut registry = EntityRegistry::new();
        let id = registry.create_marker(Team::Home, "CF", 10.0, 20.0, false);

        let event = registry.move_marker(id, 30.0, 40.0).expect("move should succeed");

        assert_eq!(event.id, id);
        assert_eq!(event.from, (10.0, 20.0));
        assert_eq!(event.to, (30.0, 40.0));
        assert_eq!(registry.position(id), Some((30.0, 40.0)));
        assert_eq!(registry.get(id).map(|m| m.home_position), Some((10.0, 20.0)));
    }

    #[test]
    fn test_move_unknown_marker_is_rejected() {
        let mut registry = EntityRegistry::new();
        registry.create_marker(Team::Home, "CF", 10.0, 20.0, false);
        let stranger = uuid::Uuid::new_v4();

        let err = registry.move_marker(stranger, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, BoardError::UnknownMarker(id) if id == stranger));
    }

    #[test]
    fn test_non_finite_move_leaves_position_untouched() {
        let mut registry = EntityRegistry::new();
        let id = registry.create_marker(Team::Away, "LB", 5.0, 5.0, false);

        assert!(matches!(
            registry.move_marker(id, f32::NAN, 1.0),
            Err(BoardError::InvalidPosition { .. })
        ));
        assert!(registry.move_marker(id, 1.0, f32::INFINITY).is_err());
        assert_eq!(registry.position(id), Some((5.0, 5.0)));
    }

    #[test]
    fn test_reset_all_restores_every_marker() {
        let mut registry = EntityRegistry::from_layout(&Layout::default());
        let ids: Vec<_> = registry.markers().iter().map(|m| m.id).collect();
        for (i, id) in ids.iter().enumerate() {
            registry.move_marker(*id, i as f32, 2.0 * i as f32).unwrap();
        }

        let events = registry.reset_all();

        assert_eq!(events.len(), ids.len());
        for marker in registry.markers() {
            assert_eq!(marker.position, marker.home_position);
        }
        let ball = registry.ball().unwrap();
        assert_eq!(registry.position(ball), Some((859.0, 503.0)));
        assert!(registry.reset_all().is_empty());
    }

    #[test]
    fn test_marker_at_prefers_ball_over_player() {
        let mut registry = EntityRegistry::new();
        let player = registry.create_marker(Team::Home, "CF", 100.0, 100.0, false);
        let ball = registry.create_ball(104.0, 100.0);

        assert_eq!(registry.marker_at((104.0, 100.0)), Some(ball));
        assert_eq!(registry.marker_at((94.0, 100.0)), Some(player));
        assert_eq!(registry.marker_at((300.0, 300.0)), None);
    }

    #[test]
    fn test_marker_at_picks_latest_overlapping_player() {
        let mut registry = EntityRegistry::new();
        let _first = registry.create_marker(Team::Home, "LB", 50.0, 50.0, false);
        let second = registry.create_marker(Team::Away, "RW", 55.0, 50.0, false);

        assert_eq!(registry.marker_at((52.0, 50.0)), Some(second));
    }
}
