//! Passing-line engine.
//!
//! Keeps one [`PassingLine`] per unordered pair of same-team outfield players
//! and derives each line's length, visibility, thickness and danger highlight
//! from the marker positions held by the [`EntityRegistry`]. Lines are built
//! once when the engine is initialized and are only ever recomputed after that.

use crate::constants::*;
use crate::error::BoardError;
use crate::geometry::{distance, ProximityModel};
use crate::registry::{EntityRegistry, MarkerMoved};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which side's passing lines are drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TeamFilter {
    /// Only the home side
    #[default]
    Home,
    /// Only the away side
    Away,
    /// Both sides
    Both,
}

impl TeamFilter {
    /// Whether lines of `team` pass this filter.
    pub fn shows(self, team: Team) -> bool {
        match self {
            TeamFilter::Home => team == Team::Home,
            TeamFilter::Away => team == Team::Away,
            TeamFilter::Both => true,
        }
    }

    /// Label shown by the control surface.
    pub fn label(self) -> &'static str {
        match self {
            TeamFilter::Home => Team::Home.display_name(),
            TeamFilter::Away => Team::Away.display_name(),
            TeamFilter::Both => "Both teams",
        }
    }
}

/// Parameters read by every recompute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Lines at least this long are hidden
    pub max_length: f32,
    /// Opponents within this distance of a line highlight it
    pub danger_zone_radius: f32,
    /// Global on/off switch for passing lines
    pub lines_visible: bool,
    /// How opponent distance to a line is measured
    pub proximity: ProximityModel,
    /// Which side's lines are shown
    pub teams: TeamFilter,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            danger_zone_radius: DEFAULT_DANGER_ZONE,
            lines_visible: true,
            proximity: ProximityModel::default(),
            teams: TeamFilter::default(),
        }
    }
}

impl EngineConfig {
    /// Returns a copy with lengths clamped into their accepted ranges.
    ///
    /// Non-finite values fall back to the defaults.
    pub fn sanitized(self) -> Self {
        fn clamp_or(value: f32, (lo, hi): (f32, f32), fallback: f32) -> f32 {
            if value.is_finite() {
                value.clamp(lo, hi)
            } else {
                fallback
            }
        }

        Self {
            max_length: clamp_or(self.max_length, MAX_LENGTH_RANGE, DEFAULT_MAX_LENGTH),
            danger_zone_radius: clamp_or(
                self.danger_zone_radius,
                DANGER_ZONE_RANGE,
                DEFAULT_DANGER_ZONE,
            ),
            ..self
        }
    }
}

/// Canonical key of an unordered marker pair: the smaller id comes first.
pub type LineKey = (MarkerId, MarkerId);

/// Orders two marker ids into a [`LineKey`].
pub fn line_key(a: MarkerId, b: MarkerId) -> LineKey {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Thickness of a line of the given length: 10 at zero, thinning by one unit
/// every 30, never below 2.
pub fn thickness_for(length: f32) -> f32 {
    (LINE_MAX_THICKNESS - length / LINE_THINNING_RATE).max(LINE_MIN_THICKNESS)
}

/// A potential pass between two teammates.
#[derive(Debug, Clone, PartialEq)]
pub struct PassingLine {
    /// The two endpoints, in canonical order
    pub key: LineKey,
    /// Team both endpoints play for
    pub team: Team,
    /// Distance between the endpoints
    pub length: f32,
    /// Whether the line is drawn
    pub visible: bool,
    /// Stroke width when drawn
    pub thickness: f32,
    /// Whether an opponent sits within the danger zone of the line
    pub highlighted: bool,
}

impl PassingLine {
    fn new(key: LineKey, team: Team) -> Self {
        Self {
            key,
            team,
            length: 0.0,
            visible: false,
            thickness: LINE_MAX_THICKNESS,
            highlighted: false,
        }
    }

    /// Whether `id` is one of the endpoints.
    pub fn involves(&self, id: MarkerId) -> bool {
        self.key.0 == id || self.key.1 == id
    }

    fn endpoints(&self, registry: &EntityRegistry) -> Option<(Point, Point)> {
        Some((registry.position(self.key.0)?, registry.position(self.key.1)?))
    }

    /// Recomputes every derived attribute.
    fn refresh(&mut self, registry: &EntityRegistry, config: &EngineConfig) {
        let Some((a, b)) = self.endpoints(registry) else {
            log::warn!("passing line {:?} lost an endpoint", self.key);
            return;
        };
        self.length = distance(a, b);
        self.visible = config.lines_visible
            && config.teams.shows(self.team)
            && self.length < config.max_length;
        self.thickness = thickness_for(self.length);
        self.highlighted = Self::threatened(a, b, self.team, registry, config);
    }

    /// Recomputes only the danger highlight.
    fn refresh_highlight(&mut self, registry: &EntityRegistry, config: &EngineConfig) {
        if let Some((a, b)) = self.endpoints(registry) {
            self.highlighted = Self::threatened(a, b, self.team, registry, config);
        }
    }

    fn threatened(
        a: Point,
        b: Point,
        team: Team,
        registry: &EntityRegistry,
        config: &EngineConfig,
    ) -> bool {
        registry
            .markers()
            .iter()
            .filter(|m| m.opposes(team))
            .any(|o| config.proximity.distance(a, b, o.position) <= config.danger_zone_radius)
    }
}

/// Owns the passing lines and the configuration that shapes them.
#[derive(Debug, Clone)]
pub struct LineEngine {
    config: EngineConfig,
    lines: Vec<PassingLine>,
    index: HashMap<LineKey, usize>,
}

impl LineEngine {
    /// Builds one line per unordered pair of same-team outfield players and
    /// computes their initial state.
    pub fn initialize(registry: &EntityRegistry, config: EngineConfig) -> Self {
        let mut engine = Self {
            config: config.sanitized(),
            lines: Vec::new(),
            index: HashMap::new(),
        };

        for team in [Team::Home, Team::Away] {
            let eligible: Vec<MarkerId> = registry
                .team_members(team)
                .filter(|m| m.is_line_eligible())
                .map(|m| m.id)
                .collect();
            for (i, &first) in eligible.iter().enumerate() {
                for &second in &eligible[i + 1..] {
                    let key = line_key(first, second);
                    if engine.index.contains_key(&key) {
                        continue;
                    }
                    engine.index.insert(key, engine.lines.len());
                    engine.lines.push(PassingLine::new(key, team));
                }
            }
        }

        engine.recompute_all(registry);
        log::debug!("passing-line engine built {} lines", engine.lines.len());
        engine
    }

    /// Reacts to a marker move.
    ///
    /// Lines touching the moved marker are fully recomputed. If the marker is a
    /// player, every line of the opposing side also has its highlight
    /// recomputed, since that player may now be close to any of them. Returns
    /// how many lines were touched.
    pub fn on_marker_moved(
        &mut self,
        registry: &EntityRegistry,
        event: &MarkerMoved,
    ) -> Result<usize, BoardError> {
        let marker = registry
            .get(event.id)
            .ok_or(BoardError::UnknownMarker(event.id))?;
        let Some(team) = marker.team() else {
            return Ok(0);
        };

        let config = self.config;
        let opposing = team.opponent();
        let mut touched = 0;
        for line in &mut self.lines {
            if line.involves(event.id) {
                line.refresh(registry, &config);
                touched += 1;
            } else if line.team == opposing {
                line.refresh_highlight(registry, &config);
                touched += 1;
            }
        }
        Ok(touched)
    }

    /// Recomputes every line from scratch.
    pub fn recompute_all(&mut self, registry: &EntityRegistry) {
        let config = self.config;
        for line in &mut self.lines {
            line.refresh(registry, &config);
        }
    }

    /// Replaces the configuration and recomputes every line.
    pub fn set_config(&mut self, registry: &EntityRegistry, config: EngineConfig) {
        let sanitized = config.sanitized();
        if sanitized != config {
            log::warn!("engine config clamped from {config:?} to {sanitized:?}");
        }
        self.config = sanitized;
        self.recompute_all(registry);
    }

    /// Flips the global line switch and recomputes every line.
    pub fn toggle_visibility(&mut self, registry: &EntityRegistry) -> bool {
        self.config.lines_visible = !self.config.lines_visible;
        self.recompute_all(registry);
        self.config.lines_visible
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// All lines in construction order.
    pub fn lines(&self) -> &[PassingLine] {
        &self.lines
    }

    /// The line between two markers, in either order.
    pub fn line(&self, a: MarkerId, b: MarkerId) -> Option<&PassingLine> {
        self.index.get(&line_key(a, b)).map(|&i| &self.lines[i])
    }

    /// Lines that are currently drawn.
    pub fn visible_lines(&self) -> impl Iterator<Item = &PassingLine> + '_ {
        self.lines.iter().filter(|l| l.visible)
    }
}
