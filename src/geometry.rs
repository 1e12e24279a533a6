//! Pure 2D geometry used by the passing-line engine and pointer hit testing.

use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Squared segment length below which a segment is treated as a single point.
const DEGENERATE_LEN_SQ: f32 = 1e-8;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f32 {
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    (dx * dx + dy * dy).sqrt()
}

/// Shortest distance from `p` to the closed segment `[a, b]`.
///
/// Projects `p` onto the line through `a` and `b`, clamps the projection
/// parameter to `[0, 1]` and measures to the clamped point. A zero-length
/// segment degenerates to the distance between `a` and `p`.
pub fn point_to_segment_distance(a: Point, b: Point, p: Point) -> f32 {
    let line = (b.0 - a.0, b.1 - a.1);
    let to_point = (p.0 - a.0, p.1 - a.1);
    let len_sq = line.0 * line.0 + line.1 * line.1;

    if len_sq < DEGENERATE_LEN_SQ {
        return distance(a, p);
    }

    let t = ((to_point.0 * line.0 + to_point.1 * line.1) / len_sq).clamp(0.0, 1.0);
    let closest = (a.0 + line.0 * t, a.1 + line.1 * t);
    distance(closest, p)
}

/// Distance from `p` to the segment `[a, b]` using a per-axis clamp.
///
/// Finds the foot of the perpendicular on the infinite line in slope-intercept
/// form (vertical lines handled separately) and then clamps x and y
/// independently to the segment's bounding box. The line is monotone in both
/// axes, so the clamp lands on the same point as [`point_to_segment_distance`].
///
/// The intermediate maths runs in `f64`: for nearly vertical segments the
/// slope and intercept get huge and `f32` loses the foot point entirely.
pub fn axis_clamped_segment_distance(a: Point, b: Point, p: Point) -> f32 {
    let (x1, y1) = (f64::from(a.0), f64::from(a.1));
    let (x2, y2) = (f64::from(b.0), f64::from(b.1));
    let (ox, oy) = (f64::from(p.0), f64::from(p.1));

    let (foot_x, foot_y) = if x2 - x1 == 0.0 {
        (x1, oy)
    } else {
        let slope = (y2 - y1) / (x2 - x1);
        let intercept = y1 - slope * x1;
        let fx = (ox + slope * (oy - intercept)) / (slope * slope + 1.0);
        (fx, slope * fx + intercept)
    };

    let closest_x = foot_x.clamp(x1.min(x2), x1.max(x2));
    let closest_y = foot_y.clamp(y1.min(y2), y1.max(y2));
    ((closest_x - ox).hypot(closest_y - oy)) as f32
}

/// How opponent proximity to a passing line is measured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ProximityModel {
    /// True distance to the segment via clamped parametric projection
    #[default]
    Parametric,
    /// Per-axis bounding-box clamp of the projected point
    AxisClamped,
}

impl ProximityModel {
    /// Distance from `p` to the segment `[a, b]` under this model.
    pub fn distance(self, a: Point, b: Point, p: Point) -> f32 {
        match self {
            ProximityModel::Parametric => point_to_segment_distance(a, b, p),
            ProximityModel::AxisClamped => axis_clamped_segment_distance(a, b, p),
        }
    }

    /// Label shown by the control surface.
    pub fn label(self) -> &'static str {
        match self {
            ProximityModel::Parametric => "Exact segment",
            ProximityModel::AxisClamped => "Axis clamped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn sample_points() -> Vec<Point> {
        vec![
            (0.0, 0.0),
            (100.0, 0.0),
            (50.0, 5.0),
            (-30.0, 40.0),
            (120.0, -80.0),
            (859.0, 503.0),
            (607.0, 525.0),
        ]
    }

    #[test]
    fn distance_is_euclidean() {
        assert!((distance((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < EPS);
        assert_eq!(distance((7.0, 7.0), (7.0, 7.0)), 0.0);
    }

    #[test]
    fn degenerate_segment_is_point_distance() {
        for a in sample_points() {
            for p in sample_points() {
                let d = point_to_segment_distance(a, a, p);
                assert!((d - distance(a, p)).abs() < EPS, "a={a:?} p={p:?}");
                let d = axis_clamped_segment_distance(a, a, p);
                assert!((d - distance(a, p)).abs() < EPS, "a={a:?} p={p:?}");
            }
        }
    }

    #[test]
    fn segment_distance_is_non_negative_and_symmetric() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                for p in &points {
                    let forward = point_to_segment_distance(*a, *b, *p);
                    let backward = point_to_segment_distance(*b, *a, *p);
                    assert!(forward >= 0.0);
                    assert!(forward.is_finite());
                    assert!((forward - backward).abs() < 1e-2, "a={a:?} b={b:?} p={p:?}");
                }
            }
        }
    }

    #[test]
    fn opponent_beside_horizontal_segment() {
        let d = point_to_segment_distance((0.0, 0.0), (100.0, 0.0), (50.0, 5.0));
        assert!((d - 5.0).abs() < EPS);
        let d = axis_clamped_segment_distance((0.0, 0.0), (100.0, 0.0), (50.0, 5.0));
        assert!((d - 5.0).abs() < EPS);
    }

    #[test]
    fn vertical_segment_clamps_to_nearest_endpoint() {
        let a = (10.0, 0.0);
        let b = (10.0, 100.0);
        assert!((point_to_segment_distance(a, b, (13.0, 50.0)) - 3.0).abs() < EPS);
        assert!((point_to_segment_distance(a, b, (10.0, 130.0)) - 30.0).abs() < EPS);
        assert!((axis_clamped_segment_distance(a, b, (10.0, -20.0)) - 20.0).abs() < EPS);
    }

    #[test]
    fn beyond_endpoint_measures_to_endpoint() {
        let d = point_to_segment_distance((0.0, 0.0), (100.0, 0.0), (130.0, 40.0));
        assert!((d - 50.0).abs() < EPS);
    }

    #[test]
    fn axis_clamp_agrees_with_parametric_projection() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                for p in &points {
                    let exact = point_to_segment_distance(*a, *b, *p);
                    let clamped = axis_clamped_segment_distance(*a, *b, *p);
                    assert!((exact - clamped).abs() < 1e-2, "a={a:?} b={b:?} p={p:?}");
                }
            }
        }
    }

    #[test]
    fn axis_clamp_holds_on_nearly_vertical_segments() {
        let a = (800.0, 100.0);
        let p = (805.0, 300.0);
        for dx in [0.01, 0.001, 0.0001] {
            let b = (800.0 + dx, 500.0);
            let exact = point_to_segment_distance(a, b, p);
            let clamped = axis_clamped_segment_distance(a, b, p);
            assert!((exact - 5.0).abs() < 0.01, "dx={dx} exact={exact}");
            assert!((exact - clamped).abs() < 1e-2, "dx={dx} exact={exact} axis={clamped}");
        }
    }

    #[test]
    fn proximity_model_dispatch() {
        let a = (0.0, 0.0);
        let b = (100.0, 0.0);
        let p = (50.0, 5.0);
        assert_eq!(
            ProximityModel::Parametric.distance(a, b, p),
            point_to_segment_distance(a, b, p)
        );
        assert_eq!(
            ProximityModel::AxisClamped.distance(a, b, p),
            axis_clamped_segment_distance(a, b, p)
        );
        assert_eq!(ProximityModel::default(), ProximityModel::Parametric);
    }
}
