//! A generated point sequence viewed as a followable path.

use serde::{Deserialize, Serialize};
use smartcurve_core::{CurveError, Result};
use smartcurve_math::{Aabb3, Point3, Vector3};

use crate::curve::{CatmullRomSpline, Curve, SplineKind};

/// Default look-ahead used when orienting a follower along the path.
pub const LOOK_AHEAD: f64 = 0.01;

/// Piecewise-linear path through generated points, parameterized by
/// progress in `[0, 1]` proportional to travelled distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurvePath {
    points: Vec<Point3>,
    closed: bool,
    /// Distance travelled at each vertex (closed paths add the seam vertex).
    cumulative: Vec<f64>,
}

impl CurvePath {
    pub fn new(points: Vec<Point3>, closed: bool) -> Result<Self> {
        if points.is_empty() {
            return Err(CurveError::TooFewPoints {
                required: 1,
                actual: 0,
            });
        }

        let mut cumulative = Vec::with_capacity(points.len() + 1);
        cumulative.push(0.0);
        let mut total = 0.0;
        for w in points.windows(2) {
            total += w[0].distance(w[1]);
            cumulative.push(total);
        }
        if closed && points.len() > 1 {
            total += points[points.len() - 1].distance(points[0]);
            cumulative.push(total);
        }

        Ok(Self {
            points,
            closed,
            cumulative,
        })
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Total travelled distance, including the closing edge of a closed path.
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn bounds(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.points)
    }

    fn vertex(&self, i: usize) -> Point3 {
        self.points[i % self.points.len()]
    }

    /// Edge index containing distance `d` and the fraction along it.
    fn locate(&self, d: f64) -> (usize, f64) {
        let edges = self.cumulative.len() - 1;
        let upper = self.cumulative.partition_point(|&c| c <= d);
        let edge = upper.saturating_sub(1).min(edges.saturating_sub(1));
        let start = self.cumulative[edge];
        let span = self.cumulative[edge + 1] - start;
        let frac = if span > 0.0 { ((d - start) / span).clamp(0.0, 1.0) } else { 0.0 };
        (edge, frac)
    }

    /// Position at `progress` (clamped to `[0, 1]`).
    pub fn point_at_progress(&self, progress: f64) -> Point3 {
        if self.cumulative.len() < 2 || self.length() <= 0.0 {
            return self.points[0];
        }
        let (edge, frac) = self.locate(progress.clamp(0.0, 1.0) * self.length());
        self.vertex(edge).lerp(self.vertex(edge + 1), frac)
    }

    /// Point a follower at `progress` should face: slightly further along,
    /// never past the end.
    pub fn look_ahead(&self, progress: f64, delta: f64) -> Point3 {
        let p = progress.clamp(0.0, 1.0);
        self.point_at_progress((p + delta).min(1.0))
    }

    /// Interpolating spline through the same points.
    pub fn spline(&self, kind: SplineKind) -> Result<CatmullRomSpline> {
        CatmullRomSpline::new(self.points.clone(), self.closed, kind)
    }
}

impl Curve for CurvePath {
    fn point_at(&self, t: f64) -> Point3 {
        self.point_at_progress(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        if self.cumulative.len() < 2 || self.length() <= 0.0 {
            return Vector3::ZERO;
        }
        let (edge, _) = self.locate(t.clamp(0.0, 1.0) * self.length());
        (self.vertex(edge + 1) - self.vertex(edge)).normalize_or_zero() * self.length()
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use smartcurve_math::dvec3;

    fn square(closed: bool) -> CurvePath {
        CurvePath::new(
            vec![
                dvec3(0.0, 0.0, 0.0),
                dvec3(1.0, 0.0, 0.0),
                dvec3(1.0, 1.0, 0.0),
                dvec3(0.0, 1.0, 0.0),
            ],
            closed,
        )
        .unwrap()
    }

    #[test]
    fn test_length() {
        assert_relative_eq!(square(false).length(), 3.0);
        assert_relative_eq!(square(true).length(), 4.0);
    }

    #[test]
    fn test_progress_by_distance() {
        let path = square(false);
        assert!((path.point_at_progress(0.5) - dvec3(1.0, 0.5, 0.0)).length() < 1e-12);
        assert!((path.point_at_progress(1.0) - dvec3(0.0, 1.0, 0.0)).length() < 1e-12);
        assert!((path.point_at_progress(-3.0) - Point3::ZERO).length() < 1e-12);
    }

    #[test]
    fn test_closed_returns_to_start() {
        let path = square(true);
        assert!((path.point_at_progress(1.0) - Point3::ZERO).length() < 1e-12);
        assert!((path.point_at_progress(0.875) - dvec3(0.0, 0.5, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_look_ahead_clamps() {
        let path = square(false);
        let ahead = path.look_ahead(0.995, LOOK_AHEAD);
        assert!((ahead - dvec3(0.0, 1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_tangent_follows_edge() {
        let path = square(false);
        let t = path.tangent_at(0.1);
        assert!(t.y.abs() < 1e-12 && t.x > 0.0);
    }

    #[test]
    fn test_single_point_path() {
        let path = CurvePath::new(vec![dvec3(2.0, 2.0, 2.0)], false).unwrap();
        assert_eq!(path.point_at_progress(0.7), dvec3(2.0, 2.0, 2.0));
        assert_eq!(path.tangent_at(0.7), Vector3::ZERO);
        assert!(path.spline(SplineKind::default()).is_err());
    }

    #[test]
    fn test_bounds() {
        let b = square(true).bounds().unwrap();
        assert_eq!(b.extents(), dvec3(1.0, 1.0, 0.0));
    }
}
