//! Catmull-Rom interpolating spline through a sequence of control points.

use serde::{Deserialize, Serialize};
use smartcurve_core::{CurveError, Result, Tolerance};
use smartcurve_math::{Point3, Vector3};

use super::Curve;

/// Knot parameterization of a Catmull-Rom spline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SplineKind {
    /// Knot intervals grow with the square root of chord length. Avoids cusps
    /// and self-intersections within a segment.
    #[default]
    Centripetal,
    /// Knot intervals grow with chord length.
    Chordal,
    /// Uniform knots with the given tension (0.5 is the classic spline).
    #[serde(rename = "catmullrom")]
    CatmullRom { tension: f64 },
}

impl SplineKind {
    pub const DEFAULT_TENSION: f64 = 0.5;

    pub fn uniform() -> Self {
        SplineKind::CatmullRom {
            tension: Self::DEFAULT_TENSION,
        }
    }
}

/// Cubic `c0 + c1 w + c2 w^2 + c3 w^3` in Hermite form.
#[derive(Debug, Clone, Copy)]
struct CubicPoly {
    c0: Vector3,
    c1: Vector3,
    c2: Vector3,
    c3: Vector3,
}

impl CubicPoly {
    fn hermite(x0: Point3, x1: Point3, t0: Vector3, t1: Vector3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn eval(&self, w: f64) -> Point3 {
        self.c0 + w * (self.c1 + w * (self.c2 + w * self.c3))
    }

    fn derivative(&self, w: f64) -> Vector3 {
        self.c1 + w * (2.0 * self.c2 + 3.0 * w * self.c3)
    }
}

/// An interpolating spline over `[0, 1]` passing through every control point.
///
/// Open splines run from the first to the last point; the missing outer
/// neighbours are reflected (`2 P0 - P1`). Closed splines wrap around and
/// return to the first point at `t = 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatmullRomSpline {
    points: Vec<Point3>,
    closed: bool,
    kind: SplineKind,
    tolerance: Tolerance,
}

impl CatmullRomSpline {
    pub fn new(points: Vec<Point3>, closed: bool, kind: SplineKind) -> Result<Self> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints {
                required: 2,
                actual: points.len(),
            });
        }
        Ok(Self {
            points,
            closed,
            kind,
            tolerance: Tolerance::default(),
        })
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.points
    }

    pub fn kind(&self) -> SplineKind {
        self.kind
    }

    /// Number of cubic pieces spanning the domain.
    fn piece_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Locate the piece containing `t` and return it with the local weight.
    fn piece_at(&self, t: f64) -> (CubicPoly, f64) {
        let n = self.points.len();
        let scaled = self.piece_count() as f64 * t.clamp(0.0, 1.0);
        let mut index = scaled.floor() as usize;
        let mut weight = scaled - index as f64;

        if !self.closed && index >= n - 1 {
            index = n - 2;
            weight = 1.0;
        }

        let at = |i: usize| self.points[i % n];
        let p1 = at(index);
        let p2 = at(index + 1);
        let p0 = if self.closed {
            at(index + n - 1)
        } else if index > 0 {
            self.points[index - 1]
        } else {
            2.0 * self.points[0] - self.points[1]
        };
        let p3 = if self.closed || index + 2 < n {
            at(index + 2)
        } else {
            2.0 * self.points[n - 1] - self.points[n - 2]
        };

        (self.fit(p0, p1, p2, p3), weight)
    }

    fn fit(&self, p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> CubicPoly {
        let exponent = match self.kind {
            SplineKind::CatmullRom { tension } => {
                return CubicPoly::hermite(p1, p2, tension * (p2 - p0), tension * (p3 - p1));
            }
            SplineKind::Centripetal => 0.25,
            SplineKind::Chordal => 0.5,
        };

        let mut dt0 = p0.distance_squared(p1).powf(exponent);
        let mut dt1 = p1.distance_squared(p2).powf(exponent);
        let mut dt2 = p2.distance_squared(p3).powf(exponent);

        if self.tolerance.is_degenerate_interval(dt1) {
            dt1 = 1.0;
        }
        if self.tolerance.is_degenerate_interval(dt0) {
            dt0 = dt1;
        }
        if self.tolerance.is_degenerate_interval(dt2) {
            dt2 = dt1;
        }

        // Non-uniform tangents, rescaled to the [p1, p2] interval.
        let t1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let t2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;
        CubicPoly::hermite(p1, p2, t1, t2)
    }

    /// Sample `count` points at evenly spaced parameters.
    ///
    /// Open splines include both ends (`t = k / (count - 1)`); closed splines
    /// stop one step short of the seam (`t = k / count`).
    pub fn resample(&self, count: usize) -> Vec<Point3> {
        if count == 0 {
            return Vec::new();
        }
        let divisions = if self.closed {
            count as f64
        } else {
            (count - 1).max(1) as f64
        };
        (0..count)
            .map(|k| self.point_at(k as f64 / divisions))
            .collect()
    }
}

impl Curve for CatmullRomSpline {
    fn point_at(&self, t: f64) -> Point3 {
        let (poly, w) = self.piece_at(t);
        poly.eval(w)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let (poly, w) = self.piece_at(t);
        poly.derivative(w) * self.piece_count() as f64
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
    use approx::assert_abs_diff_eq;
    use smartcurve_math::dvec3;

    fn zigzag() -> Vec<Point3> {
        vec![
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 2.0, 0.0),
            dvec3(3.0, -1.0, 1.0),
            dvec3(4.0, 0.5, 0.0),
        ]
    }

    #[test]
    fn test_passes_through_control_points() {
        for kind in [SplineKind::Centripetal, SplineKind::Chordal, SplineKind::uniform()] {
            let spline = CatmullRomSpline::new(zigzag(), false, kind).unwrap();
            for (i, cp) in zigzag().iter().enumerate() {
                let p = spline.point_at(i as f64 / 3.0);
                assert!((p - *cp).length() < 1e-9, "{kind:?} missed point {i}: {p}");
            }
        }
    }

    #[test]
    fn test_two_points_is_a_line() {
        let spline =
            CatmullRomSpline::new(vec![Point3::ZERO, dvec3(2.0, 0.0, 0.0)], false, SplineKind::default())
                .unwrap();
        let p = spline.point_at(0.25);
        assert_abs_diff_eq!(p.x, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_closed_wraps_to_start() {
        let spline = CatmullRomSpline::new(zigzag(), true, SplineKind::Centripetal).unwrap();
        assert!(spline.is_closed());
        assert!((spline.point_at(1.0) - zigzag()[0]).length() < 1e-9);
        assert!((spline.point_at(0.25) - zigzag()[1]).length() < 1e-9);
    }

    #[test]
    fn test_open_resample_keeps_endpoints() {
        let spline = CatmullRomSpline::new(zigzag(), false, SplineKind::Centripetal).unwrap();
        let pts = spline.resample(40);
        assert_eq!(pts.len(), 40);
        assert!((pts[0] - zigzag()[0]).length() < 1e-9);
        assert!((pts[39] - zigzag()[3]).length() < 1e-9);
    }

    #[test]
    fn test_closed_resample_skips_seam() {
        let spline = CatmullRomSpline::new(zigzag(), true, SplineKind::Centripetal).unwrap();
        let pts = spline.resample(20);
        assert_eq!(pts.len(), 20);
        assert!((pts[19] - pts[0]).length() > 1e-3);
    }

    #[test]
    fn test_repeated_points_stay_finite() {
        let pts = vec![Point3::ZERO, Point3::ZERO, Point3::X, Point3::X];
        let spline = CatmullRomSpline::new(pts, false, SplineKind::Centripetal).unwrap();
        for p in spline.resample(25) {
            assert!(p.is_finite(), "non-finite sample {p}");
        }
    }

    #[test]
    fn test_tangent_matches_finite_difference() {
        let spline = CatmullRomSpline::new(zigzag(), false, SplineKind::Chordal).unwrap();
        let h = 1e-6;
        let t = 0.4;
        let numeric = (spline.point_at(t + h) - spline.point_at(t - h)) / (2.0 * h);
        assert!((numeric - spline.tangent_at(t)).length() < 1e-4);
    }

    #[test]
    fn test_rejects_single_point() {
        assert!(matches!(
            CatmullRomSpline::new(vec![Point3::ZERO], false, SplineKind::default()),
            Err(CurveError::TooFewPoints { required: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_kind_serde_names() {
        let kind: SplineKind = serde_json::from_str(r#"{"kind":"catmullrom","tension":0.3}"#).unwrap();
        assert_eq!(kind, SplineKind::CatmullRom { tension: 0.3 });
        let kind: SplineKind = serde_json::from_str(r#"{"kind":"chordal"}"#).unwrap();
        assert_eq!(kind, SplineKind::Chordal);
    }

    #[test]
    fn test_default_kind_is_centripetal() {
        assert_eq!(SplineKind::default(), SplineKind::Centripetal);
    }

    #[test]
    fn test_coarse_tolerance_falls_back_to_uniform() {
        // every interval of the zigzag is under 10, so all knots collapse to
        // unit spacing
        let coarse = CatmullRomSpline::new(zigzag(), false, SplineKind::Centripetal)
            .unwrap()
            .with_tolerance(Tolerance::new(10.0));
        let uniform = CatmullRomSpline::new(zigzag(), false, SplineKind::uniform()).unwrap();
        for (a, b) in coarse.resample(30).iter().zip(uniform.resample(30)) {
            assert!((*a - b).length() < 1e-12, "{a} != {b}");
        }
    }
}
