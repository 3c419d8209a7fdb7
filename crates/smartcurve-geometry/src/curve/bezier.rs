//! Single-span Bezier curve of arbitrary degree.

use serde::{Deserialize, Serialize};
use smartcurve_core::{CurveError, Result};
use smartcurve_math::{Point3, Vector3};

use super::Curve;
use crate::nurbs::{clamped_knots, curve_point, hodograph};

/// A Bezier curve through `control_points`, parameterized over `[0, 1]`.
///
/// Degree is `control_points.len() - 1`. Evaluated as a clamped B-spline
/// whose knot vector has no interior knots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BezierCurve {
    control_points: Vec<Point3>,
    knots: Vec<f64>,
    derivative: Vec<Vector3>,
    derivative_knots: Vec<f64>,
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point3>) -> Result<Self> {
        if control_points.len() < 2 {
            return Err(CurveError::TooFewPoints {
                required: 2,
                actual: control_points.len(),
            });
        }
        let degree = control_points.len() - 1;
        let derivative = hodograph(&control_points);
        Ok(Self {
            knots: clamped_knots(degree, control_points.len()),
            derivative_knots: clamped_knots(degree - 1, derivative.len()),
            derivative,
            control_points,
        })
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }
}

impl Curve for BezierCurve {
    fn point_at(&self, t: f64) -> Point3 {
        curve_point(self.degree(), &self.knots, &self.control_points, t.clamp(0.0, 1.0))
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        curve_point(
            self.degree() - 1,
            &self.derivative_knots,
            &self.derivative,
            t.clamp(0.0, 1.0),
        )
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}
