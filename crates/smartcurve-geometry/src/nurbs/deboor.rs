//! De Boor evaluation of non-rational B-spline curves.

use smartcurve_math::{Point3, Vector3};

use super::knot::{basis_functions, find_span};

/// Evaluate a B-spline curve point at parameter `t`.
pub fn curve_point(degree: usize, knots: &[f64], control_points: &[Point3], t: f64) -> Point3 {
    let n = control_points.len() - 1;
    let span = find_span(degree, knots, n, t);
    let basis = basis_functions(degree, knots, span, t);

    basis
        .iter()
        .zip(&control_points[span - degree..=span])
        .fold(Point3::ZERO, |acc, (&b, &cp)| acc + b * cp)
}

/// Control points of the first derivative of a Bezier curve.
///
/// For a Bezier of degree `p`, the derivative is a Bezier of degree `p - 1`
/// with control points `p * (P[i + 1] - P[i])`.
pub fn hodograph(control_points: &[Point3]) -> Vec<Vector3> {
    let degree = control_points.len().saturating_sub(1) as f64;
    control_points
        .windows(2)
        .map(|w| degree * (w[1] - w[0]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nurbs::clamped_knots;
    use smartcurve_math::dvec3;

    #[test]
    fn test_curve_point_linear() {
        let knots = vec![0.0, 0.0, 1.0, 2.0, 2.0];
        let cps = vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 0.0, 0.0), dvec3(1.0, 1.0, 0.0)];

        let p = curve_point(1, &knots, &cps, 0.5);
        assert!((p - dvec3(0.5, 0.0, 0.0)).length() < 1e-10);

        let p = curve_point(1, &knots, &cps, 1.5);
        assert!((p - dvec3(1.0, 0.5, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_quadratic_bezier_midpoint() {
        let cps = vec![dvec3(0.0, 0.0, 0.0), dvec3(0.5, 1.0, 0.0), dvec3(1.0, 0.0, 0.0)];
        let knots = clamped_knots(2, 3);
        let p = curve_point(2, &knots, &cps, 0.5);
        assert!((p - dvec3(0.5, 0.5, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_hodograph_of_line() {
        let d = hodograph(&[dvec3(0.0, 0.0, 0.0), dvec3(2.0, 0.0, 0.0)]);
        assert_eq!(d, vec![dvec3(2.0, 0.0, 0.0)]);
    }
}
