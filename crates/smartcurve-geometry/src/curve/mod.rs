//! Curve traits and implementations.

mod bezier;
mod catmull_rom;

use smartcurve_math::{Point3, Vector3};

pub use bezier::BezierCurve;
pub use catmull_rom::{CatmullRomSpline, SplineKind};

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }

    /// Sample `count + 1` points at evenly spaced parameters across the domain,
    /// both ends included.
    fn sample_points(&self, count: usize) -> Vec<Point3> {
        let (t_min, t_max) = self.domain();
        let divisions = count.max(1) as f64;
        (0..=count.max(1))
            .map(|i| self.point_at(t_min + (t_max - t_min) * i as f64 / divisions))
            .collect()
    }
}
