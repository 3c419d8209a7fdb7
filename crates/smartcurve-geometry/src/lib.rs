//! SmartCurve geometry: parametric curves, Bezier evaluation, and spline smoothing.

pub mod curve;
pub mod nurbs;
pub mod path;
pub mod smooth;

pub use curve::{BezierCurve, CatmullRomSpline, Curve, SplineKind};
pub use path::CurvePath;
pub use smooth::{sample_count, smooth_points, smooth_points_with};
