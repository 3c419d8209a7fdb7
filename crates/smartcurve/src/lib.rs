//! SmartCurve: registry-driven parametric curve generation.
//!
//! A [`CurveConfig`] names an archetype by type id and carries its
//! parameters. A [`CurveRegistry`] maps type ids to [`CurveGenerator`]s;
//! [`create_smart_curve`] resolves the generator, produces the raw points
//! and optionally smooths them through a Catmull-Rom spline.
//!
//! ```no_run
//! use smartcurve::{CurveConfig, CurveRegistry};
//!
//! let registry = CurveRegistry::with_builtins();
//! let config = CurveConfig::from_json(r#"{"type": "helix", "turns": 2, "smoothness": 1}"#)?;
//! let points = registry.create_smart_curve(&config)?;
//! assert!(points.len() >= 20);
//! # Ok::<(), smartcurve::CurveError>(())
//! ```

pub mod config;
pub mod generators;
pub mod registry;
pub mod smart;

pub use config::{BuiltinConfig, CurveBase, CurveConfig, CustomConfig, ParametricFn};
pub use registry::{CurveGenerator, CurveRegistry};
pub use smart::{create_smart_curve, create_smart_curve_with_rng};

pub use smartcurve_core::{BoxError, CurveError, Result, Tolerance, Validate};
pub use smartcurve_geometry::{
    smooth_points, smooth_points_with, BezierCurve, CatmullRomSpline, Curve, CurvePath, SplineKind,
};
pub use smartcurve_math::{Aabb3, Axis, PlaneSelector, Point3, Vector3, Vector3Like};
