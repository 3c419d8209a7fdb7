//! Field structs of the built-in archetypes.
//!
//! Every field is optional; generators fill in the defaults listed on each
//! struct. `Validate` rejects non-finite scalars up front so generated
//! coordinates stay finite.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smartcurve_core::{BoxError, CurveError, Result, Validate};
use smartcurve_math::vec3::{deserialize_point, deserialize_points};
use smartcurve_math::{ensure_finite, validate_segments, Axis, PlaneSelector, Point3};

use super::CurveBase;

fn finite_fields(fields: &[(&str, Option<f64>)]) -> Result<()> {
    for &(name, value) in fields {
        if let Some(value) = value {
            ensure_finite(name, value)?;
        }
    }
    Ok(())
}

fn finite_point(name: &str, point: Option<Point3>) -> Result<()> {
    match point {
        Some(p) if !p.is_finite() => Err(CurveError::shape(format!("`{name}` must be finite, got {p}"))),
        _ => Ok(()),
    }
}

fn finite_points(name: &str, points: Option<&[Point3]>) -> Result<()> {
    points
        .unwrap_or_default()
        .iter()
        .try_for_each(|&p| finite_point(name, Some(p)))
}

fn count(value: Option<f64>) -> Result<()> {
    value.map(validate_segments).transpose().map(|_| ())
}

/// Straight line from `start` to `end`, optionally jittered.
///
/// Defaults: start (0,0,0), end (0,0,-10), segments 10, noise 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, deserialize_with = "deserialize_point", skip_serializing_if = "Option::is_none")]
    pub start: Option<Point3>,
    #[serde(default, deserialize_with = "deserialize_point", skip_serializing_if = "Option::is_none")]
    pub end: Option<Point3>,
    /// Maximum random displacement of interior points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise: Option<f64>,
}

impl Validate for LinearConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_point("start", self.start)?;
        finite_point("end", self.end)?;
        finite_fields(&[("noise", self.noise)])
    }
}

/// Sine wave oscillating along `axis` while advancing along -y (or -z).
///
/// Defaults: axis x, amplitude 2, frequency 2, length 20, segments 30, phase 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SineConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl Validate for SineConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_fields(&[
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("phase", self.phase),
            ("length", self.length),
        ])
    }
}

/// Spiral around `axis`, rising from -height/2 to height/2.
///
/// Defaults: axis y, radius 3, height 10, turns 3, segments 50, clockwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiralConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clockwise: Option<bool>,
}

impl Validate for SpiralConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_fields(&[("radius", self.radius), ("height", self.height), ("turns", self.turns)])
    }
}

/// Gielis superformula in the XY plane.
///
/// Defaults: m 3, n1 1, n2 1, n3 1, scale 1, segments 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperformulaConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl Validate for SuperformulaConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_fields(&[
            ("m", self.m),
            ("n1", self.n1),
            ("n2", self.n2),
            ("n3", self.n3),
            ("scale", self.scale),
        ])?;
        if self.n1 == Some(0.0) {
            return Err(CurveError::shape("`n1` must be non-zero"));
        }
        if self.scale == Some(0.0) {
            return Err(CurveError::shape("`scale` must be non-zero"));
        }
        Ok(())
    }
}

/// Circular arc in one of the coordinate planes.
///
/// Defaults: center origin, radius 5, startAngle 0, endAngle 2π, segments 32, plane xy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, deserialize_with = "deserialize_point", skip_serializing_if = "Option::is_none")]
    pub center: Option<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane: Option<PlaneSelector>,
}

impl Validate for ArcConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_point("center", self.center)?;
        finite_fields(&[
            ("radius", self.radius),
            ("startAngle", self.start_angle),
            ("endAngle", self.end_angle),
        ])
    }
}

/// Bezier curve through explicit control points (at least four).
///
/// Defaults: points (0,0,0) (5,5,0) (10,0,0) (15,5,0), segments 50.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BezierConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, deserialize_with = "deserialize_points", skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point3>>,
}

impl Validate for BezierConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_points("points", self.points.as_deref())
    }
}

/// Axis-aligned ellipse, optionally rotated, in one of the coordinate planes.
///
/// Defaults: center origin, xRadius 5, yRadius 3, rotation 0, segments 40, plane xy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EllipseConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, deserialize_with = "deserialize_point", skip_serializing_if = "Option::is_none")]
    pub center: Option<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane: Option<PlaneSelector>,
}

impl Validate for EllipseConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_point("center", self.center)?;
        finite_fields(&[
            ("xRadius", self.x_radius),
            ("yRadius", self.y_radius),
            ("rotation", self.rotation),
        ])
    }
}

/// Regular polygon vertices.
///
/// Defaults: sides 5, radius 5, center origin, rotation 0, plane xy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sides: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_point", skip_serializing_if = "Option::is_none")]
    pub center: Option<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane: Option<PlaneSelector>,
}

impl Validate for PolygonConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        count(self.sides)?;
        finite_point("center", self.center)?;
        finite_fields(&[("radius", self.radius), ("rotation", self.rotation)])
    }
}

/// Star outline alternating outer and inner vertices.
///
/// Defaults: points 5, innerRadius 3, outerRadius 5, center origin, rotation 0, plane xy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    /// Number of star tips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_radius: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_point", skip_serializing_if = "Option::is_none")]
    pub center: Option<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane: Option<PlaneSelector>,
}

impl Validate for StarConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        count(self.points)?;
        finite_point("center", self.center)?;
        finite_fields(&[
            ("innerRadius", self.inner_radius),
            ("outerRadius", self.outer_radius),
            ("rotation", self.rotation),
        ])
    }
}

/// Y-up helix.
///
/// Defaults: radius 2, height 10, turns 5, segments 50, clockwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelixConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turns: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clockwise: Option<bool>,
}

impl Validate for HelixConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_fields(&[("radius", self.radius), ("height", self.height), ("turns", self.turns)])
    }
}

/// Caller-supplied curve body, `t -> point`.
pub type ParametricFn = Arc<dyn Fn(f64) -> std::result::Result<Point3, BoxError> + Send + Sync>;

/// Curve traced by a caller-supplied function over `range`.
///
/// Defaults: function `t -> (t, t, t)`, range [0, 1], segments 50. The
/// function cannot be serialized; a deserialized request uses the default.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametricConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(skip)]
    pub function: Option<ParametricFn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<(f64, f64)>,
}

impl ParametricConfig {
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(f64) -> std::result::Result<Point3, BoxError> + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
            ..Self::default()
        }
    }
}

impl fmt::Debug for ParametricConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricConfig")
            .field("base", &self.base)
            .field("function", &self.function.as_ref().map(|_| "<fn>"))
            .field("range", &self.range)
            .finish()
    }
}

impl Validate for ParametricConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        if let Some((start, end)) = self.range {
            finite_fields(&[("range.0", Some(start)), ("range.1", Some(end))])?;
        }
        Ok(())
    }
}

/// Lissajous figure in the XY plane.
///
/// Defaults: a 3, b 2, delta π/2, size 10, segments 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LissajousConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Validate for LissajousConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_fields(&[("a", self.a), ("b", self.b), ("delta", self.delta), ("size", self.size)])
    }
}

/// Explicit vertices, passed through as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, deserialize_with = "deserialize_points", skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point3>>,
}

impl Validate for PolylineConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_points("points", self.points.as_deref())
    }
}

/// Closed rectangle outline in one of the coordinate planes.
///
/// Defaults: width 10, height 5, center origin, plane xy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_point", skip_serializing_if = "Option::is_none")]
    pub center: Option<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plane: Option<PlaneSelector>,
}

impl Validate for RectangleConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_point("center", self.center)?;
        finite_fields(&[("width", self.width), ("height", self.height)])
    }
}

/// Wireframe outline of an axis-aligned cube.
///
/// Defaults: size 5, center origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_point", skip_serializing_if = "Option::is_none")]
    pub center: Option<Point3>,
}

impl Validate for CubeConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_point("center", self.center)?;
        finite_fields(&[("size", self.size)])
    }
}

/// Two y-stacked rings joined by a connecting edge.
///
/// Defaults: radius 3, height 10, segments 32.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CylinderConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Validate for CylinderConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_fields(&[("radius", self.radius), ("height", self.height)])
    }
}

/// Points covering a y-up torus surface, ring by ring.
///
/// Defaults: majorRadius 5, minorRadius 2, majorSegments 32, minorSegments 16.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TorusConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_segments: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor_segments: Option<f64>,
}

impl Validate for TorusConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        count(self.major_segments)?;
        count(self.minor_segments)?;
        finite_fields(&[("majorRadius", self.major_radius), ("minorRadius", self.minor_radius)])
    }
}

/// Rhodonea curve `r = length * cos(petals * θ)` in the XY plane.
///
/// Defaults: petals 4, length 5, segments 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoseConfig {
    #[serde(flatten)]
    pub base: CurveBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petals: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

impl Validate for RoseConfig {
    fn validate(&self) -> Result<()> {
        self.base.check_segments()?;
        finite_fields(&[("petals", self.petals), ("length", self.length)])
    }
}
