//! Open paths: straight lines, waves, explicit points, and caller functions.

use std::f64::consts::TAU;

use rand::{Rng, RngCore};
use smartcurve_core::{CurveError, Result};
use smartcurve_geometry::{BezierCurve, Curve};
use smartcurve_math::{Axis, Point3, Vector3};

use super::fractions;
use crate::config::{BezierConfig, LinearConfig, ParametricConfig, PolylineConfig, SineConfig};

/// `segments + 1` points from `start` to `end`. Interior points are pushed by
/// up to `noise * t * (1 - t)` per component, so both ends stay exact.
pub fn linear(config: &LinearConfig, rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let start = config.start.unwrap_or(Point3::ZERO);
    let end = config.end.unwrap_or(Point3::new(0.0, 0.0, -10.0));
    let segments = config.base.segments_or(10)?;
    let noise = config.noise.unwrap_or(0.0);

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let mut p = start.lerp(end, t);
        if noise != 0.0 {
            let jitter = Vector3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            );
            p += jitter * (noise * t * (1.0 - t));
        }
        points.push(p);
    }
    Ok(points)
}

pub fn sine(config: &SineConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let axis = config.axis.unwrap_or(Axis::X);
    let amplitude = config.amplitude.unwrap_or(2.0);
    let frequency = config.frequency.unwrap_or(2.0);
    let length = config.length.unwrap_or(20.0);
    let phase = config.phase.unwrap_or(0.0);
    let segments = config.base.segments_or(30)?;

    // Travels along -y, or along -z for a z-axis wave (which then overrides
    // the oscillation on that axis).
    let forward = if axis == Axis::Z { 2 } else { 1 };
    let step = length / segments as f64;

    Ok(fractions(segments)
        .map(|(i, u)| {
            let mut p = Point3::ZERO;
            p[axis.index()] = (u * TAU * frequency + phase).sin() * amplitude;
            p[forward] = -(i as f64) * step;
            p
        })
        .collect())
}

pub fn polyline(config: &PolylineConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    match config.points.as_deref() {
        Some(points) if !points.is_empty() => Ok(points.to_vec()),
        _ => Err(CurveError::shape("polyline needs at least one point")),
    }
}

/// Minimum control points accepted by the `bezier` archetype.
pub const BEZIER_MIN_POINTS: usize = 4;

/// `segments + 1` samples of the Bezier curve through the control points.
pub fn bezier(config: &BezierConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let segments = config.base.segments_or(50)?;
    let control_points = config.points.clone().unwrap_or_else(|| {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(5.0, 5.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(15.0, 5.0, 0.0),
        ]
    });
    if control_points.len() < BEZIER_MIN_POINTS {
        return Err(CurveError::shape(format!(
            "bezier needs at least {BEZIER_MIN_POINTS} control points, got {}",
            control_points.len()
        )));
    }

    Ok(BezierCurve::new(control_points)?.sample_points(segments))
}

/// `segments` evaluations of the caller's function across `range`, end
/// excluded. Errors from the function are returned as they are.
pub fn parametric(config: &ParametricConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let (from, to) = config.range.unwrap_or((0.0, 1.0));
    let segments = config.base.segments_or(50)?;

    fractions(segments)
        .map(|(_, u)| {
            let t = from + u * (to - from);
            match &config.function {
                Some(f) => f(t).map_err(CurveError::Evaluation),
                None => Ok(Point3::splat(t)),
            }
        })
        .collect()
}
