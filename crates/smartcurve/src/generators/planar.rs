//! Flat shapes drawn in one of the coordinate planes around a center.

use std::f64::consts::TAU;

use rand::RngCore;
use smartcurve_core::Result;
use smartcurve_math::{point_total, validate_segments, Point3};

use super::{fractions, in_plane};
use crate::config::{ArcConfig, EllipseConfig, PolygonConfig, RectangleConfig, StarConfig};

pub fn arc(config: &ArcConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let center = config.center.unwrap_or(Point3::ZERO);
    let radius = config.radius.unwrap_or(5.0);
    let start = config.start_angle.unwrap_or(0.0);
    let end = config.end_angle.unwrap_or(TAU);
    let plane = config.plane.unwrap_or_default();
    let segments = config.base.segments_or(32)?;

    Ok(fractions(segments)
        .map(|(_, u)| {
            let angle = start + u * (end - start);
            in_plane(center, plane, angle.cos() * radius, angle.sin() * radius)
        })
        .collect())
}

pub fn ellipse(config: &EllipseConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let center = config.center.unwrap_or(Point3::ZERO);
    let x_radius = config.x_radius.unwrap_or(5.0);
    let y_radius = config.y_radius.unwrap_or(3.0);
    let rotation = config.rotation.unwrap_or(0.0);
    let plane = config.plane.unwrap_or_default();
    let segments = config.base.segments_or(40)?;

    Ok(fractions(segments)
        .map(|(_, u)| {
            let angle = u * TAU + rotation;
            in_plane(center, plane, angle.cos() * x_radius, angle.sin() * y_radius)
        })
        .collect())
}

pub fn polygon(config: &PolygonConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let sides = validate_segments(config.sides.unwrap_or(5.0))?;
    let radius = config.radius.unwrap_or(5.0);
    let center = config.center.unwrap_or(Point3::ZERO);
    let rotation = config.rotation.unwrap_or(0.0);
    let plane = config.plane.unwrap_or_default();

    Ok(fractions(sides)
        .map(|(_, u)| {
            let angle = u * TAU + rotation;
            in_plane(center, plane, angle.cos() * radius, angle.sin() * radius)
        })
        .collect())
}

/// `2 * points` vertices, outer radius on even indices.
pub fn star(config: &StarConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let tips = validate_segments(config.points.unwrap_or(5.0))?;
    let vertices = point_total(&[tips, 2], 0)?;
    let inner = config.inner_radius.unwrap_or(3.0);
    let outer = config.outer_radius.unwrap_or(5.0);
    let center = config.center.unwrap_or(Point3::ZERO);
    let rotation = config.rotation.unwrap_or(0.0);
    let plane = config.plane.unwrap_or_default();

    Ok(fractions(vertices)
        .map(|(i, u)| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = u * TAU + rotation;
            in_plane(center, plane, angle.cos() * radius, angle.sin() * radius)
        })
        .collect())
}

/// Closed outline: four corners counter-clockwise from bottom-left, then the
/// first corner again.
pub fn rectangle(config: &RectangleConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let half_w = config.width.unwrap_or(10.0) / 2.0;
    let half_h = config.height.unwrap_or(5.0) / 2.0;
    let center = config.center.unwrap_or(Point3::ZERO);
    let plane = config.plane.unwrap_or_default();

    Ok([
        (-half_w, -half_h),
        (half_w, -half_h),
        (half_w, half_h),
        (-half_w, half_h),
        (-half_w, -half_h),
    ]
    .into_iter()
    .map(|(u, v)| in_plane(center, plane, u, v))
    .collect())
}
