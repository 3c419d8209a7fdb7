//! Wire outlines of solids. These are connected point paths, not meshes.

use std::f64::consts::TAU;

use rand::RngCore;
use smartcurve_core::Result;
use smartcurve_math::{point_total, validate_segments, Point3};

use super::fractions;
use crate::config::{CubeConfig, CylinderConfig, TorusConfig};

/// Front square, back square, then the three edges still missing.
pub fn cube(config: &CubeConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let h = config.size.unwrap_or(5.0) / 2.0;
    let c = config.center.unwrap_or(Point3::ZERO);

    let corners = [
        // front
        (-h, -h, h),
        (h, -h, h),
        (h, h, h),
        (-h, h, h),
        (-h, -h, h),
        // back
        (-h, -h, -h),
        (h, -h, -h),
        (h, h, -h),
        (-h, h, -h),
        (-h, -h, -h),
        // connections
        (h, -h, -h),
        (h, h, -h),
        (-h, h, -h),
        (-h, -h, -h),
    ];
    Ok(corners
        .into_iter()
        .map(|(x, y, z)| c + Point3::new(x, y, z))
        .collect())
}

/// Bottom ring, top ring, then the first point of each ring.
pub fn cylinder(config: &CylinderConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let radius = config.radius.unwrap_or(3.0);
    let half = config.height.unwrap_or(10.0) / 2.0;
    let segments = config.base.segments_or(32)?;

    let ring = |y: f64| {
        fractions(segments).map(move |(_, u)| {
            let angle = u * TAU;
            Point3::new(angle.cos() * radius, y, angle.sin() * radius)
        })
    };

    let mut points = Vec::with_capacity(point_total(&[segments, 2], 2)?);
    points.extend(ring(-half));
    points.extend(ring(half));
    points.push(points[0]);
    points.push(points[segments]);
    Ok(points)
}

/// `majorSegments` rings of `minorSegments` points around a y-up torus.
pub fn torus(config: &TorusConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let major_radius = config.major_radius.unwrap_or(5.0);
    let minor_radius = config.minor_radius.unwrap_or(2.0);
    let major = validate_segments(config.major_segments.unwrap_or(32.0))?;
    let minor = validate_segments(config.minor_segments.unwrap_or(16.0))?;

    let mut points = Vec::with_capacity(point_total(&[major, minor], 0)?);
    for (_, u) in fractions(major) {
        let (sin_major, cos_major) = (u * TAU).sin_cos();
        for (_, v) in fractions(minor) {
            let (sin_minor, cos_minor) = (v * TAU).sin_cos();
            let reach = major_radius + cos_minor * minor_radius;
            points.push(Point3::new(
                cos_major * reach,
                sin_minor * minor_radius,
                sin_major * reach,
            ));
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use smartcurve_core::CurveError;
    use smartcurve_math::Aabb3;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn test_cube_outline() {
        let config = CubeConfig {
            size: Some(2.0),
            center: Some(Point3::new(1.0, 0.0, 0.0)),
            ..Default::default()
        };
        let points = cube(&config, &mut rng()).unwrap();
        assert_eq!(points.len(), 14);
        let bounds = Aabb3::from_points(&points).unwrap();
        assert_eq!(bounds.extents(), Point3::splat(2.0));
        assert_eq!(bounds.center(), Point3::new(1.0, 0.0, 0.0));
        // consecutive points share an edge
        for w in points.windows(2) {
            assert_abs_diff_eq!(w[0].distance(w[1]), 2.0);
        }
    }

    #[test]
    fn test_cylinder_layout() {
        let config = CylinderConfig {
            base: crate::config::CurveBase {
                segments: Some(8.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let points = cylinder(&config, &mut rng()).unwrap();
        assert_eq!(points.len(), 18);
        assert_eq!(points[16], points[0]);
        assert_eq!(points[17], points[8]);
        assert!(points[..8].iter().all(|p| p.y == -5.0));
        assert!(points[8..16].iter().all(|p| p.y == 5.0));
    }

    #[test]
    fn test_torus_on_surface() {
        let points = torus(&TorusConfig::default(), &mut rng()).unwrap();
        assert_eq!(points.len(), 32 * 16);
        for p in &points {
            // distance from the tube's center circle equals the minor radius
            let ring = p.x.hypot(p.z) - 5.0;
            assert_abs_diff_eq!(ring.hypot(p.y), 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_torus_validates_both_counts() {
        let config = TorusConfig {
            major_segments: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            torus(&config, &mut rng()),
            Err(CurveError::InvalidSegmentCount { .. })
        ));
    }

    #[test]
    fn test_oversized_counts_are_rejected() {
        let torus_config = TorusConfig {
            major_segments: Some(1e10),
            minor_segments: Some(1e10),
            ..Default::default()
        };
        assert!(matches!(
            torus(&torus_config, &mut rng()),
            Err(CurveError::InvalidSegmentCount { .. })
        ));

        let cylinder_config = CylinderConfig {
            base: crate::config::CurveBase {
                segments: Some(2e17),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            cylinder(&cylinder_config, &mut rng()),
            Err(CurveError::InvalidSegmentCount { .. })
        ));
    }
}
