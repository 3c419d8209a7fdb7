//! Closed-form trigonometric figures in the XY plane.

use std::f64::consts::{FRAC_PI_2, TAU};

use rand::RngCore;
use smartcurve_core::Result;
use smartcurve_math::Point3;

use super::fractions;
use crate::config::{LissajousConfig, RoseConfig, SuperformulaConfig};

/// `r(φ) = (|cos(mφ/4)/scale|^n2 + |sin(mφ/4)/scale|^n3)^(-1/n1)`
pub fn superformula(config: &SuperformulaConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let m = config.m.unwrap_or(3.0);
    let n1 = config.n1.unwrap_or(1.0);
    let n2 = config.n2.unwrap_or(1.0);
    let n3 = config.n3.unwrap_or(1.0);
    let scale = config.scale.unwrap_or(1.0);
    let segments = config.base.segments_or(100)?;

    Ok(fractions(segments)
        .map(|(_, u)| {
            let phi = u * TAU;
            let k = m * phi / 4.0;
            let r = ((k.cos() / scale).abs().powf(n2) + (k.sin() / scale).abs().powf(n3))
                .powf(-1.0 / n1);
            Point3::new(r * phi.cos(), r * phi.sin(), 0.0)
        })
        .collect())
}

pub fn lissajous(config: &LissajousConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let a = config.a.unwrap_or(3.0);
    let b = config.b.unwrap_or(2.0);
    let delta = config.delta.unwrap_or(FRAC_PI_2);
    let size = config.size.unwrap_or(10.0);
    let segments = config.base.segments_or(100)?;

    Ok(fractions(segments)
        .map(|(_, u)| {
            let t = u * TAU;
            Point3::new(size * (a * t + delta).sin(), size * (b * t).sin(), 0.0)
        })
        .collect())
}

pub fn rose(config: &RoseConfig, _rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
    let petals = config.petals.unwrap_or(4.0);
    let length = config.length.unwrap_or(5.0);
    let segments = config.base.segments_or(100)?;

    Ok(fractions(segments)
        .map(|(_, u)| {
            let theta = u * TAU;
            let r = length * (petals * theta).cos();
            Point3::new(r * theta.cos(), r * theta.sin(), 0.0)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn test_superformula_unit_defaults() {
        // m = 3, all exponents 1: r(0) = (1 + 0)^-1 = 1
        let points = superformula(&SuperformulaConfig::default(), &mut rng()).unwrap();
        assert_eq!(points.len(), 100);
        assert_abs_diff_eq!(points[0].x, 1.0, epsilon = 1e-12);
        assert!(points.iter().all(|p| p.z == 0.0 && p.is_finite()));
    }

    #[test]
    fn test_superformula_circle() {
        // m = 0 collapses to a circle of radius scale^(n2/n1)
        let config = SuperformulaConfig {
            m: Some(0.0),
            scale: Some(2.0),
            ..Default::default()
        };
        for p in superformula(&config, &mut rng()).unwrap() {
            assert_abs_diff_eq!(p.length(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_lissajous_bounds() {
        let points = lissajous(&LissajousConfig::default(), &mut rng()).unwrap();
        assert_abs_diff_eq!(points[0].x, 10.0, epsilon = 1e-12);
        assert!(points.iter().all(|p| p.x.abs() <= 10.0 && p.y.abs() <= 10.0));
    }

    #[test]
    fn test_rose_starts_at_tip() {
        let points = rose(&RoseConfig::default(), &mut rng()).unwrap();
        assert_eq!(points.len(), 100);
        assert_abs_diff_eq!(points[0].x, 5.0);
        assert!(points.iter().all(|p| p.length() <= 5.0 + 1e-12));
    }
}
