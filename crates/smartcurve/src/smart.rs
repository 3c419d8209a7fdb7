//! Curve creation: resolve a generator, produce raw points, optionally smooth.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use smartcurve_core::{CurveError, Result};
use smartcurve_geometry::smooth_points;
use smartcurve_math::Point3;

use crate::config::CurveConfig;
use crate::registry::CurveRegistry;

/// Create a curve with the thread-local random source.
pub fn create_smart_curve(registry: &CurveRegistry, config: &CurveConfig) -> Result<Vec<Point3>> {
    create_smart_curve_with_rng(registry, config, &mut rand::rng())
}

/// Create a curve drawing all randomness from `rng`.
///
/// When `smoothness` is set (and is neither zero nor NaN) the raw points are
/// passed through a centripetal Catmull-Rom spline, closed if `closed` is set,
/// and resampled to `max(round(len * smoothness * 10), 20)` points.
pub fn create_smart_curve_with_rng(
    registry: &CurveRegistry,
    config: &CurveConfig,
    rng: &mut dyn RngCore,
) -> Result<Vec<Point3>> {
    let type_id = config.type_id();
    let generator = registry
        .resolve(type_id)
        .ok_or_else(|| CurveError::UnregisteredCurveType(type_id.to_owned()))?;

    let raw = generator.generate(config, rng)?;
    log::debug!("`{type_id}` generated {} raw points", raw.len());

    let base = config.base();
    match base.smoothing() {
        Some(smoothness) => {
            let smoothed = smooth_points(&raw, base.is_closed(), smoothness)?;
            log::debug!("`{type_id}` smoothed to {} points", smoothed.len());
            Ok(smoothed)
        }
        None => Ok(raw),
    }
}

impl CurveRegistry {
    /// See [`create_smart_curve`].
    pub fn create_smart_curve(&self, config: &CurveConfig) -> Result<Vec<Point3>> {
        create_smart_curve(self, config)
    }

    /// See [`create_smart_curve_with_rng`].
    pub fn create_smart_curve_with_rng(
        &self,
        config: &CurveConfig,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Point3>> {
        create_smart_curve_with_rng(self, config, rng)
    }

    /// Create many curves in parallel. Request `i` draws from a generator
    /// seeded with `seed + i`, so the output only depends on `seed` and the
    /// requests, not on scheduling.
    pub fn create_batch(&self, configs: &[CurveConfig], seed: u64) -> Vec<Result<Vec<Point3>>> {
        configs
            .par_iter()
            .enumerate()
            .map(|(i, config)| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                create_smart_curve_with_rng(self, config, &mut rng)
            })
            .collect()
    }
}
