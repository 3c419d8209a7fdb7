//! Shared numeric validation for curve parameters.

use smartcurve_core::{CurveError, Result};

use crate::Point3;

/// Largest number of points a single output buffer can hold.
pub const MAX_POINT_COUNT: usize = isize::MAX as usize / std::mem::size_of::<Point3>();

/// Check that `value` is a positive integer count and return it as `usize`.
///
/// Used for segment counts and any other count-like parameter (polygon sides,
/// star points, torus ring counts). Counts must leave room for one closing
/// point within [`MAX_POINT_COUNT`].
pub fn validate_segments(value: f64) -> Result<usize> {
    if !value.is_finite() || value.fract() != 0.0 || value <= 0.0 || value >= MAX_POINT_COUNT as f64 {
        return Err(CurveError::InvalidSegmentCount { value });
    }
    Ok(value as usize)
}

/// Total of `factors` multiplied together plus `extra`, checked against
/// [`MAX_POINT_COUNT`].
pub fn point_total(factors: &[usize], extra: usize) -> Result<usize> {
    factors
        .iter()
        .try_fold(1usize, |acc, &f| acc.checked_mul(f))
        .and_then(|n| n.checked_add(extra))
        .filter(|&n| n <= MAX_POINT_COUNT)
        .ok_or_else(|| CurveError::InvalidSegmentCount {
            value: factors.iter().map(|&f| f as f64).product::<f64>() + extra as f64,
        })
}

/// Reject NaN and infinite scalar parameters by name.
pub fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CurveError::shape(format!("`{name}` must be finite, got {value}")))
    }
}
