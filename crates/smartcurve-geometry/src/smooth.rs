//! Resampling raw curve points through an interpolating spline.

use smartcurve_core::{CurveError, Result};
use smartcurve_math::{ensure_finite, Point3, MAX_POINT_COUNT};

use crate::curve::{CatmullRomSpline, SplineKind};

/// Smoothed output never has fewer samples than this.
pub const MIN_SMOOTH_SAMPLES: usize = 20;

/// Samples drawn per raw point at `smoothness == 1`.
pub const SAMPLES_PER_POINT: f64 = 10.0;

/// Largest sample count whose point buffer can be allocated.
pub const MAX_SMOOTH_SAMPLES: usize = MAX_POINT_COUNT;

/// Number of output samples for `raw_len` points at the given smoothness:
/// `max(raw_len * smoothness * 10, 20)`, rounded to the nearest integer.
///
/// Fails when the count is NaN or exceeds [`MAX_SMOOTH_SAMPLES`].
pub fn sample_count(raw_len: usize, smoothness: f64) -> Result<usize> {
    let wanted = (raw_len as f64 * smoothness * SAMPLES_PER_POINT).round();
    if wanted <= MIN_SMOOTH_SAMPLES as f64 {
        return Ok(MIN_SMOOTH_SAMPLES);
    }
    if wanted.is_nan() || wanted > MAX_SMOOTH_SAMPLES as f64 {
        return Err(CurveError::shape(format!(
            "smoothness {smoothness} asks for {wanted:e} samples, more than {MAX_SMOOTH_SAMPLES}"
        )));
    }
    Ok(wanted as usize)
}

/// Fit a centripetal Catmull-Rom spline through `points` and resample it.
///
/// Requires at least two points. Open input keeps its first and last point;
/// closed input wraps and is sampled without repeating the seam.
pub fn smooth_points(points: &[Point3], closed: bool, smoothness: f64) -> Result<Vec<Point3>> {
    smooth_points_with(points, closed, smoothness, SplineKind::default())
}

/// [`smooth_points`] with an explicit spline parameterization.
pub fn smooth_points_with(
    points: &[Point3],
    closed: bool,
    smoothness: f64,
    kind: SplineKind,
) -> Result<Vec<Point3>> {
    ensure_finite("smoothness", smoothness)?;
    if points.len() < 2 {
        return Err(CurveError::TooFewPoints {
            required: 2,
            actual: points.len(),
        });
    }

    let count = sample_count(points.len(), smoothness)?;
    log::trace!(
        "smoothing {} raw points into {} samples (closed: {})",
        points.len(),
        count,
        closed
    );

    let spline = CatmullRomSpline::new(points.to_vec(), closed, kind)?;
    Ok(spline.resample(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcurve_math::dvec3;

    #[test]
    fn test_density_floor() {
        assert_eq!(sample_count(2, 1.0).unwrap(), 20);
        assert_eq!(sample_count(3, 1.0).unwrap(), 30);
        assert_eq!(sample_count(7, 0.1).unwrap(), 20);
        assert_eq!(sample_count(4, -2.0).unwrap(), 20);
        assert_eq!(sample_count(5, 2.5).unwrap(), 125);
        assert_eq!(sample_count(3, f64::MIN).unwrap(), 20);
    }

    #[test]
    fn test_unallocatable_factor_is_an_error() {
        assert!(matches!(
            sample_count(11, 1e300),
            Err(CurveError::InvalidConfigurationShape(_))
        ));
        let raw = vec![Point3::ZERO, Point3::X];
        assert!(matches!(
            smooth_points(&raw, false, 1e300),
            Err(CurveError::InvalidConfigurationShape(_))
        ));
    }

    #[test]
    fn test_smooth_open_keeps_ends() {
        let raw = vec![dvec3(0.0, 0.0, 0.0), dvec3(1.0, 1.0, 0.0), dvec3(2.0, 0.0, 0.0)];
        let out = smooth_points(&raw, false, 1.0).unwrap();
        assert_eq!(out.len(), 30);
        assert!((out[0] - raw[0]).length() < 1e-9);
        assert!((out[29] - raw[2]).length() < 1e-9);
    }

    #[test]
    fn test_smooth_rejects_short_input() {
        assert!(matches!(
            smooth_points(&[Point3::ZERO], false, 1.0),
            Err(CurveError::TooFewPoints { required: 2, actual: 1 })
        ));
        assert!(matches!(
            smooth_points(&[], true, 1.0),
            Err(CurveError::TooFewPoints { actual: 0, .. })
        ));
    }

    #[test]
    fn test_smooth_rejects_nan_factor() {
        let raw = vec![Point3::ZERO, Point3::X];
        assert!(matches!(
            smooth_points(&raw, false, f64::NAN),
            Err(CurveError::InvalidConfigurationShape(_))
        ));
    }

    #[test]
    fn test_uniform_kind() {
        let raw = vec![Point3::ZERO, Point3::X, dvec3(2.0, 1.0, 0.0)];
        let out = smooth_points_with(&raw, false, 1.0, SplineKind::uniform()).unwrap();
        assert_eq!(out.len(), 30);
        assert!(out.iter().all(|p| p.is_finite()));
    }
}
