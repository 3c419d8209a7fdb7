//! The built-in curve archetypes.
//!
//! Each generator is a pure function of its archetype's field struct. The
//! [`Builtin`] adapter extracts and validates that struct from a
//! [`CurveConfig`] before calling it and rejects non-finite output after.

mod lines;
mod outlines;
mod planar;
mod polar;
mod sweeps;

use rand::RngCore;
use smartcurve_core::{CurveError, Result, Validate};
use smartcurve_math::{PlaneSelector, Point3};

use crate::config::{BuiltinConfig, CurveConfig};
use crate::registry::{CurveGenerator, CurveRegistry};

pub use lines::{bezier, linear, parametric, polyline, sine};
pub use outlines::{cube, cylinder, torus};
pub use planar::{arc, ellipse, polygon, rectangle, star};
pub use polar::{lissajous, rose, superformula};
pub use sweeps::{helix, spiral};

/// Generator body for one built-in archetype.
pub type BuiltinFn<T> = fn(&T, &mut dyn RngCore) -> Result<Vec<Point3>>;

/// Adapts a typed generator body to the [`CurveGenerator`] interface.
pub struct Builtin<T> {
    body: BuiltinFn<T>,
}

impl<T> Builtin<T> {
    pub fn new(body: BuiltinFn<T>) -> Self {
        Self { body }
    }
}

impl<T> CurveGenerator for Builtin<T>
where
    T: BuiltinConfig + Validate,
{
    fn generate(&self, config: &CurveConfig, rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
        let fields = T::extract(config)?;
        fields.validate()?;

        let points = (self.body)(&fields, rng)?;
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(CurveError::shape(format!(
                "`{}` parameters produce a non-finite point {bad}",
                T::TYPE_ID
            )));
        }
        Ok(points)
    }
}

fn add<T>(registry: &mut CurveRegistry, body: BuiltinFn<T>)
where
    T: BuiltinConfig + Validate + 'static,
{
    registry.register(T::TYPE_ID, Builtin::new(body));
}

/// Register all 18 built-in archetypes under their default type ids.
pub fn register_builtins(registry: &mut CurveRegistry) {
    add(registry, linear);
    add(registry, sine);
    add(registry, spiral);
    add(registry, superformula);
    add(registry, arc);
    add(registry, bezier);
    add(registry, ellipse);
    add(registry, polygon);
    add(registry, star);
    add(registry, helix);
    add(registry, parametric);
    add(registry, lissajous);
    add(registry, polyline);
    add(registry, rectangle);
    add(registry, cube);
    add(registry, cylinder);
    add(registry, torus);
    add(registry, rose);
}

/// Place the 2D offset `(u, v)` around `center` in `plane`. The out-of-plane
/// component keeps the center's value.
pub(crate) fn in_plane(center: Point3, plane: PlaneSelector, u: f64, v: f64) -> Point3 {
    let (a, b) = plane.axes();
    let mut p = center;
    p[a] += u;
    p[b] += v;
    p
}

/// Evenly spaced fractions `i / count` for `i` in `0..count`.
pub(crate) fn fractions(count: usize) -> impl Iterator<Item = (usize, f64)> {
    (0..count).map(move |i| (i, i as f64 / count as f64))
}
