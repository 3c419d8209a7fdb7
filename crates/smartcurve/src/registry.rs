//! Mapping from curve type ids to generators.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rand::RngCore;
use smartcurve_core::Result;
use smartcurve_math::Point3;

use crate::config::CurveConfig;
use crate::generators;

/// Turns a curve request into raw points.
///
/// Implemented for any `Fn(&CurveConfig, &mut dyn RngCore) -> Result<Vec<Point3>>`,
/// so plain closures can be registered directly. Generators that need
/// randomness must draw it from `rng` only.
pub trait CurveGenerator: Send + Sync {
    fn generate(&self, config: &CurveConfig, rng: &mut dyn RngCore) -> Result<Vec<Point3>>;
}

impl<F> CurveGenerator for F
where
    F: Fn(&CurveConfig, &mut dyn RngCore) -> Result<Vec<Point3>> + Send + Sync,
{
    fn generate(&self, config: &CurveConfig, rng: &mut dyn RngCore) -> Result<Vec<Point3>> {
        self(config, rng)
    }
}

/// Owned table of curve generators, one per type id.
///
/// Registration takes `&mut self` and generation `&self`, so a registry that
/// is shared across threads is read-only for as long as it is shared.
/// `Default` is [`CurveRegistry::with_builtins`].
#[derive(Clone)]
pub struct CurveRegistry {
    generators: HashMap<String, Arc<dyn CurveGenerator>>,
}

impl CurveRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// A registry holding the 18 built-in archetypes.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        generators::register_builtins(&mut registry);
        registry
    }

    /// Insert or replace the generator for `type_id`. The last registration wins.
    pub fn register<G>(&mut self, type_id: impl Into<String>, generator: G)
    where
        G: CurveGenerator + 'static,
    {
        let type_id = type_id.into();
        if self.generators.contains_key(&type_id) {
            log::debug!("overriding curve generator `{type_id}`");
        } else {
            log::debug!("registering curve generator `{type_id}`");
        }
        self.generators.insert(type_id, Arc::new(generator));
    }

    pub fn resolve(&self, type_id: &str) -> Option<Arc<dyn CurveGenerator>> {
        self.generators.get(type_id).cloned()
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.generators.contains_key(type_id)
    }

    /// Registered type ids, sorted.
    pub fn type_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for CurveRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveRegistry")
            .field("types", &self.type_ids())
            .finish()
    }
}
