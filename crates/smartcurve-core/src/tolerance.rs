/// Tolerances used when degenerating sampled geometry.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Below this knot interval a spline segment is treated as degenerate.
    pub interval: f64,
}

impl Tolerance {
    pub const DEFAULT_INTERVAL: f64 = 1e-4;

    pub fn new(interval: f64) -> Self {
        Self { interval }
    }

    /// Whether a knot interval is too short to divide by.
    pub fn is_degenerate_interval(self, dt: f64) -> bool {
        dt < self.interval
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        let tol = Tolerance::default();
        assert!(tol.is_degenerate_interval(5e-5));
        assert!(!tol.is_degenerate_interval(1e-3));
    }

    #[test]
    fn test_custom_interval() {
        let tol = Tolerance::new(0.5);
        assert!(tol.is_degenerate_interval(0.25));
        assert!(!tol.is_degenerate_interval(0.5));
    }
}
