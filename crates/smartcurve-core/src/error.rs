use thiserror::Error;

/// Boxed error returned by caller-supplied functions (e.g. a parametric curve body).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum CurveError {
    #[error("Unregistered curve type: {0}")]
    UnregisteredCurveType(String),

    #[error("Invalid segment count {value}: segments must be a positive integer")]
    InvalidSegmentCount { value: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfigurationShape(String),

    #[error("Too few points: need at least {required}, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error(transparent)]
    Evaluation(BoxError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl CurveError {
    /// Shorthand for an `InvalidConfigurationShape` error.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::InvalidConfigurationShape(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Boom;

    impl std::fmt::Display for Boom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "boom")
        }
    }

    impl std::error::Error for Boom {}

    #[test]
    fn test_evaluation_is_transparent() {
        let err = CurveError::Evaluation(Box::new(Boom));
        assert_eq!(err.to_string(), "boom");
        match err {
            CurveError::Evaluation(inner) => assert!(inner.downcast_ref::<Boom>().is_some()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_segment_message() {
        let err = CurveError::InvalidSegmentCount { value: 2.5 };
        assert!(err.to_string().contains("2.5"));
    }
}
