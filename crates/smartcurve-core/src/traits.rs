use crate::error::Result;

/// Validate the numeric shape of a configuration or geometric entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
