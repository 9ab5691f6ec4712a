//! Error surface. Generation itself is total; only construction and the
//! config boundary can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    /// The unrolled cascade needs at least one component floor plus the
    /// container floor.
    #[error("base level {0} is too small, the unrolled cascade needs at least 2 levels")]
    BaseLevelTooSmall(usize),

    #[error("invalid component config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
