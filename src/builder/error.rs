//! Build errors for flow engines.

use thiserror::Error;

/// Errors that can occur when building a flow engine.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("First step not specified. Call .first(step) before .build()")]
    MissingFirstStep,

    #[error("First step '{0}' is the inactive step; a flow must start somewhere")]
    InactiveFirstStep(String),

    #[error("Event capacity must be greater than zero")]
    ZeroEventCapacity,
}
