//! Policy violations and handling strategies.

use thiserror::Error;

/// Reasons a transition policy rejects a forward transition
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PolicyViolation {
    #[error("No edge from '{from}' to '{to}' is allowed")]
    EdgeNotAllowed { from: String, to: String },

    #[error("Guard rejected entering '{to}' from '{from}'")]
    GuardRejected { from: String, to: String },

    #[error("Maximum depth ({max}) exceeded (depth: {depth})")]
    MaxDepthExceeded { max: usize, depth: usize },

    #[error("Cannot move to '{to}' while the flow is inactive; start it first")]
    FlowInactive { to: String },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Strategy for handling policy violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationStrategy {
    /// Refuse the transition and report every violation
    #[default]
    Reject,

    /// Apply the transition anyway but log a warning
    IgnoreAndLog,
}
