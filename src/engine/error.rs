//! Engine error types.

use crate::policy::PolicyViolation;
use thiserror::Error;

/// Errors surfaced by flow transitions
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FlowError {
    /// A transition policy refused a forward move. Every broken rule is listed.
    #[error(
        "Transition from '{from}' to '{to}' rejected by policy ({} violation(s))",
        .violations.len()
    )]
    PolicyViolated {
        from: String,
        to: String,
        violations: Vec<PolicyViolation>,
    },
}

impl FlowError {
    /// Violations behind this error.
    pub fn violations(&self) -> &[PolicyViolation] {
        match self {
            Self::PolicyViolated { violations, .. } => violations,
        }
    }
}
