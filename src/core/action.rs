//! Transition actions consumed by presentation layers.

use super::step::Step;
use serde::{Deserialize, Serialize};

/// Outward signal describing a transition.
///
/// `Next` tells a subscriber to push a screen for `to`; `Previous` tells it
/// to pop its own navigation stack. Ending a flow is `Next` to the inactive
/// step, so completion is observed like any forward move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Action<S: Step> {
    /// Move forward to a step
    Next { to: S },

    /// Return to the previous step
    Previous,
}

impl<S: Step> Action<S> {
    pub fn next(to: S) -> Self {
        Self::Next { to }
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Next { .. })
    }

    /// The step pushed by a forward action.
    pub fn target(&self) -> Option<&S> {
        match self {
            Self::Next { to } => Some(to),
            Self::Previous => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Next { .. } => "next",
            Self::Previous => "previous",
        }
    }
}
