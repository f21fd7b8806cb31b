//! Context provided to policy checks.

use crate::core::Step;

/// A proposed forward transition, as seen by policy checks
#[derive(Clone, Debug)]
pub struct TransitionContext<S: Step> {
    pub from: S,
    pub to: S,
    /// History length the flow would have after the transition
    pub depth: usize,
}

impl<S: Step> TransitionContext<S> {
    pub fn new(from: S, to: S, depth: usize) -> Self {
        Self { from, to, depth }
    }

    /// Whether the transition leaves the inactive sentinel.
    pub fn from_inactive(&self) -> bool {
        self.from.is_inactive()
    }
}
