//! Builder API for creating transition policies.

use crate::core::{Guard, Step};
use crate::policy::context::TransitionContext;
use crate::policy::rules::{Edge, TransitionPolicy, ValidationCheck};
use crate::policy::violations::{PolicyViolation, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating transition policies
pub struct PolicyBuilder<S: Step> {
    edges: Vec<Edge<S>>,
    max_depth: Option<usize>,
    require_active: bool,
    required_checks: Vec<ValidationCheck<S>>,
    on_violation: ViolationStrategy,
}

impl<S: Step> PolicyBuilder<S> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            max_depth: None,
            require_active: false,
            required_checks: Vec::new(),
            on_violation: ViolationStrategy::Reject,
        }
    }

    /// Permit moving from the step named `from` to the step named `to`.
    ///
    /// Once any edge is declared, undeclared moves are violations.
    pub fn allow(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push(Edge {
            from: from.into(),
            to: to.into(),
            guard: None,
        });
        self
    }

    /// Permit a move only when `predicate` accepts the target step.
    pub fn allow_when<F>(mut self, from: impl Into<String>, to: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.edges.push(Edge {
            from: from.into(),
            to: to.into(),
            guard: Some(Guard::new(predicate)),
        });
        self
    }

    /// Cap the history length a flow may reach
    pub fn max_depth(mut self, n: usize) -> Self {
        self.max_depth = Some(n);
        self
    }

    /// Reject forward moves while the flow is inactive
    pub fn require_active(mut self) -> Self {
        self.require_active = true;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&TransitionContext<S>) -> Validation<(), NonEmptyVec<PolicyViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&TransitionContext<S>) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &TransitionContext<S>| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(PolicyViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    pub fn build(self) -> TransitionPolicy<S> {
        TransitionPolicy {
            edges: self.edges,
            max_depth: self.max_depth,
            require_active: self.require_active,
            required_checks: self.required_checks,
            on_violation: self.on_violation,
        }
    }
}

impl<S: Step> Default for PolicyBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
