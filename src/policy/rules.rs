//! Transition policy rules using Validation.

use crate::core::{Guard, Step};
use crate::policy::context::TransitionContext;
use crate::policy::violations::{PolicyViolation, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for validation check functions
pub type ValidationCheck<S> = Box<
    dyn Fn(&TransitionContext<S>) -> Validation<(), NonEmptyVec<PolicyViolation>> + Send + Sync,
>;

/// A permitted move between two named steps.
#[derive(Clone, Debug)]
pub struct Edge<S: Step> {
    pub from: String,
    pub to: String,
    pub guard: Option<Guard<S>>,
}

impl<S: Step> Edge<S> {
    fn matches(&self, context: &TransitionContext<S>) -> bool {
        self.from == context.from.name() && self.to == context.to.name()
    }

    fn accepts(&self, step: &S) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(step))
    }
}

/// Rules a flow must satisfy on every forward transition.
/// Uses Validation to accumulate ALL violations.
pub struct TransitionPolicy<S: Step> {
    pub(crate) edges: Vec<Edge<S>>,
    pub(crate) max_depth: Option<usize>,
    pub(crate) require_active: bool,
    pub(crate) required_checks: Vec<ValidationCheck<S>>,
    pub(crate) on_violation: ViolationStrategy,
}

impl<S: Step> TransitionPolicy<S> {
    /// Enforce all rules, accumulating ALL violations.
    pub fn enforce(
        &self,
        context: &TransitionContext<S>,
    ) -> Validation<(), NonEmptyVec<PolicyViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<PolicyViolation>>> = Vec::new();

        if self.require_active {
            let check = if context.from_inactive() {
                Validation::fail(PolicyViolation::FlowInactive {
                    to: context.to.name().to_string(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if let Some(max) = self.max_depth {
            let check = if context.depth > max {
                Validation::fail(PolicyViolation::MaxDepthExceeded {
                    max,
                    depth: context.depth,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        // An empty edge list means every move is allowed
        if !self.edges.is_empty() {
            checks.push(self.check_edges(context));
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }

        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }

    fn check_edges(
        &self,
        context: &TransitionContext<S>,
    ) -> Validation<(), NonEmptyVec<PolicyViolation>> {
        let mut matching = self.edges.iter().filter(|e| e.matches(context)).peekable();

        if matching.peek().is_none() {
            return Validation::fail(PolicyViolation::EdgeNotAllowed {
                from: context.from.name().to_string(),
                to: context.to.name().to_string(),
            });
        }

        if matching.any(|e| e.accepts(&context.to)) {
            Validation::success(())
        } else {
            Validation::fail(PolicyViolation::GuardRejected {
                from: context.from.name().to_string(),
                to: context.to.name().to_string(),
            })
        }
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }

    pub fn edges(&self) -> &[Edge<S>] {
        &self.edges
    }
}
