//! Builder for configuring flow engines.

use crate::builder::error::BuildError;
use crate::core::Step;
use crate::engine::{FlowStateEngine, DEFAULT_EVENT_CAPACITY};
use crate::policy::TransitionPolicy;

/// Builder for constructing flow engines with a fluent API.
///
/// ```rust
/// use backstack::builder::FlowEngineBuilder;
/// use backstack::policy::PolicyBuilder;
/// use backstack::step_enum;
///
/// step_enum! {
///     enum Checkout {
///         Cart,
///         Payment,
///         Inactive,
///     }
///     inactive: Inactive
/// }
///
/// let engine = FlowEngineBuilder::new()
///     .first(Checkout::Cart)
///     .policy(PolicyBuilder::new().allow("Cart", "Payment").build())
///     .event_capacity(32)
///     .build()
///     .unwrap();
///
/// assert!(!engine.is_active());
/// ```
pub struct FlowEngineBuilder<S: Step> {
    first: Option<S>,
    policy: Option<TransitionPolicy<S>>,
    event_capacity: usize,
}

impl<S: Step> FlowEngineBuilder<S> {
    pub fn new() -> Self {
        Self {
            first: None,
            policy: None,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Set the step `start()` moves to (required).
    pub fn first(mut self, step: S) -> Self {
        self.first = Some(step);
        self
    }

    /// Attach a transition policy (optional).
    pub fn policy(mut self, policy: TransitionPolicy<S>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Events buffered per subscriber before it starts lagging.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Build the engine, in the inactive snapshot.
    pub fn build(self) -> Result<FlowStateEngine<S>, BuildError> {
        let first = self.first.ok_or(BuildError::MissingFirstStep)?;

        if first.is_inactive() {
            return Err(BuildError::InactiveFirstStep(first.name().to_string()));
        }

        if self.event_capacity == 0 {
            return Err(BuildError::ZeroEventCapacity);
        }

        Ok(FlowStateEngine::from_parts(
            first,
            self.policy,
            self.event_capacity,
        ))
    }
}

impl<S: Step> Default for FlowEngineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
