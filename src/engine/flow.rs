//! Linear flow engine with navigable history.

use crate::core::{Action, Snapshot, Step};
use crate::engine::error::FlowError;
use crate::engine::event::TransitionEvent;
use crate::policy::{PolicyViolation, TransitionContext, TransitionPolicy, ViolationStrategy};
use chrono::Utc;
use std::fmt;
use stillwater::validation::Validation;
use tokio::sync::{broadcast, watch};
use uuid::Uuid;

/// Buffered events per subscriber before slow receivers start lagging
pub const DEFAULT_EVENT_CAPACITY: usize = 16;

/// Sequences the steps of one flow and broadcasts every transition.
///
/// Mutating operations take `&mut self`: all calls must come from the
/// single context that owns the engine. No locks are taken internally.
///
/// # Example
///
/// ```rust
/// use backstack::core::{Action, Step};
/// use backstack::engine::FlowStateEngine;
/// use backstack::step_enum;
///
/// step_enum! {
///     enum Signup {
///         Email,
///         Password,
///         Inactive,
///     }
///     inactive: Inactive
/// }
///
/// let mut engine = FlowStateEngine::new(Signup::Email);
/// let mut events = engine.subscribe();
///
/// engine.start();
/// engine.advance(Signup::Password).unwrap();
/// engine.back();
///
/// assert_eq!(engine.current(), Signup::Email);
/// assert_eq!(events.try_recv().unwrap().action, Action::next(Signup::Email));
/// assert_eq!(events.try_recv().unwrap().action, Action::next(Signup::Password));
/// assert_eq!(events.try_recv().unwrap().action, Action::Previous);
/// ```
pub struct FlowStateEngine<S: Step> {
    id: Uuid,
    first: S,
    snapshot: watch::Sender<Snapshot<S>>,
    events: broadcast::Sender<TransitionEvent<S>>,
    policy: Option<TransitionPolicy<S>>,
}

impl<S: Step> FlowStateEngine<S> {
    /// Create an inactive engine whose flow begins at `first`.
    ///
    /// `first` must not be the inactive step. Unlike
    /// [`FlowEngineBuilder::build`](crate::builder::FlowEngineBuilder::build),
    /// this only checks that in debug builds.
    pub fn new(first: S) -> Self {
        Self::from_parts(first, None, DEFAULT_EVENT_CAPACITY)
    }

    /// Create an inactive engine that checks forward moves against `policy`.
    ///
    /// Same precondition on `first` as [`FlowStateEngine::new`].
    pub fn with_policy(first: S, policy: TransitionPolicy<S>) -> Self {
        Self::from_parts(first, Some(policy), DEFAULT_EVENT_CAPACITY)
    }

    /// `event_capacity` must be non-zero; the builder validates it.
    pub(crate) fn from_parts(
        first: S,
        policy: Option<TransitionPolicy<S>>,
        event_capacity: usize,
    ) -> Self {
        debug_assert!(!first.is_inactive(), "first step must not be inactive");
        let (snapshot, _) = watch::channel(Snapshot::inactive());
        let (events, _) = broadcast::channel(event_capacity);
        Self {
            id: Uuid::new_v4(),
            first,
            snapshot,
            events,
            policy,
        }
    }

    /// Begin the flow at its first step, discarding any prior history.
    pub fn start(&mut self) {
        let snapshot = Snapshot::started(self.first.clone());
        self.apply(Action::next(self.first.clone()), snapshot);
    }

    /// Push the current step onto history and move to `step`.
    ///
    /// Fails only when an attached policy rejects the move, in which case
    /// nothing is applied or published.
    ///
    /// A bare engine accepts moves from any step, including `Inactive`
    /// after `end()`. Only a policy built with
    /// [`require_active`](crate::policy::PolicyBuilder::require_active)
    /// forces a fresh `start()` before the flow can move forward again.
    pub fn advance(&mut self, step: S) -> Result<(), FlowError> {
        let (from, next) = {
            let held = self.snapshot.borrow();
            (held.current().clone(), held.appending(step.clone()))
        };

        self.check_policy(&from, &step, next.depth())?;
        self.apply(Action::next(step), next);
        Ok(())
    }

    /// Return to the previous step. The step being left is discarded.
    ///
    /// With no history the flow stays on the inactive snapshot.
    pub fn back(&mut self) {
        let next = self.snapshot.borrow().removing_last();
        self.apply(Action::Previous, next);
    }

    /// Move to the inactive step. Subscribers observe this as `Next`.
    ///
    /// Policies do not apply: a flow can always be abandoned.
    pub fn end(&mut self) {
        let next = self.snapshot.borrow().appending(S::inactive());
        self.apply(Action::next(S::inactive()), next);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first(&self) -> &S {
        &self.first
    }

    pub fn policy(&self) -> Option<&TransitionPolicy<S>> {
        self.policy.as_ref()
    }

    /// Copy of the held snapshot.
    pub fn snapshot(&self) -> Snapshot<S> {
        self.snapshot.borrow().clone()
    }

    pub fn current(&self) -> S {
        self.snapshot.borrow().current().clone()
    }

    pub fn is_active(&self) -> bool {
        self.snapshot.borrow().is_active()
    }

    /// Watch the latest snapshot. The receiver sees the current value
    /// immediately, however late it subscribes.
    pub fn watch(&self) -> watch::Receiver<Snapshot<S>> {
        self.snapshot.subscribe()
    }

    /// Receive one event per transition applied after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<TransitionEvent<S>> {
        self.events.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    fn check_policy(&self, from: &S, to: &S, depth: usize) -> Result<(), FlowError> {
        let Some(policy) = &self.policy else {
            return Ok(());
        };

        let context = TransitionContext::new(from.clone(), to.clone(), depth);
        let Validation::Failure(errors) = policy.enforce(&context) else {
            return Ok(());
        };

        let violations: Vec<PolicyViolation> = errors.iter().cloned().collect();
        match policy.violation_strategy() {
            ViolationStrategy::Reject => {
                tracing::debug!(
                    flow_id = %self.id,
                    from = from.name(),
                    to = to.name(),
                    violations = violations.len(),
                    "transition rejected by policy"
                );
                Err(FlowError::PolicyViolated {
                    from: from.name().to_string(),
                    to: to.name().to_string(),
                    violations,
                })
            }
            ViolationStrategy::IgnoreAndLog => {
                for violation in &violations {
                    tracing::warn!(
                        flow_id = %self.id,
                        from = from.name(),
                        to = to.name(),
                        "ignoring policy violation: {violation}"
                    );
                }
                Ok(())
            }
        }
    }

    /// Replace the held snapshot, then publish the action.
    fn apply(&mut self, action: Action<S>, snapshot: Snapshot<S>) {
        let event = TransitionEvent {
            flow_id: self.id,
            action,
            current: snapshot.current().clone(),
            depth: snapshot.depth(),
            timestamp: Utc::now(),
        };

        tracing::debug!(
            flow_id = %self.id,
            action = event.action.label(),
            step = event.current.name(),
            depth = event.depth,
            "flow transition applied"
        );

        self.snapshot.send_replace(snapshot);

        // Zero subscribers is normal; the event is simply dropped
        if self.events.send(event).is_err() {
            tracing::trace!(flow_id = %self.id, "no transition subscribers");
        }
    }
}

impl<S: Step> fmt::Debug for FlowStateEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowStateEngine")
            .field("id", &self.id)
            .field("first", &self.first.name())
            .field("current", &self.snapshot.borrow().current().name())
            .field("has_policy", &self.policy.is_some())
            .finish()
    }
}
