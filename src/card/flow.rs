//! Add-card flow service.

use crate::card::{AddCardStep, CardData};
use crate::core::Snapshot;
use crate::engine::{FlowError, FlowStateEngine, TransitionEvent};
use crate::policy::{PolicyBuilder, TransitionPolicy};
use tokio::sync::{broadcast, watch};

/// Drives the add-card screens.
///
/// Only `CardDetails -> BillingAddress` is a legal forward move, and only
/// once the flow has started. Backing out and ending are always allowed.
///
/// ```rust
/// use backstack::card::{AddCardFlow, AddCardStep, CardData};
///
/// let mut flow = AddCardFlow::new();
/// flow.start();
///
/// let card = CardData::new("Ada Lovelace", "4111111111111111", 1, 2030, "123").unwrap();
/// flow.add_billing_address(card.clone()).unwrap();
/// assert_eq!(flow.current(), AddCardStep::BillingAddress(card));
///
/// flow.back();
/// assert_eq!(flow.current(), AddCardStep::CardDetails);
/// ```
#[derive(Debug)]
pub struct AddCardFlow {
    engine: FlowStateEngine<AddCardStep>,
}

impl AddCardFlow {
    pub fn new() -> Self {
        Self {
            engine: FlowStateEngine::with_policy(AddCardStep::CardDetails, Self::policy()),
        }
    }

    /// Wrap an engine configured elsewhere, e.g. through the builder.
    pub fn with_engine(engine: FlowStateEngine<AddCardStep>) -> Self {
        Self { engine }
    }

    /// Rules enforced by [`AddCardFlow::new`].
    pub fn policy() -> TransitionPolicy<AddCardStep> {
        PolicyBuilder::new()
            .require_active()
            .allow("CardDetails", "BillingAddress")
            .build()
    }

    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Continue from card details to the billing address screen.
    pub fn add_billing_address(&mut self, card: CardData) -> Result<(), FlowError> {
        self.engine.advance(AddCardStep::BillingAddress(card))
    }

    pub fn back(&mut self) {
        self.engine.back();
    }

    pub fn end(&mut self) {
        self.engine.end();
    }

    pub fn current(&self) -> AddCardStep {
        self.engine.current()
    }

    pub fn snapshot(&self) -> Snapshot<AddCardStep> {
        self.engine.snapshot()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TransitionEvent<AddCardStep>> {
        self.engine.subscribe()
    }

    pub fn watch(&self) -> watch::Receiver<Snapshot<AddCardStep>> {
        self.engine.watch()
    }

    pub fn engine(&self) -> &FlowStateEngine<AddCardStep> {
        &self.engine
    }
}

impl Default for AddCardFlow {
    fn default() -> Self {
        Self::new()
    }
}
