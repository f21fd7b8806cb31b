//! Events published to subscribers after each transition.

use crate::core::{Action, Step};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An applied transition: the action plus the step it left the flow on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionEvent<S: Step> {
    /// Engine instance that produced the event
    pub flow_id: Uuid,
    pub action: Action<S>,
    /// Current step after the transition
    pub current: S,
    /// History length after the transition
    pub depth: usize,
    pub timestamp: DateTime<Utc>,
}

impl<S: Step> TransitionEvent<S> {
    /// Whether this event ended the flow.
    pub fn is_end(&self) -> bool {
        self.action.is_forward() && self.current.is_inactive()
    }
}
