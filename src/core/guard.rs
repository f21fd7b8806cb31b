//! Guard predicates over flow steps.
//!
//! Guards are pure boolean functions over a step value. Policies attach
//! them to edges to decide whether a target step, payload included, may be
//! entered.

use super::step::Step;
use std::fmt;
use std::sync::Arc;

/// Pure predicate over a step.
///
/// # Example
///
/// ```rust
/// use backstack::core::{Guard, Step};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum OrderStep {
///     Cart,
///     Shipping { items: usize },
///     Inactive,
/// }
///
/// impl Step for OrderStep {
///     fn name(&self) -> &str {
///         match self {
///             Self::Cart => "Cart",
///             Self::Shipping { .. } => "Shipping",
///             Self::Inactive => "Inactive",
///         }
///     }
///
///     fn inactive() -> Self {
///         Self::Inactive
///     }
/// }
///
/// let non_empty_cart = Guard::new(|s: &OrderStep| {
///     matches!(s, OrderStep::Shipping { items } if *items > 0)
/// });
///
/// assert!(non_empty_cart.check(&OrderStep::Shipping { items: 2 }));
/// assert!(!non_empty_cart.check(&OrderStep::Shipping { items: 0 }));
/// ```
pub struct Guard<S: Step> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: Step> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard accepts this step.
    pub fn check(&self, step: &S) -> bool {
        (self.predicate)(step)
    }
}

impl<S: Step> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: Step> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
