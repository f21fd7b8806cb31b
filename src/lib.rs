//! Backstack: a linear flow state engine with navigable history
//!
//! Backstack models a multi-step, wizard-like flow as an immutable
//! snapshot: the current step plus every step visited before it. Forward
//! moves push, back moves pop, and every transition is broadcast to
//! whatever presentation layer is listening.
//!
//! # Core Concepts
//!
//! - **Step**: One stage of a flow, optionally carrying data collected so far
//! - **Snapshot**: Immutable pair of current step and ordered history
//! - **Action**: `Next { to }` or `Previous`, consumed by subscribers
//! - **Engine**: Holds one snapshot and publishes each transition
//! - **Policy**: Optional rules restricting which forward moves are legal
//!
//! # Example
//!
//! ```rust
//! use backstack::core::{Action, Step};
//! use backstack::engine::FlowStateEngine;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! enum TransferStep {
//!     Amount,
//!     Confirm { amount: u64 },
//!     Inactive,
//! }
//!
//! impl Step for TransferStep {
//!     fn name(&self) -> &str {
//!         match self {
//!             Self::Amount => "Amount",
//!             Self::Confirm { .. } => "Confirm",
//!             Self::Inactive => "Inactive",
//!         }
//!     }
//!
//!     fn inactive() -> Self {
//!         Self::Inactive
//!     }
//! }
//!
//! let mut engine = FlowStateEngine::new(TransferStep::Amount);
//! let mut events = engine.subscribe();
//!
//! engine.start();
//! engine.advance(TransferStep::Confirm { amount: 250 }).unwrap();
//! engine.end();
//!
//! let snapshot = engine.snapshot();
//! assert_eq!(snapshot.current(), &TransferStep::Inactive);
//! assert_eq!(snapshot.depth(), 3);
//!
//! let last = std::iter::from_fn(|| events.try_recv().ok()).last().unwrap();
//! assert_eq!(last.action, Action::next(TransferStep::Inactive));
//! ```

pub mod builder;
pub mod card;
pub mod core;
pub mod engine;
pub mod policy;

// Re-export commonly used types
pub use builder::{BuildError, FlowEngineBuilder};
pub use self::core::{Action, Guard, Snapshot, Step};
pub use engine::{FlowError, FlowStateEngine, TransitionEvent};
pub use policy::{PolicyBuilder, TransitionPolicy};
