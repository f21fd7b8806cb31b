//! The flow state engine.
//!
//! `FlowStateEngine` owns one snapshot at a time and replaces it on every
//! transition. Observers never run inside the caller's stack frame: the
//! engine publishes through two decoupled channels.
//!
//! - A `watch` cell holding the latest snapshot, replayed to late subscribers
//! - A `broadcast` channel carrying one `TransitionEvent` per transition
//!
//! The engine keeps only the sending halves. Subscribers own their
//! receivers, and dropping the engine closes both channels.

mod error;
mod event;
mod flow;

pub use error::FlowError;
pub use event::TransitionEvent;
pub use flow::{FlowStateEngine, DEFAULT_EVENT_CAPACITY};
