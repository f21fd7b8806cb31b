//! Core flow types and logic.
//!
//! This module contains the pure data model of a linear flow:
//! - Step definitions via the `Step` trait
//! - Immutable snapshots of current step plus history
//! - Transition actions consumed by presentation layers
//! - Guard predicates used by transition policies
//!
//! Nothing in this module performs I/O or holds shared state.

mod action;
mod guard;
mod snapshot;
mod step;

pub use action::Action;
pub use guard::Guard;
pub use snapshot::Snapshot;
pub use step::Step;
