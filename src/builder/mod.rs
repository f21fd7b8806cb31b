//! Builder API for configuring flow engines.
//!
//! This module provides a fluent builder and a macro for declaring
//! payload-free step enums with minimal boilerplate.

pub mod engine;
pub mod error;
pub mod macros;

pub use engine::FlowEngineBuilder;
pub use error::BuildError;
