//! Optional transition policies for stricter flows.
//!
//! A bare engine accepts any forward move. Attaching a policy restricts
//! which moves are legal: declared edges between named steps, guards over
//! the target step's payload, a depth cap and custom checks.
//!
//! Policies use Stillwater's `Validation` type, so a rejected move reports
//! every broken rule at once instead of only the first.
//!
//! # Example
//!
//! ```rust
//! use backstack::policy::{PolicyBuilder, TransitionPolicy, ViolationStrategy};
//!
//! # use backstack::core::Step;
//! # use serde::{Deserialize, Serialize};
//! # #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! # enum TestStep { Details, Address, Inactive }
//! # impl Step for TestStep {
//! #     fn name(&self) -> &str {
//! #         match self {
//! #             Self::Details => "Details",
//! #             Self::Address => "Address",
//! #             Self::Inactive => "Inactive",
//! #         }
//! #     }
//! #     fn inactive() -> Self { Self::Inactive }
//! # }
//!
//! let policy: TransitionPolicy<TestStep> = PolicyBuilder::new()
//!     .require_active()
//!     .allow("Details", "Address")
//!     .max_depth(8)
//!     .on_violation(ViolationStrategy::Reject)
//!     .build();
//! ```

pub mod builder;
pub mod context;
pub mod rules;
pub mod violations;

pub use builder::PolicyBuilder;
pub use context::TransitionContext;
pub use rules::{Edge, TransitionPolicy};
pub use violations::{PolicyViolation, ViolationStrategy};
