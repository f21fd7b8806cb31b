//! Core Step trait for flow stages.
//!
//! Every stage of a linear flow implements this trait. Steps are plain
//! values: any data a later stage needs travels inside the variant itself.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the stages of a linear flow.
///
/// All methods are pure. A step type must provide a sentinel value meaning
/// "no flow in progress", returned by [`Step::inactive`].
///
/// # Required Traits
///
/// - `Clone`: Steps are copied into snapshot history
/// - `PartialEq`: Snapshots are compared in tests and by subscribers
/// - `Debug`: Steps must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Steps travel inside serializable events
///
/// # Example
///
/// ```rust
/// use backstack::core::Step;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum SignupStep {
///     Email,
///     Password { email: String },
///     Inactive,
/// }
///
/// impl Step for SignupStep {
///     fn name(&self) -> &str {
///         match self {
///             Self::Email => "Email",
///             Self::Password { .. } => "Password",
///             Self::Inactive => "Inactive",
///         }
///     }
///
///     fn inactive() -> Self {
///         Self::Inactive
///     }
/// }
///
/// assert!(SignupStep::Inactive.is_inactive());
/// assert!(!SignupStep::Email.is_inactive());
/// ```
pub trait Step:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the step's name for display, logging and policy edges.
    ///
    /// Must not depend on any attached payload.
    fn name(&self) -> &str;

    /// The sentinel step meaning "no flow running".
    fn inactive() -> Self;

    /// Check if this is the inactive sentinel.
    fn is_inactive(&self) -> bool {
        *self == Self::inactive()
    }
}
