//! Immutable navigation snapshots.
//!
//! A snapshot pairs the current step with every step visited before it.
//! Each operation returns a new snapshot; the original is never touched.

use super::step::Step;
use serde::{Deserialize, Serialize};

/// Current step plus the ordered history of prior steps.
///
/// `history` is oldest first and never includes `current`.
///
/// # Example
///
/// ```rust
/// use backstack::core::{Snapshot, Step};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Page { One, Two, Inactive }
///
/// impl Step for Page {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "One",
///             Self::Two => "Two",
///             Self::Inactive => "Inactive",
///         }
///     }
///
///     fn inactive() -> Self {
///         Self::Inactive
///     }
/// }
///
/// let snapshot = Snapshot::started(Page::One).appending(Page::Two);
/// assert_eq!(snapshot.current(), &Page::Two);
/// assert_eq!(snapshot.history(), &[Page::Inactive, Page::One]);
///
/// let snapshot = snapshot.removing_last();
/// assert_eq!(snapshot.current(), &Page::One);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<S: Step> {
    current: S,
    history: Vec<S>,
}

impl<S: Step> Default for Snapshot<S> {
    fn default() -> Self {
        Self::inactive()
    }
}

impl<S: Step> Snapshot<S> {
    /// The snapshot of a flow that is not running.
    ///
    /// ```rust
    /// # use backstack::core::{Snapshot, Step};
    /// # use serde::{Deserialize, Serialize};
    /// # #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// # enum Page { One, Inactive }
    /// # impl Step for Page {
    /// #     fn name(&self) -> &str { "Page" }
    /// #     fn inactive() -> Self { Self::Inactive }
    /// # }
    /// let snapshot: Snapshot<Page> = Snapshot::inactive();
    /// assert!(!snapshot.is_active());
    /// assert!(snapshot.history().is_empty());
    /// ```
    pub fn inactive() -> Self {
        Self {
            current: S::inactive(),
            history: Vec::new(),
        }
    }

    /// A fresh flow positioned on `first`, with the inactive sentinel as its
    /// only history entry.
    pub fn started(first: S) -> Self {
        Self {
            current: first,
            history: vec![S::inactive()],
        }
    }

    /// Push the current step onto history and make `step` current.
    pub fn appending(&self, step: S) -> Self {
        let mut history = self.history.clone();
        history.push(self.current.clone());
        Self {
            current: step,
            history,
        }
    }

    /// Pop the last history entry and make it current.
    ///
    /// The former current step is discarded. With an empty history the
    /// result is the inactive snapshot.
    pub fn removing_last(&self) -> Self {
        let mut history = self.history.clone();
        let current = history.pop().unwrap_or_else(S::inactive);
        Self { current, history }
    }

    pub fn current(&self) -> &S {
        &self.current
    }

    pub fn history(&self) -> &[S] {
        &self.history
    }

    /// Number of steps behind `current`.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// A flow is active while its current step is not the sentinel.
    pub fn is_active(&self) -> bool {
        !self.current.is_inactive()
    }

    /// Every step visited, oldest first, ending with `current`.
    pub fn path(&self) -> Vec<&S> {
        self.history
            .iter()
            .chain(std::iter::once(&self.current))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestStep {
        Details,
        Address(String),
        Confirm,
        Inactive,
    }

    impl Step for TestStep {
        fn name(&self) -> &str {
            match self {
                Self::Details => "Details",
                Self::Address(_) => "Address",
                Self::Confirm => "Confirm",
                Self::Inactive => "Inactive",
            }
        }

        fn inactive() -> Self {
            Self::Inactive
        }
    }

    #[test]
    fn inactive_snapshot_is_empty() {
        let snapshot: Snapshot<TestStep> = Snapshot::inactive();
        assert_eq!(snapshot.current(), &TestStep::Inactive);
        assert!(snapshot.history().is_empty());
        assert_eq!(snapshot.depth(), 0);
        assert!(!snapshot.is_active());
    }

    #[test]
    fn default_is_inactive() {
        assert_eq!(Snapshot::<TestStep>::default(), Snapshot::inactive());
    }

    #[test]
    fn started_seeds_history_with_sentinel() {
        let snapshot = Snapshot::started(TestStep::Details);
        assert_eq!(snapshot.current(), &TestStep::Details);
        assert_eq!(snapshot.history(), &[TestStep::Inactive]);
        assert!(snapshot.is_active());
    }

    #[test]
    fn appending_pushes_current_onto_history() {
        let snapshot = Snapshot::started(TestStep::Details)
            .appending(TestStep::Address("Main St".to_string()));

        assert_eq!(snapshot.current(), &TestStep::Address("Main St".to_string()));
        assert_eq!(
            snapshot.history(),
            &[TestStep::Inactive, TestStep::Details]
        );
    }

    #[test]
    fn appending_is_immutable() {
        let original = Snapshot::started(TestStep::Details);
        let next = original.appending(TestStep::Confirm);

        assert_eq!(original.current(), &TestStep::Details);
        assert_eq!(original.depth(), 1);
        assert_eq!(next.depth(), 2);
    }

    #[test]
    fn removing_last_reverses_appending() {
        let original = Snapshot::started(TestStep::Details);
        let restored = original.appending(TestStep::Confirm).removing_last();
        assert_eq!(restored, original);
    }

    #[test]
    fn removing_last_on_empty_history_floors_at_inactive() {
        let snapshot: Snapshot<TestStep> = Snapshot::inactive();
        assert_eq!(snapshot.removing_last(), Snapshot::inactive());
    }

    #[test]
    fn backing_out_of_first_step_deactivates() {
        let snapshot = Snapshot::started(TestStep::Details).removing_last();
        assert_eq!(snapshot, Snapshot::inactive());
    }

    #[test]
    fn removing_last_discards_forward_steps() {
        let snapshot = Snapshot::started(TestStep::Details)
            .appending(TestStep::Confirm)
            .removing_last()
            .removing_last();

        assert_eq!(snapshot.current(), &TestStep::Inactive);
        assert!(snapshot.history().is_empty());
    }

    #[test]
    fn path_ends_with_current() {
        let snapshot = Snapshot::started(TestStep::Details).appending(TestStep::Confirm);
        let path = snapshot.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestStep::Inactive);
        assert_eq!(path[1], &TestStep::Details);
        assert_eq!(path[2], &TestStep::Confirm);
    }

    #[test]
    fn snapshot_serializes_correctly() {
        let snapshot = Snapshot::started(TestStep::Details)
            .appending(TestStep::Address("Elm St".to_string()));

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: Snapshot<TestStep> = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
    }
}
