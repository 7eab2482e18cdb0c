//! The state protocol every search driver consumes, and the goal predicate
//! contract.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::SearchError;

/// One step out of a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    /// The state reached.
    pub state: S,
    /// Incremental cost of the step. Drivers assume it is nonnegative.
    pub cost: f64,
    /// Optional tag naming who takes the step, for multi-actor domains.
    pub actor: Option<u32>,
}

impl<S> Transition<S> {
    #[must_use]
    pub fn new(state: S, cost: f64) -> Self {
        Self {
            state,
            cost,
            actor: None,
        }
    }

    #[must_use]
    pub fn with_actor(mut self, actor: u32) -> Self {
        self.actor = Some(actor);
        self
    }
}

/// A unit of search expansion.
///
/// # Contract
///
/// - `successors` returns the complete set of one-step transitions; an empty
///   list marks a terminal state.
/// - Repeated calls return equal lists in the same order. Implementations
///   may memoize, but caching must not change what a later call observes.
/// - `Eq`/`Hash` define search deduplication: two states that compare equal
///   are one explored-set entry.
pub trait State: Clone + Eq + Hash + Debug {
    fn successors(&self) -> Vec<Transition<Self>>;

    /// Short human-readable label for reports.
    fn label(&self) -> String {
        format!("{self:?}")
    }
}

/// Goal test used by the A* driver and as the collection filter of budgeted
/// enumeration.
///
/// Returning `Err` aborts the driver call; it signals a malformed goal, not
/// a failed match.
pub trait GoalPredicate<S> {
    /// # Errors
    ///
    /// [`SearchError`] when the goal cannot be evaluated against `state`.
    fn is_goal(&self, state: &S) -> Result<bool, SearchError>;
}

impl<S, F> GoalPredicate<S> for F
where
    F: Fn(&S) -> bool,
{
    fn is_goal(&self, state: &S) -> Result<bool, SearchError> {
        Ok(self(state))
    }
}

/// Goal predicate that accepts every state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<S> GoalPredicate<S> for AcceptAll {
    fn is_goal(&self, _state: &S) -> Result<bool, SearchError> {
        Ok(true)
    }
}
