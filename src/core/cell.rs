//! Transition cells: one entry of the transition table.

use super::id::Identifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the next state of a cell comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextState<S> {
    /// The table fixes the next state. The action's return value is discarded.
    Static(S),

    /// The action's return value becomes the next state.
    RuntimeDecided,
}

impl<S: Copy> NextState<S> {
    /// The statically known next state, if any.
    pub fn fixed(&self) -> Option<S> {
        match self {
            Self::Static(state) => Some(*state),
            Self::RuntimeDecided => None,
        }
    }

    pub fn is_runtime_decided(&self) -> bool {
        matches!(self, Self::RuntimeDecided)
    }
}

/// Callback run for the matching cell on every dispatch.
///
/// Receives the state the machine was in, the cell's next-state policy and
/// the event being dispatched. The returned state is only used when the
/// cell is [`NextState::RuntimeDecided`].
///
/// Any `Fn(S, NextState<S>, E) -> S` is an action, so closures may capture
/// context (counters in a `Cell`, handles to peripherals, ...).
///
/// # Example
///
/// ```rust
/// use stm_table::core::{Action, NextState};
///
/// let pick_highest = |current: i16, _next: NextState<i16>, event: i16| current.max(event);
/// assert_eq!(pick_highest.run(2, NextState::RuntimeDecided, 5), 5);
/// ```
pub trait Action<S, E> {
    fn run(&self, current: S, next: NextState<S>, event: E) -> S;
}

impl<S, E, F> Action<S, E> for F
where
    F: Fn(S, NextState<S>, E) -> S,
{
    fn run(&self, current: S, next: NextState<S>, event: E) -> S {
        self(current, next, event)
    }
}

/// One (event, state) combination of the transition table.
///
/// The action and the policy are borrowed from the caller. A cell without an
/// action is a table defect: dispatching into it fails with
/// [`StmError::NoAction`](crate::StmError::NoAction).
pub struct Transition<'a, S, E> {
    pub action: Option<&'a dyn Action<S, E>>,
    pub next: NextState<S>,
}

impl<'a, S: Identifier, E: Identifier> Transition<'a, S, E> {
    /// Cell that runs `action` and then moves to `next`.
    pub fn to(action: &'a dyn Action<S, E>, next: S) -> Self {
        Self {
            action: Some(action),
            next: NextState::Static(next),
        }
    }

    /// Cell whose next state is whatever `action` returns.
    pub fn runtime(action: &'a dyn Action<S, E>) -> Self {
        Self {
            action: Some(action),
            next: NextState::RuntimeDecided,
        }
    }

    /// Cell with no action. Dispatching into it always fails.
    pub fn empty(next: NextState<S>) -> Self {
        Self { action: None, next }
    }
}

impl<S: Copy, E> Clone for Transition<'_, S, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Copy, E> Copy for Transition<'_, S, E> {}

impl<S: fmt::Debug, E> fmt::Debug for Transition<'_, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("action", &self.action.map(|_| "<action>"))
            .field("next", &self.next)
            .finish()
    }
}
