//! Table defects reported by an audit.

use thiserror::Error;

/// A configuration defect found in a transition table.
///
/// Each variant names the cell by its (event, state) position, i.e. the row
/// and column on the two axes.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TableIssue {
    /// Dispatching into this cell would fail with `NoAction`.
    #[error("Cell (event {event_index}, state {state_index}) has no action")]
    MissingAction {
        event_index: usize,
        state_index: usize,
    },

    /// The cell's fixed next state is not on the state axis, so the machine
    /// would be stuck after taking it.
    #[error("Cell (event {event_index}, state {state_index}) leads to a state that is not on the state axis")]
    DanglingNextState {
        event_index: usize,
        state_index: usize,
    },
}

impl TableIssue {
    /// The `(event_index, state_index)` position of the offending cell.
    pub fn position(&self) -> (usize, usize) {
        match *self {
            Self::MissingAction {
                event_index,
                state_index,
            }
            | Self::DanglingNextState {
                event_index,
                state_index,
            } => (event_index, state_index),
        }
    }
}
