//! Row-major transition table.
//!
//! Events are the outer (row) axis and states the inner (column) axis:
//! `cell_index = event_index * state_count + state_index`. Tables produced by
//! external tools must follow this layout exactly.

use super::axis::Axis;
use super::cell::Transition;
use super::id::Identifier;
use thiserror::Error;

/// Errors raised while assembling a transition table.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Table holds {cells} cells but {events} events x {states} states were declared")]
    DimensionMismatch {
        events: usize,
        states: usize,
        cells: usize,
    },

    #[error("State axis repeats an identifier at positions {first} and {second}")]
    DuplicateState { first: usize, second: usize },

    #[error("Event axis repeats an identifier at positions {first} and {second}")]
    DuplicateEvent { first: usize, second: usize },
}

/// Borrowed transition table together with its two axes.
///
/// Construction checks the shape once, so lookups never do index arithmetic
/// on unchecked input. The engine only holds references: the caller keeps
/// ownership of the cells and both axes.
pub struct TransitionTable<'a, S, E> {
    cells: &'a [Transition<'a, S, E>],
    states: Axis<'a, S>,
    events: Axis<'a, E>,
}

impl<S, E> Clone for TransitionTable<'_, S, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, E> Copy for TransitionTable<'_, S, E> {}

impl<'a, S: Identifier, E: Identifier> TransitionTable<'a, S, E> {
    /// Assemble a table from caller-owned cells and axes.
    ///
    /// Fails when `cells.len() != events.len() * states.len()` or when either
    /// axis lists the same identifier twice.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stm_table::core::{NextState, Transition, TransitionTable};
    ///
    /// fn nop(current: u8, _next: NextState<u8>, _event: u8) -> u8 {
    ///     current
    /// }
    ///
    /// let states = [0u8, 1];
    /// let events = [10u8];
    /// let cells = [Transition::to(&nop, 1), Transition::to(&nop, 0)];
    ///
    /// let table = TransitionTable::new(&cells, &states, &events).unwrap();
    /// assert_eq!(table.state_count(), 2);
    /// assert_eq!(table.event_count(), 1);
    /// ```
    pub fn new(
        cells: &'a [Transition<'a, S, E>],
        states: &'a [S],
        events: &'a [E],
    ) -> Result<Self, TableError> {
        let states = Axis::new(states);
        let events = Axis::new(events);

        let expected = events.len().checked_mul(states.len());
        if expected != Some(cells.len()) {
            return Err(TableError::DimensionMismatch {
                events: events.len(),
                states: states.len(),
                cells: cells.len(),
            });
        }

        if let Some((first, second)) = states.first_duplicate() {
            return Err(TableError::DuplicateState { first, second });
        }
        if let Some((first, second)) = events.first_duplicate() {
            return Err(TableError::DuplicateEvent { first, second });
        }

        Ok(Self {
            cells,
            states,
            events,
        })
    }

    pub fn states(&self) -> Axis<'a, S> {
        self.states
    }

    pub fn events(&self) -> Axis<'a, E> {
        self.events
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Cell at (`event_index`, `state_index`), or `None` when either index
    /// is off its axis.
    pub fn cell(&self, event_index: usize, state_index: usize) -> Option<&'a Transition<'a, S, E>> {
        if event_index >= self.event_count() || state_index >= self.state_count() {
            return None;
        }
        self.cells.get(event_index * self.state_count() + state_index)
    }

    /// All cells for one event, ordered along the state axis.
    pub fn row(&self, event_index: usize) -> Option<&'a [Transition<'a, S, E>]> {
        let width = self.state_count();
        let start = event_index.checked_mul(width)?;
        if event_index >= self.event_count() {
            return None;
        }
        self.cells.get(start..start + width)
    }

    /// Iterate `(event_index, state_index, cell)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &'a Transition<'a, S, E>)> + 'a {
        let width = self.state_count();
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (index / width, index % width, cell))
    }
}

impl<S: std::fmt::Debug, E: std::fmt::Debug> std::fmt::Debug for TransitionTable<'_, S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionTable")
            .field("states", &self.states)
            .field("events", &self.events)
            .field("cells", &self.cells.len())
            .finish()
    }
}
