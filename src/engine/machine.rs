//! Machine instance and event dispatch.

use crate::core::{Identifier, NextState, TransitionTable};
use crate::engine::config::NextStatePolicy;
use crate::engine::error::StmError;

/// Record of one committed dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step<S, E> {
    pub from: S,
    pub event: E,
    pub to: S,
    /// Whether `to` came from the action rather than the table.
    pub runtime_decided: bool,
}

/// A transition table plus the state it is currently in.
///
/// Only `current` ever changes. The table and its axes are borrowed for `'t`
/// and must stay valid and unmodified for as long as the machine lives.
#[derive(Debug)]
pub struct Machine<'t, S, E> {
    table: TransitionTable<'t, S, E>,
    current: S,
}

impl<'t, S: Identifier, E: Identifier> Machine<'t, S, E> {
    /// Create a machine in `initial`.
    ///
    /// `initial` is not checked against the state axis. A machine started
    /// off-axis reports that state faithfully but cannot dispatch until
    /// [`force`](Self::force) moves it onto the axis.
    pub fn new(table: TransitionTable<'t, S, E>, initial: S) -> Self {
        Self {
            table,
            current: initial,
        }
    }

    pub fn current_state(&self) -> S {
        self.current
    }

    pub fn table(&self) -> TransitionTable<'t, S, E> {
        self.table
    }

    /// Whether the current state is on the state axis.
    pub fn is_on_axis(&self) -> bool {
        self.table.states().contains(self.current)
    }

    /// Feed one event through the transition table.
    ///
    /// Runs the action of the matching cell once, then commits the cell's
    /// static state or, for runtime-decided cells, the action's return value.
    /// On any error the current state is unchanged.
    pub fn dispatch(
        &mut self,
        event: E,
        policy: NextStatePolicy,
    ) -> Result<Step<S, E>, StmError> {
        let Some(state_index) = self.table.states().find(self.current) else {
            diag!(state = ?self.current, "Current state is not on the state axis");
            return Err(StmError::UnknownState);
        };

        let Some(event_index) = self.table.events().find(event) else {
            diag!(?event, "Event is not on the event axis");
            return Err(StmError::UnknownEvent);
        };

        // Both indices come from the axes, so the cell is always present.
        let cell = self
            .table
            .cell(event_index, state_index)
            .ok_or(StmError::UnknownEvent)?;

        let Some(action) = cell.action else {
            diag!(event_index, state_index, "Cell has no action");
            return Err(StmError::NoAction {
                event_index,
                state_index,
            });
        };

        let decided = action.run(self.current, cell.next, event);

        let (to, runtime_decided) = match cell.next {
            NextState::Static(next) => (next, false),
            NextState::RuntimeDecided => {
                if policy == NextStatePolicy::Verify && !self.table.states().contains(decided) {
                    diag!(
                        state = ?decided,
                        "Action chose a state that is not on the state axis"
                    );
                    return Err(StmError::NoNextState);
                }
                (decided, true)
            }
        };

        let step = Step {
            from: self.current,
            event,
            to,
            runtime_decided,
        };
        self.current = to;

        #[cfg(feature = "log-transitions")]
        tracing::debug!(
            from = ?step.from,
            event = ?step.event,
            to = ?step.to,
            "State transition"
        );

        Ok(step)
    }

    /// Overwrite the current state, bypassing the table.
    ///
    /// A debug and recovery valve. Reaching for it in normal operation means
    /// the table is missing a transition.
    pub fn force(&mut self, state: S) {
        self.current = state;
    }
}
