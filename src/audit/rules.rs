//! Audit rules for transition tables using Validation.

use crate::audit::issues::TableIssue;
use crate::core::{Identifier, NextState, Transition, TransitionTable};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of an audit: success, or every issue found.
pub type AuditResult = Validation<(), NonEmptyVec<TableIssue>>;

/// Check every cell of `table`, accumulating ALL issues.
///
/// Returns `Validation::Success(())` for a clean table and
/// `Validation::Failure` listing every defect otherwise.
pub fn audit<S: Identifier, E: Identifier>(table: &TransitionTable<'_, S, E>) -> AuditResult {
    let mut checks: Vec<AuditResult> = Vec::new();

    for (event_index, state_index, cell) in table.iter() {
        checks.push(action_present(event_index, state_index, cell));
        checks.push(next_state_on_axis(table, event_index, state_index, cell));
    }

    if checks.is_empty() {
        return Validation::success(());
    }

    Validation::all_vec(checks).map(|_| ())
}

fn action_present<S, E>(
    event_index: usize,
    state_index: usize,
    cell: &Transition<'_, S, E>,
) -> AuditResult {
    if cell.action.is_some() {
        Validation::success(())
    } else {
        Validation::fail(TableIssue::MissingAction {
            event_index,
            state_index,
        })
    }
}

fn next_state_on_axis<S: Identifier, E: Identifier>(
    table: &TransitionTable<'_, S, E>,
    event_index: usize,
    state_index: usize,
    cell: &Transition<'_, S, E>,
) -> AuditResult {
    match cell.next {
        NextState::Static(next) if !table.states().contains(next) => {
            Validation::fail(TableIssue::DanglingNextState {
                event_index,
                state_index,
            })
        }
        _ => Validation::success(()),
    }
}
