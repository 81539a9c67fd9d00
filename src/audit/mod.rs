//! Validation-based audit of transition tables.
//!
//! Construction already rejects malformed shapes and duplicate identifiers.
//! The audit goes further and inspects every cell, using stillwater's
//! `Validation` to report ALL defects in one pass instead of failing on the
//! first. It is a configuration-time check: it allocates, and dispatch never
//! calls it.
//!
//! # Example
//!
//! ```rust
//! use stm_table::audit::{audit, TableIssue};
//! use stm_table::core::{NextState, Transition, TransitionTable};
//! use stillwater::validation::Validation;
//!
//! fn nop(current: u8, _next: NextState<u8>, _event: u8) -> u8 {
//!     current
//! }
//!
//! let states = [0u8, 1];
//! let events = [0u8];
//! let cells = [Transition::to(&nop, 1), Transition::empty(NextState::Static(0))];
//! let table = TransitionTable::new(&cells, &states, &events).unwrap();
//!
//! match audit(&table) {
//!     Validation::Failure(issues) => {
//!         assert!(issues.iter().any(|i| matches!(i, TableIssue::MissingAction { .. })));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod issues;
pub mod rules;

pub use issues::TableIssue;
pub use rules::{audit, AuditResult};
