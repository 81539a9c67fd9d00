//! stm-table: a table-driven finite state machine engine
//!
//! Machines are driven by a caller-supplied transition table laid out
//! row-major, events as rows and states as columns. Dispatching an event
//! runs the action of the matching cell and then commits the next state.
//! The next state is either fixed by the table or decided by the action at
//! runtime. Storage is a fixed-capacity registry, and nothing on the
//! dispatch path allocates.
//!
//! # Core Concepts
//!
//! - **Axes**: ordered identifier lists; an identifier's position addresses the table
//! - **Transition table**: validated, borrowed grid of cells
//! - **Registry**: fixed-capacity pool of machines addressed by handles
//! - **Dispatch**: one event runs one action and commits at most one state change
//!
//! # Example
//!
//! ```rust
//! use stm_table::core::{NextState, Transition, TransitionTable};
//! use stm_table::{id_enum, Registry};
//!
//! id_enum! {
//!     enum Valve {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! id_enum! {
//!     enum Command {
//!         Toggle,
//!         Close,
//!     }
//! }
//!
//! fn nop(current: Valve, _next: NextState<Valve>, _event: Command) -> Valve {
//!     current
//! }
//!
//! let cells = [
//!     // Toggle
//!     Transition::to(&nop, Valve::Open),
//!     Transition::to(&nop, Valve::Closed),
//!     // Close
//!     Transition::to(&nop, Valve::Closed),
//!     Transition::to(&nop, Valve::Closed),
//! ];
//! let table = TransitionTable::new(&cells, Valve::ALL, Command::ALL).unwrap();
//!
//! let mut registry: Registry<Valve, Command> = Registry::new();
//! let valve = registry.create(table, Valve::Closed).unwrap();
//!
//! registry.dispatch(valve, Command::Toggle).unwrap();
//! assert_eq!(registry.current_state(valve), Ok(Valve::Open));
//! ```

#[macro_use]
mod diag;

pub mod audit;
pub mod builder;
#[cfg(feature = "checkpoint")]
pub mod checkpoint;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use self::core::{Action, NextState, Transition, TransitionTable};
pub use engine::{ErrorCode, Handle, Registry, StmError, Step, DEFAULT_CAPACITY};
