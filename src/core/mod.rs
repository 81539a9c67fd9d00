//! Core table types.
//!
//! This module contains the static configuration side of the engine:
//! - Identifiers via the `Identifier` trait
//! - Axes and linear index resolution
//! - Transition cells with their action and next-state policy
//! - The validated, row-major transition table
//!
//! Nothing here is mutable. Tables and axes are borrowed from the caller
//! and only read by the engine.

mod axis;
mod cell;
mod id;
mod table;

pub use axis::{find, Axis};
pub use cell::{Action, NextState, Transition};
pub use id::Identifier;
pub use table::{TableError, TransitionTable};
