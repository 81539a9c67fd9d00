//! Identifier trait shared by states and events.
//!
//! The engine never interprets identifiers beyond equality: their
//! position on an axis is what addresses the transition table.

use std::fmt::Debug;

/// Trait for state and event identifiers.
///
/// Identifiers are small, cheap values compared by equality. Any type that
/// is `Copy + PartialEq + Debug` qualifies through the blanket impl, so plain
/// integers (`i16`, `u8`, ...) and fieldless enums both work.
///
/// # Required Traits
///
/// - `Copy`: identifiers are passed by value through every dispatch
/// - `PartialEq`: axis resolution is a linear equality scan
/// - `Debug`: identifiers appear in diagnostics
///
/// # Example
///
/// ```rust
/// use stm_table::core::Identifier;
///
/// fn takes_id<I: Identifier>(id: I) -> I {
///     id
/// }
///
/// assert_eq!(takes_id(3i16), 3);
/// ```
pub trait Identifier: Copy + PartialEq + Debug {}

impl<T: Copy + PartialEq + Debug> Identifier for T {}
