//! Configuration and construction helpers.
//!
//! This module re-exports the registry configuration and provides a fluent
//! builder plus the `id_enum!` macro for declaring axis identifiers with minimal
//! boilerplate.

pub mod macros;
pub mod registry;

pub use crate::engine::{NextStatePolicy, RegistryConfig};
pub use registry::RegistryBuilder;
