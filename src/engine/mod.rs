//! The running side of the engine.
//!
//! - **Registry**: fixed-capacity pool that owns machines and issues handles
//! - **Machine**: a borrowed table plus its current state
//! - **Dispatch**: run the matching cell's action, then commit the next state
//!
//! Nothing in this module allocates. All operations are synchronous and
//! bounded: a dispatch costs two linear axis scans and one action call.

mod config;
mod error;
mod machine;
mod registry;

pub use config::{NextStatePolicy, RegistryConfig};
pub use error::{ErrorCode, StmError};
pub use machine::{Machine, Step};
pub use registry::{Handle, Registry, DEFAULT_CAPACITY};
