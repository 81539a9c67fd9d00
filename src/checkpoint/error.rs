//! Checkpoint error types.

use thiserror::Error;

/// Errors from encoding, decoding or restoring a registry checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The snapshot could not be encoded as JSON or bincode
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Stored bytes or text are not a valid snapshot
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The snapshot was written in a format this build cannot read
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The snapshot's machine count differs from the registry being restored
    #[error("Checkpoint holds {found} machine states but the registry has {expected} machines")]
    ValidationFailed { found: usize, expected: usize },
}
