//! Checkpoint and restore of machine states.
//!
//! Control software that resets can persist where every machine was and put
//! them back on restart. A checkpoint only carries current states: tables,
//! axes and actions belong to the application and are rebuilt by it before
//! restoring.
//!
//! This module allocates and is never used by dispatch.

use crate::core::Identifier;
use crate::engine::{Machine, Registry};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of every machine's current state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint<S> {
    /// Checkpoint format version
    pub version: u32,

    /// Current state per machine, indexed by handle
    pub states: Vec<S>,
}

impl<S: Serialize + for<'de> Deserialize<'de>> Checkpoint<S> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Compact binary encoding for storage with tight space limits.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<S: Identifier, E: Identifier, const N: usize> Registry<'_, S, E, N> {
    /// Capture the current state of every created machine.
    pub fn checkpoint(&self) -> Checkpoint<S> {
        let states = self.machines().map(Machine::current_state).collect();

        Checkpoint {
            version: CHECKPOINT_VERSION,
            states,
        }
    }

    /// Put every machine back into the state recorded in `checkpoint`.
    ///
    /// The registry must already hold the same machines, created in the same
    /// order. Nothing is changed unless the whole checkpoint fits.
    pub fn restore(&mut self, checkpoint: &Checkpoint<S>) -> Result<(), CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if checkpoint.states.len() != self.len() {
            return Err(CheckpointError::ValidationFailed {
                found: checkpoint.states.len(),
                expected: self.len(),
            });
        }

        for (machine, state) in self.machines_mut().zip(&checkpoint.states) {
            machine.force(*state);
        }

        tracing::debug!(
            machines = checkpoint.states.len(),
            "Restored registry from checkpoint"
        );
        Ok(())
    }
}
