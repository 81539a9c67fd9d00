//! Registry configuration.

use serde::{Deserialize, Serialize};

/// How a runtime-decided next state is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStatePolicy {
    /// Commit whatever the action returns.
    #[default]
    Accept,

    /// Commit only states present on the state axis. Anything else fails
    /// with `NoNextState` and leaves the machine where it was.
    ///
    /// The action runs before this check, so its side effects happen even
    /// when the dispatch fails.
    Verify,
}

/// Settings shared by every machine in a registry.
///
/// Deserializes from partial documents; missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use stm_table::engine::{NextStatePolicy, RegistryConfig};
///
/// let config: RegistryConfig = serde_json::from_str(r#"{"next_state": "verify"}"#).unwrap();
/// assert_eq!(config.next_state, NextStatePolicy::Verify);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub next_state: NextStatePolicy,
}
