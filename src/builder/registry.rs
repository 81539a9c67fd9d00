//! Builder for constructing registries.

use crate::core::Identifier;
use crate::engine::{NextStatePolicy, Registry, RegistryConfig, DEFAULT_CAPACITY};
use std::marker::PhantomData;

/// Builder for configuring a [`Registry`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use stm_table::builder::{NextStatePolicy, RegistryBuilder};
/// use stm_table::Registry;
///
/// let registry: Registry<u8, u8, 4> = RegistryBuilder::new()
///     .next_state(NextStatePolicy::Verify)
///     .build();
///
/// assert_eq!(registry.capacity(), 4);
/// assert_eq!(registry.config().next_state, NextStatePolicy::Verify);
/// ```
pub struct RegistryBuilder<S, E, const N: usize = DEFAULT_CAPACITY> {
    config: RegistryConfig,
    _phantom: PhantomData<(S, E)>,
}

impl<S: Identifier, E: Identifier, const N: usize> RegistryBuilder<S, E, N> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
            _phantom: PhantomData,
        }
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how runtime-decided next states are treated.
    pub fn next_state(mut self, policy: NextStatePolicy) -> Self {
        self.config.next_state = policy;
        self
    }

    /// Build the registry.
    pub fn build<'t>(self) -> Registry<'t, S, E, N> {
        Registry::with_config(self.config)
    }
}

impl<S: Identifier, E: Identifier, const N: usize> Default for RegistryBuilder<S, E, N> {
    fn default() -> Self {
        Self::new()
    }
}
