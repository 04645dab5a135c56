//! RegistryBuilder for constructing an immutable Registry.

use crate::{Entry, Registry, RegistryConfig};
use iconset_core::{Handle, Identifier, IdentifierError};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("Invalid identifier {identifier:?}: {reason}")]
    InvalidIdentifier {
        identifier: String,
        reason: IdentifierError,
    },

    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("Invalid identifier format: {0}")]
    InvalidFormat(IdentifierError),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Builder for constructing an immutable Registry.
///
/// The builder is the only place entries can be added. `build` consumes it, so
/// a sealed registry can never be reopened.
#[derive(Debug, Default)]
pub struct RegistryBuilder<'u> {
    /// Identifier rules applied on registration.
    config: RegistryConfig,
    /// Entries in registration order.
    entries: Vec<Entry<'u>>,
    /// Identifier to entry position mapping.
    index: HashMap<Identifier, usize>,
    /// First rejected registration, reported again by `build`.
    failure: Option<RegistryError>,
}

impl<'u> RegistryBuilder<'u> {
    /// Create a new builder with the default (symbolic) identifier rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder with the given identifier rules.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a unit under `identifier`.
    ///
    /// A rejected registration poisons the builder: `build` returns the first
    /// error even if the caller ignored this result.
    pub fn register(
        &mut self,
        identifier: &str,
        handle: impl Into<Handle<'u>>,
    ) -> Result<(), RegistryError> {
        let result = self.insert(identifier, handle.into());
        if let Err(err) = &result {
            tracing::debug!(identifier, error = %err, "registration rejected");
            if self.failure.is_none() {
                self.failure = Some(err.clone());
            }
        }
        result
    }

    fn insert(&mut self, name: &str, handle: Handle<'u>) -> RegistryResult<()> {
        let identifier =
            self.config
                .validate(name)
                .map_err(|reason| RegistryError::InvalidIdentifier {
                    identifier: name.to_string(),
                    reason,
                })?;

        if self.index.contains_key(identifier.as_str()) {
            return Err(RegistryError::DuplicateIdentifier(identifier.into_string()));
        }

        let position = self.entries.len();
        tracing::debug!(identifier = %identifier, position, "registered unit");
        self.index.insert(identifier.clone(), position);
        self.entries.push(Entry::new(identifier, handle));
        Ok(())
    }

    /// Returns true if `identifier` is already registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Number of accepted registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seal the builder into an immutable Registry.
    pub fn build(self) -> RegistryResult<Registry<'u>> {
        if let Some(err) = self.failure {
            tracing::debug!(error = %err, "registry construction failed");
            return Err(err);
        }

        tracing::info!(entries = self.entries.len(), "registry sealed");
        Ok(Registry::new(self.entries, self.index))
    }
}
