//! The Registry - immutable identifier lookup.

use crate::{RegistryBuilder, RegistryConfig, RegistryError, RegistryResult};
use iconset_core::{Handle, Identifier};
use std::collections::HashMap;

/// A registered (identifier, handle) pair.
#[derive(Debug, Clone)]
pub struct Entry<'u> {
    identifier: Identifier,
    handle: Handle<'u>,
}

impl<'u> Entry<'u> {
    pub(crate) fn new(identifier: Identifier, handle: Handle<'u>) -> Self {
        Self { identifier, handle }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn handle(&self) -> Handle<'u> {
        self.handle
    }
}

/// The Registry resolves identifiers to renderable-unit handles.
/// It is immutable after construction, and only `RegistryBuilder::build`
/// produces one:
///
/// ```compile_fail
/// let registry: iconset_registry::Registry<'static> = Default::default();
/// ```
#[derive(Debug, Clone)]
pub struct Registry<'u> {
    /// Entries in registration order.
    entries: Vec<Entry<'u>>,
    /// Entry position lookup by identifier.
    index: HashMap<Identifier, usize>,
}

impl<'u> Registry<'u> {
    /// Create a registry from already validated parts (use RegistryBuilder for construction).
    pub(crate) fn new(entries: Vec<Entry<'u>>, index: HashMap<Identifier, usize>) -> Self {
        Self { entries, index }
    }

    /// Build a registry from a fixed list of pairs, stopping at the first error.
    pub fn from_entries<I, S, H>(entries: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = (S, H)>,
        S: AsRef<str>,
        H: Into<Handle<'u>>,
    {
        Self::from_entries_with_config(RegistryConfig::default(), entries)
    }

    /// Build a registry from a fixed list of pairs under `config`.
    pub fn from_entries_with_config<I, S, H>(
        config: RegistryConfig,
        entries: I,
    ) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = (S, H)>,
        S: AsRef<str>,
        H: Into<Handle<'u>>,
    {
        let mut builder = RegistryBuilder::with_config(config);
        for (identifier, handle) in entries {
            builder.register(identifier.as_ref(), handle)?;
        }
        builder.build()
    }

    // ==================== Lookups ====================

    /// Resolve an identifier to its handle.
    pub fn resolve(&self, identifier: &str) -> RegistryResult<Handle<'u>> {
        match self.get(identifier) {
            Some(handle) => {
                tracing::trace!(identifier, "resolved");
                Ok(handle)
            }
            None => {
                tracing::debug!(identifier, "unknown identifier");
                Err(RegistryError::UnknownIdentifier(identifier.to_string()))
            }
        }
    }

    /// Get a handle by identifier.
    pub fn get(&self, identifier: &str) -> Option<Handle<'u>> {
        self.entry(identifier).map(Entry::handle)
    }

    /// Get an entry by identifier.
    pub fn entry(&self, identifier: &str) -> Option<&Entry<'u>> {
        self.index.get(identifier).map(|&i| &self.entries[i])
    }

    /// Resolve an identifier, returning the caller's `fallback` when it is unknown.
    pub fn resolve_or(&self, identifier: &str, fallback: Handle<'u>) -> Handle<'u> {
        self.resolve(identifier).unwrap_or(fallback)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    // ==================== Enumeration ====================

    /// All identifiers in registration order.
    pub fn list(&self) -> Identifiers<'_, 'u> {
        Identifiers {
            inner: self.entries.iter(),
        }
    }

    /// All entries in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<'u>> {
        self.entries.iter()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, 'u> IntoIterator for &'a Registry<'u> {
    type Item = &'a Entry<'u>;
    type IntoIter = std::slice::Iter<'a, Entry<'u>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over registered identifiers, in registration order.
#[derive(Debug, Clone)]
pub struct Identifiers<'a, 'u> {
    inner: std::slice::Iter<'a, Entry<'u>>,
}

impl<'a, 'u> Iterator for Identifiers<'a, 'u> {
    type Item = &'a Identifier;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::identifier)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Identifiers<'_, '_> {}
