//! Configuration for registry construction

use crate::RegistryError;
use iconset_core::{Identifier, IdentifierError, IdentifierFormat, IdentifierResult};

/// Configuration for registry construction
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Naming rule applied on top of the symbolic checks
    pub format: IdentifierFormat,
    /// Maximum identifier length in characters
    pub max_len: Option<usize>,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// PascalCase names of at most 64 characters.
    pub fn strict() -> Self {
        Self {
            format: IdentifierFormat::PascalCase,
            max_len: Some(64),
        }
    }

    pub fn with_format(mut self, format: IdentifierFormat) -> Self {
        self.format = format;
        self
    }

    /// Require identifiers to match `pattern` in full.
    pub fn with_pattern(self, pattern: &str) -> Result<Self, RegistryError> {
        let format = IdentifierFormat::pattern(pattern).map_err(RegistryError::InvalidFormat)?;
        Ok(self.with_format(format))
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Validate a raw name against this configuration.
    pub fn validate(&self, name: &str) -> IdentifierResult<Identifier> {
        let identifier = Identifier::parse_with(name, &self.format)?;
        if let Some(max) = self.max_len {
            let len = identifier.char_len();
            if len > max {
                return Err(IdentifierError::TooLong { len, max });
            }
        }
        Ok(identifier)
    }
}
