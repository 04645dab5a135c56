//! Common error types for iconset.

use thiserror::Error;

/// Reasons an identifier is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The identifier has no characters.
    #[error("identifier is empty")]
    Empty,

    /// Whitespace appears somewhere in the identifier.
    #[error("identifier contains whitespace at position {position}")]
    Whitespace { position: usize },

    /// A control character appears somewhere in the identifier.
    #[error("identifier contains a non-printable character at position {position}")]
    NonPrintable { position: usize },

    /// The identifier exceeds the configured maximum length (in chars).
    #[error("identifier is {len} characters long, maximum is {max}")]
    TooLong { len: usize, max: usize },

    /// The identifier is symbolic but does not follow the required format.
    #[error("identifier does not match format {format}")]
    FormatMismatch { format: String },

    /// A caller-supplied format pattern failed to compile.
    #[error("invalid identifier pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Result type for identifier validation.
pub type IdentifierResult<T> = Result<T, IdentifierError>;
