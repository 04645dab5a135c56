//! Identifier types for registry entries.
//!
//! An identifier is the stable symbolic name consumers use to look up a unit.
//! Every identifier is:
//! - Non-empty
//! - Made of printable characters only
//! - Free of whitespace
//!
//! Identifiers compare exactly and case-sensitively.

use crate::{IdentifierError, IdentifierResult};
use regex_lite::Regex;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use unicode_general_category::{get_general_category, GeneralCategory};

/// A validated symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Parse a symbolic identifier.
    pub fn parse(name: impl Into<String>) -> IdentifierResult<Self> {
        Self::parse_with(name, &IdentifierFormat::Symbolic)
    }

    /// Parse an identifier that must also satisfy `format`.
    pub fn parse_with(name: impl Into<String>, format: &IdentifierFormat) -> IdentifierResult<Self> {
        let name = name.into();
        check_symbolic(&name)?;
        format.check(&name)?;
        Ok(Self(name))
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<Identifier, _>` be queried with a plain `&str`.
impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Naming rule applied on top of the symbolic checks.
#[derive(Debug, Clone, Default)]
pub enum IdentifierFormat {
    /// Non-empty, printable, no whitespace.
    #[default]
    Symbolic,
    /// An ASCII uppercase letter followed by ASCII letters and digits (`HomeIcon`).
    PascalCase,
    /// The whole identifier must match the pattern.
    Pattern(Regex),
}

impl IdentifierFormat {
    /// Compile a caller-supplied pattern. The pattern is anchored at both ends.
    pub fn pattern(pattern: &str) -> IdentifierResult<Self> {
        Regex::new(&format!("^(?:{pattern})$"))
            .map(IdentifierFormat::Pattern)
            .map_err(|e| IdentifierError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// Human-readable name of the format, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            IdentifierFormat::Symbolic => "symbolic".to_string(),
            IdentifierFormat::PascalCase => "PascalCase".to_string(),
            IdentifierFormat::Pattern(re) => re.as_str().to_string(),
        }
    }

    fn check(&self, name: &str) -> IdentifierResult<()> {
        let matches = match self {
            IdentifierFormat::Symbolic => true,
            IdentifierFormat::PascalCase => is_pascal_case(name),
            IdentifierFormat::Pattern(re) => re.is_match(name),
        };
        if matches {
            Ok(())
        } else {
            Err(IdentifierError::FormatMismatch {
                format: self.describe(),
            })
        }
    }
}

fn check_symbolic(name: &str) -> IdentifierResult<()> {
    if name.is_empty() {
        return Err(IdentifierError::Empty);
    }
    for (position, c) in name.chars().enumerate() {
        // Whitespace first: tabs and newlines are also control characters.
        if c.is_whitespace() {
            return Err(IdentifierError::Whitespace { position });
        }
        if !is_printable(c) {
            return Err(IdentifierError::NonPrintable { position });
        }
    }
    Ok(())
}

/// Rejects Cc, Cf, Co, Cn and Cs: names made of these look identical on screen.
fn is_printable(c: char) -> bool {
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::Surrogate
    )
}

fn is_pascal_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
