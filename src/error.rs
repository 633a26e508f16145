//! Error types for Structured Field parsing and serialization.
//!
//! Two narrow error types cover the two directions of the codec:
//!
//! - [`ParseError`]: a grammar violation, positioned at the byte where parsing
//!   stopped, optionally naming the offending byte and the dictionary or
//!   parameter key whose value was being parsed.
//! - [`SerializeError`]: a value that cannot be written to the wire (out of
//!   range, disallowed character, empty top-level container).
//!
//! [`Error`] wraps both, plus caller errors such as an unknown field kind.
//!
//! ## Examples
//!
//! ```rust
//! use sfv_codec::parse_list;
//!
//! let err = parse_list(b"foo, bar, \x00").unwrap_err();
//! assert_eq!(err.position, 10);
//! assert_eq!(err.offending_byte, Some(0));
//! ```

use std::fmt;
use thiserror::Error;

/// A grammar violation found while parsing a field value.
///
/// Every sub-parser raises this type immediately on the first violation; no
/// partial result is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseError {
    /// Human-readable description of the violation.
    pub message: String,
    /// Byte offset into the input where the violation was detected.
    pub position: usize,
    /// The byte at `position`, when the raising code recorded one.
    pub offending_byte: Option<u8>,
    /// Key of the innermost dictionary member or parameter being parsed.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates an error at an explicit position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfv_codec::ParseError;
    ///
    /// let err = ParseError::new("Trailing comma at end of list", 3, None);
    /// assert!(err.to_string().contains("byte 3"));
    /// ```
    pub fn new(message: impl Into<String>, position: usize, offending_byte: Option<u8>) -> Self {
        ParseError {
            message: message.into(),
            position,
            offending_byte,
            context: None,
        }
    }

    /// Attaches the key being parsed, unless an inner layer already did.
    #[must_use]
    pub fn in_context(mut self, key: &str) -> Self {
        if self.context.is_none() {
            self.context = Some(key.to_string());
        }
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.position)?;
        if let Some(byte) = self.offending_byte {
            write!(f, " (found {:#04x})", byte)?;
        }
        if let Some(key) = &self.context {
            write!(f, " while parsing '{}'", key)?;
        }
        Ok(())
    }
}

/// A value that cannot be represented on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// Top-level list or dictionary without members.
    #[error("No contents; field should not be emitted")]
    EmptyField,

    #[error("Integer {0} is out of range")]
    IntegerOutOfRange(i64),

    #[error("Decimal {0} is out of range")]
    DecimalOutOfRange(String),

    #[error("Date {0} is out of range")]
    DateOutOfRange(i64),

    /// String holding a character outside printable ASCII.
    #[error("String contains disallowed character {0:?}")]
    StringDisallowedChar(char),

    #[error("Invalid token {0:?}")]
    InvalidToken(String),

    #[error("Invalid key {0:?}")]
    InvalidKey(String),
}

/// Represents all errors surfaced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] SerializeError),

    /// The caller asked for a top-level kind that does not exist.
    #[error("Unrecognised top-level type {0:?}")]
    UnknownFieldKind(String),

    /// Malformed conformance test-vector JSON.
    #[cfg(feature = "json")]
    #[error("Invalid test vector: {0}")]
    Fixture(String),
}

pub type Result<T> = std::result::Result<T, Error>;
