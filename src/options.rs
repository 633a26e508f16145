//! Per-call configuration for parsing.
//!
//! - [`ParseOptions`]: grammar toggles for one parse call
//! - [`FieldKind`]: the top-level type a field value is parsed as
//! - [`KeyContext`]: where a duplicated key was seen
//!
//! ## Examples
//!
//! ```rust
//! use sfv_codec::{FieldKind, ParseOptions, Parser};
//!
//! let options = ParseOptions::new().with_uppercase_keys(true);
//! let mut parser = Parser::new().with_options(options);
//! let value = parser.parse(b"Foo=1", FieldKind::Dictionary).unwrap();
//! assert!(value.as_dictionary().unwrap().get("foo").is_some());
//! ```

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Configuration options for one parse call.
///
/// Options live on the [`Parser`](crate::Parser) that runs the call, so two
/// parsers with different settings never observe each other.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::ParseOptions;
///
/// let strict = ParseOptions::new();
/// assert!(!strict.uppercase_keys);
///
/// let lenient = ParseOptions::new().with_uppercase_keys(true);
/// assert!(lenient.uppercase_keys);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept uppercase ASCII in keys, folding it to lowercase.
    pub uppercase_keys: bool,
}

impl ParseOptions {
    /// Creates strict options: keys must be lowercase on the wire.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables uppercase key folding.
    #[must_use]
    pub fn with_uppercase_keys(mut self, enabled: bool) -> Self {
        self.uppercase_keys = enabled;
        self
    }
}

/// The top-level type of a field value.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::FieldKind;
///
/// assert_eq!("dictionary".parse::<FieldKind>().unwrap(), FieldKind::Dictionary);
/// assert_eq!("dict".parse::<FieldKind>().unwrap(), FieldKind::Dictionary);
/// assert!("map".parse::<FieldKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Dictionary,
    List,
    Item,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Dictionary => "dictionary",
            FieldKind::List => "list",
            FieldKind::Item => "item",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dictionary" | "dict" => Ok(FieldKind::Dictionary),
            "list" => Ok(FieldKind::List),
            "item" => Ok(FieldKind::Item),
            _ => Err(Error::UnknownFieldKind(s.to_string())),
        }
    }
}

/// Where a duplicated key was found, as reported to the duplicate-key hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Dictionary,
    Parameter,
}

impl KeyContext {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            KeyContext::Dictionary => "dictionary",
            KeyContext::Parameter => "parameter",
        }
    }
}

impl fmt::Display for KeyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
