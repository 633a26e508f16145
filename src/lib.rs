//! # sfv_codec
//!
//! A parser and serializer for HTTP Structured Field Values: the typed header
//! and trailer field syntax of RFC 9651.
//!
//! ## What are Structured Fields?
//!
//! Structured Fields give HTTP field values a small, strict grammar: lists,
//! dictionaries and items built from integers, decimals, strings, tokens, byte
//! sequences, booleans, dates and display strings, each optionally carrying
//! parameters. A field definition says which top-level type it uses; this
//! crate turns the bytes into a typed tree and back.
//!
//! ## Key Features
//!
//! - **Strict**: every grammar violation is an error, positioned at the byte
//!   where parsing stopped
//! - **Canonical output**: serialization always produces the canonical form,
//!   so parse-then-serialize normalizes a field
//! - **Ordered**: dictionary and parameter order survives a round trip
//! - **Per-call configuration**: options and the duplicate-key hook live on a
//!   [`Parser`], never in global state
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sfv_codec = "0.1"
//! ```
//!
//! ### Parsing and Serializing
//!
//! ```rust
//! use sfv_codec::{parse_list, serialize_list, BareItem};
//!
//! let list = parse_list(b"sugar,   tea;fresh=?1 , (rum \"gin\")").unwrap();
//! assert_eq!(list.len(), 3);
//!
//! let tea = list[1].as_item().unwrap();
//! assert_eq!(tea.params.get("fresh"), Some(&BareItem::Boolean(true)));
//!
//! assert_eq!(serialize_list(&list).unwrap(), "sugar, tea;fresh, (rum \"gin\")");
//! ```
//!
//! ### Dictionaries
//!
//! ```rust
//! use sfv_codec::{parse_dictionary, BareItem};
//!
//! let dict = parse_dictionary(b"a=?0, b, c;foo=bar").unwrap();
//! assert_eq!(dict.get("a").and_then(|m| m.bare_item()), Some(&BareItem::Boolean(false)));
//! assert!(dict.get("b").unwrap().is_true_flag());
//! ```
//!
//! ### Errors
//!
//! ```rust
//! use sfv_codec::parse_dictionary;
//!
//! let err = parse_dictionary(b"key1=1, key2=\x00").unwrap_err();
//! assert_eq!(err.position, 12);
//! assert_eq!(err.context.as_deref(), Some("key2"));
//! ```
//!
//! ### Building Values
//!
//! ```rust
//! use sfv_codec::{params, serialize_item, Item, Token};
//!
//! let item = Item::new(Token::new("text/html")).with_params(params! { "q" => true });
//! assert_eq!(serialize_item(&item).unwrap(), "text/html;q");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) in the input length, single pass, one byte of lookahead
//! - **Serialization**: O(n) in the size of the value tree
//!
//! ## Format
//!
//! The [`grammar`] module summarizes the wire format as implemented here.
//!
//! ## Logging
//!
//! Rejected values are reported as `tracing` events at `debug` level. The
//! library installs no subscriber.

pub mod cursor;
pub mod error;
pub mod grammar;
#[cfg(feature = "json")]
pub mod json;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

mod bare_item;
mod dictionary;
mod item;
mod key;
mod list;
mod parameters;

pub use cursor::Cursor;
pub use error::{Error, ParseError, Result, SerializeError};
pub use map::{Dictionary, KeyedMap, Parameters};
pub use options::{FieldKind, KeyContext, ParseOptions};
pub use parser::{DuplicateKeyHook, Parser};
pub use ser::Serializer;
pub use value::{
    BareItem, Decimal, DictMember, DisplayString, InnerList, Item, List, ListEntry, StructuredValue, Token,
    MAX_INTEGER, MIN_INTEGER,
};

/// Parses a field value of the given top-level kind with default options.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{parse, FieldKind};
///
/// let value = parse(b"@1659578233", FieldKind::Item).unwrap();
/// assert_eq!(value.as_item().and_then(|i| i.bare_item.as_date()), Some(1_659_578_233));
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not a valid value of that kind.
pub fn parse(input: &[u8], kind: FieldKind) -> std::result::Result<StructuredValue, ParseError> {
    Parser::new().parse(input, kind)
}

/// Parses a Dictionary field value with default options.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not a valid dictionary.
pub fn parse_dictionary(input: &[u8]) -> std::result::Result<Dictionary, ParseError> {
    Parser::new().parse_dictionary(input)
}

/// Parses a List field value with default options.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not a valid list.
pub fn parse_list(input: &[u8]) -> std::result::Result<List, ParseError> {
    Parser::new().parse_list(input)
}

/// Parses an Item field value with default options.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not a valid item. Empty input is
/// an error.
pub fn parse_item(input: &[u8]) -> std::result::Result<Item, ParseError> {
    Parser::new().parse_item(input)
}

/// Serializes a value to its canonical field value text.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{parse, serialize, FieldKind};
///
/// let value = parse(b"a=1,b=?1", FieldKind::Dictionary).unwrap();
/// assert_eq!(serialize(&value).unwrap(), "a=1, b");
/// ```
///
/// # Errors
///
/// Returns a [`SerializeError`] if the value is outside the grammar or is an
/// empty list or dictionary.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize(value: &StructuredValue) -> std::result::Result<String, SerializeError> {
    let mut serializer = Serializer::new();
    serializer.serialize_value(value)?;
    Ok(serializer.into_inner())
}

/// Serializes a Dictionary.
///
/// # Errors
///
/// Returns a [`SerializeError`] if a member is outside the grammar or the
/// dictionary is empty.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_dictionary(dict: &Dictionary) -> std::result::Result<String, SerializeError> {
    let mut serializer = Serializer::new();
    serializer.serialize_dictionary(dict)?;
    Ok(serializer.into_inner())
}

/// Serializes a List.
///
/// # Errors
///
/// Returns a [`SerializeError`] if a member is outside the grammar or the list
/// is empty.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_list(list: &List) -> std::result::Result<String, SerializeError> {
    let mut serializer = Serializer::new();
    serializer.serialize_list(list)?;
    Ok(serializer.into_inner())
}

/// Serializes an Item.
///
/// # Errors
///
/// Returns a [`SerializeError`] if the item or a parameter is outside the
/// grammar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn serialize_item(item: &Item) -> std::result::Result<String, SerializeError> {
    let mut serializer = Serializer::new();
    serializer.serialize_item(item)?;
    Ok(serializer.into_inner())
}
