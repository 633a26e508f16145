//! Structured Field Values wire format
//!
//! This module documents the field value grammar as implemented by this
//! library. It contains no code.
//!
//! # Overview
//!
//! A field value is one of three top-level types, chosen by the caller (the
//! bytes alone do not say which):
//!
//! - **List**: comma-separated items and inner lists
//! - **Dictionary**: comma-separated `key=value` members
//! - **Item**: a single bare item with parameters
//!
//! Spaces around the whole value are discarded. Between list and dictionary
//! members, spaces and horizontal tabs are allowed on both sides of the comma.
//!
//! # Bare Items
//!
//! The first byte decides the type:
//!
//! | First byte | Type | Example |
//! |------------|------|---------|
//! | `-` or DIGIT | Integer or Decimal | `42`, `-1.5` |
//! | `"` | String | `"hello \"world\""` |
//! | ALPHA or `*` | Token | `text/html`, `*foo` |
//! | `:` | Byte Sequence | `:aGVsbG8=:` |
//! | `?` | Boolean | `?1`, `?0` |
//! | `@` | Date | `@1659578233` |
//! | `%` | Display String | `%"caf%c3%a9"` |
//!
//! ## Numbers
//!
//! - Integers have at most 15 digits, so the range is
//!   `-999999999999999..=999999999999999`
//! - Decimals have at most 12 integer digits and 1 to 3 fractional digits
//! - No exponent, no leading `+`, no leading `.`, no trailing `.`
//!
//! On output, a decimal is rounded to three fractional digits (ties to even)
//! and trailing zeros are dropped, keeping at least one: `1.50` becomes `1.5`
//! and `2` becomes `2.0`.
//!
//! ## Strings
//!
//! Printable ASCII (0x20-0x7E) only. Inside the quotes, `\"` and `\\` are the
//! only escapes.
//!
//! ## Tokens
//!
//! Start with a letter or `*`, continue with tchar, `:` or `/`. Tokens are a
//! distinct type from strings: `foo` and `"foo"` are different values.
//!
//! ## Byte Sequences
//!
//! Standard base64 between colons. Padding must be canonical and unused
//! trailing bits must be zero.
//!
//! ## Dates
//!
//! `@` followed by an integer number of seconds since the Unix epoch.
//!
//! ## Display Strings
//!
//! Unicode text. `%` and `"` and every byte outside printable ASCII are
//! percent-encoded UTF-8 with lowercase hex digits:
//!
//! ```text
//! %"f%c3%bc%c3%bc"
//! ```
//!
//! # Parameters
//!
//! Items and inner lists carry ordered `;key` or `;key=value` parameters.
//! A parameter without a value is Boolean `true`, and `true` parameters are
//! always written without one:
//!
//! ```text
//! text/html;q=0.9;level=1;secure
//! ```
//!
//! Spaces (not tabs) may follow each `;`.
//!
//! # Keys
//!
//! Start with a lowercase letter or `*`; continue with lowercase letters,
//! digits, `_`, `-`, `.` or `*`. With
//! [`ParseOptions::uppercase_keys`](crate::ParseOptions::uppercase_keys),
//! uppercase letters are accepted and folded to lowercase.
//!
//! A repeated key keeps the position of its first occurrence and takes the
//! value of the last one.
//!
//! # Inner Lists
//!
//! Parenthesized, space-separated items, with optional parameters after the
//! closing parenthesis. Only spaces separate items; tabs are rejected.
//!
//! ```text
//! ("foo" "bar");lvl=5, ("baz")
//! ```
//!
//! # Dictionaries
//!
//! Members are `key=value` where the value is an item or inner list. A member
//! written as just `key` (optionally with parameters) has the value Boolean
//! `true`, and a `true` item member is always written that way:
//!
//! ```text
//! en="Applepie", da=:w4ZibGV0w6ZydGU=:, fresh;age=2
//! ```
//!
//! # Empty Values
//!
//! Empty input parses as an empty list or dictionary but is an error for an
//! item. Serializing an empty list or dictionary is an error: the field
//! should be left out instead.
