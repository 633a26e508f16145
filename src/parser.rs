//! Field value parsing.
//!
//! This module provides the [`Parser`], which turns the bytes of a field
//! value into a [`StructuredValue`] of a requested [`FieldKind`].
//!
//! ## Overview
//!
//! - **Single pass**: bytes are consumed left to right with one byte of
//!   lookahead; parsing is linear in the input length
//! - **Fail fast**: the first grammar violation aborts the call with a
//!   positioned [`ParseError`]; no partial value is returned
//! - **Per-call state**: every call gets its own cursor, and options live on
//!   the parser, so independent parsers can run concurrently
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use sfv_codec::parse_dictionary;
//!
//! let dict = parse_dictionary(b"a=1, b;x=?0").unwrap();
//! assert_eq!(dict.len(), 2);
//! ```
//!
//! ## Duplicate keys
//!
//! A repeated dictionary or parameter key keeps its first position and takes
//! the later value. A hook sees every repeat, in parse order, before the
//! overwrite happens:
//!
//! ```rust
//! use sfv_codec::{KeyContext, Parser};
//!
//! let mut seen = Vec::new();
//! let mut parser = Parser::new().on_duplicate_key(|key, context| {
//!     seen.push((key.to_string(), context));
//!     Ok(())
//! });
//! parser.parse_dictionary(b"a;b=1;b=2, a=3").unwrap();
//! drop(parser);
//!
//! assert_eq!(
//!     seen,
//!     vec![
//!         ("b".to_string(), KeyContext::Parameter),
//!         ("a".to_string(), KeyContext::Dictionary),
//!     ]
//! );
//! ```

use crate::cursor::Cursor;
use crate::dictionary::parse_dictionary;
use crate::error::ParseError;
use crate::item::parse_item;
use crate::key::discard_sp;
use crate::list::parse_list;
use crate::map::Dictionary;
use crate::options::{FieldKind, KeyContext, ParseOptions};
use crate::value::{Item, List, StructuredValue};

/// Callback told about each repeated key. Returning `Err(reason)` aborts the
/// parse.
pub type DuplicateKeyHook<'h> = dyn FnMut(&str, KeyContext) -> Result<(), String> + 'h;

/// State threaded alongside the cursor through every container parser.
pub(crate) struct ParseContext<'p, 'h> {
    pub(crate) options: &'p ParseOptions,
    on_duplicate_key: Option<&'p mut DuplicateKeyHook<'h>>,
}

impl<'p, 'h> ParseContext<'p, 'h> {
    pub(crate) fn new(options: &'p ParseOptions, on_duplicate_key: Option<&'p mut DuplicateKeyHook<'h>>) -> Self {
        ParseContext {
            options,
            on_duplicate_key,
        }
    }

    /// Runs the duplicate-key hook, if one is installed.
    pub(crate) fn report_duplicate(
        &mut self,
        cursor: &Cursor<'_>,
        key: &str,
        context: KeyContext,
    ) -> Result<(), ParseError> {
        let Some(hook) = self.on_duplicate_key.as_deref_mut() else {
            return Ok(());
        };
        hook(key, context).map_err(|reason| {
            ParseError::new(
                format!("Duplicate {} key rejected: {}", context, reason),
                cursor.position(),
                None,
            )
            .in_context(key)
        })
    }
}

/// The field value parser.
///
/// Holds the options and the optional duplicate-key hook for the calls made
/// through it. The input is passed per call.
///
/// # Examples
///
/// ```rust
/// use sfv_codec::{FieldKind, Parser};
///
/// let mut parser = Parser::new();
/// let value = parser.parse(b"sugar, tea, rum", FieldKind::List).unwrap();
/// assert_eq!(value.as_list().unwrap().len(), 3);
/// ```
#[derive(Default)]
pub struct Parser<'h> {
    options: ParseOptions,
    on_duplicate_key: Option<Box<DuplicateKeyHook<'h>>>,
}

impl<'h> Parser<'h> {
    /// Creates a parser with strict options and no duplicate-key hook.
    #[must_use]
    pub fn new() -> Self {
        Parser {
            options: ParseOptions::default(),
            on_duplicate_key: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Installs the duplicate-key hook.
    #[must_use]
    pub fn on_duplicate_key<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&str, KeyContext) -> Result<(), String> + 'h,
    {
        self.on_duplicate_key = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses `input` as a value of the given kind.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first grammar violation, including
    /// bytes left over after a complete value.
    pub fn parse(&mut self, input: &[u8], kind: FieldKind) -> Result<StructuredValue, ParseError> {
        match kind {
            FieldKind::Dictionary => self.parse_dictionary(input).map(StructuredValue::Dictionary),
            FieldKind::List => self.parse_list(input).map(StructuredValue::List),
            FieldKind::Item => self.parse_item(input).map(StructuredValue::Item),
        }
    }

    pub fn parse_dictionary(&mut self, input: &[u8]) -> Result<Dictionary, ParseError> {
        self.run(input, FieldKind::Dictionary, parse_dictionary)
    }

    pub fn parse_list(&mut self, input: &[u8]) -> Result<List, ParseError> {
        self.run(input, FieldKind::List, parse_list)
    }

    pub fn parse_item(&mut self, input: &[u8]) -> Result<Item, ParseError> {
        self.run(input, FieldKind::Item, parse_item)
    }

    fn run<T>(
        &mut self,
        input: &[u8],
        kind: FieldKind,
        parse_top: impl FnOnce(&mut Cursor<'_>, &mut ParseContext<'_, 'h>) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        tracing::trace!(%kind, len = input.len(), "parsing field value");

        let mut cursor = Cursor::new(input);
        let mut ctx = ParseContext::new(&self.options, self.on_duplicate_key.as_deref_mut());

        let result = (|| {
            discard_sp(&mut cursor);
            let value = parse_top(&mut cursor, &mut ctx)?;
            discard_sp(&mut cursor);
            if cursor.has_data() {
                return Err(cursor.error("Trailing characters after value (missing comma?)"));
            }
            Ok(value)
        })();

        if let Err(err) = &result {
            tracing::debug!(
                %kind,
                position = err.position,
                context = ?err.context,
                "field value rejected: {}",
                err.message
            );
        }
        result
    }
}
