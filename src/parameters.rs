//! Parameters: `;key[=bare-item]` runs after an item or inner list.

use crate::bare_item::{parse_bare_item, serialize_bare_item};
use crate::cursor::Cursor;
use crate::error::{ParseError, SerializeError};
use crate::key::{discard_sp, parse_key, serialize_key};
use crate::map::Parameters;
use crate::options::KeyContext;
use crate::parser::ParseContext;
use crate::value::BareItem;

/// Parses parameters until the next byte is not `;`.
///
/// A key without `=` gets Boolean `true`. Repeated keys are reported to the
/// duplicate-key hook before the later value replaces the earlier one.
pub(crate) fn parse_parameters(
    cursor: &mut Cursor<'_>,
    ctx: &mut ParseContext<'_, '_>,
) -> Result<Parameters, ParseError> {
    let mut params = Parameters::new();
    while cursor.eat(b';') {
        discard_sp(cursor);
        let key = parse_key(cursor, ctx.options)?;
        let value = if cursor.eat(b'=') {
            parse_bare_item(cursor).map_err(|e| e.in_context(&key))?
        } else {
            BareItem::Boolean(true)
        };
        if params.contains_key(&key) {
            ctx.report_duplicate(cursor, &key, KeyContext::Parameter)?;
        }
        params.insert(key, value);
    }
    Ok(params)
}

pub(crate) fn serialize_parameters(params: &Parameters, output: &mut String) -> Result<(), SerializeError> {
    for (key, value) in params {
        output.push(';');
        serialize_key(key, output)?;
        if *value != BareItem::Boolean(true) {
            output.push('=');
            serialize_bare_item(value, output)?;
        }
    }
    Ok(())
}
