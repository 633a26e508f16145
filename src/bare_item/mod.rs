//! Bare item codecs and the dispatchers that route to them.
//!
//! Parsing picks a codec from the first byte:
//!
//! | first byte | codec |
//! |---|---|
//! | `"` | String |
//! | `:` | Byte Sequence |
//! | `?` | Boolean |
//! | `%` | Display String |
//! | `@` | Date |
//! | digit or `-` | Integer / Decimal |
//! | letter or `*` | Token |
//!
//! Serialization matches on the [`BareItem`] variant.

mod boolean;
mod byte_seq;
mod date;
mod display_string;
mod number;
mod string;
mod token;

use crate::cursor::Cursor;
use crate::error::{ParseError, SerializeError};
use crate::value::BareItem;
use number::Number;

pub(crate) fn parse_bare_item(cursor: &mut Cursor<'_>) -> Result<BareItem, ParseError> {
    let Some(first) = cursor.peek() else {
        return Err(cursor.error_here("Empty item"));
    };
    let item = match first {
        b'"' => BareItem::String(string::parse_string(cursor)?),
        b':' => BareItem::ByteSequence(byte_seq::parse_byte_sequence(cursor)?),
        b'?' => BareItem::Boolean(boolean::parse_boolean(cursor)?),
        b'%' => BareItem::DisplayString(display_string::parse_display_string(cursor)?),
        b'@' => BareItem::Date(date::parse_date(cursor)?),
        b'0'..=b'9' | b'-' => match number::parse_number(cursor)? {
            Number::Integer(i) => BareItem::Integer(i),
            Number::Decimal(d) => BareItem::Decimal(d),
        },
        b if token::is_token_start(b) => BareItem::Token(token::parse_token(cursor)),
        _ => return Err(cursor.error("No item starting with this character")),
    };
    Ok(item)
}

pub(crate) fn serialize_bare_item(item: &BareItem, output: &mut String) -> Result<(), SerializeError> {
    match item {
        BareItem::Integer(i) => number::serialize_integer(*i, output)?,
        BareItem::Decimal(d) => number::serialize_decimal(*d, output)?,
        BareItem::String(s) => string::serialize_string(s, output)?,
        BareItem::Token(t) => token::serialize_token(t, output)?,
        BareItem::ByteSequence(b) => byte_seq::serialize_byte_sequence(b, output),
        BareItem::Boolean(b) => boolean::serialize_boolean(*b, output),
        BareItem::Date(seconds) => date::serialize_date(*seconds, output)?,
        BareItem::DisplayString(s) => display_string::serialize_display_string(s, output),
    }
    Ok(())
}
