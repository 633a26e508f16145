//! Date codec: `@` followed by integer seconds.

use super::number::{parse_number, serialize_integer, Number};
use crate::cursor::Cursor;
use crate::error::{ParseError, SerializeError};

/// Parses a date; the cursor sits on the `@`.
pub(crate) fn parse_date(cursor: &mut Cursor<'_>) -> Result<i64, ParseError> {
    cursor.advance(1);
    match parse_number(cursor)? {
        Number::Integer(seconds) => Ok(seconds),
        Number::Decimal(_) => Err(cursor.error_here("Non-integer Date")),
    }
}

pub(crate) fn serialize_date(seconds: i64, output: &mut String) -> Result<(), SerializeError> {
    output.push('@');
    serialize_integer(seconds, output).map_err(|_| SerializeError::DateOutOfRange(seconds))
}
