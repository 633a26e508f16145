//! Top-level lists: comma-separated items and inner lists.

use crate::cursor::Cursor;
use crate::error::{ParseError, SerializeError};
use crate::item::{parse_item_or_inner_list, serialize_list_entry};
use crate::key::discard_ows;
use crate::parser::ParseContext;
use crate::value::List;

pub(crate) fn parse_list(cursor: &mut Cursor<'_>, ctx: &mut ParseContext<'_, '_>) -> Result<List, ParseError> {
    let mut list = List::new();
    while cursor.has_data() {
        list.push(parse_item_or_inner_list(cursor, ctx)?);
        discard_ows(cursor);
        if !cursor.has_data() {
            break;
        }
        if !cursor.eat(b',') {
            return Err(cursor.error("Trailing text after item in list"));
        }
        discard_ows(cursor);
        if !cursor.has_data() {
            return Err(cursor.error_here("Trailing comma at end of list"));
        }
    }
    Ok(list)
}

/// Writes members joined by `", "`. An empty list is an error: the field
/// should be omitted instead.
pub(crate) fn serialize_list(list: &List, output: &mut String) -> Result<(), SerializeError> {
    if list.is_empty() {
        return Err(SerializeError::EmptyField);
    }
    for (i, entry) in list.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        serialize_list_entry(entry, output)?;
    }
    Ok(())
}
