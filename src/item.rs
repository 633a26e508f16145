//! Items and inner lists.

use crate::bare_item::{parse_bare_item, serialize_bare_item};
use crate::cursor::Cursor;
use crate::error::{ParseError, SerializeError};
use crate::key::discard_sp;
use crate::parameters::{parse_parameters, serialize_parameters};
use crate::parser::ParseContext;
use crate::value::{InnerList, Item, ListEntry};

pub(crate) fn parse_item(cursor: &mut Cursor<'_>, ctx: &mut ParseContext<'_, '_>) -> Result<Item, ParseError> {
    let bare_item = parse_bare_item(cursor)?;
    let params = parse_parameters(cursor, ctx)?;
    Ok(Item { bare_item, params })
}

/// Parses `( item *( SP item ) )` plus trailing parameters; the cursor sits on
/// the opening parenthesis.
pub(crate) fn parse_inner_list(
    cursor: &mut Cursor<'_>,
    ctx: &mut ParseContext<'_, '_>,
) -> Result<InnerList, ParseError> {
    cursor.advance(1);
    let mut items = Vec::new();
    loop {
        discard_sp(cursor);
        match cursor.peek() {
            None => return Err(cursor.error_here("End of inner list not found")),
            Some(b')') => {
                cursor.advance(1);
                let params = parse_parameters(cursor, ctx)?;
                return Ok(InnerList { items, params });
            }
            Some(_) => {}
        }

        items.push(parse_item(cursor, ctx)?);

        match cursor.peek() {
            Some(b' ' | b')') => {}
            None => return Err(cursor.error_here("End of inner list not found")),
            Some(_) => return Err(cursor.error("Inner list bad delimitation")),
        }
    }
}

pub(crate) fn parse_item_or_inner_list(
    cursor: &mut Cursor<'_>,
    ctx: &mut ParseContext<'_, '_>,
) -> Result<ListEntry, ParseError> {
    if cursor.at(b'(') {
        parse_inner_list(cursor, ctx).map(ListEntry::InnerList)
    } else {
        parse_item(cursor, ctx).map(ListEntry::Item)
    }
}

pub(crate) fn serialize_item(item: &Item, output: &mut String) -> Result<(), SerializeError> {
    serialize_bare_item(&item.bare_item, output)?;
    serialize_parameters(&item.params, output)
}

pub(crate) fn serialize_inner_list(list: &InnerList, output: &mut String) -> Result<(), SerializeError> {
    output.push('(');
    for (i, item) in list.items.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        serialize_item(item, output)?;
    }
    output.push(')');
    serialize_parameters(&list.params, output)
}

pub(crate) fn serialize_list_entry(entry: &ListEntry, output: &mut String) -> Result<(), SerializeError> {
    match entry {
        ListEntry::Item(item) => serialize_item(item, output),
        ListEntry::InnerList(list) => serialize_inner_list(list, output),
    }
}
