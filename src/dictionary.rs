//! Top-level dictionaries: comma-separated `key[=value]` members.

use crate::cursor::Cursor;
use crate::error::{ParseError, SerializeError};
use crate::item::{parse_item_or_inner_list, serialize_inner_list, serialize_item};
use crate::key::{discard_ows, parse_key, serialize_key};
use crate::map::Dictionary;
use crate::options::KeyContext;
use crate::parameters::{parse_parameters, serialize_parameters};
use crate::parser::ParseContext;
use crate::value::{BareItem, DictMember, ListEntry};

pub(crate) fn parse_dictionary(
    cursor: &mut Cursor<'_>,
    ctx: &mut ParseContext<'_, '_>,
) -> Result<Dictionary, ParseError> {
    let mut dict = Dictionary::new();
    while cursor.has_data() {
        let key = parse_key(cursor, ctx.options)?;
        let member = parse_member(cursor, ctx).map_err(|e| e.in_context(&key))?;
        if dict.contains_key(&key) {
            ctx.report_duplicate(cursor, &key, KeyContext::Dictionary)?;
        }
        dict.insert(key.clone(), member);

        discard_ows(cursor);
        if !cursor.has_data() {
            break;
        }
        if !cursor.eat(b',') {
            return Err(cursor.error(format!("Dictionary member '{}' has trailing characters", key)));
        }
        discard_ows(cursor);
        if !cursor.has_data() {
            return Err(cursor.error_here("Dictionary has trailing comma"));
        }
    }
    Ok(dict)
}

fn parse_member(cursor: &mut Cursor<'_>, ctx: &mut ParseContext<'_, '_>) -> Result<DictMember, ParseError> {
    if !cursor.eat(b'=') {
        return parse_parameters(cursor, ctx).map(DictMember::Flag);
    }
    Ok(match parse_item_or_inner_list(cursor, ctx)? {
        ListEntry::Item(item) => DictMember::Item(item),
        ListEntry::InnerList(list) => DictMember::InnerList(list),
    })
}

/// Writes members joined by `", "`. Members whose value is Boolean `true` use
/// the bare-key form. An empty dictionary is an error.
pub(crate) fn serialize_dictionary(dict: &Dictionary, output: &mut String) -> Result<(), SerializeError> {
    if dict.is_empty() {
        return Err(SerializeError::EmptyField);
    }
    for (i, (key, member)) in dict.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        serialize_key(key, output)?;
        match member {
            DictMember::Flag(params) => serialize_parameters(params, output)?,
            DictMember::Item(item) if item.bare_item == BareItem::Boolean(true) => {
                serialize_parameters(&item.params, output)?
            }
            DictMember::Item(item) => {
                output.push('=');
                serialize_item(item, output)?;
            }
            DictMember::InnerList(list) => {
                output.push('=');
                serialize_inner_list(list, output)?;
            }
        }
    }
    Ok(())
}
