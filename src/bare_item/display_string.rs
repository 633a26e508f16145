//! Display String codec: `%"..."` with lowercase percent-escaped UTF-8.

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::value::DisplayString;

#[inline]
fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// Parses a display string; the cursor sits on the `%`.
pub(crate) fn parse_display_string(cursor: &mut Cursor<'_>) -> Result<DisplayString, ParseError> {
    if !cursor.rest().starts_with(b"%\"") {
        return Err(cursor.error("Display string does not start with %\""));
    }
    cursor.advance(2);

    let mut octets = Vec::new();
    loop {
        let Some(byte) = cursor.peek() else {
            return Err(cursor.error_here("Reached end of input without finding a closing DQUOTE"));
        };
        match byte {
            b'%' => {
                cursor.advance(1);
                let escape = cursor.rest();
                if escape.len() < 2 {
                    return Err(cursor.error_here("Incomplete percent encoding"));
                }
                let (high, low) = (escape[0], escape[1]);
                if high.is_ascii_uppercase() || low.is_ascii_uppercase() {
                    return Err(ParseError::new("Uppercase percent encoding", cursor.position(), Some(high)));
                }
                match (hex_value(high), hex_value(low)) {
                    (Some(h), Some(l)) => octets.push((h << 4) | l),
                    _ => {
                        return Err(ParseError::new("Invalid percent encoding", cursor.position(), Some(high)))
                    }
                }
                cursor.advance(2);
            }
            b'"' => {
                cursor.advance(1);
                return String::from_utf8(octets)
                    .map(DisplayString::new)
                    .map_err(|_| ParseError::new("Invalid UTF-8", cursor.position() - 1, None));
            }
            0x20..=0x7e => {
                octets.push(byte);
                cursor.advance(1);
            }
            _ => return Err(cursor.error("String contains disallowed character")),
        }
    }
}

/// Writes a display string. Only `%`, `"` and bytes outside printable ASCII
/// are escaped.
pub(crate) fn serialize_display_string(value: &DisplayString, output: &mut String) {
    output.push_str("%\"");
    for &byte in value.as_str().as_bytes() {
        if byte == b'%' || byte == b'"' || !(0x20..=0x7e).contains(&byte) {
            output.push_str(&format!("%{:02x}", byte));
        } else {
            output.push(byte as char);
        }
    }
    output.push('"');
}
