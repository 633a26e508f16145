//! Whitespace runs and keys.

use crate::cursor::Cursor;
use crate::error::{ParseError, SerializeError};
use crate::options::ParseOptions;

/// Skips spaces (not tabs).
pub(crate) fn discard_sp(cursor: &mut Cursor<'_>) {
    while cursor.eat(b' ') {}
}

/// Skips spaces and horizontal tabs.
pub(crate) fn discard_ows(cursor: &mut Cursor<'_>) {
    while matches!(cursor.peek(), Some(b' ' | b'\t')) {
        cursor.advance(1);
    }
}

#[inline]
fn is_key_start(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte == b'*'
}

#[inline]
fn is_key_char(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_digit() || matches!(byte, b'_' | b'-' | b'.' | b'*')
}

/// Parses a dictionary or parameter key.
///
/// With [`ParseOptions::uppercase_keys`] set, uppercase ASCII is accepted
/// anywhere a lowercase letter is and folded to lowercase.
pub(crate) fn parse_key(cursor: &mut Cursor<'_>, options: &ParseOptions) -> Result<String, ParseError> {
    let accepts = |byte: u8, first: bool| {
        let allowed = if first { is_key_start(byte) } else { is_key_char(byte) };
        allowed || (options.uppercase_keys && byte.is_ascii_uppercase())
    };

    match cursor.peek() {
        Some(byte) if accepts(byte, true) => {}
        Some(byte) if byte.is_ascii_uppercase() => {
            return Err(cursor.error("Key begins with an uppercase character (lcalpha required)"));
        }
        _ => return Err(cursor.error("Key does not begin with lcalpha or *")),
    }

    let start = cursor.position();
    cursor.advance(1);
    while cursor.peek().is_some_and(|byte| accepts(byte, false)) {
        cursor.advance(1);
    }

    let key = cursor.slice(start, cursor.position());
    Ok(key.iter().map(|b| b.to_ascii_lowercase() as char).collect())
}

/// Writes a key after checking it against the key alphabet.
pub(crate) fn serialize_key(key: &str, output: &mut String) -> Result<(), SerializeError> {
    let bytes = key.as_bytes();
    let valid = bytes.first().is_some_and(|&b| is_key_start(b)) && bytes.iter().all(|&b| is_key_char(b));
    if !valid {
        return Err(SerializeError::InvalidKey(key.to_string()));
    }
    output.push_str(key);
    Ok(())
}
