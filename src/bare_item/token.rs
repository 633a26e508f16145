//! Token codec.

use crate::cursor::Cursor;
use crate::error::SerializeError;
use crate::value::Token;

#[inline]
pub(crate) fn is_token_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'*'
}

#[inline]
fn is_token_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b':' | b'/' | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
                | b'^' | b'_' | b'`' | b'|' | b'~'
        )
}

/// Consumes a token greedily. The dispatcher has already checked the first
/// byte, so this cannot fail.
pub(crate) fn parse_token(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.position();
    cursor.advance(1);
    while cursor.peek().is_some_and(is_token_char) {
        cursor.advance(1);
    }
    let bytes = cursor.slice(start, cursor.position());
    Token::new(bytes.iter().map(|&b| b as char).collect::<String>())
}

pub(crate) fn serialize_token(token: &Token, output: &mut String) -> Result<(), SerializeError> {
    let bytes = token.as_str().as_bytes();
    let valid = bytes.first().is_some_and(|&b| is_token_start(b)) && bytes.iter().all(|&b| is_token_char(b));
    if !valid {
        return Err(SerializeError::InvalidToken(token.to_string()));
    }
    output.push_str(token.as_str());
    Ok(())
}
