//! Byte Sequence codec: base64 between colons.

use crate::cursor::Cursor;
use crate::error::ParseError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

#[inline]
fn is_base64_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'/' | b'=')
}

/// Parses `:base64:`; the cursor sits on the opening colon.
pub(crate) fn parse_byte_sequence(cursor: &mut Cursor<'_>) -> Result<Vec<u8>, ParseError> {
    cursor.advance(1);
    let Some(length) = cursor.rest().iter().position(|&b| b == b':') else {
        return Err(ParseError::new(
            "Binary Sequence didn't contain ending ':'",
            cursor.len(),
            None,
        ));
    };

    let content = &cursor.rest()[..length];
    cursor.advance(length + 1);
    let closing = cursor.position() - 1;

    if let Some(&bad) = content.iter().find(|&&b| !is_base64_char(b)) {
        return Err(ParseError::new(
            "Binary Sequence contained disallowed character",
            closing,
            Some(bad),
        ));
    }
    STANDARD
        .decode(content)
        .map_err(|e| ParseError::new(format!("Binary Sequence failed to decode: {}", e), closing, None))
}

pub(crate) fn serialize_byte_sequence(bytes: &[u8], output: &mut String) {
    output.push(':');
    STANDARD.encode_string(bytes, output);
    output.push(':');
}
