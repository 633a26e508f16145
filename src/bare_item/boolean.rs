//! Boolean codec: `?1` / `?0`.

use crate::cursor::Cursor;
use crate::error::ParseError;

/// Parses a boolean; the cursor sits on the `?`.
pub(crate) fn parse_boolean(cursor: &mut Cursor<'_>) -> Result<bool, ParseError> {
    let value = match cursor.rest().get(1) {
        Some(b'1') => true,
        Some(b'0') => false,
        _ => return Err(cursor.error_here("No Boolean value found")),
    };
    cursor.advance(2);
    Ok(value)
}

pub(crate) fn serialize_boolean(value: bool, output: &mut String) {
    output.push_str(if value { "?1" } else { "?0" });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boolean() {
        let mut cursor = Cursor::new(b"?1;a");
        assert!(parse_boolean(&mut cursor).unwrap());
        assert_eq!(cursor.position(), 2);

        let mut cursor = Cursor::new(b"?0");
        assert!(!parse_boolean(&mut cursor).unwrap());

        for bad in [&b"?"[..], b"?2", b"?true"] {
            let mut cursor = Cursor::new(bad);
            let err = parse_boolean(&mut cursor).unwrap_err();
            assert_eq!(err.message, "No Boolean value found");
            assert_eq!(err.position, 0);
        }
    }
}
