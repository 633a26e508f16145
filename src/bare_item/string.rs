//! Quoted String codec.

use crate::cursor::Cursor;
use crate::error::{ParseError, SerializeError};

#[inline]
fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

/// Parses `"..."`; the cursor sits on the opening quote.
pub(crate) fn parse_string(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    cursor.advance(1);
    let mut output = String::new();
    loop {
        let Some(byte) = cursor.peek() else {
            return Err(cursor.error_here("Reached end of input without finding a closing DQUOTE"));
        };
        match byte {
            b'"' => {
                cursor.advance(1);
                return Ok(output);
            }
            b'\\' => {
                cursor.advance(1);
                match cursor.peek() {
                    None => return Err(cursor.error_here("Last character of input was a backslash")),
                    Some(escaped @ (b'"' | b'\\')) => output.push(escaped as char),
                    Some(other) => {
                        return Err(cursor.error(format!(
                            "Backslash before disallowed character '{}'",
                            other.escape_ascii()
                        )))
                    }
                }
            }
            b if is_printable(b) => output.push(b as char),
            _ => return Err(cursor.error("String contains disallowed character")),
        }
        cursor.advance(1);
    }
}

pub(crate) fn serialize_string(value: &str, output: &mut String) -> Result<(), SerializeError> {
    if let Some(bad) = value.chars().find(|&c| !c.is_ascii() || !is_printable(c as u8)) {
        return Err(SerializeError::StringDisallowedChar(bad));
    }
    output.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            output.push('\\');
        }
        output.push(c);
    }
    output.push('"');
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &[u8]) -> Result<(String, usize), ParseError> {
        let mut cursor = Cursor::new(input);
        let value = parse_string(&mut cursor)?;
        Ok((value, cursor.position()))
    }

    #[test]
    fn test_escapes() {
        assert_eq!(parse(br#""a\"b\\c" x"#).unwrap(), (r#"a"b\c"#.to_string(), 9));
        assert_eq!(parse(b"\"\"").unwrap(), (String::new(), 2));
    }

    #[test]
    fn test_error_kinds() {
        let err = parse(b"\"abc").unwrap_err();
        assert_eq!(err.message, "Reached end of input without finding a closing DQUOTE");
        assert_eq!(err.position, 4);

        let err = parse(b"\"abc\\").unwrap_err();
        assert_eq!(err.message, "Last character of input was a backslash");

        let err = parse(br#""a\n""#).unwrap_err();
        assert_eq!(err.position, 3);
        assert_eq!(err.offending_byte, Some(b'n'));

        let err = parse(b"\"a\tb\"").unwrap_err();
        assert_eq!(err.message, "String contains disallowed character");
        assert_eq!(err.position, 2);
        assert_eq!(err.offending_byte, Some(b'\t'));
    }

    #[test]
    fn test_serialize_escapes_and_rejects() {
        let mut out = String::new();
        serialize_string(r#"say "hi" \o/"#, &mut out).unwrap();
        assert_eq!(out, r#""say \"hi\" \\o/""#);

        assert_eq!(
            serialize_string("caf\u{e9}", &mut out),
            Err(SerializeError::StringDisallowedChar('\u{e9}'))
        );
        assert!(serialize_string("line\nbreak", &mut out).is_err());
    }
}
