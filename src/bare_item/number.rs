//! Integer and Decimal codecs, sharing one numeric scanner.

use crate::cursor::Cursor;
use crate::error::{ParseError, SerializeError};
use crate::value::{Decimal, MAX_INTEGER, MIN_INTEGER};
use rust_decimal::RoundingStrategy;

const MAX_INTEGER_DIGITS: usize = 15;
const MAX_DECIMAL_INTEGER_DIGITS: usize = 12;
const MAX_FRACTION_DIGITS: u32 = 3;

/// What the numeric scanner found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Number {
    Integer(i64),
    Decimal(Decimal),
}

/// Scans `-?DIGIT+` with an optional `.DIGIT{1,3}` tail.
///
/// Digit limits are enforced as each byte is read, so an overlong number
/// fails on the first byte that breaks a limit.
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> Result<Number, ParseError> {
    let negative = cursor.eat(b'-');
    match cursor.peek() {
        None => return Err(cursor.error_here("Number input lacked a number")),
        Some(byte) if !byte.is_ascii_digit() => {
            return Err(cursor.error("Number doesn't start with a DIGIT"))
        }
        Some(_) => {}
    }

    let mut mantissa: i64 = 0;
    let mut integer_digits = 0usize;
    // Some(n) once the decimal point has been read.
    let mut fraction_digits: Option<u32> = None;

    while let Some(byte) = cursor.peek() {
        match (byte, fraction_digits) {
            (b'0'..=b'9', None) => {
                if integer_digits == MAX_INTEGER_DIGITS {
                    return Err(cursor.error("Integer too long (more than 15 digits)"));
                }
                integer_digits += 1;
            }
            (b'0'..=b'9', Some(n)) => {
                if n == MAX_FRACTION_DIGITS {
                    return Err(cursor.error("Decimal fractional component too long"));
                }
                fraction_digits = Some(n + 1);
            }
            (b'.', None) => {
                if integer_digits > MAX_DECIMAL_INTEGER_DIGITS {
                    return Err(cursor.error("Decimal integer component too long"));
                }
                fraction_digits = Some(0);
                cursor.advance(1);
                continue;
            }
            _ => break,
        }
        mantissa = mantissa * 10 + i64::from(byte - b'0');
        cursor.advance(1);
    }

    if negative {
        mantissa = -mantissa;
    }
    match fraction_digits {
        None => Ok(Number::Integer(mantissa)),
        Some(0) => Err(ParseError::new(
            "Decimal ends in '.'",
            cursor.position() - 1,
            Some(b'.'),
        )),
        Some(scale) => Ok(Number::Decimal(Decimal::new(mantissa, scale))),
    }
}

pub(crate) fn serialize_integer(value: i64, output: &mut String) -> Result<(), SerializeError> {
    if !(MIN_INTEGER..=MAX_INTEGER).contains(&value) {
        return Err(SerializeError::IntegerOutOfRange(value));
    }
    output.push_str(&value.to_string());
    Ok(())
}

/// Writes a decimal rounded to three fractional digits, ties to even.
///
/// Trailing zeros are dropped but at least one fractional digit remains.
pub(crate) fn serialize_decimal(value: Decimal, output: &mut String) -> Result<(), SerializeError> {
    let rounded = value.round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointNearestEven);
    if rounded.trunc().abs() > Decimal::from(999_999_999_999_i64) {
        return Err(SerializeError::DecimalOutOfRange(value.to_string()));
    }
    let text = rounded.normalize().to_string();
    output.push_str(&text);
    if !text.contains('.') {
        output.push_str(".0");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn scan(input: &str) -> Result<(Number, usize), ParseError> {
        let mut cursor = Cursor::new(input.as_bytes());
        let number = parse_number(&mut cursor)?;
        Ok((number, cursor.position()))
    }

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn test_integer_limits() {
        assert_eq!(scan("999999999999999").unwrap().0, Number::Integer(MAX_INTEGER));
        assert_eq!(scan("-999999999999999").unwrap().0, Number::Integer(MIN_INTEGER));

        let err = scan("1000000000000000").unwrap_err();
        assert_eq!(err.position, 15);
        assert_eq!(err.offending_byte, Some(b'0'));
    }

    #[test]
    fn test_integer_stops_at_non_digit() {
        assert_eq!(scan("42;a").unwrap(), (Number::Integer(42), 2));
        assert_eq!(scan("-0").unwrap(), (Number::Integer(0), 2));
        assert_eq!(scan("007").unwrap(), (Number::Integer(7), 3));
    }

    #[test]
    fn test_decimal_limits() {
        assert_eq!(scan("1.1").unwrap().0, Number::Decimal(dec("1.1")));
        assert_eq!(
            scan("123456789012.123").unwrap().0,
            Number::Decimal(dec("123456789012.123"))
        );
        assert_eq!(scan("-0.5").unwrap().0, Number::Decimal(dec("-0.5")));

        let err = scan("1234567890123.1").unwrap_err();
        assert_eq!(err.position, 13);
        assert_eq!(err.offending_byte, Some(b'.'));

        let err = scan("1.1234").unwrap_err();
        assert_eq!(err.message, "Decimal fractional component too long");
        assert_eq!(err.position, 5);
    }

    #[test]
    fn test_decimal_needs_fraction_digit() {
        let err = scan("1.").unwrap_err();
        assert_eq!(err.message, "Decimal ends in '.'");
        assert_eq!(err.position, 1);

        // The second point ends the number.
        assert_eq!(scan("1.5.2").unwrap(), (Number::Decimal(dec("1.5")), 3));
    }

    #[test]
    fn test_sign_without_digits() {
        let err = scan("-").unwrap_err();
        assert_eq!(err.message, "Number input lacked a number");
        let err = scan("-a").unwrap_err();
        assert_eq!(err.offending_byte, Some(b'a'));
        assert_eq!(err.position, 1);
    }

    #[test]
    fn test_serialize_integer_range() {
        let mut out = String::new();
        serialize_integer(-42, &mut out).unwrap();
        assert_eq!(out, "-42");
        assert_eq!(
            serialize_integer(1_000_000_000_000_000, &mut out),
            Err(SerializeError::IntegerOutOfRange(1_000_000_000_000_000))
        );
    }

    #[test]
    fn test_serialize_decimal_canonical() {
        let cases = [
            ("1", "1.0"),
            ("1.50", "1.5"),
            ("-0.25", "-0.25"),
            ("0.0005", "0.0"),
            ("0.0015", "0.002"),
            ("-0.0", "0.0"),
            ("999999999999.999", "999999999999.999"),
        ];
        for (input, expected) in cases {
            let mut out = String::new();
            serialize_decimal(dec(input), &mut out).unwrap();
            assert_eq!(out, expected, "serializing {}", input);
        }
    }

    #[test]
    fn test_serialize_decimal_out_of_range() {
        let mut out = String::new();
        assert!(serialize_decimal(dec("1000000000000.0"), &mut out).is_err());
        // Rounds up past the limit.
        assert!(serialize_decimal(dec("999999999999.9999"), &mut out).is_err());
    }
}
