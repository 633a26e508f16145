//! Byte cursor shared by every sub-parser.

use crate::error::ParseError;

/// A read position over an immutable input buffer.
///
/// The cursor never owns or copies the input. Sub-parsers move it strictly
/// forward; single-byte lookahead goes through [`Cursor::peek`].
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Cursor { input, position: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.position < self.input.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Returns `true` if the next byte is `byte`.
    #[inline]
    pub fn at(&self, byte: u8) -> bool {
        self.peek() == Some(byte)
    }

    /// Moves forward `n` bytes, stopping at the end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.position = (self.position + n).min(self.input.len());
    }

    /// Consumes the next byte if it equals `byte`.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.at(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// The unconsumed part of the input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.position..]
    }

    /// Bytes in `[start, end)`.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start..end]
    }

    #[inline]
    pub fn byte_at(&self, position: usize) -> Option<u8> {
        self.input.get(position).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Error at the current position, naming the byte found there if any.
    pub fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.position, self.peek())
    }

    /// Error at the current position without an offending byte.
    pub fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.position, None)
    }
}
