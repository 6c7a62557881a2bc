//! Primitive scanning and writing for RFC 3339 text.
//!
//! The scanner walks an ASCII byte string one byte at a time; the writer
//! renders into a fixed stack buffer sized for the longest canonical form.

use crate::error::ParseError;
use crate::limits::MAX_CANONICAL_LEN;

// =============================================================================
// SCANNING
// =============================================================================

/// Cursor over the input of a single parse call.
///
/// Wraps a byte slice and provides methods for matching literals and
/// accumulating decimal digits with position-aware errors.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consumes the next byte if it equals `byte`.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Builds a syntax error at the current position.
    pub fn malformed(&self, expected: &'static str) -> ParseError {
        ParseError::MalformedSyntax {
            position: self.pos,
            expected,
            found: self.peek(),
        }
    }

    /// Consumes exactly `literal` or fails.
    #[inline]
    pub fn expect_literal(&mut self, literal: u8, expected: &'static str) -> Result<(), ParseError> {
        if self.eat(literal) {
            Ok(())
        } else {
            Err(self.malformed(expected))
        }
    }

    /// Consumes one required decimal digit into `acc`.
    #[inline]
    pub fn accumulate_digit(&mut self, acc: &mut u64) -> Result<(), ParseError> {
        match self.peek() {
            Some(b @ b'0'..=b'9') => {
                *acc = *acc * 10 + (b - b'0') as u64;
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.malformed("digit")),
        }
    }

    /// Consumes a digit into `acc` if present, otherwise shifts in an implicit zero.
    #[inline]
    pub fn accumulate_optional_digit(&mut self, acc: &mut u64) {
        match self.peek() {
            Some(b @ b'0'..=b'9') => {
                *acc = *acc * 10 + (b - b'0') as u64;
                self.pos += 1;
            }
            _ => *acc *= 10,
        }
    }
}

// =============================================================================
// WRITING
// =============================================================================

/// Fixed-capacity writer for one canonical string.
#[derive(Debug, Clone)]
pub(crate) struct Writer {
    buf: [u8; MAX_CANONICAL_LEN],
    len: usize,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self {
            buf: [0u8; MAX_CANONICAL_LEN],
            len: 0,
        }
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Writes a single byte.
    ///
    /// Panics if the canonical capacity is exceeded.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }

    /// Writes the low `width` decimal digits of `value`, zero-padded.
    #[inline]
    pub fn write_digits(&mut self, mut value: u32, width: usize) {
        let digits = &mut self.buf[self.len..self.len + width];
        for slot in digits.iter_mut().rev() {
            *slot = b'0' + (value % 10) as u8;
            value /= 10;
        }
        self.len += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_literal() {
        let mut scanner = Scanner::new(b"-T");
        assert!(scanner.expect_literal(b'-', "'-'").is_ok());
        assert_eq!(scanner.position(), 1);

        let err = scanner.expect_literal(b':', "':'").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedSyntax {
                position: 1,
                expected: "':'",
                found: Some(b'T'),
            }
        );
        // Failed match consumes nothing
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn test_accumulate_digits() {
        let mut scanner = Scanner::new(b"1999x");
        let mut value = 0;
        for _ in 0..4 {
            scanner.accumulate_digit(&mut value).unwrap();
        }
        assert_eq!(value, 1999);

        let err = scanner.accumulate_digit(&mut value).unwrap_err();
        assert!(matches!(err, ParseError::MalformedSyntax { position: 4, found: Some(b'x'), .. }));
    }

    #[test]
    fn test_accumulate_digit_at_end() {
        let mut scanner = Scanner::new(b"");
        let mut value = 0;
        let err = scanner.accumulate_digit(&mut value).unwrap_err();
        assert!(matches!(err, ParseError::MalformedSyntax { found: None, .. }));
    }

    #[test]
    fn test_optional_digit_pads() {
        let mut scanner = Scanner::new(b"5Z");
        let mut value = 0;
        scanner.accumulate_optional_digit(&mut value);
        scanner.accumulate_optional_digit(&mut value);
        scanner.accumulate_optional_digit(&mut value);
        assert_eq!(value, 500);
        assert_eq!(scanner.remaining_len(), 1);
        assert_eq!(scanner.peek(), Some(b'Z'));
    }

    #[test]
    fn test_eat() {
        let mut scanner = Scanner::new(b"Z");
        assert!(!scanner.eat(b'+'));
        assert!(scanner.eat(b'Z'));
        assert!(scanner.is_empty());
        assert_eq!(scanner.peek(), None);
    }

    #[test]
    fn test_writer_digits() {
        let mut writer = Writer::new();
        writer.write_digits(7, 4);
        writer.write_byte(b'-');
        writer.write_digits(123, 9);
        assert_eq!(writer.as_bytes(), b"0007-000000123");
    }
}
