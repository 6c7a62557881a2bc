//! RFC 3339 date-time parsing.
//!
//! A single template of tokens drives the scanner through
//! `YYYY-MM-DDTHH:MM:SS[.fraction](Z|±HH:MM)`. Each field's width and bound
//! comes from one table keyed by [`FieldTag`], so every field shares the same
//! digit loop and the same range check.
//!
//! A field is validated once its terminating literal has been matched, or
//! just before the next token when no literal follows it. This keeps the
//! error order stable: `1066-` is out of range, `1999-012-` is malformed.

use crate::codec::primitives::Scanner;
use crate::error::ParseError;
use crate::limits::{MAX_FRACTION_DIGITS, MAX_NANOS, MAX_YEAR, MIN_YEAR};
use crate::model::{CalendarTime, FieldTag, Timestamp};
use crate::validate::{check_range, max_day_of_month};

const SECONDS_PER_MINUTE: i32 = 60;
const SECONDS_PER_HOUR: i32 = 3600;

/// One position of the scan template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// Digits of a field, width taken from the field table.
    Field(FieldTag),
    /// A separator that must appear verbatim.
    Literal(u8),
    /// Optional `.` followed by the fraction field.
    Fraction,
    /// `Z`, or a sign switching to [`NUMERIC_OFFSET`].
    Zone,
}

const DATE_TIME: &[Token] = &[
    Token::Field(FieldTag::Year),
    Token::Literal(b'-'),
    Token::Field(FieldTag::Month),
    Token::Literal(b'-'),
    Token::Field(FieldTag::Day),
    Token::Literal(b'T'),
    Token::Field(FieldTag::Hour),
    Token::Literal(b':'),
    Token::Field(FieldTag::Minute),
    Token::Literal(b':'),
    Token::Field(FieldTag::Second),
    Token::Fraction,
    Token::Zone,
];

const NUMERIC_OFFSET: &[Token] = &[
    Token::Field(FieldTag::OffsetHour),
    Token::Literal(b':'),
    Token::Field(FieldTag::OffsetMinute),
];

/// Number of digits a field occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    Fixed(usize),
    /// `min` required digits, then optional digits padded with zeros up to `max`.
    Variable { min: usize, max: usize },
}

/// Accepted values of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Range { min: u64, max: u64 },
    /// `1..=max_day_of_month(year, month)`; year and month must already be set.
    DayOfMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldSpec {
    width: Width,
    bound: Bound,
}

const fn range(width: Width, min: u64, max: u64) -> FieldSpec {
    FieldSpec {
        width,
        bound: Bound::Range { min, max },
    }
}

fn field_spec(tag: FieldTag) -> FieldSpec {
    use Width::*;

    match tag {
        FieldTag::Year => range(Fixed(4), MIN_YEAR as u64, MAX_YEAR as u64),
        FieldTag::Month => range(Fixed(2), 1, 12),
        FieldTag::Day => FieldSpec {
            width: Fixed(2),
            bound: Bound::DayOfMonth,
        },
        FieldTag::Hour => range(Fixed(2), 0, 23),
        FieldTag::Minute => range(Fixed(2), 0, 59),
        // Leap second accepted, not checked against any table
        FieldTag::Second => range(Fixed(2), 0, 60),
        FieldTag::Fraction => range(
            Variable {
                min: 1,
                max: MAX_FRACTION_DIGITS,
            },
            0,
            MAX_NANOS as u64,
        ),
        FieldTag::OffsetHour => range(Fixed(2), 0, 23),
        FieldTag::OffsetMinute => range(Fixed(2), 0, 59),
    }
}

fn literal_name(byte: u8) -> &'static str {
    match byte {
        b'-' => "'-'",
        b'T' => "'T'",
        b':' => "':'",
        b'.' => "'.'",
        _ => "separator",
    }
}

/// Working state of one parse call.
struct Parser<'a> {
    scanner: Scanner<'a>,
    calendar: CalendarTime,
    nanos: u32,
    offset_hour: i32,
    offset_minute: i32,
    negative_offset: bool,
    /// Field scanned but not yet validated.
    pending: Option<(FieldTag, u64)>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            scanner: Scanner::new(input),
            calendar: CalendarTime {
                year: 0,
                month: 0,
                day: 0,
                hour: 0,
                minute: 0,
                second: 0,
                utc_offset_seconds: 0,
            },
            nanos: 0,
            offset_hour: 0,
            offset_minute: 0,
            negative_offset: false,
            pending: None,
        }
    }

    fn run(&mut self, pattern: &[Token]) -> Result<(), ParseError> {
        for &token in pattern {
            match token {
                Token::Field(tag) => {
                    let value = self.scan_field(tag)?;
                    self.pending = Some((tag, value));
                }
                Token::Literal(byte) => {
                    self.scanner.expect_literal(byte, literal_name(byte))?;
                    self.commit()?;
                }
                Token::Fraction => {
                    self.commit()?;
                    if self.scanner.eat(b'.') {
                        let value = self.scan_field(FieldTag::Fraction)?;
                        self.pending = Some((FieldTag::Fraction, value));
                    }
                }
                Token::Zone => {
                    self.commit()?;
                    self.scan_zone()?;
                }
            }
        }
        self.commit()
    }

    fn scan_field(&mut self, tag: FieldTag) -> Result<u64, ParseError> {
        let mut value = 0;
        match field_spec(tag).width {
            Width::Fixed(digits) => {
                for _ in 0..digits {
                    self.scanner.accumulate_digit(&mut value)?;
                }
            }
            Width::Variable { min, max } => {
                for _ in 0..min {
                    self.scanner.accumulate_digit(&mut value)?;
                }
                for _ in min..max {
                    self.scanner.accumulate_optional_digit(&mut value);
                }
            }
        }
        Ok(value)
    }

    fn scan_zone(&mut self) -> Result<(), ParseError> {
        if self.scanner.eat(b'Z') {
            return Ok(());
        }
        if self.scanner.eat(b'-') {
            self.negative_offset = true;
        } else if !self.scanner.eat(b'+') {
            return Err(self.scanner.malformed("'Z', '+' or '-'"));
        }
        self.run(NUMERIC_OFFSET)
    }

    /// Validates the pending field and stores it.
    fn commit(&mut self) -> Result<(), ParseError> {
        let Some((tag, value)) = self.pending.take() else {
            return Ok(());
        };

        let (min, max) = match field_spec(tag).bound {
            Bound::Range { min, max } => (min, max),
            Bound::DayOfMonth => (
                1,
                max_day_of_month(self.calendar.year, self.calendar.month) as u64,
            ),
        };
        let value = check_range(tag, value, min, max)?;

        // Range-checked above, so the narrowing casts are lossless
        match tag {
            FieldTag::Year => self.calendar.year = value as u16,
            FieldTag::Month => self.calendar.month = value as u8,
            FieldTag::Day => self.calendar.day = value as u8,
            FieldTag::Hour => self.calendar.hour = value as u8,
            FieldTag::Minute => self.calendar.minute = value as u8,
            FieldTag::Second => self.calendar.second = value as u8,
            FieldTag::Fraction => self.nanos = value as u32,
            FieldTag::OffsetHour => self.offset_hour = value as i32,
            FieldTag::OffsetMinute => self.offset_minute = value as i32,
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Timestamp, ParseError> {
        if !self.scanner.is_empty() {
            return Err(ParseError::TrailingData {
                position: self.scanner.position(),
                remaining: self.scanner.remaining_len(),
            });
        }

        let magnitude = self.offset_hour * SECONDS_PER_HOUR + self.offset_minute * SECONDS_PER_MINUTE;
        self.calendar.utc_offset_seconds = if self.negative_offset {
            -magnitude
        } else {
            magnitude
        };

        Ok(Timestamp {
            calendar: self.calendar,
            nanos: self.nanos,
        })
    }
}

/// Parses an RFC 3339 date-time string.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS[.f{1,9}](Z|±HH:MM)` and nothing else.
/// Fractions shorter than nine digits are right-padded (`.5` is 500ms).
///
/// # Errors
///
/// - [`ParseError::MalformedSyntax`] for a wrong separator or a missing digit
/// - [`ParseError::OutOfRange`] for a field outside its bound, including a
///   day past the end of its month
/// - [`ParseError::TrailingData`] when input remains after a complete match
pub fn parse(input: &str) -> Result<Timestamp, ParseError> {
    parse_bytes(input.as_bytes())
}

/// Parses an RFC 3339 date-time from raw bytes. See [`parse`].
pub fn parse_bytes(input: &[u8]) -> Result<Timestamp, ParseError> {
    let mut parser = Parser::new(input);
    parser.run(DATE_TIME)?;
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn code(input: &str) -> ErrorCode {
        parse(input).unwrap_err().code()
    }

    #[test]
    fn test_parse_basic() {
        let ts = parse("1996-12-19T16:39:57.001-08:00").unwrap();
        assert_eq!(
            ts.calendar,
            CalendarTime {
                year: 1996,
                month: 12,
                day: 19,
                hour: 16,
                minute: 39,
                second: 57,
                utc_offset_seconds: -28_800,
            }
        );
        assert_eq!(ts.nanos, 1_000_000);
        assert_eq!(ts.unix_seconds(), 851_042_397);
    }

    #[test]
    fn test_parse_utc() {
        let ts = parse("1996-12-20T00:39:57.001Z").unwrap();
        assert_eq!(ts.nanos, 1_000_000);
        assert_eq!(ts.calendar.utc_offset_seconds, 0);
        assert_eq!(ts.unix_seconds(), 851_042_397);

        let ts = parse("1996-12-20T00:39:57Z").unwrap();
        assert_eq!(ts.nanos, 0);
        assert_eq!(ts.unix_seconds(), 851_042_397);
    }

    #[test]
    fn test_fraction_padding() {
        assert_eq!(parse("2000-01-01T00:00:00.5Z").unwrap().nanos, 500_000_000);
        assert_eq!(parse("2000-01-01T00:00:00.000048Z").unwrap().nanos, 48_000);
        assert_eq!(parse("2000-01-01T00:00:00.123456789Z").unwrap().nanos, 123_456_789);
        assert_eq!(parse("2000-01-01T00:00:00.000000001Z").unwrap().nanos, 1);
    }

    #[test]
    fn test_fraction_too_long() {
        let err = parse("2000-01-01T00:00:00.1234567890Z").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedSyntax {
                position: 29,
                expected: "'Z', '+' or '-'",
                found: Some(b'0'),
            }
        );
    }

    #[test]
    fn test_positive_offset() {
        let ts = parse("2022-08-24T20:27:00.000048+03:00").unwrap();
        assert_eq!(ts.calendar.utc_offset_seconds, 10_800);
        let ts = parse("2022-08-24T20:27:00+23:59").unwrap();
        assert_eq!(ts.calendar.utc_offset_seconds, 23 * 3600 + 59 * 60);
        let ts = parse("2022-08-24T20:27:00-00:30").unwrap();
        assert_eq!(ts.calendar.utc_offset_seconds, -1800);
    }

    #[test]
    fn test_year_errors() {
        assert_eq!(code(""), ErrorCode::MalformedSyntax);
        assert_eq!(code("01066-..."), ErrorCode::MalformedSyntax);
        assert_eq!(code("106a-"), ErrorCode::MalformedSyntax);
        assert_eq!(code("1066-..."), ErrorCode::OutOfRange);
        assert_eq!(
            parse("1899-12-31T23:59:59Z").unwrap_err(),
            ParseError::OutOfRange {
                field: FieldTag::Year,
                value: 1899,
                min: 1900,
                max: 9999,
            }
        );
    }

    #[test]
    fn test_month_errors() {
        assert_eq!(code("1999-012-..."), ErrorCode::MalformedSyntax);
        assert_eq!(code("1999-13-..."), ErrorCode::OutOfRange);
        assert_eq!(code("1999-00-01T"), ErrorCode::OutOfRange);
    }

    #[test]
    fn test_day_errors() {
        assert_eq!(code("1999-10-012t..."), ErrorCode::MalformedSyntax);
        assert_eq!(code("1999-10-32T..."), ErrorCode::OutOfRange);
        assert_eq!(code("1999-10-01-..."), ErrorCode::MalformedSyntax);
        assert_eq!(code("1999-01-00T"), ErrorCode::OutOfRange);
        assert_eq!(code("1999-10-01t00:00:00Z"), ErrorCode::MalformedSyntax);
    }

    #[test]
    fn test_day_past_month_end() {
        let cases = [
            "1999-01-32T",
            "1999-02-29T",
            "2000-02-30T",
            "1999-03-32T",
            "1999-04-31T",
            "1999-05-32T",
            "1999-06-31T",
            "1999-07-32T",
            "1999-08-32T",
            "1999-09-31T",
            "1999-10-32T",
            "1999-11-31T",
            "1999-12-32T",
        ];
        for input in cases {
            assert!(
                matches!(
                    parse(input),
                    Err(ParseError::OutOfRange {
                        field: FieldTag::Day,
                        ..
                    })
                ),
                "expected day out of range for {}",
                input
            );
        }
    }

    #[test]
    fn test_time_errors() {
        assert_eq!(code("1999-10-20T012:..."), ErrorCode::MalformedSyntax);
        assert_eq!(code("1999-10-20T24:..."), ErrorCode::OutOfRange);
        assert_eq!(code("1999-10-20T11:012:..."), ErrorCode::MalformedSyntax);
        assert_eq!(code("1999-10-20T11:60:..."), ErrorCode::OutOfRange);
        assert_eq!(code("1999-10-20T11:22:012Z"), ErrorCode::MalformedSyntax);
        assert_eq!(code("1999-10-20T11:22:61Z"), ErrorCode::OutOfRange);
        assert_eq!(code("1999-10-20T11:22:60.Z"), ErrorCode::MalformedSyntax);
        assert_eq!(code("1999-10-20T11:22:60"), ErrorCode::MalformedSyntax);
    }

    #[test]
    fn test_leap_second_accepted() {
        let ts = parse("1998-12-31T23:59:60Z").unwrap();
        assert_eq!(ts.calendar.second, 60);
        // Not checked against real leap-second dates
        assert!(parse("2001-05-05T12:30:60.5+02:00").is_ok());
    }

    #[test]
    fn test_offset_errors() {
        assert_eq!(
            parse("2022-08-24T20:27:00.000048+24:00").unwrap_err(),
            ParseError::OutOfRange {
                field: FieldTag::OffsetHour,
                value: 24,
                min: 0,
                max: 23,
            }
        );
        assert_eq!(
            parse("2022-08-24T20:27:00.000048+23:60").unwrap_err(),
            ParseError::OutOfRange {
                field: FieldTag::OffsetMinute,
                value: 60,
                min: 0,
                max: 59,
            }
        );
        assert_eq!(code("2022-08-24T20:27:00+0300"), ErrorCode::MalformedSyntax);
        assert_eq!(code("2022-08-24T20:27:00+03:0"), ErrorCode::MalformedSyntax);
        assert_eq!(code("2022-08-24T20:27:00z"), ErrorCode::MalformedSyntax);
    }

    #[test]
    fn test_trailing_data() {
        assert_eq!(
            parse("2022-08-24T20:27:00.000048+03:00!").unwrap_err(),
            ParseError::TrailingData {
                position: 32,
                remaining: 1,
            }
        );
        assert_eq!(code("2022-08-24T20:27:00Z "), ErrorCode::TrailingData);
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(code("１９９９-01-01T00:00:00Z"), ErrorCode::MalformedSyntax);
        assert!(parse_bytes(&[0xff, b'9', b'9', b'9']).is_err());
    }
}
