//! Fixed bounds of the RFC 3339 date-time grammar.

/// Smallest year the parser accepts.
pub const MIN_YEAR: u16 = 1900;

/// Largest year representable by the four-digit year field.
pub const MAX_YEAR: u16 = 9999;

/// Maximum number of fractional-second digits (nanosecond resolution).
pub const MAX_FRACTION_DIGITS: usize = 9;

/// Largest sub-second fraction, in nanoseconds.
pub const MAX_NANOS: u32 = 999_999_999;

/// Exclusive bound on the magnitude of a UTC offset, in seconds.
pub const MAX_OFFSET_SECONDS: i32 = 86_400;

/// Length of `YYYY-MM-DDTHH:MM:SS`.
pub const DATE_TIME_LEN: usize = 19;

/// Length of `.` followed by nine fraction digits.
pub const FRACTION_LEN: usize = 1 + MAX_FRACTION_DIGITS;

/// Length of the `Z` suffix.
pub const UTC_SUFFIX_LEN: usize = 1;

/// Length of the `±HH:MM` suffix.
pub const OFFSET_SUFFIX_LEN: usize = 6;

/// Length of `YYYY-MM-DDTHH:MM:SS.fffffffffZ`.
pub const CANONICAL_UTC_LEN: usize = DATE_TIME_LEN + FRACTION_LEN + UTC_SUFFIX_LEN;

/// Length of `YYYY-MM-DDTHH:MM:SS.fffffffff±HH:MM`.
pub const CANONICAL_LOCAL_LEN: usize = DATE_TIME_LEN + FRACTION_LEN + OFFSET_SUFFIX_LEN;

/// Longest string the formatter can produce.
pub const MAX_CANONICAL_LEN: usize = CANONICAL_LOCAL_LEN;
