//! Calendar time, timestamp and offset mode.

use std::fmt;
use std::str::FromStr;

use crate::codec::{format, format_into, parse};
use crate::error::{FormatError, ParseError};
use crate::limits::{MAX_CANONICAL_LEN, MAX_YEAR};
use crate::util::civil::{civil_from_days, days_from_civil};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Broken-down civil time with its UTC offset.
///
/// Values are never normalized: the parser rejects out-of-range fields
/// instead of carrying them into the next unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarTime {
    pub year: u16,
    /// 1..=12
    pub month: u8,
    /// 1..=31, bounded by the month length
    pub day: u8,
    /// 0..=23
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    /// 0..=60 (60 is a leap second, accepted but not verified)
    pub second: u8,
    /// Local time minus UTC, in seconds. Zero for UTC.
    pub utc_offset_seconds: i32,
}

impl CalendarTime {
    /// Returns the instant as seconds since 1970-01-01T00:00:00Z.
    ///
    /// The offset is subtracted (local = UTC + offset). A leap second is
    /// counted as one second past `:59`.
    pub fn to_unix_seconds(&self) -> i64 {
        let days = days_from_civil(self.year as i64, self.month as u32, self.day as u32);
        days * SECONDS_PER_DAY
            + self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64
            - self.utc_offset_seconds as i64
    }

    /// Builds the civil fields of `unix_seconds` seen at `utc_offset_seconds`.
    pub fn from_unix_seconds(
        unix_seconds: i64,
        utc_offset_seconds: i32,
    ) -> Result<Self, FormatError> {
        // Saturation only happens far past year 9999, which is rejected below
        let local = unix_seconds.saturating_add(utc_offset_seconds as i64);
        let days = local.div_euclid(SECONDS_PER_DAY);
        let time_of_day = local.rem_euclid(SECONDS_PER_DAY);

        let (year, month, day) = civil_from_days(days);
        if !(0..=MAX_YEAR as i64).contains(&year) {
            return Err(FormatError::YearOutOfRange { year });
        }

        Ok(Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
            hour: (time_of_day / SECONDS_PER_HOUR) as u8,
            minute: (time_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
            second: (time_of_day % SECONDS_PER_MINUTE) as u8,
            utc_offset_seconds,
        })
    }
}

/// How the formatter renders the zone suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetMode {
    /// Literal `Z`; the calendar offset is ignored.
    Utc,
    /// Signed `±HH:MM` from `utc_offset_seconds`.
    Local,
}

/// Successful parse result: calendar fields plus the sub-second fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    pub calendar: CalendarTime,
    /// Sub-second fraction in nanoseconds (0..=999_999_999).
    pub nanos: u32,
}

impl Timestamp {
    /// Creates a timestamp from calendar fields and a nanosecond fraction.
    pub fn new(calendar: CalendarTime, nanos: u32) -> Self {
        Self { calendar, nanos }
    }

    /// Builds a timestamp from an epoch instant seen at a fixed offset.
    pub fn from_unix(
        unix_seconds: i64,
        nanos: u32,
        utc_offset_seconds: i32,
    ) -> Result<Self, FormatError> {
        let calendar = CalendarTime::from_unix_seconds(unix_seconds, utc_offset_seconds)?;
        Ok(Self { calendar, nanos })
    }

    /// Seconds since the Unix epoch, ignoring the fraction.
    pub fn unix_seconds(&self) -> i64 {
        self.calendar.to_unix_seconds()
    }

    /// `Z` for a zero offset, `±HH:MM` otherwise.
    pub fn offset_mode(&self) -> OffsetMode {
        if self.calendar.utc_offset_seconds == 0 {
            OffsetMode::Utc
        } else {
            OffsetMode::Local
        }
    }

    /// Renders the canonical string in the mode given by [`Self::offset_mode`].
    pub fn to_rfc3339(&self) -> Result<String, FormatError> {
        format(&self.calendar, self.nanos, self.offset_mode())
    }
}

/// Canonical form, `Z` for a zero offset. Fields the formatter rejects
/// (see [`FormatError`]) surface as [`fmt::Error`].
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; MAX_CANONICAL_LEN];
        let len = format_into(&self.calendar, self.nanos, self.offset_mode(), &mut buf)
            .map_err(|_| fmt::Error)?;
        let text = std::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
