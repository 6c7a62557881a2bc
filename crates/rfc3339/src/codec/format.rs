//! RFC 3339 date-time formatting.
//!
//! Output is always canonical: nine fraction digits and either `Z` or a
//! signed `±HH:MM` suffix. The string is rendered into a stack buffer first
//! and copied out only when the caller's buffer can hold all of it.

use crate::codec::primitives::Writer;
use crate::error::FormatError;
use crate::limits::{
    CANONICAL_LOCAL_LEN, CANONICAL_UTC_LEN, MAX_FRACTION_DIGITS, MAX_NANOS, MAX_OFFSET_SECONDS,
    MAX_YEAR,
};
use crate::model::{CalendarTime, FieldTag, OffsetMode};

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 3600;

/// Returns the exact length of the canonical string for `mode`.
pub fn canonical_len(mode: OffsetMode) -> usize {
    match mode {
        OffsetMode::Utc => CANONICAL_UTC_LEN,
        OffsetMode::Local => CANONICAL_LOCAL_LEN,
    }
}

/// Formats into a caller-owned buffer and returns the number of bytes written.
///
/// Nothing is written unless the whole canonical string fits.
///
/// # Errors
///
/// - [`FormatError::FractionOutOfRange`] if `nanos` exceeds 999,999,999
/// - [`FormatError::YearOutOfRange`] / [`FormatError::FieldTooWide`] if a
///   field does not fit its fixed width
/// - [`FormatError::OffsetOutOfRange`] / [`FormatError::OffsetNotMinuteAligned`]
///   if `mode` is [`OffsetMode::Local`] and the offset cannot be rendered
/// - [`FormatError::BufferTooSmall`] if `buf` is shorter than [`canonical_len`]
pub fn format_into(
    calendar: &CalendarTime,
    nanos: u32,
    mode: OffsetMode,
    buf: &mut [u8],
) -> Result<usize, FormatError> {
    let writer = render(calendar, nanos, mode)?;
    let bytes = writer.as_bytes();
    if buf.len() < bytes.len() {
        return Err(FormatError::BufferTooSmall {
            needed: bytes.len(),
            capacity: buf.len(),
        });
    }
    buf[..bytes.len()].copy_from_slice(bytes);
    Ok(bytes.len())
}

/// Formats into a newly allocated string. See [`format_into`].
pub fn format(calendar: &CalendarTime, nanos: u32, mode: OffsetMode) -> Result<String, FormatError> {
    let writer = render(calendar, nanos, mode)?;
    // Rendered output is ASCII
    Ok(writer.as_bytes().iter().map(|&b| b as char).collect())
}

fn render(calendar: &CalendarTime, nanos: u32, mode: OffsetMode) -> Result<Writer, FormatError> {
    if nanos > MAX_NANOS {
        return Err(FormatError::FractionOutOfRange { nanos });
    }
    if calendar.year > MAX_YEAR {
        return Err(FormatError::YearOutOfRange {
            year: calendar.year as i64,
        });
    }
    let fields = [
        (FieldTag::Month, calendar.month),
        (FieldTag::Day, calendar.day),
        (FieldTag::Hour, calendar.hour),
        (FieldTag::Minute, calendar.minute),
        (FieldTag::Second, calendar.second),
    ];
    for (field, value) in fields {
        if value > 99 {
            return Err(FormatError::FieldTooWide { field, value });
        }
    }

    let mut w = Writer::new();
    w.write_digits(calendar.year as u32, 4);
    w.write_byte(b'-');
    w.write_digits(calendar.month as u32, 2);
    w.write_byte(b'-');
    w.write_digits(calendar.day as u32, 2);
    w.write_byte(b'T');
    w.write_digits(calendar.hour as u32, 2);
    w.write_byte(b':');
    w.write_digits(calendar.minute as u32, 2);
    w.write_byte(b':');
    w.write_digits(calendar.second as u32, 2);
    w.write_byte(b'.');
    w.write_digits(nanos, MAX_FRACTION_DIGITS);

    match mode {
        OffsetMode::Utc => w.write_byte(b'Z'),
        OffsetMode::Local => write_offset(&mut w, calendar.utc_offset_seconds)?,
    }
    Ok(w)
}

/// Writes `±HH:MM`, splitting the magnitude so minutes are never negative.
fn write_offset(w: &mut Writer, seconds: i32) -> Result<(), FormatError> {
    let magnitude = seconds.unsigned_abs();
    if magnitude >= MAX_OFFSET_SECONDS as u32 {
        return Err(FormatError::OffsetOutOfRange { seconds });
    }
    if magnitude % SECONDS_PER_MINUTE != 0 {
        return Err(FormatError::OffsetNotMinuteAligned { seconds });
    }

    w.write_byte(if seconds < 0 { b'-' } else { b'+' });
    w.write_digits(magnitude / SECONDS_PER_HOUR, 2);
    w.write_byte(b':');
    w.write_digits(magnitude % SECONDS_PER_HOUR / SECONDS_PER_MINUTE, 2);
    Ok(())
}
