//! Calendar validation for RFC 3339 fields.
//!
//! Pure functions shared by the parser and the formatter. Range checks
//! never normalize: a value outside its bound is an error, not a carry
//! into the next unit.

use crate::error::ParseError;
use crate::model::FieldTag;

/// Returns true if the given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed).
///
/// Returns 0 for a month outside 1..=12 so that any day fails against it.
pub fn max_day_of_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Checks that `value` lies within `[min, max]` for `field`.
pub fn check_range(field: FieldTag, value: u64, min: u64, max: u64) -> Result<u64, ParseError> {
    if value < min || value > max {
        return Err(ParseError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
