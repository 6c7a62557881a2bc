//! Field identities of the RFC 3339 date-time grammar.

use std::fmt;

/// Identifies the calendar, fraction or offset field being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTag {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Fraction,
    OffsetHour,
    OffsetMinute,
}

impl FieldTag {
    /// Returns the human-readable field name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldTag::Year => "year",
            FieldTag::Month => "month",
            FieldTag::Day => "day",
            FieldTag::Hour => "hour",
            FieldTag::Minute => "minute",
            FieldTag::Second => "second",
            FieldTag::Fraction => "fraction",
            FieldTag::OffsetHour => "offset hour",
            FieldTag::OffsetMinute => "offset minute",
        }
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
