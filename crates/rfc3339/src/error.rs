//! Error types for RFC 3339 parsing and formatting.

use thiserror::Error;

use crate::model::FieldTag;

/// Error kinds shared by the parser and the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Caller-supplied value the grammar cannot carry
    InvalidArgument,
    /// E002: Output buffer too small for the canonical string
    BufferTooSmall,
    /// E003: Wrong separator or non-digit where a digit is required
    MalformedSyntax,
    /// E004: Well-formed field whose value violates its bound
    OutOfRange,
    /// E005: Unconsumed input after a complete match
    TrailingData,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "E001",
            ErrorCode::BufferTooSmall => "E002",
            ErrorCode::MalformedSyntax => "E003",
            ErrorCode::OutOfRange => "E004",
            ErrorCode::TrailingData => "E005",
        }
    }
}

/// Error while parsing an RFC 3339 date-time string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    // === E003: Malformed syntax ===
    #[error("[E003] expected {expected} at byte {position}, found {}", describe_byte(.found))]
    MalformedSyntax {
        position: usize,
        expected: &'static str,
        found: Option<u8>,
    },

    // === E004: Out of range ===
    #[error("[E004] {field} value {value} out of range [{min}, {max}]")]
    OutOfRange {
        field: FieldTag,
        value: u64,
        min: u64,
        max: u64,
    },

    // === E005: Trailing data ===
    #[error("[E005] {remaining} trailing byte(s) at position {position}")]
    TrailingData { position: usize, remaining: usize },
}

impl ParseError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::MalformedSyntax { .. } => ErrorCode::MalformedSyntax,
            ParseError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ParseError::TrailingData { .. } => ErrorCode::TrailingData,
        }
    }
}

/// Error while formatting a calendar time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("[E001] UTC offset {seconds}s is not a whole number of minutes")]
    OffsetNotMinuteAligned { seconds: i32 },

    #[error("[E002] buffer of {capacity} bytes cannot hold {needed} bytes")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("[E004] fraction {nanos}ns exceeds 999999999")]
    FractionOutOfRange { nanos: u32 },

    #[error("[E004] year {year} out of range [0, 9999]")]
    YearOutOfRange { year: i64 },

    #[error("[E004] {field} value {value} does not fit in two digits")]
    FieldTooWide { field: FieldTag, value: u8 },

    #[error("[E004] UTC offset {seconds}s out of range (-86400, 86400)")]
    OffsetOutOfRange { seconds: i32 },
}

impl FormatError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            FormatError::OffsetNotMinuteAligned { .. } => ErrorCode::InvalidArgument,
            FormatError::BufferTooSmall { .. } => ErrorCode::BufferTooSmall,
            _ => ErrorCode::OutOfRange,
        }
    }
}

fn describe_byte(found: &Option<u8>) -> String {
    match *found {
        Some(b) if b.is_ascii_graphic() || b == b' ' => format!("{:?}", b as char),
        Some(b) => format!("byte 0x{b:02x}"),
        None => "end of input".to_string(),
    }
}
