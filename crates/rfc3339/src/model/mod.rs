//! Data model types for RFC 3339 timestamps.
//!
//! This module contains the value types exchanged with the codec:
//! - Calendar fields with their UTC offset
//! - Timestamps (calendar fields + nanosecond fraction)
//! - Offset rendering modes
//! - Field identities used by the parser

pub mod calendar;
pub mod field;

pub use calendar::{CalendarTime, OffsetMode, Timestamp};
pub use field::FieldTag;
