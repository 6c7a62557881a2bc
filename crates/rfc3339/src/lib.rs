//! RFC 3339 date-time parsing and formatting.
//!
//! This crate converts between broken-down calendar time (with a
//! nanosecond fraction and a UTC offset) and the RFC 3339 text form used in
//! logs, APIs and persisted records.
//!
//! # Quick Start
//!
//! ```rust
//! use rfc3339::{format, parse, OffsetMode};
//!
//! let ts = parse("1996-12-19T16:39:57.001-08:00").unwrap();
//! assert_eq!(ts.nanos, 1_000_000);
//! assert_eq!(ts.calendar.utc_offset_seconds, -8 * 3600);
//! assert_eq!(ts.unix_seconds(), 851_042_397);
//!
//! let text = format(&ts.calendar, ts.nanos, OffsetMode::Local).unwrap();
//! assert_eq!(text, "1996-12-19T16:39:57.001000000-08:00");
//! ```
//!
//! Formatting into a caller-owned buffer never allocates:
//!
//! ```rust
//! use rfc3339::{canonical_len, format_into, parse, OffsetMode};
//!
//! let ts = parse("2000-02-29T12:00:00Z").unwrap();
//! let mut buf = [0u8; 64];
//! let len = format_into(&ts.calendar, ts.nanos, OffsetMode::Utc, &mut buf).unwrap();
//! assert_eq!(len, canonical_len(OffsetMode::Utc));
//! assert_eq!(&buf[..len], b"2000-02-29T12:00:00.000000000Z");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Value types (CalendarTime, Timestamp, OffsetMode, FieldTag)
//! - [`codec`]: The pattern-driven parser and the canonical formatter
//! - [`validate`]: Leap years, month lengths and range checks
//! - [`clock`]: "Current time" entry points over a pluggable clock
//! - [`error`]: Error types
//! - [`limits`]: Bounds of the grammar and canonical lengths
//!
//! # Wire Format
//!
//! The parser accepts `YYYY-MM-DDTHH:MM:SS[.f{1,9}](Z|±HH:MM)`. The formatter
//! always writes nine fraction digits:
//! - UTC: `YYYY-MM-DDTHH:MM:SS.fffffffffZ` (30 bytes)
//! - Offset: `YYYY-MM-DDTHH:MM:SS.fffffffff±HH:MM` (35 bytes)
//!
//! Calendar fields are never normalized. Second `60` is accepted as a leap
//! second without consulting any leap-second table.

pub mod clock;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use clock::{Clock, FixedClock, SystemClock, format_local_now, format_now, now_timestamp};
pub use codec::{canonical_len, format, format_into, parse, parse_bytes};
pub use error::{ErrorCode, FormatError, ParseError};
pub use model::{CalendarTime, FieldTag, OffsetMode, Timestamp};
pub use validate::{is_leap_year, max_day_of_month};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
