//! Text encoding/decoding for RFC 3339 date-times.
//!
//! The parser and the formatter are independent of each other; both use the
//! calendar rules in [`crate::validate`] and the bounds in [`crate::limits`].

pub mod format;
pub mod parse;
pub mod primitives;

pub use format::{canonical_len, format, format_into};
pub use parse::{parse, parse_bytes};
pub use primitives::Scanner;
