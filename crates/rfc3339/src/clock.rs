//! "Current time" entry points.
//!
//! These compose a [`Clock`] with the formatter. The clock is sampled once
//! per call; nothing is cached between calls. The local offset is supplied
//! by the caller, already resolved.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::codec::format_into;
use crate::error::FormatError;
use crate::model::{OffsetMode, Timestamp};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Source of the current instant.
pub trait Clock {
    /// Returns `(seconds since the Unix epoch, nanoseconds)`; nanoseconds are
    /// always below one second, also for instants before the epoch.
    fn now(&self) -> (i64, u32);
}

/// The operating system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> (i64, u32) {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => (since.as_secs() as i64, since.subsec_nanos()),
            Err(err) => {
                // Clock set before 1970: floor towards negative infinity
                let before = err.duration();
                let seconds = -(before.as_secs() as i64);
                match before.subsec_nanos() {
                    0 => (seconds, 0),
                    nanos => (seconds - 1, NANOS_PER_SECOND - nanos),
                }
            }
        }
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    pub seconds: i64,
    pub nanos: u32,
}

impl Clock for FixedClock {
    fn now(&self) -> (i64, u32) {
        (self.seconds, self.nanos)
    }
}

/// Samples `clock` once and returns the instant at `utc_offset_seconds`.
pub fn now_timestamp<C: Clock + ?Sized>(
    clock: &C,
    utc_offset_seconds: i32,
) -> Result<Timestamp, FormatError> {
    let (seconds, nanos) = clock.now();
    Timestamp::from_unix(seconds, nanos, utc_offset_seconds)
}

/// Formats the current time in UTC (`...Z`) into `buf`.
pub fn format_now<C: Clock + ?Sized>(clock: &C, buf: &mut [u8]) -> Result<usize, FormatError> {
    let now = now_timestamp(clock, 0)?;
    format_into(&now.calendar, now.nanos, OffsetMode::Utc, buf)
}

/// Formats the current time at a resolved local offset (`...±HH:MM`) into `buf`.
pub fn format_local_now<C: Clock + ?Sized>(
    clock: &C,
    utc_offset_seconds: i32,
    buf: &mut [u8],
) -> Result<usize, FormatError> {
    let now = now_timestamp(clock, utc_offset_seconds)?;
    format_into(&now.calendar, now.nanos, OffsetMode::Local, buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::{CANONICAL_LOCAL_LEN, CANONICAL_UTC_LEN};

    // 1996-12-20T00:39:57Z plus one microsecond
    const MOCK: FixedClock = FixedClock {
        seconds: 851_042_397,
        nanos: 1_000,
    };

    #[test]
    fn test_format_now() {
        let mut buf = [0u8; 80];
        let len = format_now(&MOCK, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"1996-12-20T00:39:57.000001000Z");
    }

    #[test]
    fn test_format_local_now() {
        let mut buf = [0u8; CANONICAL_LOCAL_LEN];
        let len = format_local_now(&MOCK, -8 * 3600, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"1996-12-19T16:39:57.000001000-08:00");
    }

    #[test]
    fn test_now_buffer_too_small() {
        let mut buf = [0u8; CANONICAL_UTC_LEN - 1];
        assert!(matches!(
            format_now(&MOCK, &mut buf),
            Err(FormatError::BufferTooSmall { .. })
        ));
    }

    #[test]
    fn test_now_rejects_bad_fraction() {
        let clock = FixedClock {
            seconds: 0,
            nanos: NANOS_PER_SECOND,
        };
        let mut buf = [0u8; 80];
        assert!(matches!(
            format_now(&clock, &mut buf),
            Err(FormatError::FractionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_system_clock_is_recent() {
        let (seconds, nanos) = SystemClock.now();
        // 2020-01-01T00:00:00Z
        assert!(seconds > 1_577_836_800);
        assert!(nanos < NANOS_PER_SECOND);

        let clock: &dyn Clock = &SystemClock;
        let mut buf = [0u8; 80];
        assert_eq!(format_now(clock, &mut buf), Ok(CANONICAL_UTC_LEN));
    }
}
