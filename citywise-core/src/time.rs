//! Time handling for source recency and forecast stepping
//!
//! Provides clock abstraction so the core never reads the wall clock on its
//! own:
//! - System clock (with `std`)
//! - Fixed clock (tests, replays, request-scoped "now")
//!
//! All timestamps are milliseconds since the Unix epoch.

use chrono::{DateTime, FixedOffset, Timelike, Utc};

use crate::constants::time::{MS_PER_HOUR, MS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR};

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of time for the system
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing and request-scoped evaluation
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock stopped at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Move the clock to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Age of `then` relative to `now` in fractional hours.
///
/// Timestamps in the future have age zero.
pub fn age_hours(then: Timestamp, now: Timestamp) -> f64 {
    now.saturating_sub(then) as f64 / MS_PER_HOUR as f64
}

/// Timestamp `hours` after `start`, saturating at the end of the range
pub fn add_hours(start: Timestamp, hours: u32) -> Timestamp {
    start.saturating_add(hours as u64 * MS_PER_HOUR)
}

/// Calendar hour of day (0-23) of `timestamp` at a fixed UTC offset.
///
/// Offsets outside ±1 day and timestamps chrono cannot represent fall back
/// to plain UTC arithmetic.
pub fn hour_of_day(timestamp: Timestamp, utc_offset_seconds: i32) -> u32 {
    let local = i64::try_from(timestamp)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .zip(FixedOffset::east_opt(utc_offset_seconds))
        .map(|(utc, offset)| utc.with_timezone(&offset).hour());

    match local {
        Some(hour) => hour,
        None => {
            let seconds = (timestamp / MS_PER_SECOND) % SECONDS_PER_DAY;
            (seconds / SECONDS_PER_HOUR) as u32
        }
    }
}
