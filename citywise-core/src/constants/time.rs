//! Time-Related Constants

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Seconds per day.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_SECOND * SECONDS_PER_HOUR;
