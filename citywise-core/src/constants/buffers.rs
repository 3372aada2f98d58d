//! Fixed Capacities
//!
//! The core returns results in `heapless` collections so it never touches
//! the heap. These constants bound those collections.

/// Number of pollutants in the data model.
///
/// One slot per pollutant in a reading; also the most exceedances a single
/// WHO check can report.
pub const POLLUTANT_COUNT: usize = 7;

/// Longest supported forecast horizon (hours).
///
/// 72 points × ~150 bytes ≈ 11KB on the stack.
pub const MAX_FORECAST_HOURS: usize = 72;
