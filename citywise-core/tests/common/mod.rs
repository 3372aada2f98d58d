//! Shared fixtures for the integration tests
//!
//! - [`harness`]: test runner, tolerance assertions and a deterministic RNG
//! - [`scenarios`]: city scenarios with known outcomes
//! - [`generators`]: randomized readings and source sets

#![allow(dead_code)]

#[macro_use]
pub mod harness;
pub mod generators;
pub mod scenarios;

use citywise_core::{Pollutant, PollutantReading, SourceRecord, SourceType, Timestamp};

/// 2024-01-01T00:00:00Z
pub const JAN_1_2024: Timestamp = 1_704_067_200_000;

/// One hour in milliseconds
pub const HOUR_MS: u64 = 3_600_000;

/// Build a reading from pairs, panicking on invalid input
pub fn reading(pairs: &[(Pollutant, f64)]) -> PollutantReading {
    PollutantReading::from_pairs(pairs).expect("valid test reading")
}

/// Build a source observed `age_hours` before `now`
pub fn source(
    source_type: SourceType,
    pairs: &[(Pollutant, f64)],
    now: Timestamp,
    age_hours: u64,
) -> SourceRecord {
    SourceRecord::new(source_type, reading(pairs), now - age_hours * HOUR_MS)
}
