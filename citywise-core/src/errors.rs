//! Error Types for Air-Quality Value Construction
//!
//! ## Design Philosophy
//!
//! The computational core is total over its documented input domain: AQI
//! lookups return `None` for pollutants without a table, fusion of an empty
//! source list yields an empty reading, attribution always normalizes. None
//! of those paths produce an error.
//!
//! Errors exist for the *constructors* that guard the data model invariants:
//!
//! 1. **Small Size**: every variant is `Copy` and carries only scalars or
//!    `&'static str`, so errors can be returned from hot paths and stored
//!    without allocation.
//!
//! 2. **Actionable Information**: each variant names the offending value so a
//!    boundary layer can turn it into a 400 response without re-inspecting
//!    the input.
//!
//! ## Error Categories
//!
//! ### Measurement Violations
//! - `NegativeConcentration`: a pollutant concentration below zero
//! - `InvalidValue`: NaN or infinite concentration
//!
//! ### Provenance Violations
//! - `ConfidenceOutOfRange`: stated source confidence outside [0, 1]
//!
//! ### Request Violations
//! - `UnknownPollutant`: a pollutant code that is not part of the model
//! - `HorizonTooLong`: forecast horizon above the supported maximum
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use citywise_core::{CoreError, Pollutant, PollutantReading};
//!
//! let mut reading = PollutantReading::new();
//! match reading.set(Pollutant::Pm25, -3.0) {
//!     Ok(()) => {}
//!     Err(CoreError::NegativeConcentration { .. }) => {
//!         // Reject the upstream record
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for value construction
pub type CoreResult<T> = Result<T, CoreError>;

/// Construction errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoreError {
    /// Concentration below zero
    #[error("Concentration {value} for {pollutant} is negative")]
    NegativeConcentration {
        /// Lowercase pollutant code
        pollutant: &'static str,
        /// The rejected concentration
        value: f64,
    },

    /// Concentration is NaN or infinite
    #[error("Invalid value: concentration for {pollutant} is not a finite number")]
    InvalidValue {
        /// Lowercase pollutant code
        pollutant: &'static str,
    },

    /// Source confidence outside [0, 1]
    #[error("Confidence {value} outside range [0, 1]")]
    ConfidenceOutOfRange {
        /// The rejected confidence
        value: f64,
    },

    /// Pollutant code not recognised
    #[error("Unknown pollutant code")]
    UnknownPollutant,

    /// Forecast horizon exceeds the supported maximum
    #[error("Forecast horizon {requested}h exceeds limit {max}h")]
    HorizonTooLong {
        /// Requested number of hours
        requested: usize,
        /// Maximum supported number of hours
        max: usize,
    },
}
