//! Constants for the CityWISE air-quality core
//!
//! This module provides centralized, documented constants used throughout
//! the core. Every numeric value the algorithms depend on is defined here
//! with its unit and where it comes from.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Units**: ppb ↔ µg/m³ conversion factors
//! - **WHO**: guideline concentrations
//! - **Fusion**: source reliability weights and decay constants
//! - **Attribution**: trigger thresholds and score caps
//! - **Forecast**: diurnal emission factors and confidence decay
//! - **Time**: time conversions
//! - **Buffers**: fixed capacities for allocation-free results
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the name where one applies
//! 3. Reference the standard a value comes from

/// Gas unit conversion factors.
pub mod units;

/// WHO air-quality guideline values.
pub mod who;

/// Source weighting and fusion parameters.
pub mod fusion;

/// Source attribution thresholds and caps.
pub mod attribution;

/// Forecast extrapolation parameters.
pub mod forecast;

/// Time-related constants.
pub mod time;

/// Capacities of fixed-size result collections.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use units::{O3_UGM3_PER_PPB, NO2_UGM3_PER_PPB};

pub use who::{
    WHO_PM25_UGM3, WHO_PM10_UGM3, WHO_NO2_UGM3,
    WHO_SO2_UGM3, WHO_CO_UGM3, WHO_O3_UGM3,
};

pub use fusion::{
    RELIABILITY_GROUND_STATION, RELIABILITY_SATELLITE,
    RELIABILITY_MODEL_PREDICTION, RELIABILITY_UNKNOWN,
    RECENCY_DECAY_HOURS, FULL_CONFIDENCE_SOURCE_COUNT,
};

pub use forecast::{DEFAULT_FORECAST_HOURS, FORECAST_CONFIDENCE_FLOOR};

pub use time::{MS_PER_SECOND, MS_PER_HOUR};

pub use buffers::{MAX_FORECAST_HOURS, POLLUTANT_COUNT};

/// Highest value of the AQI scale; readings above every table saturate here.
pub const AQI_MAX: u16 = 500;
