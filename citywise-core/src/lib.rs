//! Air-quality core for the CityWISE dashboard
//!
//! Turns raw pollutant observations into the numbers a city dashboard shows:
//!
//! - [`aqi`]: US-EPA piecewise-linear sub-indices and the overall AQI
//! - [`fusion`]: weighted fusion of ground, satellite and model sources
//! - [`attribution`]: heuristic apportionment across emission sources
//! - [`who`]: WHO guideline exceedances
//! - [`forecast`]: short-horizon persistence forecast
//! - [`assessment`]: all of the above in one pass
//!
//! Every operation is a pure, total function over plain values. The crate
//! never allocates and builds without `std` (disable default features).
//!
//! A typical urban reading of fine particles, ozone and NO2 is driven by
//! PM2.5:
//!
//! ```
//! use citywise_core::{overall_aqi, AqiCategory, Pollutant, PollutantReading};
//!
//! let reading = PollutantReading::from_pairs(&[
//!     (Pollutant::Pm25, 45.3),
//!     (Pollutant::O3, 39.6),
//!     (Pollutant::No2, 16.2),
//! ]).unwrap();
//!
//! let result = overall_aqi(&reading);
//! assert_eq!(result.aqi, 125);
//! assert_eq!(result.category, AqiCategory::UnhealthySensitive);
//! assert_eq!(result.primary_pollutant, Some(Pollutant::Pm25));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod aqi;
pub mod assessment;
pub mod attribution;
pub mod constants;
pub mod errors;
pub mod forecast;
pub mod fusion;
pub mod pollutant;
pub mod time;
pub mod units;
pub mod who;

// Public API
pub use aqi::{overall_aqi, pollutant_aqi, pollutant_aqi_by_name, AqiCalculator, AqiCategory, AqiConfig, AqiResult, SubIndex};
pub use assessment::{assess, assess_reading, Assessment, Engine, EngineConfig};
pub use attribution::{attribute, AttributionContext, AttributionVector, Emissions, LandUse, Meteorology, SourceCategory};
pub use errors::{CoreError, CoreResult};
pub use forecast::{diurnal_factor, forecast, ForecastConfig, ForecastPoint, Forecaster, MeteoSample};
pub use fusion::{fuse, fuse_with, ConfidenceScore, FusedReading, FusionConfig, FusionEngine, SourceRecord, SourceType, SourceWeights};
pub use pollutant::{Pollutant, PollutantReading};
pub use time::{FixedTime, TimeSource, Timestamp};
#[cfg(feature = "std")]
pub use time::SystemTime;
pub use units::GasUnits;
pub use who::{check_thresholds, Exceedance};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
