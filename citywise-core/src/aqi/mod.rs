//! EPA Air Quality Index Calculation
//!
//! ## Overview
//!
//! Each pollutant with a breakpoint table gets a *sub-index* by linear
//! interpolation inside its table row. The overall AQI is the worst
//! sub-index, and the pollutant producing it is the *primary pollutant*.
//!
//! ```text
//! reading ──→ table units ──→ per-pollutant sub-index ──→ max ──→ AqiResult
//!             (gases → ppb)        (breakpoints)
//! ```
//!
//! ## Saturation Policy
//!
//! Concentrations above a table's last row are never extrapolated: they
//! saturate at AQI 500, "Hazardous". Extreme readings are always classified.
//!
//! ## Tie-Breaking
//!
//! When two pollutants share the maximum sub-index, the one earlier in
//! canonical pollutant order (pm25, pm10, no2, so2, co, o3, aod) is primary.
//!
//! ## Usage Example
//!
//! ```rust
//! use citywise_core::aqi::{overall_aqi, pollutant_aqi, AqiCategory};
//! use citywise_core::{Pollutant, PollutantReading};
//!
//! let sub = pollutant_aqi(12.0, Pollutant::Pm25).unwrap();
//! assert_eq!((sub.aqi, sub.category), (50, AqiCategory::Good));
//!
//! let reading = PollutantReading::from_pairs(&[
//!     (Pollutant::Pm25, 40.0),
//!     (Pollutant::No2, 10.0),
//! ]).unwrap();
//! let result = overall_aqi(&reading);
//! assert_eq!(result.aqi, 112);
//! assert_eq!(result.primary_pollutant, Some(Pollutant::Pm25));
//! ```

pub mod breakpoints;
pub mod category;

pub use breakpoints::{table_for, Breakpoint, Lookup};
pub use category::AqiCategory;

use heapless::Vec;

use crate::constants::{AQI_MAX, POLLUTANT_COUNT};
use crate::pollutant::{Pollutant, PollutantReading};
use crate::units::{to_table_units, GasUnits};

/// Sub-index of a single pollutant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubIndex {
    /// Rounded AQI value, 0-500
    pub aqi: u16,
    /// Category of the breakpoint row
    pub category: AqiCategory,
}

impl SubIndex {
    /// Top of the scale
    pub const SATURATED: Self = Self { aqi: AQI_MAX, category: AqiCategory::Hazardous };
}

/// Overall AQI of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AqiResult {
    /// Maximum sub-index
    pub aqi: u16,
    /// Category of the maximum sub-index
    pub category: AqiCategory,
    /// Pollutant producing the maximum; `None` when no pollutant has a table
    pub primary_pollutant: Option<Pollutant>,
}

impl AqiResult {
    /// Result for a reading without any pollutant that has a table
    pub const EMPTY: Self = Self {
        aqi: 0,
        category: AqiCategory::Good,
        primary_pollutant: None,
    };
}

/// AQI calculation settings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AqiConfig {
    /// Units the gaseous pollutants of incoming readings are expressed in
    pub gas_units: GasUnits,
}

/// Sub-index for a concentration expressed in the table's unit
///
/// Returns `None` when the pollutant has no breakpoint table or the
/// concentration is negative or not finite.
pub fn pollutant_aqi(concentration: f64, pollutant: Pollutant) -> Option<SubIndex> {
    let table = table_for(pollutant)?;

    if !concentration.is_finite() || concentration < 0.0 {
        log_warn!("AQI lookup: invalid {} concentration {}", pollutant, concentration);
        return None;
    }

    let (bp, concentration) = match breakpoints::locate(table, concentration) {
        Lookup::Row(bp) => (bp, concentration),
        Lookup::Gap(bp) => {
            log_debug!(
                "AQI lookup: {} concentration {} between rows, clamped to {}",
                pollutant, concentration, bp.concentration_low
            );
            (bp, bp.concentration_low)
        }
        Lookup::AboveTable => {
            log_warn!("AQI lookup: {} concentration {} above table, saturating", pollutant, concentration);
            return Some(SubIndex::SATURATED);
        }
    };

    let aqi = libm::round(bp.interpolate(concentration));
    Some(SubIndex {
        aqi: (aqi as u16).min(AQI_MAX),
        category: bp.category,
    })
}

/// [`pollutant_aqi`] keyed by pollutant code; unknown codes give `None`
pub fn pollutant_aqi_by_name(concentration: f64, pollutant: &str) -> Option<SubIndex> {
    pollutant_aqi(concentration, Pollutant::from_code(pollutant)?)
}

/// Overall AQI of a reading in canonical µg/m³
pub fn overall_aqi(reading: &PollutantReading) -> AqiResult {
    AqiCalculator::default().overall(reading)
}

/// AQI calculator bound to a unit convention
#[derive(Debug, Clone, Copy, Default)]
pub struct AqiCalculator {
    config: AqiConfig,
}

impl AqiCalculator {
    /// Create calculator with configuration
    pub fn new(config: AqiConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &AqiConfig {
        &self.config
    }

    /// Sub-index of every pollutant that has a table, in canonical order
    pub fn sub_indices(&self, reading: &PollutantReading) -> Vec<(Pollutant, SubIndex), POLLUTANT_COUNT> {
        let table_units = to_table_units(reading, self.config.gas_units);
        let mut out = Vec::new();
        for (pollutant, concentration) in table_units.iter() {
            if let Some(sub) = pollutant_aqi(concentration, pollutant) {
                // Capacity equals the pollutant count, so push cannot fail
                let _ = out.push((pollutant, sub));
            }
        }
        out
    }

    /// Overall AQI and primary pollutant
    pub fn overall(&self, reading: &PollutantReading) -> AqiResult {
        let mut result = AqiResult::EMPTY;
        for (pollutant, sub) in self.sub_indices(reading) {
            // Strictly greater: the earlier pollutant keeps exact ties
            if result.primary_pollutant.is_none() || sub.aqi > result.aqi {
                result = AqiResult {
                    aqi: sub.aqi,
                    category: sub.category,
                    primary_pollutant: Some(pollutant),
                };
            }
        }
        result
    }
}
