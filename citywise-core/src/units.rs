//! Gas unit conversions
//!
//! Readings are stored in µg/m³. The O3 and NO2 breakpoint tables are in
//! ppb, so those two pollutants are converted before AQI lookup. Other
//! pollutants have no conversion and pass through unchanged.

use crate::constants::units::{NO2_UGM3_PER_PPB, O3_UGM3_PER_PPB};
use crate::pollutant::{Pollutant, PollutantReading};

/// Units the gaseous pollutants of a reading are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GasUnits {
    /// µg/m³, the canonical unit of a reading
    #[default]
    MicrogramsPerCubicMeter,
    /// Parts per billion, as delivered by some station feeds
    PartsPerBillion,
}

/// µg/m³ per ppb for a pollutant, if it has a conversion
pub fn ugm3_per_ppb(pollutant: Pollutant) -> Option<f64> {
    match pollutant {
        Pollutant::O3 => Some(O3_UGM3_PER_PPB),
        Pollutant::No2 => Some(NO2_UGM3_PER_PPB),
        _ => None,
    }
}

/// Convert ppb to µg/m³; pollutants without a factor pass through
pub fn ppb_to_ugm3(pollutant: Pollutant, ppb: f64) -> f64 {
    match ugm3_per_ppb(pollutant) {
        Some(factor) => ppb * factor,
        None => ppb,
    }
}

/// Convert µg/m³ to ppb; pollutants without a factor pass through
pub fn ugm3_to_ppb(pollutant: Pollutant, ugm3: f64) -> f64 {
    match ugm3_per_ppb(pollutant) {
        Some(factor) => ugm3 / factor,
        None => ugm3,
    }
}

/// Express a reading in the units of the breakpoint tables
///
/// With `GasUnits::MicrogramsPerCubicMeter` the gases are converted to ppb;
/// with `GasUnits::PartsPerBillion` the reading is already in table units.
pub fn to_table_units(reading: &PollutantReading, units: GasUnits) -> PollutantReading {
    match units {
        GasUnits::PartsPerBillion => *reading,
        GasUnits::MicrogramsPerCubicMeter => reading
            .map_value(Pollutant::O3, |v| ugm3_to_ppb(Pollutant::O3, v))
            .map_value(Pollutant::No2, |v| ugm3_to_ppb(Pollutant::No2, v)),
    }
}

/// Convert a reading whose gases are in ppb into canonical µg/m³
pub fn to_canonical_units(reading: &PollutantReading, units: GasUnits) -> PollutantReading {
    match units {
        GasUnits::MicrogramsPerCubicMeter => *reading,
        GasUnits::PartsPerBillion => reading
            .map_value(Pollutant::O3, |v| ppb_to_ugm3(Pollutant::O3, v))
            .map_value(Pollutant::No2, |v| ppb_to_ugm3(Pollutant::No2, v)),
    }
}
