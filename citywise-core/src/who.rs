//! WHO guideline exceedance checks
//!
//! Compares a reading against the flat WHO guideline table and reports each
//! pollutant strictly above its guideline, in canonical pollutant order.

use heapless::Vec;

use crate::constants::who::*;
use crate::constants::POLLUTANT_COUNT;
use crate::pollutant::{Pollutant, PollutantReading};

/// One pollutant above its WHO guideline
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Exceedance {
    /// Offending pollutant
    pub pollutant: Pollutant,
    /// Measured concentration (µg/m³)
    pub measured: f64,
    /// Guideline concentration (µg/m³)
    pub guideline: f64,
    /// `measured / guideline`, always > 1
    pub exceedance_factor: f64,
}

/// WHO guideline for a pollutant, if one exists
pub fn guideline(pollutant: Pollutant) -> Option<f64> {
    match pollutant {
        Pollutant::Pm25 => Some(WHO_PM25_UGM3),
        Pollutant::Pm10 => Some(WHO_PM10_UGM3),
        Pollutant::No2 => Some(WHO_NO2_UGM3),
        Pollutant::So2 => Some(WHO_SO2_UGM3),
        Pollutant::Co => Some(WHO_CO_UGM3),
        Pollutant::O3 => Some(WHO_O3_UGM3),
        Pollutant::Aod => None,
    }
}

/// Every pollutant of the reading above its guideline
pub fn check_thresholds(reading: &PollutantReading) -> Vec<Exceedance, POLLUTANT_COUNT> {
    let mut exceedances = Vec::new();
    for (pollutant, measured) in reading.iter() {
        let Some(limit) = guideline(pollutant) else {
            continue;
        };
        if measured > limit {
            // At most one entry per pollutant
            let _ = exceedances.push(Exceedance {
                pollutant,
                measured,
                guideline: limit,
                exceedance_factor: measured / limit,
            });
        }
    }
    exceedances
}
