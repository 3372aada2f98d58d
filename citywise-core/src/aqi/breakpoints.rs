//! Breakpoint Tables for AQI Sub-Index Calculation
//!
//! ## Background
//!
//! The US EPA defines, per pollutant, an ordered list of concentration
//! ranges. Each range maps linearly onto an AQI range:
//!
//! ```text
//! AQI = (I_hi - I_lo) / (C_hi - C_lo) × (C - C_lo) + I_lo
//!
//! Where:
//! - C          = observed concentration
//! - C_lo, C_hi = concentration breakpoints bracketing C
//! - I_lo, I_hi = AQI values at those breakpoints
//! ```
//!
//! ## Table Layout
//!
//! Rows are ascending and non-overlapping. The published tables leave small
//! gaps between rows (12.0 → 12.1 for PM2.5) because concentrations are
//! reported at fixed precision. A concentration inside a gap is clamped up
//! to the next row's lower bound, which keeps the mapping monotonic.
//!
//! ```text
//! Pollutant | Unit  | Rows | Top concentration
//! ----------|-------|------|------------------
//! PM2.5     | µg/m³ | 7    | 500.4
//! PM10      | µg/m³ | 7    | 604
//! O3        | ppb   | 5    | 200
//! NO2       | ppb   | 7    | 2049
//! ```
//!
//! SO2, CO and AOD have no table; lookups for them return `None`.

use super::category::AqiCategory;
use crate::pollutant::Pollutant;

/// One row of a breakpoint table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Lowest concentration of the row (inclusive)
    pub concentration_low: f64,
    /// Highest concentration of the row (inclusive)
    pub concentration_high: f64,
    /// AQI at `concentration_low`
    pub aqi_low: u16,
    /// AQI at `concentration_high`
    pub aqi_high: u16,
    /// Category of the row
    pub category: AqiCategory,
}

impl Breakpoint {
    const fn new(
        concentration_low: f64,
        concentration_high: f64,
        aqi_low: u16,
        aqi_high: u16,
        category: AqiCategory,
    ) -> Self {
        Self { concentration_low, concentration_high, aqi_low, aqi_high, category }
    }

    /// Whether the concentration lies inside the row
    pub fn contains(&self, concentration: f64) -> bool {
        concentration >= self.concentration_low && concentration <= self.concentration_high
    }

    /// Linear interpolation of the AQI inside the row, unrounded
    pub fn interpolate(&self, concentration: f64) -> f64 {
        let aqi_span = (self.aqi_high - self.aqi_low) as f64;
        let conc_span = self.concentration_high - self.concentration_low;
        aqi_span / conc_span * (concentration - self.concentration_low) + self.aqi_low as f64
    }
}

use super::category::AqiCategory::{
    Good, Hazardous, Moderate, Unhealthy, UnhealthySensitive, VeryUnhealthy,
};

/// PM2.5, µg/m³, 24-hour mean
pub static PM25_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.0, 0, 50, Good),
    Breakpoint::new(12.1, 35.4, 51, 100, Moderate),
    Breakpoint::new(35.5, 55.4, 101, 150, UnhealthySensitive),
    Breakpoint::new(55.5, 150.4, 151, 200, Unhealthy),
    Breakpoint::new(150.5, 250.4, 201, 300, VeryUnhealthy),
    Breakpoint::new(250.5, 350.4, 301, 400, Hazardous),
    Breakpoint::new(350.5, 500.4, 401, 500, Hazardous),
];

/// PM10, µg/m³, 24-hour mean
pub static PM10_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 54.0, 0, 50, Good),
    Breakpoint::new(55.0, 154.0, 51, 100, Moderate),
    Breakpoint::new(155.0, 254.0, 101, 150, UnhealthySensitive),
    Breakpoint::new(255.0, 354.0, 151, 200, Unhealthy),
    Breakpoint::new(355.0, 424.0, 201, 300, VeryUnhealthy),
    Breakpoint::new(425.0, 504.0, 301, 400, Hazardous),
    Breakpoint::new(505.0, 604.0, 401, 500, Hazardous),
];

/// O3, ppb, simplified daily maximum
pub static O3_BREAKPOINTS: [Breakpoint; 5] = [
    Breakpoint::new(0.0, 54.0, 0, 50, Good),
    Breakpoint::new(55.0, 70.0, 51, 100, Moderate),
    Breakpoint::new(71.0, 85.0, 101, 150, UnhealthySensitive),
    Breakpoint::new(86.0, 105.0, 151, 200, Unhealthy),
    Breakpoint::new(106.0, 200.0, 201, 300, VeryUnhealthy),
];

/// NO2, ppb, 1-hour
pub static NO2_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 53.0, 0, 50, Good),
    Breakpoint::new(54.0, 100.0, 51, 100, Moderate),
    Breakpoint::new(101.0, 360.0, 101, 150, UnhealthySensitive),
    Breakpoint::new(361.0, 649.0, 151, 200, Unhealthy),
    Breakpoint::new(650.0, 1249.0, 201, 300, VeryUnhealthy),
    Breakpoint::new(1250.0, 1649.0, 301, 400, Hazardous),
    Breakpoint::new(1650.0, 2049.0, 401, 500, Hazardous),
];

/// Breakpoint table of a pollutant, if it has one
pub fn table_for(pollutant: Pollutant) -> Option<&'static [Breakpoint]> {
    match pollutant {
        Pollutant::Pm25 => Some(&PM25_BREAKPOINTS),
        Pollutant::Pm10 => Some(&PM10_BREAKPOINTS),
        Pollutant::O3 => Some(&O3_BREAKPOINTS),
        Pollutant::No2 => Some(&NO2_BREAKPOINTS),
        Pollutant::So2 | Pollutant::Co | Pollutant::Aod => None,
    }
}

/// Outcome of locating a concentration in a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    /// Concentration inside a row
    Row(&'static Breakpoint),
    /// Concentration in the gap below a row; clamped to its lower bound
    Gap(&'static Breakpoint),
    /// Concentration above the highest row
    AboveTable,
}

/// Locate the row for a non-negative concentration
pub fn locate(table: &'static [Breakpoint], concentration: f64) -> Lookup {
    for bp in table {
        if concentration <= bp.concentration_high {
            return if concentration >= bp.concentration_low {
                Lookup::Row(bp)
            } else {
                Lookup::Gap(bp)
            };
        }
    }
    Lookup::AboveTable
}
