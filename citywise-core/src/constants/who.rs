//! WHO Air-Quality Guideline Values
//!
//! Reference concentrations in µg/m³. The averaging windows differ per
//! pollutant in the WHO publication (24-hour, 8-hour, annual); the checker
//! treats them as a flat lookup against the current reading.

/// PM2.5 guideline (µg/m³, 24-hour mean).
pub const WHO_PM25_UGM3: f64 = 15.0;

/// PM10 guideline (µg/m³, 24-hour mean).
pub const WHO_PM10_UGM3: f64 = 45.0;

/// NO2 guideline (µg/m³, 24-hour mean).
pub const WHO_NO2_UGM3: f64 = 25.0;

/// SO2 guideline (µg/m³, 24-hour mean).
pub const WHO_SO2_UGM3: f64 = 40.0;

/// CO guideline (µg/m³, 24-hour mean; 4 mg/m³).
pub const WHO_CO_UGM3: f64 = 4000.0;

/// O3 guideline (µg/m³, 8-hour daily maximum).
pub const WHO_O3_UGM3: f64 = 100.0;
