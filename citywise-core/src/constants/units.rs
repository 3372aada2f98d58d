//! Gas Unit Conversion Factors
//!
//! Breakpoint tables for the gaseous pollutants are defined in parts per
//! billion, while readings and WHO guidelines use µg/m³. The factors below
//! are the simplified conversions used at 25°C and 1 atm:
//!
//! ```text
//! µg/m³ = ppb × (molar mass / 24.45)
//! ```
//!
//! rounded to the values the dashboard has always used.

/// Ozone: µg/m³ per ppb.
///
/// Molar mass 48 g/mol gives 1.96; rounded to 2.0.
pub const O3_UGM3_PER_PPB: f64 = 2.0;

/// Nitrogen dioxide: µg/m³ per ppb.
///
/// Molar mass 46 g/mol gives 1.88.
pub const NO2_UGM3_PER_PPB: f64 = 1.88;
