//! Pollution Source Attribution Constants
//!
//! Trigger thresholds, scaling factors and caps for the heuristic
//! apportionment of a pollutant mix. Concentrations are µg/m³; land-use
//! values are fractions in [0, 1]; road density is normalised to [0, 1].

// ===== TRAFFIC =====

/// NO2/PM2.5 ratio above which combustion engines dominate.
pub const TRAFFIC_NO2_PM25_RATIO: f64 = 2.0;

/// Road density above which traffic is considered.
pub const TRAFFIC_ROAD_DENSITY: f64 = 0.5;

/// Scale applied to ratio × road density.
pub const TRAFFIC_SCALE: f64 = 0.3;

/// Upper bound of the traffic score.
pub const TRAFFIC_CAP: f64 = 0.8;

// ===== INDUSTRY =====

/// SO2 concentration above which industry is considered (µg/m³).
pub const INDUSTRY_SO2_UGM3: f64 = 20.0;

/// Industrial land-use fraction above which industry is considered.
pub const INDUSTRY_LAND_FRACTION: f64 = 0.1;

/// SO2 normalisation divisor (µg/m³).
pub const INDUSTRY_SO2_SCALE_UGM3: f64 = 100.0;

/// Upper bound of the industry score.
pub const INDUSTRY_CAP: f64 = 0.7;

// ===== BIOMASS BURNING =====

/// PM2.5/CO ratio above which smoke is considered.
pub const BIOMASS_PM25_CO_RATIO: f64 = 0.01;

/// Fire-count normalisation divisor.
pub const BIOMASS_FIRE_SCALE: f64 = 10.0;

/// Upper bound of the biomass burning score.
pub const BIOMASS_CAP: f64 = 0.6;

// ===== RESIDENTIAL =====

/// Residential land-use fraction above which household heating and cooking
/// are considered.
pub const RESIDENTIAL_LAND_FRACTION: f64 = 0.3;

/// Scale applied to the residential fraction.
pub const RESIDENTIAL_SCALE: f64 = 0.4;

/// Upper bound of the residential score.
pub const RESIDENTIAL_CAP: f64 = 0.5;

// ===== POWER GENERATION =====

/// SO2 concentration above which power plants are considered (µg/m³).
pub const POWER_SO2_UGM3: f64 = 10.0;

/// Distance to the nearest power plant below which it is considered (km).
pub const POWER_PROXIMITY_KM: f64 = 5.0;

/// SO2 excess normalisation divisor (µg/m³).
pub const POWER_SO2_SCALE_UGM3: f64 = 50.0;

/// Upper bound of the power generation score.
pub const POWER_CAP: f64 = 0.4;
