//! Forecast Extrapolation Constants
//!
//! Persistence forecast parameters: the current reading is carried forward
//! and scaled by dispersion and emission factors.

/// Default forecast horizon (hours).
pub const DEFAULT_FORECAST_HOURS: usize = 24;

/// Wind speed normalisation for the dispersion factor (m/s).
///
/// ```text
/// wind_factor = exp(-wind_speed / 10)
/// ```
pub const WIND_DISPERSION_SCALE_MS: f64 = 10.0;

/// Emission factor during morning (07-09) and evening (17-19) rush hours.
pub const RUSH_HOUR_EMISSION_FACTOR: f64 = 1.3;

/// Emission factor during the night (00-06).
pub const NIGHT_EMISSION_FACTOR: f64 = 0.7;

/// Emission factor outside rush hours and night.
pub const BASELINE_EMISSION_FACTOR: f64 = 1.0;

/// Confidence lost per forecast hour.
pub const FORECAST_CONFIDENCE_DECAY_PER_HOUR: f64 = 0.02;

/// Lowest confidence a forecast point can carry.
pub const FORECAST_CONFIDENCE_FLOOR: f64 = 0.3;

/// Stability multiplier when the sample does not state one (neutral).
pub const NEUTRAL_STABILITY: f64 = 1.0;
