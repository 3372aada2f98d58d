//! Engine configuration loading
//!
//! Configuration is JSON in camelCase; every field is optional and falls back
//! to the built-in defaults:
//!
//! ```json
//! {
//!   "aqi": { "gasUnits": "microgramsPerCubicMeter" },
//!   "fusion": { "groundStationWeight": 1.0, "recencyDecayHours": 24.0 },
//!   "forecast": { "utcOffsetSeconds": 19800, "defaultHours": 24 }
//! }
//! ```

use std::path::Path;

use citywise_core::constants::MAX_FORECAST_HOURS;
use citywise_core::{EngineConfig, ForecastConfig, FusionConfig};

use crate::SchemaError;

/// Largest UTC offset accepted (exclusive), in seconds
const MAX_UTC_OFFSET_SECONDS: i32 = 24 * 3600;

/// Parse and validate a configuration document
pub fn load_config_str(json: &str) -> Result<EngineConfig, SchemaError> {
    let config: EngineConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Read, parse and validate a configuration file
pub fn load_config_file(path: impl AsRef<Path>) -> Result<EngineConfig, SchemaError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let config = load_config_str(&json)?;
    log::debug!("Loaded engine configuration from {}", path.display());
    Ok(config)
}

/// Check that every parameter lies in its meaningful range
pub fn validate_config(config: &EngineConfig) -> Result<(), SchemaError> {
    validate_fusion(&config.fusion)?;
    validate_forecast(&config.forecast)
}

fn invalid(message: String) -> SchemaError {
    SchemaError::InvalidConfig(message)
}

fn non_negative(name: &str, value: f64) -> Result<(), SchemaError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{} must be a finite non-negative number, got {}", name, value)))
    }
}

fn unit_interval(name: &str, value: f64) -> Result<(), SchemaError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(format!("{} must lie in [0, 1], got {}", name, value)))
    }
}

fn validate_fusion(fusion: &FusionConfig) -> Result<(), SchemaError> {
    non_negative("fusion.groundStationWeight", fusion.ground_station_weight)?;
    non_negative("fusion.satelliteWeight", fusion.satellite_weight)?;
    non_negative("fusion.modelPredictionWeight", fusion.model_prediction_weight)?;
    non_negative("fusion.unknownWeight", fusion.unknown_weight)?;
    non_negative("fusion.recencyDecayHours", fusion.recency_decay_hours)?;
    unit_interval("fusion.defaultWeightingConfidence", fusion.default_weighting_confidence)?;
    unit_interval("fusion.defaultAggregateConfidence", fusion.default_aggregate_confidence)?;
    if fusion.full_confidence_sources == 0 {
        return Err(invalid("fusion.fullConfidenceSources must be at least 1".to_string()));
    }
    Ok(())
}

fn validate_forecast(forecast: &ForecastConfig) -> Result<(), SchemaError> {
    if forecast.utc_offset_seconds.abs() >= MAX_UTC_OFFSET_SECONDS {
        return Err(invalid(format!(
            "forecast.utcOffsetSeconds must lie within ±24h, got {}",
            forecast.utc_offset_seconds
        )));
    }
    if forecast.default_hours > MAX_FORECAST_HOURS {
        return Err(invalid(format!(
            "forecast.defaultHours {} exceeds limit {}",
            forecast.default_hours, MAX_FORECAST_HOURS
        )));
    }
    non_negative("forecast.confidenceDecayPerHour", forecast.confidence_decay_per_hour)?;
    unit_interval("forecast.confidenceFloor", forecast.confidence_floor)
}
