//! Short-Horizon Persistence Forecast
//!
//! ## Model
//!
//! The current reading is carried forward hour by hour and scaled by three
//! multiplicative factors:
//!
//! ```text
//! projected(h) = current × wind(h) × stability(h) × emission(h)
//!
//! wind(h)      = exp(-wind_speed / 10)
//! stability(h) = atmospheric_stability ?? 1.0
//! emission(h)  = 1.3  local hour 07-09 or 17-19 (rush hours)
//!                0.7  local hour 00-06
//!                1.0  otherwise
//! ```
//!
//! `h` runs from 1 to the horizon. The meteorological sample for hour `h`
//! is the `h`-th of the series; a shorter series reuses its last sample and
//! an empty one means calm, neutral conditions.
//!
//! The emission factor is keyed on the *calendar* hour of day of the
//! projected timestamp in the configured UTC offset, not on the elapsed
//! forecast offset.
//!
//! ## Confidence
//!
//! ```text
//! confidence(h) = max(0.3, 1 - 0.02 × h)
//! ```

use heapless::Vec;

use crate::aqi::{AqiCalculator, AqiCategory, AqiConfig};
use crate::constants::forecast::*;
use crate::constants::MAX_FORECAST_HOURS;
use crate::errors::{CoreError, CoreResult};
use crate::pollutant::PollutantReading;
use crate::time::{add_hours, hour_of_day, Timestamp};

/// One hour of meteorological forecast
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct MeteoSample {
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Wind direction (degrees from north)
    pub wind_direction: Option<f64>,
    /// Stability multiplier; > 1 traps pollutants, < 1 disperses them
    pub atmospheric_stability: Option<f64>,
    /// Air temperature (°C)
    pub temperature: Option<f64>,
    /// Relative humidity (%)
    pub humidity: Option<f64>,
}

impl MeteoSample {
    /// No wind, neutral stability
    pub const CALM: Self = Self {
        wind_speed: 0.0,
        wind_direction: None,
        atmospheric_stability: None,
        temperature: None,
        humidity: None,
    };
}

/// Projected conditions for one future hour
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ForecastPoint {
    /// Hours after issue, starting at 1
    pub hour: u32,
    /// Projected time (ms since epoch)
    pub timestamp: Timestamp,
    /// Projected concentrations (µg/m³)
    pub measurements: PollutantReading,
    /// Overall AQI of the projection
    pub aqi: u16,
    /// Category of the projection
    pub category: AqiCategory,
    /// Confidence of the projection
    pub confidence: f64,
}

/// Forecast parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ForecastConfig {
    /// Offset of local time from UTC (seconds) for the diurnal factor
    pub utc_offset_seconds: i32,
    /// Horizon used when the caller does not name one
    pub default_hours: usize,
    /// Confidence lost per hour
    pub confidence_decay_per_hour: f64,
    /// Lowest confidence of any point
    pub confidence_floor: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            utc_offset_seconds: 0,
            default_hours: DEFAULT_FORECAST_HOURS,
            confidence_decay_per_hour: FORECAST_CONFIDENCE_DECAY_PER_HOUR,
            confidence_floor: FORECAST_CONFIDENCE_FLOOR,
        }
    }
}

/// Emission factor for a local hour of day
pub fn diurnal_factor(hour_of_day: u32) -> f64 {
    match hour_of_day {
        7..=9 | 17..=19 => RUSH_HOUR_EMISSION_FACTOR,
        0..=6 => NIGHT_EMISSION_FACTOR,
        _ => BASELINE_EMISSION_FACTOR,
    }
}

/// Dispersion factor for a wind speed in m/s
pub fn wind_factor(wind_speed: f64) -> f64 {
    libm::exp(-wind_speed.max(0.0) / WIND_DISPERSION_SCALE_MS)
}

/// Forecaster bound to forecast and AQI configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Forecaster {
    config: ForecastConfig,
    calculator: AqiCalculator,
}

impl Forecaster {
    /// Create forecaster
    pub fn new(config: ForecastConfig, aqi: AqiConfig) -> Self {
        Self { config, calculator: AqiCalculator::new(aqi) }
    }

    /// Configuration in use
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Confidence of the point `hour` hours ahead
    pub fn confidence_at(&self, hour: u32) -> f64 {
        (1.0 - self.config.confidence_decay_per_hour * hour as f64).max(self.config.confidence_floor)
    }

    /// Project `current` over `hours` hours from `issued_at`
    ///
    /// Fails only when `hours` exceeds [`MAX_FORECAST_HOURS`].
    pub fn try_forecast(
        &self,
        current: &PollutantReading,
        meteo: &[MeteoSample],
        hours: usize,
        issued_at: Timestamp,
    ) -> CoreResult<Vec<ForecastPoint, MAX_FORECAST_HOURS>> {
        if hours > MAX_FORECAST_HOURS {
            return Err(CoreError::HorizonTooLong { requested: hours, max: MAX_FORECAST_HOURS });
        }

        let mut points = Vec::new();
        for h in 1..=hours {
            let sample = match meteo.len() {
                0 => MeteoSample::CALM,
                len => meteo[h.min(len) - 1],
            };
            let hour = h as u32;
            let timestamp = add_hours(issued_at, hour);

            let stability = sample
                .atmospheric_stability
                .filter(|s| s.is_finite())
                .unwrap_or(NEUTRAL_STABILITY)
                .max(0.0);
            let emission = diurnal_factor(hour_of_day(timestamp, self.config.utc_offset_seconds));
            let factor = wind_factor(sample.wind_speed) * stability * emission;

            let measurements = current.scaled(factor);
            let aqi = self.calculator.overall(&measurements);

            // Bounded by the horizon check above
            let _ = points.push(ForecastPoint {
                hour,
                timestamp,
                measurements,
                aqi: aqi.aqi,
                category: aqi.category,
                confidence: self.confidence_at(hour),
            });
        }
        Ok(points)
    }

    /// Like [`try_forecast`](Self::try_forecast), clamping the horizon
    pub fn forecast(
        &self,
        current: &PollutantReading,
        meteo: &[MeteoSample],
        hours: usize,
        issued_at: Timestamp,
    ) -> Vec<ForecastPoint, MAX_FORECAST_HOURS> {
        let clamped = hours.min(MAX_FORECAST_HOURS);
        if clamped != hours {
            log_warn!("Forecast horizon {}h clamped to {}h", hours, clamped);
        }
        self.try_forecast(current, meteo, clamped, issued_at)
            .unwrap_or_default()
    }
}

/// Persistence forecast with default configuration
pub fn forecast(
    current: &PollutantReading,
    meteo: &[MeteoSample],
    hours: usize,
    issued_at: Timestamp,
) -> Vec<ForecastPoint, MAX_FORECAST_HOURS> {
    Forecaster::default().forecast(current, meteo, hours, issued_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pollutant::Pollutant;

    // 2024-01-01T00:00:00Z
    const MIDNIGHT: Timestamp = 1_704_067_200_000;

    fn pm25(value: f64) -> PollutantReading {
        PollutantReading::from_pairs(&[(Pollutant::Pm25, value)]).unwrap()
    }

    fn assert_close(reading: PollutantReading, expected: f64) {
        let value = reading.get(Pollutant::Pm25).unwrap();
        assert!((value - expected).abs() < 1e-9, "{} != {}", value, expected);
    }

    #[test]
    fn diurnal_windows() {
        assert_eq!(diurnal_factor(0), 0.7);
        assert_eq!(diurnal_factor(6), 0.7);
        assert_eq!(diurnal_factor(7), 1.3);
        assert_eq!(diurnal_factor(9), 1.3);
        assert_eq!(diurnal_factor(10), 1.0);
        assert_eq!(diurnal_factor(17), 1.3);
        assert_eq!(diurnal_factor(19), 1.3);
        assert_eq!(diurnal_factor(23), 1.0);
    }

    #[test]
    fn default_horizon_has_24_points() {
        let points = forecast(&pm25(20.0), &[], 24, MIDNIGHT);
        assert_eq!(points.len(), 24);
        assert_eq!(points[0].hour, 1);
        assert_eq!(points[23].hour, 24);
        assert_eq!(points[23].timestamp, MIDNIGHT + 24 * 3_600_000);
    }

    #[test]
    fn calm_night_scales_by_emission_only() {
        // Hour 1 after midnight is 01:00 → night factor
        let points = forecast(&pm25(20.0), &[], 10, MIDNIGHT);
        assert_close(points[0].measurements, 14.0);
        // 08:00 → rush hour
        assert_close(points[7].measurements, 26.0);
        // 10:00 → baseline
        assert_close(points[9].measurements, 20.0);
    }

    #[test]
    fn diurnal_factor_uses_local_hour() {
        let forecaster = Forecaster::new(
            ForecastConfig { utc_offset_seconds: 7 * 3600, ..ForecastConfig::default() },
            AqiConfig::default(),
        );
        // 01:00 UTC is 08:00 at UTC+7
        let points = forecaster.forecast(&pm25(20.0), &[], 1, MIDNIGHT);
        assert_close(points[0].measurements, 26.0);
    }

    #[test]
    fn short_meteo_series_reuses_last_sample() {
        let meteo = [
            MeteoSample { wind_speed: 0.0, ..MeteoSample::CALM },
            MeteoSample { wind_speed: 10.0, ..MeteoSample::CALM },
        ];
        let issued = MIDNIGHT + 10 * 3_600_000; // hours 11-14 are baseline
        let points = forecast(&pm25(20.0), &meteo, 4, issued);
        let e = (-1.0f64).exp();
        assert_close(points[0].measurements, 20.0);
        for point in &points[1..] {
            assert_close(point.measurements, 20.0 * e);
        }
    }

    #[test]
    fn stability_multiplies() {
        let meteo = [MeteoSample { atmospheric_stability: Some(1.5), ..MeteoSample::CALM }];
        let issued = MIDNIGHT + 10 * 3_600_000;
        let points = forecast(&pm25(20.0), &meteo, 1, issued);
        assert_close(points[0].measurements, 30.0);
    }

    #[test]
    fn confidence_decays_to_floor() {
        let points = forecast(&pm25(20.0), &[], 48, MIDNIGHT);
        assert!((points[0].confidence - 0.98).abs() < 1e-12);
        assert!((points[9].confidence - 0.8).abs() < 1e-12);
        assert_eq!(points[34].confidence, 0.3);
        assert_eq!(points[47].confidence, 0.3);
        for pair in points.windows(2) {
            assert!(pair[1].confidence <= pair[0].confidence);
        }
    }

    #[test]
    fn aqi_follows_projection() {
        let issued = MIDNIGHT + 6 * 3_600_000; // first point at 07:00
        let points = forecast(&pm25(40.0), &[], 1, issued);
        // 40 × 1.3 = 52 → 101 + 49/19.9 × 16.5 ≈ 141.6
        assert_eq!(points[0].aqi, 142);
        assert_eq!(points[0].category, AqiCategory::UnhealthySensitive);
    }

    #[test]
    fn horizon_limits() {
        let forecaster = Forecaster::default();
        assert_eq!(
            forecaster.try_forecast(&pm25(1.0), &[], 100, MIDNIGHT).map(|p| p.len()),
            Err(CoreError::HorizonTooLong { requested: 100, max: MAX_FORECAST_HOURS })
        );
        assert_eq!(forecaster.forecast(&pm25(1.0), &[], 100, MIDNIGHT).len(), MAX_FORECAST_HOURS);
        assert!(forecaster.forecast(&pm25(1.0), &[], 0, MIDNIGHT).is_empty());
    }
}
