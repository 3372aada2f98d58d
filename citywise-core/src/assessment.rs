//! End-to-end assessment of one location
//!
//! ```text
//! sources ─► fuse ─► overall AQI ─► attribution ─► WHO check ─► forecast
//! ```
//!
//! Each stage is a pure function of the previous stage's output plus the
//! caller-supplied context, so an [`Assessment`] is fully determined by its
//! inputs and the timestamp it was issued at.
//!
//! Incoming gas concentrations are read in the configured
//! [`GasUnits`](crate::units::GasUnits); everything an assessment reports is
//! canonical µg/m³.

use heapless::Vec;

use crate::aqi::{AqiCalculator, AqiConfig, AqiResult};
use crate::attribution::{attribute, AttributionContext, AttributionVector};
use crate::constants::{MAX_FORECAST_HOURS, POLLUTANT_COUNT};
use crate::forecast::{ForecastConfig, ForecastPoint, Forecaster, MeteoSample};
use crate::fusion::{fuse_with, FusedReading, FusionConfig, SourceRecord};
use crate::pollutant::PollutantReading;
use crate::time::{TimeSource, Timestamp};
use crate::units::to_canonical_units;
use crate::who::{check_thresholds, Exceedance};

/// Configuration of every stage
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct EngineConfig {
    /// AQI stage
    pub aqi: AqiConfig,
    /// Fusion stage
    pub fusion: FusionConfig,
    /// Forecast stage
    pub forecast: ForecastConfig,
}

/// Everything the dashboard shows for one location
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Assessment {
    /// Fused reading the other stages were computed from
    pub fused: FusedReading,
    /// Overall AQI and driving pollutant
    pub aqi: AqiResult,
    /// Estimated source shares
    pub source_attribution: AttributionVector,
    /// WHO guideline exceedances in canonical pollutant order
    pub who_exceedances: Vec<Exceedance, POLLUTANT_COUNT>,
    /// Hourly projection
    pub forecast: Vec<ForecastPoint, MAX_FORECAST_HOURS>,
    /// Time the assessment was issued at
    pub issued_at: Timestamp,
}

impl Assessment {
    /// Whether any pollutant exceeds its WHO guideline
    pub fn exceeds_guidelines(&self) -> bool {
        !self.who_exceedances.is_empty()
    }

    /// Highest AQI over the forecast, if any point was projected
    pub fn peak_forecast_aqi(&self) -> Option<u16> {
        self.forecast.iter().map(|p| p.aqi).max()
    }
}

/// Assessment stages bound to a configuration and a clock
pub struct Engine<T: TimeSource> {
    config: EngineConfig,
    calculator: AqiCalculator,
    forecaster: Forecaster,
    clock: T,
}

impl<T: TimeSource> Engine<T> {
    /// Create engine
    pub fn new(config: EngineConfig, clock: T) -> Self {
        Self {
            config,
            calculator: AqiCalculator::default(),
            forecaster: Forecaster::new(config.forecast, AqiConfig::default()),
            clock,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fuse `sources` and assess the result as of the clock's time
    pub fn assess(
        &self,
        sources: &[SourceRecord],
        context: &AttributionContext,
        meteo: &[MeteoSample],
    ) -> Assessment {
        let now = self.clock.now();
        let fused = fuse_with(sources, now, &self.config.fusion);
        self.assess_fused(fused, context, meteo, now)
    }

    /// Assess a reading the caller already holds
    pub fn assess_reading(
        &self,
        reading: &PollutantReading,
        context: &AttributionContext,
        meteo: &[MeteoSample],
    ) -> Assessment {
        self.assess_fused(FusedReading::single(*reading), context, meteo, self.clock.now())
    }

    fn assess_fused(
        &self,
        mut fused: FusedReading,
        context: &AttributionContext,
        meteo: &[MeteoSample],
        now: Timestamp,
    ) -> Assessment {
        fused.measurements = to_canonical_units(&fused.measurements, self.config.aqi.gas_units);
        let aqi = self.calculator.overall(&fused.measurements);
        let source_attribution = attribute(&fused.measurements, context);
        let who_exceedances = check_thresholds(&fused.measurements);
        let forecast = self.forecaster.forecast(
            &fused.measurements,
            meteo,
            self.config.forecast.default_hours,
            now,
        );

        log_debug!(
            "Assessment: AQI {} ({}), {} exceedances, dominant source {}",
            aqi.aqi, aqi.category, who_exceedances.len(), source_attribution.dominant()
        );

        Assessment {
            fused,
            aqi,
            source_attribution,
            who_exceedances,
            forecast,
            issued_at: now,
        }
    }
}

/// Fuse and assess with default configuration at time `now`
pub fn assess(
    sources: &[SourceRecord],
    context: &AttributionContext,
    meteo: &[MeteoSample],
    now: Timestamp,
) -> Assessment {
    Engine::new(EngineConfig::default(), crate::time::FixedTime::new(now)).assess(sources, context, meteo)
}

/// Assess a single reading with default configuration at time `now`
pub fn assess_reading(
    reading: &PollutantReading,
    context: &AttributionContext,
    meteo: &[MeteoSample],
    now: Timestamp,
) -> Assessment {
    Engine::new(EngineConfig::default(), crate::time::FixedTime::new(now))
        .assess_reading(reading, context, meteo)
}
