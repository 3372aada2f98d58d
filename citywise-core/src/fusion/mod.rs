//! Multi-Source Measurement Fusion
//!
//! ## Overview
//!
//! The dashboard receives the same pollutants from providers of very
//! different quality: reference ground stations, satellite retrievals and
//! chemical transport model predictions. Fusion combines them into one
//! canonical reading.
//!
//! ```text
//! Ground station ──┐
//! Satellite      ──┼─→ weight ─→ Σ(wᵢ·vᵢ) / Σwᵢ ─→ FusedReading
//! Model          ──┘                                   ↓
//!                                                  confidence
//! ```
//!
//! ## Weighting
//!
//! ```text
//! wᵢ = reliability(typeᵢ) × exp(-ageᵢ / 24h) × (confidenceᵢ ?? 1.0)
//! ```
//!
//! | Type             | Reliability |
//! |------------------|-------------|
//! | ground station   | 1.0         |
//! | satellite        | 0.8         |
//! | model prediction | 0.6         |
//! | unknown          | 0.5         |
//!
//! Each pollutant is averaged only over the sources that report it;
//! pollutants nobody reports stay absent.
//!
//! ## Numerical Notes
//!
//! The weighted mean is computed relative to the first reported value:
//!
//! ```text
//! fused = v₀ + Σ wᵢ(vᵢ - v₀) / Σwᵢ
//! ```
//!
//! Sources that agree exactly therefore fuse to exactly their common value.
//!
//! ## Usage Example
//!
//! ```rust
//! use citywise_core::fusion::{fuse, SourceRecord, SourceType};
//! use citywise_core::{Pollutant, PollutantReading};
//!
//! let now = 1_700_000_000_000;
//! let reading = PollutantReading::from_pairs(&[(Pollutant::Pm25, 35.0)]).unwrap();
//! let sources = [
//!     SourceRecord::new(SourceType::GroundStation, reading, now).with_confidence(0.95).unwrap(),
//!     SourceRecord::new(SourceType::ModelPrediction, reading, now).with_confidence(0.6).unwrap(),
//! ];
//!
//! let fused = fuse(&sources, now);
//! assert_eq!(fused.measurements.get(Pollutant::Pm25), Some(35.0));
//! assert!(fused.weights.ground_station > fused.weights.model_prediction);
//! ```

pub mod confidence;
pub mod weighting;

pub use confidence::{aggregate_confidence, ConfidenceScore};
pub use weighting::{recency_weight, reliability_weight, source_weight};

use core::fmt;

use crate::constants::fusion::{
    DEFAULT_AGGREGATE_CONFIDENCE, DEFAULT_WEIGHTING_CONFIDENCE, FULL_CONFIDENCE_SOURCE_COUNT,
    RECENCY_DECAY_HOURS, RELIABILITY_GROUND_STATION, RELIABILITY_MODEL_PREDICTION,
    RELIABILITY_SATELLITE, RELIABILITY_UNKNOWN,
};
use crate::errors::{CoreError, CoreResult};
use crate::pollutant::{Pollutant, PollutantReading};
use crate::time::{TimeSource, Timestamp};

/// Provenance class of a measurement source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SourceType {
    /// Reference monitoring station
    GroundStation,
    /// Satellite retrieval
    Satellite,
    /// Chemical transport model output
    ModelPrediction,
    /// Anything else
    Unknown,
}

impl SourceType {
    /// Wire name, e.g. `"ground_station"`
    pub const fn as_str(self) -> &'static str {
        match self {
            SourceType::GroundStation => "ground_station",
            SourceType::Satellite => "satellite",
            SourceType::ModelPrediction => "model_prediction",
            SourceType::Unknown => "unknown",
        }
    }

    /// Parse a wire name; anything unrecognised is `Unknown`
    pub fn from_name(name: &str) -> Self {
        match name {
            "ground_station" => SourceType::GroundStation,
            "satellite" => SourceType::Satellite,
            "model_prediction" => SourceType::ModelPrediction,
            _ => SourceType::Unknown,
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One provider's measurements with provenance
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SourceRecord {
    /// Provenance class
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub source_type: SourceType,
    /// Measured concentrations (µg/m³)
    pub measurements: PollutantReading,
    /// Observation time (ms since epoch)
    pub timestamp: Timestamp,
    /// Provider-stated confidence in [0, 1]
    #[cfg_attr(feature = "serde", serde(default))]
    pub confidence: Option<f64>,
}

impl SourceRecord {
    /// Record without stated confidence
    pub fn new(source_type: SourceType, measurements: PollutantReading, timestamp: Timestamp) -> Self {
        Self { source_type, measurements, timestamp, confidence: None }
    }

    /// Attach a stated confidence, which must lie in [0, 1]
    pub fn with_confidence(mut self, confidence: f64) -> CoreResult<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(CoreError::ConfidenceOutOfRange { value: confidence });
        }
        self.confidence = Some(confidence);
        Ok(self)
    }
}

/// Total weight contributed per source type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub struct SourceWeights {
    /// Total weight of ground stations
    pub ground_station: f64,
    /// Total weight of satellite retrievals
    pub satellite: f64,
    /// Total weight of model predictions
    pub model_prediction: f64,
    /// Total weight of unrecognised sources
    pub unknown: f64,
}

impl SourceWeights {
    /// Weight of one source type
    pub fn get(&self, source_type: SourceType) -> f64 {
        match source_type {
            SourceType::GroundStation => self.ground_station,
            SourceType::Satellite => self.satellite,
            SourceType::ModelPrediction => self.model_prediction,
            SourceType::Unknown => self.unknown,
        }
    }

    fn add(&mut self, source_type: SourceType, weight: f64) {
        let slot = match source_type {
            SourceType::GroundStation => &mut self.ground_station,
            SourceType::Satellite => &mut self.satellite,
            SourceType::ModelPrediction => &mut self.model_prediction,
            SourceType::Unknown => &mut self.unknown,
        };
        *slot += weight;
    }

    /// Sum over all types
    pub fn total(&self) -> f64 {
        self.ground_station + self.satellite + self.model_prediction + self.unknown
    }
}

/// Result of fusing several sources
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FusedReading {
    /// Fused concentrations
    pub measurements: PollutantReading,
    /// Weight contributed per source type
    pub weights: SourceWeights,
    /// Aggregate confidence
    pub confidence: ConfidenceScore,
    /// Number of sources fused
    pub source_count: usize,
}

impl FusedReading {
    /// A reading taken as-is, without fusion
    pub fn single(measurements: PollutantReading) -> Self {
        Self {
            measurements,
            weights: SourceWeights::default(),
            confidence: ConfidenceScore::FULL,
            source_count: 1,
        }
    }
}

/// Fusion parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FusionConfig {
    /// Reliability of ground stations
    pub ground_station_weight: f64,
    /// Reliability of satellite retrievals
    pub satellite_weight: f64,
    /// Reliability of model predictions
    pub model_prediction_weight: f64,
    /// Reliability of unrecognised sources
    pub unknown_weight: f64,
    /// Recency decay constant τ in hours; 0 disables decay
    pub recency_decay_hours: f64,
    /// Confidence used for weighting when a source states none
    pub default_weighting_confidence: f64,
    /// Confidence used for aggregation when a source states none
    pub default_aggregate_confidence: f64,
    /// Sources needed for full redundancy credit
    pub full_confidence_sources: usize,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            ground_station_weight: RELIABILITY_GROUND_STATION,
            satellite_weight: RELIABILITY_SATELLITE,
            model_prediction_weight: RELIABILITY_MODEL_PREDICTION,
            unknown_weight: RELIABILITY_UNKNOWN,
            recency_decay_hours: RECENCY_DECAY_HOURS,
            default_weighting_confidence: DEFAULT_WEIGHTING_CONFIDENCE,
            default_aggregate_confidence: DEFAULT_AGGREGATE_CONFIDENCE,
            full_confidence_sources: FULL_CONFIDENCE_SOURCE_COUNT,
        }
    }
}

/// Fuse sources with the default configuration
///
/// Never fails: an empty slice yields an empty reading with zero weights
/// and zero confidence.
pub fn fuse(sources: &[SourceRecord], now: Timestamp) -> FusedReading {
    fuse_with(sources, now, &FusionConfig::default())
}

/// Fuse sources with an explicit configuration
pub fn fuse_with(sources: &[SourceRecord], now: Timestamp, config: &FusionConfig) -> FusedReading {
    if sources.is_empty() {
        return FusedReading::default();
    }

    let mut weights = SourceWeights::default();
    for source in sources {
        weights.add(source.source_type, source_weight(source, now, config));
    }

    let mut measurements = PollutantReading::new();
    for pollutant in Pollutant::ALL {
        if let Some(value) = fuse_pollutant(sources, pollutant, now, config) {
            if let Err(error) = measurements.set(pollutant, value) {
                log_warn!("Dropping fused {}: {}", pollutant, error);
            }
        }
    }

    let confidence = aggregate_confidence(
        sources.iter().map(|s| s.confidence),
        config.default_aggregate_confidence,
        config.full_confidence_sources,
    );

    log_debug!(
        "Fused {} sources into {} pollutants (confidence {})",
        sources.len(), measurements.len(), confidence
    );

    FusedReading {
        measurements,
        weights,
        confidence,
        source_count: sources.len(),
    }
}

/// Weighted mean of one pollutant over the sources reporting it
fn fuse_pollutant(
    sources: &[SourceRecord],
    pollutant: Pollutant,
    now: Timestamp,
    config: &FusionConfig,
) -> Option<f64> {
    let mut reporting = sources
        .iter()
        .filter_map(|s| s.measurements.get(pollutant).map(|v| (s, v)))
        .peekable();

    let (_, reference) = *reporting.peek()?;

    let mut weighted_offset = 0.0;
    let mut total_weight = 0.0;
    let mut plain_offset = 0.0;
    let mut count = 0usize;
    for (source, value) in reporting {
        let weight = source_weight(source, now, config);
        weighted_offset += weight * (value - reference);
        total_weight += weight;
        plain_offset += value - reference;
        count += 1;
    }

    if total_weight > 0.0 {
        Some(reference + weighted_offset / total_weight)
    } else {
        log_warn!(
            "Fusion: all {} sources reporting {} carry zero weight, using plain mean",
            count, pollutant
        );
        Some(reference + plain_offset / count as f64)
    }
}

/// Fusion bound to a configuration and a clock
pub struct FusionEngine<T: TimeSource> {
    config: FusionConfig,
    clock: T,
}

impl<T: TimeSource> FusionEngine<T> {
    /// Create engine with configuration and time source
    pub fn new(config: FusionConfig, clock: T) -> Self {
        Self { config, clock }
    }

    /// Configuration in use
    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Fuse sources as of the clock's current time
    pub fn fuse(&self, sources: &[SourceRecord]) -> FusedReading {
        fuse_with(sources, self.clock.now(), &self.config)
    }
}
