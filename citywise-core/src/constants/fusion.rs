//! Source Weighting and Fusion Constants
//!
//! Parameters for combining ground stations, satellite retrievals and model
//! predictions into one fused reading.

// ===== RELIABILITY WEIGHTS =====

/// Reliability weight of a calibrated ground monitoring station.
///
/// Reference-grade instruments are the baseline every other source is
/// measured against.
pub const RELIABILITY_GROUND_STATION: f64 = 1.0;

/// Reliability weight of a satellite retrieval.
///
/// Column measurements converted to surface concentrations carry retrieval
/// and vertical-profile uncertainty.
pub const RELIABILITY_SATELLITE: f64 = 0.8;

/// Reliability weight of a chemical transport model prediction.
pub const RELIABILITY_MODEL_PREDICTION: f64 = 0.6;

/// Reliability weight for a source whose type is not recognised.
pub const RELIABILITY_UNKNOWN: f64 = 0.5;

// ===== RECENCY =====

/// Decay constant τ for recency weighting (hours).
///
/// ```text
/// recency = exp(-age_hours / τ)
/// ```
///
/// This is an e-folding time, not a half-life: a 24-hour old source keeps
/// ~37% of its weight.
pub const RECENCY_DECAY_HOURS: f64 = 24.0;

// ===== CONFIDENCE =====

/// Confidence applied when weighting a source that states none.
pub const DEFAULT_WEIGHTING_CONFIDENCE: f64 = 1.0;

/// Confidence assumed for a source that states none when aggregating the
/// fused confidence.
pub const DEFAULT_AGGREGATE_CONFIDENCE: f64 = 0.5;

/// Number of independent sources needed for the fused confidence to reach
/// the mean source confidence.
///
/// ```text
/// confidence = mean(source confidence) × min(n / 3, 1)
/// ```
pub const FULL_CONFIDENCE_SOURCE_COUNT: usize = 3;
