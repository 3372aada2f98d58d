//! Confidence Scoring for Fused Readings
//!
//! ## Overview
//!
//! A fused reading carries one confidence value in [0, 1] that tells the
//! dashboard how much to trust it. Two factors feed it:
//!
//! 1. **Source confidence**: what each provider states about its own
//!    measurement (retrieval quality flags, station QA level)
//! 2. **Redundancy**: how many independent sources agree to the estimate
//!
//! ```text
//! confidence = mean(source confidence) × min(n / 3, 1)
//! ```
//!
//! A single perfect source therefore yields at most 1/3; three or more
//! sources reach the mean of their stated confidences.
//!
//! ## Implementation Notes
//!
//! - All scores are clamped to [0, 1]
//! - NaN inputs collapse to zero
//! - No allocation

use core::fmt;

/// Confidence score in range [0, 1]
///
/// 0.0 = no confidence, 1.0 = full confidence
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ConfidenceScore(f64);

impl ConfidenceScore {
    /// No confidence (0%)
    pub const ZERO: Self = Self(0.0);

    /// Full confidence (100%)
    pub const FULL: Self = Self(1.0);

    /// High confidence threshold (80%)
    pub const HIGH_THRESHOLD: Self = Self(0.8);

    /// Low confidence threshold (50%)
    pub const LOW_THRESHOLD: Self = Self(0.5);

    /// Create from floating point value, clamped to [0, 1]
    pub fn from_float(confidence: f64) -> Self {
        if confidence.is_nan() {
            return Self::ZERO;
        }
        Self(confidence.max(0.0).min(1.0))
    }

    /// Convert to floating point [0, 1]
    pub fn as_float(&self) -> f64 {
        self.0
    }

    /// Check if confidence is at or above the high threshold
    pub fn is_high(&self) -> bool {
        *self >= Self::HIGH_THRESHOLD
    }

    /// Check if confidence is below the low threshold
    pub fn is_low(&self) -> bool {
        *self < Self::LOW_THRESHOLD
    }

    /// Arithmetic mean of several scores; zero for none
    pub fn mean(scores: impl IntoIterator<Item = Self>) -> Self {
        let (sum, count) = scores
            .into_iter()
            .fold((0.0, 0usize), |(sum, n), s| (sum + s.0, n + 1));
        if count == 0 {
            return Self::ZERO;
        }
        Self::from_float(sum / count as f64)
    }

    /// Scale by the redundancy factor `min(sources / full_count, 1)`
    pub fn with_redundancy(self, sources: usize, full_count: usize) -> Self {
        if full_count == 0 {
            return self;
        }
        let factor = (sources as f64 / full_count as f64).min(1.0);
        Self::from_float(self.0 * factor)
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Aggregate confidence of a set of sources
///
/// `stated` yields each source's own confidence (if any); sources without
/// one count as `default_confidence`.
pub fn aggregate_confidence(
    stated: impl IntoIterator<Item = Option<f64>>,
    default_confidence: f64,
    full_count: usize,
) -> ConfidenceScore {
    let mut count = 0usize;
    let mean = ConfidenceScore::mean(stated.into_iter().map(|c| {
        count += 1;
        ConfidenceScore::from_float(c.unwrap_or(default_confidence))
    }));
    mean.with_redundancy(count, full_count)
}
