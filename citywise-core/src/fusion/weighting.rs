//! Per-source trust weights
//!
//! ```text
//! weight = reliability(type) × exp(-age_hours / τ) × (confidence ?? 1.0)
//! ```

use super::{FusionConfig, SourceRecord, SourceType};
use crate::time::{age_hours, Timestamp};

/// Reliability weight of a source type under `config`
pub fn reliability_weight(source_type: SourceType, config: &FusionConfig) -> f64 {
    match source_type {
        SourceType::GroundStation => config.ground_station_weight,
        SourceType::Satellite => config.satellite_weight,
        SourceType::ModelPrediction => config.model_prediction_weight,
        SourceType::Unknown => config.unknown_weight,
    }
}

/// Exponential recency decay for a source observed at `observed`
///
/// Sources dated after `now` count as fresh.
pub fn recency_weight(observed: Timestamp, now: Timestamp, config: &FusionConfig) -> f64 {
    if config.recency_decay_hours <= 0.0 {
        return 1.0;
    }
    libm::exp(-age_hours(observed, now) / config.recency_decay_hours)
}

/// Combined trust weight of one source
pub fn source_weight(source: &SourceRecord, now: Timestamp, config: &FusionConfig) -> f64 {
    let confidence = source
        .confidence
        .unwrap_or(config.default_weighting_confidence)
        .max(0.0)
        .min(1.0);

    reliability_weight(source.source_type, config)
        * recency_weight(source.timestamp, now, config)
        * confidence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MS_PER_HOUR;
    use crate::pollutant::PollutantReading;

    #[test]
    fn reliability_ordering() {
        let config = FusionConfig::default();
        assert_eq!(reliability_weight(SourceType::GroundStation, &config), 1.0);
        assert_eq!(reliability_weight(SourceType::Satellite, &config), 0.8);
        assert_eq!(reliability_weight(SourceType::ModelPrediction, &config), 0.6);
        assert_eq!(reliability_weight(SourceType::Unknown, &config), 0.5);
    }

    #[test]
    fn recency_decays_with_tau() {
        let config = FusionConfig::default();
        let now = 100 * MS_PER_HOUR;
        assert_eq!(recency_weight(now, now, &config), 1.0);
        let day_old = recency_weight(now - 24 * MS_PER_HOUR, now, &config);
        assert!((day_old - (-1.0f64).exp()).abs() < 1e-12);
        assert_eq!(recency_weight(now + MS_PER_HOUR, now, &config), 1.0);
    }

    #[test]
    fn weight_multiplies_factors() {
        let config = FusionConfig::default();
        let now = 10 * MS_PER_HOUR;
        let source = SourceRecord::new(SourceType::Satellite, PollutantReading::new(), now)
            .with_confidence(0.5)
            .unwrap();
        assert!((source_weight(&source, now, &config) - 0.4).abs() < 1e-12);

        let unstated = SourceRecord::new(SourceType::Satellite, PollutantReading::new(), now);
        assert!((source_weight(&unstated, now, &config) - 0.8).abs() < 1e-12);
    }
}
