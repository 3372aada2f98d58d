//! Randomized readings and source sets with realistic urban ranges
//!
//! Concentrations are drawn per pollutant from ranges seen in monitoring
//! networks, and source sets mix types and ages the way a dashboard feed
//! does. Everything is seeded for reproducibility.

use citywise_core::{Pollutant, PollutantReading, SourceRecord, SourceType, Timestamp};

use super::harness::TestRng;
use super::HOUR_MS;

/// Typical concentration range per pollutant (µg/m³, AOD dimensionless)
pub fn typical_range(pollutant: Pollutant) -> (f64, f64) {
    match pollutant {
        Pollutant::Pm25 => (2.0, 250.0),
        Pollutant::Pm10 => (5.0, 400.0),
        Pollutant::No2 => (1.0, 200.0),
        Pollutant::So2 => (0.5, 150.0),
        Pollutant::Co => (100.0, 15_000.0),
        Pollutant::O3 => (5.0, 300.0),
        Pollutant::Aod => (0.01, 3.0),
    }
}

/// Generator for readings and source sets
pub struct ReadingGenerator {
    rng: TestRng,
    /// Probability that any one pollutant is reported
    pub coverage: f64,
}

impl ReadingGenerator {
    pub fn new(seed: u32) -> Self {
        Self { rng: TestRng::new(seed), coverage: 0.8 }
    }

    /// Random reading within typical ranges
    pub fn reading(&mut self) -> PollutantReading {
        let mut reading = PollutantReading::new();
        for pollutant in Pollutant::ALL {
            if self.rng.gen_bool(self.coverage) {
                let (low, high) = typical_range(pollutant);
                reading
                    .set(pollutant, self.rng.gen_range(low, high))
                    .expect("generated concentration is valid");
            }
        }
        reading
    }

    /// Copy of `base` with each value perturbed by up to ±`spread` (relative)
    pub fn perturbed(&mut self, base: &PollutantReading, spread: f64) -> PollutantReading {
        let mut reading = PollutantReading::new();
        for (pollutant, value) in base.iter() {
            let factor = 1.0 + self.rng.gen_range(-spread, spread);
            reading
                .set(pollutant, (value * factor).max(0.0))
                .expect("perturbed concentration is valid");
        }
        reading
    }

    /// Random source type
    pub fn source_type(&mut self) -> SourceType {
        match self.rng.next_u32() % 4 {
            0 => SourceType::GroundStation,
            1 => SourceType::Satellite,
            2 => SourceType::ModelPrediction,
            _ => SourceType::Unknown,
        }
    }

    /// `count` sources observing roughly the same air, up to `max_age_hours` old
    pub fn sources(&mut self, count: usize, now: Timestamp, max_age_hours: f64) -> Vec<SourceRecord> {
        let base = self.reading();
        (0..count)
            .map(|_| {
                let measurements = self.perturbed(&base, 0.2);
                let age_ms = (self.rng.gen_range(0.0, max_age_hours) * HOUR_MS as f64) as u64;
                let mut record = SourceRecord::new(self.source_type(), measurements, now - age_ms);
                if self.rng.gen_bool(0.5) {
                    record = record
                        .with_confidence(self.rng.next_f64())
                        .expect("confidence in [0, 1)");
                }
                record
            })
            .collect()
    }
}
