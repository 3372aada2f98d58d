//! City scenarios with hand-checked outcomes
//!
//! Each scenario pairs a reading with its attribution context and the AQI
//! figures a dashboard must show for it.

use citywise_core::{
    AqiCategory, AttributionContext, Emissions, LandUse, Meteorology, Pollutant, PollutantReading,
    SourceCategory,
};

use super::reading;

/// Expected outcome of a scenario
#[derive(Debug, Clone)]
pub struct ExpectedOutcome {
    pub aqi: u16,
    pub category: AqiCategory,
    pub primary: Option<Pollutant>,
    pub exceedances: Vec<Pollutant>,
    pub dominant_source: SourceCategory,
}

/// Reading plus context with its expected outcome
#[derive(Debug, Clone)]
pub struct CityScenario {
    pub name: &'static str,
    pub reading: PollutantReading,
    pub context: AttributionContext,
    pub expected: ExpectedOutcome,
}

pub struct Scenarios;

impl Scenarios {
    /// Clean coastal morning
    pub fn clean_air() -> CityScenario {
        CityScenario {
            name: "clean_air",
            reading: reading(&[(Pollutant::Pm25, 4.0), (Pollutant::Pm10, 10.0), (Pollutant::O3, 20.0)]),
            context: AttributionContext::default(),
            expected: ExpectedOutcome {
                // PM2.5 4.0 → 50/12 × 4 ≈ 16.7
                aqi: 17,
                category: AqiCategory::Good,
                primary: Some(Pollutant::Pm25),
                exceedances: vec![],
                dominant_source: SourceCategory::Natural,
            },
        }
    }

    /// Arterial road at rush hour
    pub fn traffic_corridor() -> CityScenario {
        CityScenario {
            name: "traffic_corridor",
            reading: reading(&[(Pollutant::Pm25, 45.3), (Pollutant::Pm10, 39.6), (Pollutant::No2, 96.0)]),
            context: AttributionContext {
                land_use: LandUse { road_density: Some(0.9), ..LandUse::default() },
                meteorology: Meteorology { wind_speed: Some(1.5), ..Meteorology::default() },
                ..AttributionContext::default()
            },
            expected: ExpectedOutcome {
                // PM2.5 45.3 → 125; NO2 96 µg/m³ ≈ 51 ppb → 48
                aqi: 125,
                category: AqiCategory::UnhealthySensitive,
                primary: Some(Pollutant::Pm25),
                exceedances: vec![Pollutant::Pm25, Pollutant::No2],
                dominant_source: SourceCategory::Traffic,
            },
        }
    }

    /// Industrial estate downwind of a smelter
    pub fn industrial_estate() -> CityScenario {
        CityScenario {
            name: "industrial_estate",
            reading: reading(&[(Pollutant::Pm25, 10.0), (Pollutant::So2, 90.0)]),
            context: AttributionContext {
                land_use: LandUse { industrial_fraction: Some(0.8), ..LandUse::default() },
                ..AttributionContext::default()
            },
            expected: ExpectedOutcome {
                // PM2.5 10 → 41.7; SO2 has no AQI table
                aqi: 42,
                category: AqiCategory::Good,
                primary: Some(Pollutant::Pm25),
                exceedances: vec![Pollutant::So2],
                // 0.9 × 0.8 capped at 0.7 industry, 0.3 natural
                dominant_source: SourceCategory::Industry,
            },
        }
    }

    /// Peri-urban fringe during crop-residue burning
    pub fn smoke_event() -> CityScenario {
        CityScenario {
            name: "smoke_event",
            reading: reading(&[(Pollutant::Pm25, 180.0), (Pollutant::Co, 3000.0)]),
            context: AttributionContext {
                emissions: Emissions { fire_count: Some(100), ..Emissions::default() },
                ..AttributionContext::default()
            },
            expected: ExpectedOutcome {
                // PM2.5 180 in 150.5-250.4 → 201 + 99/99.9 × 29.5 ≈ 230.2
                aqi: 230,
                category: AqiCategory::VeryUnhealthy,
                primary: Some(Pollutant::Pm25),
                exceedances: vec![Pollutant::Pm25],
                // 100/10 × 0.06 = 0.6 biomass, 0.4 natural
                dominant_source: SourceCategory::BiomassBurning,
            },
        }
    }

    /// Every scenario
    pub fn all() -> Vec<CityScenario> {
        vec![
            Self::clean_air(),
            Self::traffic_corridor(),
            Self::industrial_estate(),
            Self::smoke_event(),
        ]
    }
}
