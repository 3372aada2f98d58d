//! Pollution Source Attribution
//!
//! ## Overview
//!
//! Apportions an observed pollutant mix across six emission categories using
//! chemical ratios and local context. Each category gets an independent,
//! capped partial score; the vector is then normalized to sum to 1.
//!
//! ## Heuristics
//!
//! ```text
//! Category          | Trigger                                  | Score (capped)
//! ------------------|------------------------------------------|-------------------------------
//! traffic           | NO2/PM2.5 > 2, road density > 0.5        | ratio × density × 0.3     ≤ 0.8
//! industry          | SO2 > 20, industrial fraction > 0.1      | SO2/100 × fraction        ≤ 0.7
//! biomass_burning   | fires > 0, PM2.5/CO > 0.01               | fires/10 × ratio          ≤ 0.6
//! residential       | residential fraction > 0.3               | fraction × 0.4            ≤ 0.5
//! power_generation  | SO2 > 10, plant distance < 5 km          | (SO2-10)/50 × (5-d)/5     ≤ 0.4
//! natural           | always                                   | max(0, 1 - Σ others)
//! ```
//!
//! ## Missing Context
//!
//! Missing concentrations and context values count as 0 and therefore do
//! not trigger. A ratio with a zero denominator does not trigger. An unknown
//! power plant distance does not trigger.
//!
//! ## Degenerate Input
//!
//! The natural residual guarantees a positive total for finite inputs. If
//! the total is still not a positive finite number the result is
//! `natural = 1`.

use core::fmt;

use crate::constants::attribution::*;
use crate::pollutant::{Pollutant, PollutantReading};

/// Emission source category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SourceCategory {
    /// Road vehicles
    Traffic,
    /// Industrial processes
    Industry,
    /// Wildfires and agricultural burning
    BiomassBurning,
    /// Household heating and cooking
    Residential,
    /// Fossil-fuel power plants
    PowerGeneration,
    /// Background: dust, sea salt, biogenic
    Natural,
}

impl SourceCategory {
    /// Every category in report order
    pub const ALL: [SourceCategory; 6] = [
        SourceCategory::Traffic,
        SourceCategory::Industry,
        SourceCategory::BiomassBurning,
        SourceCategory::Residential,
        SourceCategory::PowerGeneration,
        SourceCategory::Natural,
    ];

    /// Key used in JSON responses, e.g. `"biomass_burning"`
    pub const fn as_str(self) -> &'static str {
        match self {
            SourceCategory::Traffic => "traffic",
            SourceCategory::Industry => "industry",
            SourceCategory::BiomassBurning => "biomass_burning",
            SourceCategory::Residential => "residential",
            SourceCategory::PowerGeneration => "power_generation",
            SourceCategory::Natural => "natural",
        }
    }
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meteorological conditions at the location
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Meteorology {
    /// Wind speed (m/s)
    pub wind_speed: Option<f64>,
    /// Wind direction (degrees from north)
    pub wind_direction: Option<f64>,
    /// Air temperature (°C)
    pub temperature: Option<f64>,
    /// Relative humidity (%)
    pub humidity: Option<f64>,
}

/// Land use around the location
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LandUse {
    /// Road density normalised to [0, 1]
    pub road_density: Option<f64>,
    /// Fraction of industrial land
    pub industrial_fraction: Option<f64>,
    /// Fraction of residential land
    pub residential_fraction: Option<f64>,
}

/// Emission-related observations around the location
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Emissions {
    /// Active fire detections (thermal anomalies)
    pub fire_count: Option<u32>,
    /// Distance to the nearest power plant (km)
    pub power_plant_distance_km: Option<f64>,
}

/// Context for attribution
///
/// Meteorology travels with the request for the boundary layer; the current
/// scores do not read it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AttributionContext {
    /// Weather at the location
    pub meteorology: Meteorology,
    /// Land use around the location
    pub land_use: LandUse,
    /// Fire detections and plant proximity
    pub emissions: Emissions,
}

/// Normalized apportionment across source categories
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributionVector {
    /// Share of road traffic
    pub traffic: f64,
    /// Share of industry
    pub industry: f64,
    /// Share of biomass burning
    pub biomass_burning: f64,
    /// Share of residential sources
    pub residential: f64,
    /// Share of power generation
    pub power_generation: f64,
    /// Share of natural background
    pub natural: f64,
}

impl AttributionVector {
    /// Everything attributed to natural background
    pub const NATURAL_ONLY: Self = Self {
        traffic: 0.0,
        industry: 0.0,
        biomass_burning: 0.0,
        residential: 0.0,
        power_generation: 0.0,
        natural: 1.0,
    };

    /// Share of one category
    pub fn get(&self, category: SourceCategory) -> f64 {
        match category {
            SourceCategory::Traffic => self.traffic,
            SourceCategory::Industry => self.industry,
            SourceCategory::BiomassBurning => self.biomass_burning,
            SourceCategory::Residential => self.residential,
            SourceCategory::PowerGeneration => self.power_generation,
            SourceCategory::Natural => self.natural,
        }
    }

    /// Categories and shares in report order
    pub fn iter(&self) -> impl Iterator<Item = (SourceCategory, f64)> + '_ {
        SourceCategory::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Sum of all shares
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// Category with the largest share; earlier categories win ties
    pub fn dominant(&self) -> SourceCategory {
        let mut best = (SourceCategory::Traffic, self.traffic);
        for (category, share) in self.iter().skip(1) {
            if share > best.1 {
                best = (category, share);
            }
        }
        best.0
    }
}

/// Un-normalized partial scores
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct PartialScores {
    traffic: f64,
    industry: f64,
    biomass_burning: f64,
    residential: f64,
    power_generation: f64,
}

impl PartialScores {
    fn anthropogenic(&self) -> f64 {
        self.traffic + self.industry + self.biomass_burning + self.residential + self.power_generation
    }
}

/// Ratio `numerator / denominator`, only when the denominator is positive
fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

fn traffic_score(reading: &PollutantReading, land_use: &LandUse) -> f64 {
    let road_density = land_use.road_density.unwrap_or(0.0);
    match ratio(reading.get_or_zero(Pollutant::No2), reading.get_or_zero(Pollutant::Pm25)) {
        Some(r) if r > TRAFFIC_NO2_PM25_RATIO && road_density > TRAFFIC_ROAD_DENSITY => {
            (r * road_density * TRAFFIC_SCALE).min(TRAFFIC_CAP)
        }
        _ => 0.0,
    }
}

fn industry_score(reading: &PollutantReading, land_use: &LandUse) -> f64 {
    let so2 = reading.get_or_zero(Pollutant::So2);
    let fraction = land_use.industrial_fraction.unwrap_or(0.0);
    if so2 > INDUSTRY_SO2_UGM3 && fraction > INDUSTRY_LAND_FRACTION {
        (so2 / INDUSTRY_SO2_SCALE_UGM3 * fraction).min(INDUSTRY_CAP)
    } else {
        0.0
    }
}

fn biomass_score(reading: &PollutantReading, emissions: &Emissions) -> f64 {
    let fires = emissions.fire_count.unwrap_or(0) as f64;
    match ratio(reading.get_or_zero(Pollutant::Pm25), reading.get_or_zero(Pollutant::Co)) {
        Some(r) if fires > 0.0 && r > BIOMASS_PM25_CO_RATIO => {
            (fires / BIOMASS_FIRE_SCALE * r).min(BIOMASS_CAP)
        }
        _ => 0.0,
    }
}

fn residential_score(land_use: &LandUse) -> f64 {
    let fraction = land_use.residential_fraction.unwrap_or(0.0);
    if fraction > RESIDENTIAL_LAND_FRACTION {
        (fraction * RESIDENTIAL_SCALE).min(RESIDENTIAL_CAP)
    } else {
        0.0
    }
}

fn power_score(reading: &PollutantReading, emissions: &Emissions) -> f64 {
    let so2 = reading.get_or_zero(Pollutant::So2);
    match emissions.power_plant_distance_km {
        Some(distance) if so2 > POWER_SO2_UGM3 && distance < POWER_PROXIMITY_KM => {
            let proximity = (POWER_PROXIMITY_KM - distance.max(0.0)) / POWER_PROXIMITY_KM;
            ((so2 - POWER_SO2_UGM3) / POWER_SO2_SCALE_UGM3 * proximity).min(POWER_CAP)
        }
        _ => 0.0,
    }
}

/// Apportion a reading across source categories
///
/// Never fails; the result always sums to 1.
pub fn attribute(reading: &PollutantReading, context: &AttributionContext) -> AttributionVector {
    let scores = PartialScores {
        traffic: traffic_score(reading, &context.land_use),
        industry: industry_score(reading, &context.land_use),
        biomass_burning: biomass_score(reading, &context.emissions),
        residential: residential_score(&context.land_use),
        power_generation: power_score(reading, &context.emissions),
    };

    let natural = (1.0 - scores.anthropogenic()).max(0.0);
    let total = scores.anthropogenic() + natural;

    if !total.is_finite() || total <= 0.0 {
        log_warn!("Attribution: degenerate score total {}, attributing to natural", total);
        return AttributionVector::NATURAL_ONLY;
    }

    AttributionVector {
        traffic: scores.traffic / total,
        industry: scores.industry / total,
        biomass_burning: scores.biomass_burning / total,
        residential: scores.residential / total,
        power_generation: scores.power_generation / total,
        natural: natural / total,
    }
}
