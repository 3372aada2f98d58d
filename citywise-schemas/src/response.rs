//! JSON response shapes
//!
//! Field names follow what existing dashboard consumers read: `aqi`,
//! `category` (verbatim EPA label), `primaryPollutant` or `driver`,
//! `sourceAttribution`, `whoExceedances`, `confidence`, `forecast` and an
//! optional `warning`.
//!
//! Some endpoints name the driving pollutant `primaryPollutant` in lowercase
//! (`"pm25"`), others `driver` in uppercase (`"PM25"`). [`ResponseOptions`]
//! lets the route choose.

use serde::{Deserialize, Serialize};

use citywise_core::{
    AqiCategory, AqiResult, Assessment, AttributionVector, Exceedance, ForecastPoint, Pollutant,
    PollutantReading, Timestamp,
};

use crate::SchemaError;

/// Letter case of pollutant codes in responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PollutantCase {
    /// `"pm25"`
    #[default]
    Lower,
    /// `"PM25"`
    Upper,
}

impl PollutantCase {
    /// Code of `pollutant` in this case
    pub fn apply(self, pollutant: Pollutant) -> &'static str {
        match self {
            PollutantCase::Lower => pollutant.code(),
            PollutantCase::Upper => pollutant.upper_code(),
        }
    }
}

/// Key under which the driving pollutant is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DriverKey {
    /// `primaryPollutant`
    #[default]
    PrimaryPollutant,
    /// `driver`
    Driver,
}

/// Per-route response conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseOptions {
    /// Case of every pollutant code in the response
    pub pollutant_case: PollutantCase,
    /// Key of the driving pollutant
    pub driver_key: DriverKey,
}

impl ResponseOptions {
    /// `driver` with uppercase codes
    pub fn uppercase_driver() -> Self {
        Self { pollutant_case: PollutantCase::Upper, driver_key: DriverKey::Driver }
    }
}

/// Overall AQI block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AqiResponse {
    pub aqi: u16,
    pub category: AqiCategory,
    /// Outer `None` omits the key, inner `None` emits `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_pollutant: Option<Option<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<Option<&'static str>>,
}

impl AqiResponse {
    pub fn new(result: &AqiResult, options: &ResponseOptions) -> Self {
        let code = result.primary_pollutant.map(|p| options.pollutant_case.apply(p));
        let (primary_pollutant, driver) = match options.driver_key {
            DriverKey::PrimaryPollutant => (Some(code), None),
            DriverKey::Driver => (None, Some(code)),
        };
        Self { aqi: result.aqi, category: result.category, primary_pollutant, driver }
    }
}

/// One WHO exceedance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceedanceResponse {
    pub pollutant: &'static str,
    pub measured: f64,
    pub guideline: f64,
    pub exceedance_factor: f64,
}

impl ExceedanceResponse {
    pub fn new(exceedance: &Exceedance, options: &ResponseOptions) -> Self {
        Self {
            pollutant: options.pollutant_case.apply(exceedance.pollutant),
            measured: exceedance.measured,
            guideline: exceedance.guideline,
            exceedance_factor: exceedance.exceedance_factor,
        }
    }
}

/// One forecast hour
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub hour: u32,
    pub timestamp: Timestamp,
    pub aqi: u16,
    pub category: AqiCategory,
    pub confidence: f64,
    pub measurements: PollutantReading,
}

impl From<&ForecastPoint> for ForecastResponse {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            hour: point.hour,
            timestamp: point.timestamp,
            aqi: point.aqi,
            category: point.category,
            confidence: point.confidence,
            measurements: point.measurements,
        }
    }
}

/// Full assessment as served to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    #[serde(flatten)]
    pub aqi: AqiResponse,
    pub source_attribution: AttributionVector,
    pub who_exceedances: Vec<ExceedanceResponse>,
    pub confidence: f64,
    pub forecast: Vec<ForecastResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl AssessmentResponse {
    /// Shape an assessment for a route
    pub fn new(assessment: &Assessment, options: &ResponseOptions) -> Self {
        Self {
            aqi: AqiResponse::new(&assessment.aqi, options),
            source_attribution: assessment.source_attribution,
            who_exceedances: assessment.who_exceedances
                .iter()
                .map(|e| ExceedanceResponse::new(e, options))
                .collect(),
            confidence: assessment.fused.confidence.as_float(),
            forecast: assessment.forecast.iter().map(ForecastResponse::from).collect(),
            warning: None,
        }
    }

    /// Attach a warning, e.g. when the inputs were synthetic fallback data
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    /// Serialize to a JSON value
    pub fn to_json_value(&self) -> Result<serde_json::Value, SchemaError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to a compact JSON string
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(self)?)
    }
}
