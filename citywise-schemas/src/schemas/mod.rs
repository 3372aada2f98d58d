//! CityWISE Avro schemas
//!
//! Pollutant fields are nullable doubles defaulting to null, so adding a
//! pollutant is a compatible change. All concentrations are µg/m³.

use apache_avro::Schema;
use serde_json::{json, Value as JsonValue};

use citywise_core::Pollutant;

use crate::SchemaError;

/// Namespace of every CityWISE schema
pub const NAMESPACE: &str = "io.citywise.airquality.v1";

/// Symbols of the `SourceType` enum, in schema order
pub const SOURCE_TYPE_SYMBOLS: [&str; 4] = ["GROUND_STATION", "SATELLITE", "MODEL_PREDICTION", "UNKNOWN"];

/// One nullable double field per pollutant, in canonical order
fn pollutant_fields() -> Vec<JsonValue> {
    Pollutant::ALL
        .iter()
        .map(|p| {
            json!({
                "name": p.code(),
                "type": ["null", "double"],
                "default": null,
                "doc": format!("{} concentration (µg/m³)", p.upper_code())
            })
        })
        .collect()
}

/// Canonical pollutant reading at one location
pub fn pollutant_reading_v1() -> Result<Schema, SchemaError> {
    let mut fields = vec![
        json!({
            "name": "location_id",
            "type": ["null", "string"],
            "default": null,
            "doc": "Dashboard location identifier"
        }),
        json!({
            "name": "timestamp",
            "type": "long",
            "logicalType": "timestamp-millis",
            "doc": "Observation time in milliseconds since epoch"
        }),
    ];
    fields.extend(pollutant_fields());

    let schema_json = json!({
        "namespace": NAMESPACE,
        "type": "record",
        "name": "PollutantReading",
        "doc": "Pollutant concentrations; absent pollutants are null",
        "fields": fields
    });

    Schema::parse(&schema_json)
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Observation from one measurement provider, input to fusion
pub fn source_record_v1() -> Result<Schema, SchemaError> {
    let schema_json = json!({
        "namespace": NAMESPACE,
        "type": "record",
        "name": "SourceRecord",
        "doc": "Measurements from one provider with its type and stated confidence",
        "fields": [
            {
                "name": "type",
                "type": {
                    "type": "enum",
                    "name": "SourceType",
                    "symbols": SOURCE_TYPE_SYMBOLS,
                    "default": "UNKNOWN"
                }
            },
            {
                "name": "timestamp",
                "type": "long",
                "logicalType": "timestamp-millis",
                "doc": "Observation time in milliseconds since epoch"
            },
            {
                "name": "confidence",
                "type": ["null", "double"],
                "default": null,
                "doc": "Provider-stated confidence (0.0-1.0)"
            },
            {
                "name": "measurements",
                "type": {
                    "type": "map",
                    "values": "double"
                },
                "default": {},
                "doc": "Concentrations keyed by lowercase pollutant code"
            }
        ]
    });

    Schema::parse(&schema_json)
        .map_err(|e| SchemaError::ParseError(e.to_string()))
}

/// Every default schema with its qualified name
pub fn all() -> Result<Vec<(&'static str, Schema)>, SchemaError> {
    Ok(vec![
        ("pollutant_reading_v1", pollutant_reading_v1()?),
        ("source_record_v1", source_record_v1()?),
    ])
}
