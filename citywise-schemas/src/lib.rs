//! Avro Record Schemas and Response Shapes for CityWISE
//!
//! ## Overview
//!
//! `citywise-core` computes; this crate sits at the boundary. It defines the
//! records that arrive from measurement providers, turns them into core
//! values, and shapes core results into the JSON existing dashboard
//! consumers read.
//!
//! ```text
//! Avro / JSON record ─→ codec ─→ SourceRecord ─→ citywise_core::assess
//!                         ↓                              ↓
//!                 ValidationReport               AssessmentResponse ─→ JSON
//! ```
//!
//! ## Why Avro?
//!
//! Providers push readings at high rates and their payloads evolve:
//!
//! 1. **Compact Binary Format**: station networks batch thousands of records
//! 2. **Schema Evolution**: new pollutants arrive as nullable fields with defaults
//! 3. **Self-Describing**: archived readings stay decodable
//!
//! Schemas carry their version in the name (`source_record_v1`) and are kept
//! in a [`SchemaRegistry`] that tracks versions and deprecation.
//!
//! ## Usage Example
//!
//! ```rust
//! use citywise_schemas::{codec, SchemaRegistry};
//! use citywise_core::{Pollutant, SourceType};
//! use serde_json::json;
//!
//! let registry = SchemaRegistry::new();
//! registry.load_defaults()?;
//! assert!(registry.get("source_record_v1").is_ok());
//!
//! let decoded = codec::decode_source_record_json(&json!({
//!     "type": "ground_station",
//!     "timestamp": 1_704_067_200_000i64,
//!     "confidence": 0.95,
//!     "measurements": { "pm25": 35.0, "NO2": 40.0 }
//! }))?;
//! assert_eq!(decoded.value.source_type, SourceType::GroundStation);
//! assert_eq!(decoded.value.measurements.get(Pollutant::No2), Some(40.0));
//! # Ok::<(), citywise_schemas::SchemaError>(())
//! ```

use citywise_core::CoreError;

pub mod codec;
pub mod config;
pub mod registry;
pub mod response;
pub mod schemas;

pub use codec::{Decoded, IssueType, RecordDecoder, Severity, ValidationIssue, ValidationReport};
pub use config::{load_config_file, load_config_str, validate_config};
pub use registry::{SchemaMetadata, SchemaRegistry, GLOBAL_REGISTRY};
pub use response::{AssessmentResponse, PollutantCase, ResponseOptions};

/// Schema-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse schema: {0}")]
    ParseError(String),

    #[error("Schema not found: {0}")]
    NotFound(String),

    #[error("Schema {0} already registered")]
    AlreadyRegistered(String),

    #[error("Registry lock poisoned")]
    LockPoisoned,

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Avro encoding failed: {0}")]
    Avro(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<apache_avro::Error> for SchemaError {
    fn from(error: apache_avro::Error) -> Self {
        SchemaError::Avro(error.to_string())
    }
}
