//! Record Decoding and Validation
//!
//! Turns Avro [`Value`]s (and JSON documents, via Avro's JSON mapping) into
//! core values, collecting every problem in a [`ValidationReport`] instead
//! of stopping at the first one. Encoding goes the other way and produces
//! values that satisfy the schemas in [`crate::schemas`].
//!
//! | Problem                              | Severity |
//! |--------------------------------------|----------|
//! | missing timestamp or measurements    | error    |
//! | negative / non-finite concentration  | error    |
//! | confidence outside [0, 1]            | error    |
//! | non-numeric concentration            | error    |
//! | unknown pollutant or source type     | warning (error when strict) |
//! | two keys for the same pollutant      | warning (error when strict), first key wins |
//! | timestamp after the reference time   | warning  |
//! | concentration above the AQI tables   | info     |

use std::fmt;

use apache_avro::types::Value;
use serde_json::Value as JsonValue;

use citywise_core::aqi::table_for;
use citywise_core::units::ugm3_to_ppb;
use citywise_core::{CoreError, Pollutant, PollutantReading, SourceRecord, SourceType, Timestamp};

use crate::registry::GLOBAL_REGISTRY;
use crate::schemas::SOURCE_TYPE_SYMBOLS;
use crate::SchemaError;

/// Registry name of the reading schema, resolved to its latest version
pub const READING_SCHEMA: &str = "pollutant_reading";

/// Registry name of the source record schema, resolved to its latest version
pub const SOURCE_RECORD_SCHEMA: &str = "source_record";

/// Fields of a reading record that are not pollutants
const READING_METADATA_FIELDS: [&str; 2] = ["location_id", "timestamp"];

/// Decoded value with the issues found along the way
#[derive(Debug)]
pub struct Decoded<T> {
    /// The decoded value
    pub value: T,
    /// Warnings and informational issues
    pub report: ValidationReport,
}

/// Validation report containing all issues found
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Validation errors (must be fixed)
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (should be reviewed)
    pub warnings: Vec<ValidationIssue>,

    /// Informational messages
    pub info: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// File an issue under its severity
    pub fn add(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Info => self.info.push(issue),
        }
    }

    /// Get total issue count
    pub fn total_issues(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }

    /// Whether any issue of the given type was filed
    pub fn has(&self, issue_type: IssueType) -> bool {
        self.errors.iter()
            .chain(&self.warnings)
            .chain(&self.info)
            .any(|i| i.issue_type == issue_type)
    }

    /// Error messages joined for an [`SchemaError::InvalidRecord`]
    pub fn error_summary(&self) -> String {
        self.errors.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Individual validation issue
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Type of issue
    pub issue_type: IssueType,

    /// Field that caused the issue (if applicable)
    pub field: Option<String>,

    /// Human-readable message
    pub message: String,

    /// Issue severity
    pub severity: Severity,
}

impl ValidationIssue {
    fn new(issue_type: IssueType, severity: Severity, field: &str, message: String) -> Self {
        Self { issue_type, field: Some(field.to_string()), message, severity }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Types of validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Required field is missing
    MissingField,

    /// Type doesn't match schema
    TypeMismatch,

    /// Field names no known pollutant
    UnknownPollutant,

    /// Source type not recognised
    UnknownSourceType,

    /// Concentration below zero
    NegativeConcentration,

    /// NaN or infinite value
    NonFiniteValue,

    /// Confidence outside [0, 1]
    ConfidenceOutOfRange,

    /// Observation dated after the reference time
    FutureTimestamp,

    /// Value is unusual but not impossible
    UnusualValue,

    /// Second key naming an already-read pollutant
    DuplicatePollutant,
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational only
    Info,

    /// Should be reviewed
    Warning,

    /// Must be fixed
    Error,
}

/// Decoder for reading and source records
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordDecoder {
    strict: bool,
    reference_time: Option<Timestamp>,
}

impl RecordDecoder {
    /// Lenient decoder: unknown names are warnings
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat unknown pollutants and source types as errors
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Warn about observations dated after `now`
    pub fn with_reference_time(mut self, now: Timestamp) -> Self {
        self.reference_time = Some(now);
        self
    }

    fn unknown_severity(&self) -> Severity {
        if self.strict { Severity::Error } else { Severity::Warning }
    }

    /// Validate a reading record without keeping the result
    pub fn validate_reading(&self, value: &Value) -> ValidationReport {
        self.read_reading(value).1
    }

    /// Decode a `pollutant_reading_v1` record or a flat JSON object
    pub fn decode_reading(&self, value: &Value) -> Result<Decoded<PollutantReading>, SchemaError> {
        let (reading, report) = self.read_reading(value);
        finish(reading, report)
    }

    /// Validate a source record without keeping the result
    pub fn validate_source_record(&self, value: &Value) -> ValidationReport {
        self.read_source_record(value).1
    }

    /// Decode a `source_record_v1` record or its JSON form
    pub fn decode_source_record(&self, value: &Value) -> Result<Decoded<SourceRecord>, SchemaError> {
        let (record, report) = self.read_source_record(value);
        match record {
            Some(record) => finish(record, report),
            None => Err(SchemaError::InvalidRecord(report.error_summary())),
        }
    }

    fn read_reading(&self, value: &Value) -> (PollutantReading, ValidationReport) {
        let mut report = ValidationReport::new();
        let mut reading = PollutantReading::new();

        let Some(fields) = fields_of(value) else {
            report.add(ValidationIssue {
                issue_type: IssueType::TypeMismatch,
                field: None,
                message: "Expected record or object".to_string(),
                severity: Severity::Error,
            });
            return (reading, report);
        };

        for (name, field) in fields {
            if READING_METADATA_FIELDS.contains(&name) {
                continue;
            }
            self.read_measurement(name, field, &mut reading, &mut report);
        }

        (reading, report)
    }

    fn read_source_record(&self, value: &Value) -> (Option<SourceRecord>, ValidationReport) {
        let mut report = ValidationReport::new();

        let Some(fields) = fields_of(value) else {
            report.add(ValidationIssue {
                issue_type: IssueType::TypeMismatch,
                field: None,
                message: "Expected record or object".to_string(),
                severity: Severity::Error,
            });
            return (None, report);
        };
        let field = |name: &str| {
            fields.iter().find(|(n, _)| *n == name).map(|(_, v)| unwrap_union(v))
        };

        let source_type = match field("type") {
            None | Some(Value::Null) => {
                report.add(ValidationIssue::new(
                    IssueType::MissingField, self.unknown_severity(), "type",
                    "Source type missing, treated as unknown".to_string(),
                ));
                SourceType::Unknown
            }
            Some(v) => self.read_source_type(v, &mut report),
        };

        let timestamp = match field("timestamp") {
            None | Some(Value::Null) => {
                report.add(ValidationIssue::new(
                    IssueType::MissingField, Severity::Error, "timestamp",
                    "Required field 'timestamp' is missing".to_string(),
                ));
                None
            }
            Some(v) => self.read_timestamp(v, &mut report),
        };

        let confidence = match field("confidence") {
            None | Some(Value::Null) => None,
            Some(v) => match number(v) {
                Some(c) if (0.0..=1.0).contains(&c) => Some(c),
                Some(c) => {
                    report.add(ValidationIssue::new(
                        IssueType::ConfidenceOutOfRange, Severity::Error, "confidence",
                        format!("Confidence {} outside [0, 1]", c),
                    ));
                    None
                }
                None => {
                    report.add(type_mismatch("confidence", "number"));
                    None
                }
            },
        };

        let mut measurements = PollutantReading::new();
        match field("measurements").map(|v| (v, fields_of(v))) {
            None | Some((Value::Null, _)) => report.add(ValidationIssue::new(
                IssueType::MissingField, Severity::Error, "measurements",
                "Required field 'measurements' is missing".to_string(),
            )),
            Some((_, None)) => report.add(type_mismatch("measurements", "map")),
            Some((_, Some(entries))) => {
                for (name, value) in entries {
                    self.read_measurement(name, value, &mut measurements, &mut report);
                }
            }
        }

        let record = timestamp.map(|timestamp| SourceRecord {
            source_type,
            measurements,
            timestamp,
            confidence,
        });
        (record, report)
    }

    fn read_source_type(&self, value: &Value, report: &mut ValidationReport) -> SourceType {
        let name = match value {
            Value::Enum(_, symbol) | Value::String(symbol) => symbol.to_ascii_lowercase(),
            _ => {
                report.add(type_mismatch("type", "enum or string"));
                return SourceType::Unknown;
            }
        };

        let source_type = SourceType::from_name(&name);
        if source_type == SourceType::Unknown && name != SourceType::Unknown.as_str() {
            report.add(ValidationIssue::new(
                IssueType::UnknownSourceType, self.unknown_severity(), "type",
                format!("Unrecognised source type '{}', treated as unknown", name),
            ));
        }
        source_type
    }

    fn read_timestamp(&self, value: &Value, report: &mut ValidationReport) -> Option<Timestamp> {
        let millis = match value {
            Value::Long(ms) | Value::TimestampMillis(ms) => Some(*ms),
            Value::Int(ms) => Some(i64::from(*ms)),
            Value::TimestampMicros(us) => Some(us / 1000),
            Value::String(text) => chrono::DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|t| t.timestamp_millis()),
            _ => None,
        };

        let Some(timestamp) = millis.and_then(|ms| Timestamp::try_from(ms).ok()) else {
            report.add(ValidationIssue::new(
                IssueType::TypeMismatch, Severity::Error, "timestamp",
                "Expected non-negative epoch milliseconds or RFC 3339 time".to_string(),
            ));
            return None;
        };

        if let Some(now) = self.reference_time {
            if timestamp > now {
                report.add(ValidationIssue::new(
                    IssueType::FutureTimestamp, Severity::Warning, "timestamp",
                    format!("Observation {} ms after reference time", timestamp - now),
                ));
            }
        }
        Some(timestamp)
    }

    fn read_measurement(
        &self,
        name: &str,
        value: &Value,
        reading: &mut PollutantReading,
        report: &mut ValidationReport,
    ) {
        let Some(pollutant) = Pollutant::from_code(name) else {
            report.add(ValidationIssue::new(
                IssueType::UnknownPollutant, self.unknown_severity(), name,
                format!("Unknown pollutant '{}' ignored", name),
            ));
            return;
        };

        let value = unwrap_union(value);
        if matches!(value, Value::Null) {
            return;
        }
        let Some(concentration) = number(value) else {
            report.add(type_mismatch(name, "number"));
            return;
        };

        if reading.contains(pollutant) {
            report.add(ValidationIssue::new(
                IssueType::DuplicatePollutant, self.unknown_severity(), name,
                format!("{} already read from another key, {} ignored", pollutant.code(), concentration),
            ));
            return;
        }

        match reading.set(pollutant, concentration) {
            Ok(()) => {
                if above_tables(pollutant, concentration) {
                    report.add(ValidationIssue::new(
                        IssueType::UnusualValue, Severity::Info, name,
                        format!("{} above the highest AQI breakpoint, index saturates", concentration),
                    ));
                }
            }
            Err(CoreError::NegativeConcentration { value, .. }) => report.add(ValidationIssue::new(
                IssueType::NegativeConcentration, Severity::Error, name,
                format!("Negative concentration {}", value),
            )),
            Err(error) => report.add(ValidationIssue::new(
                IssueType::NonFiniteValue, Severity::Error, name,
                error.to_string(),
            )),
        }
    }
}

fn finish<T>(value: T, report: ValidationReport) -> Result<Decoded<T>, SchemaError> {
    if report.is_valid() {
        for warning in &report.warnings {
            log::warn!("Record decoded with warning: {}", warning);
        }
        Ok(Decoded { value, report })
    } else {
        Err(SchemaError::InvalidRecord(report.error_summary()))
    }
}

fn type_mismatch(field: &str, expected: &str) -> ValidationIssue {
    ValidationIssue::new(
        IssueType::TypeMismatch, Severity::Error, field,
        format!("Expected {}", expected),
    )
}

/// Named entries of a record or map
fn fields_of(value: &Value) -> Option<Vec<(&str, &Value)>> {
    match unwrap_union(value) {
        Value::Record(fields) => Some(fields.iter().map(|(k, v)| (k.as_str(), v)).collect()),
        Value::Map(entries) => {
            let mut fields: Vec<_> = entries.iter().map(|(k, v)| (k.as_str(), v)).collect();
            // HashMap order is arbitrary
            fields.sort_by(|a, b| a.0.cmp(b.0));
            Some(fields)
        }
        _ => None,
    }
}

fn unwrap_union(value: &Value) -> &Value {
    match value {
        Value::Union(_, inner) => unwrap_union(inner),
        other => other,
    }
}

fn number(value: &Value) -> Option<f64> {
    match unwrap_union(value) {
        Value::Double(d) => Some(*d),
        Value::Float(f) => Some(f64::from(*f)),
        Value::Int(i) => Some(f64::from(*i)),
        Value::Long(l) => Some(*l as f64),
        _ => None,
    }
}

/// Whether a µg/m³ concentration lies above its breakpoint table
fn above_tables(pollutant: Pollutant, concentration: f64) -> bool {
    table_for(pollutant)
        .and_then(|table| table.last())
        .map_or(false, |top| ugm3_to_ppb(pollutant, concentration) > top.concentration_high)
}

/// Decode a reading record with a lenient decoder
pub fn decode_reading(value: &Value) -> Result<Decoded<PollutantReading>, SchemaError> {
    RecordDecoder::new().decode_reading(value)
}

/// Decode a source record with a lenient decoder
pub fn decode_source_record(value: &Value) -> Result<Decoded<SourceRecord>, SchemaError> {
    RecordDecoder::new().decode_source_record(value)
}

/// Decode a flat JSON object of pollutant codes to concentrations
pub fn decode_reading_json(json: &JsonValue) -> Result<Decoded<PollutantReading>, SchemaError> {
    decode_reading(&Value::from(json.clone()))
}

/// Decode a JSON source record `{type, timestamp, confidence?, measurements}`
pub fn decode_source_record_json(json: &JsonValue) -> Result<Decoded<SourceRecord>, SchemaError> {
    decode_source_record(&Value::from(json.clone()))
}

fn nullable(value: Option<Value>) -> Value {
    match value {
        Some(v) => Value::Union(1, Box::new(v)),
        None => Value::Union(0, Box::new(Value::Null)),
    }
}

fn avro_timestamp(timestamp: Timestamp) -> Value {
    Value::Long(i64::try_from(timestamp).unwrap_or(i64::MAX))
}

/// Encode a reading as a `pollutant_reading_v1` record
pub fn encode_reading(reading: &PollutantReading, timestamp: Timestamp, location_id: Option<&str>) -> Value {
    let mut fields = vec![
        ("location_id".to_string(), nullable(location_id.map(|id| Value::String(id.to_string())))),
        ("timestamp".to_string(), avro_timestamp(timestamp)),
    ];
    fields.extend(Pollutant::ALL.iter().map(|&p| {
        (p.code().to_string(), nullable(reading.get(p).map(Value::Double)))
    }));
    Value::Record(fields)
}

/// Encode a source record as a `source_record_v1` record
pub fn encode_source_record(record: &SourceRecord) -> Value {
    let index = match record.source_type {
        SourceType::GroundStation => 0,
        SourceType::Satellite => 1,
        SourceType::ModelPrediction => 2,
        SourceType::Unknown => 3,
    };
    let measurements = record.measurements
        .iter()
        .map(|(p, v)| (p.code().to_string(), Value::Double(v)))
        .collect();

    Value::Record(vec![
        ("type".to_string(), Value::Enum(index as u32, SOURCE_TYPE_SYMBOLS[index].to_string())),
        ("timestamp".to_string(), avro_timestamp(record.timestamp)),
        ("confidence".to_string(), nullable(record.confidence.map(Value::Double))),
        ("measurements".to_string(), Value::Map(measurements)),
    ])
}

/// Serialize a reading as Avro binary with the latest reading schema
pub fn write_reading(reading: &PollutantReading, timestamp: Timestamp, location_id: Option<&str>) -> Result<Vec<u8>, SchemaError> {
    let schema = GLOBAL_REGISTRY.get_latest(READING_SCHEMA)?;
    Ok(apache_avro::to_avro_datum(&schema, encode_reading(reading, timestamp, location_id))?)
}

/// Deserialize a datum written with the latest reading schema
pub fn read_reading(mut bytes: &[u8]) -> Result<Decoded<PollutantReading>, SchemaError> {
    let schema = GLOBAL_REGISTRY.get_latest(READING_SCHEMA)?;
    let value = apache_avro::from_avro_datum(&schema, &mut bytes, None)?;
    decode_reading(&value)
}

/// Serialize a source record as Avro binary with the latest source schema
pub fn write_source_record(record: &SourceRecord) -> Result<Vec<u8>, SchemaError> {
    let schema = GLOBAL_REGISTRY.get_latest(SOURCE_RECORD_SCHEMA)?;
    Ok(apache_avro::to_avro_datum(&schema, encode_source_record(record))?)
}

/// Deserialize a datum written with the latest source schema
pub fn read_source_record(mut bytes: &[u8]) -> Result<Decoded<SourceRecord>, SchemaError> {
    let schema = GLOBAL_REGISTRY.get_latest(SOURCE_RECORD_SCHEMA)?;
    let value = apache_avro::from_avro_datum(&schema, &mut bytes, None)?;
    decode_source_record(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: Timestamp = 1_704_067_200_000;

    fn record(fields: Vec<(&str, Value)>) -> Value {
        Value::Record(fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn decode_reading_record() {
        let value = encode_reading(
            &PollutantReading::from_pairs(&[(Pollutant::Pm25, 12.0), (Pollutant::O3, 80.0)]).unwrap(),
            NOW,
            Some("delhi-01"),
        );
        let decoded = decode_reading(&value).unwrap();

        assert_eq!(decoded.value.get(Pollutant::Pm25), Some(12.0));
        assert_eq!(decoded.value.get(Pollutant::O3), Some(80.0));
        assert_eq!(decoded.value.len(), 2);
        assert_eq!(decoded.report.total_issues(), 0);
    }

    #[test]
    fn detect_missing_field() {
        let value = record(vec![
            ("type", Value::Enum(0, "GROUND_STATION".into())),
            ("measurements", Value::Map(Default::default())),
        ]);

        let report = RecordDecoder::new().validate_source_record(&value);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|e| e.issue_type == IssueType::MissingField));
        assert!(matches!(decode_source_record(&value), Err(SchemaError::InvalidRecord(msg)) if msg.contains("timestamp")));
    }

    #[test]
    fn negative_concentration_is_error() {
        let report = RecordDecoder::new().validate_reading(&record(vec![("pm10", Value::Double(-3.0))]));
        assert!(report.has(IssueType::NegativeConcentration));
        assert!(!report.is_valid());
    }

    #[test]
    fn unknown_pollutant_strictness() {
        let value = record(vec![("pm25", Value::Double(5.0)), ("benzene", Value::Double(1.0))]);

        let lenient = RecordDecoder::new().decode_reading(&value).unwrap();
        assert_eq!(lenient.value.len(), 1);
        assert_eq!(lenient.report.warnings.len(), 1);
        assert_eq!(lenient.report.warnings[0].field.as_deref(), Some("benzene"));

        let strict = RecordDecoder::new().strict().validate_reading(&value);
        assert!(strict.has(IssueType::UnknownPollutant));
        assert!(!strict.is_valid());
    }

    #[test]
    fn source_record_from_json() {
        let decoded = decode_source_record_json(&json!({
            "type": "SATELLITE",
            "timestamp": "2024-01-01T00:00:00Z",
            "confidence": 0.7,
            "measurements": { "PM2.5": 20.5, "aod": 0.3 }
        }))
        .unwrap();

        assert_eq!(decoded.value.source_type, SourceType::Satellite);
        assert_eq!(decoded.value.timestamp, NOW);
        assert_eq!(decoded.value.confidence, Some(0.7));
        assert_eq!(decoded.value.measurements.get(Pollutant::Pm25), Some(20.5));
        assert_eq!(decoded.value.measurements.get(Pollutant::Aod), Some(0.3));
    }

    #[test]
    fn confidence_out_of_range() {
        let result = decode_source_record_json(&json!({
            "type": "ground_station",
            "timestamp": NOW,
            "confidence": 1.5,
            "measurements": {}
        }));
        assert!(matches!(result, Err(SchemaError::InvalidRecord(msg)) if msg.contains("confidence")));
    }

    #[test]
    fn unrecognised_source_type_warns() {
        let decoded = decode_source_record_json(&json!({
            "type": "drone",
            "timestamp": NOW,
            "measurements": { "no2": 12 }
        }))
        .unwrap();
        assert_eq!(decoded.value.source_type, SourceType::Unknown);
        assert!(decoded.report.has(IssueType::UnknownSourceType));
        assert_eq!(decoded.value.measurements.get(Pollutant::No2), Some(12.0));
    }

    #[test]
    fn future_timestamp_warns() {
        let value = encode_source_record(&SourceRecord::new(
            SourceType::ModelPrediction,
            PollutantReading::new(),
            NOW + 60_000,
        ));
        let decoded = RecordDecoder::new().with_reference_time(NOW).decode_source_record(&value).unwrap();
        assert!(decoded.report.has(IssueType::FutureTimestamp));
        assert_eq!(decoded.value.timestamp, NOW + 60_000);
    }

    #[test]
    fn saturating_value_is_info() {
        let decoded = decode_reading_json(&json!({ "pm25": 800.0 })).unwrap();
        assert!(decoded.report.has(IssueType::UnusualValue));
        assert_eq!(decoded.report.info.len(), 1);
        assert!(decoded.report.is_valid());
    }

    #[test]
    fn non_numeric_measurement() {
        let result = decode_reading_json(&json!({ "so2": "high" }));
        assert!(matches!(result, Err(SchemaError::InvalidRecord(msg)) if msg.starts_with("so2")));
    }

    #[test]
    fn duplicate_pollutant_keys() {
        let value = Value::from(json!({ "PM2.5": 10.0, "pm25": 99.0 }));

        let lenient = decode_reading(&value).unwrap();
        assert_eq!(lenient.value.get(Pollutant::Pm25), Some(10.0));
        assert_eq!(lenient.report.warnings.len(), 1);
        assert!(lenient.report.has(IssueType::DuplicatePollutant));
        assert_eq!(lenient.report.warnings[0].field.as_deref(), Some("pm25"));

        let strict = RecordDecoder::new().strict().decode_reading(&value);
        assert!(matches!(strict, Err(SchemaError::InvalidRecord(msg)) if msg.starts_with("pm25")));
    }

    #[test]
    fn avro_writes_with_latest_schema() {
        let reading = PollutantReading::from_pairs(&[(Pollutant::No2, 31.0)]).unwrap();
        let bytes = write_reading(&reading, NOW, None).unwrap();

        let latest = GLOBAL_REGISTRY.latest_name(READING_SCHEMA).unwrap();
        let schema = GLOBAL_REGISTRY.get(&latest).unwrap();
        let expected = apache_avro::to_avro_datum(&schema, encode_reading(&reading, NOW, None)).unwrap();
        assert_eq!(bytes, expected);
        assert_eq!(read_reading(&bytes).unwrap().value, reading);
    }
}
