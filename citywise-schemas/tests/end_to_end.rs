//! Decode → assess → respond, across both crates

use citywise_core::{assess, AttributionContext, LandUse, Pollutant, SourceRecord, SourceType};
use citywise_schemas::codec::{self, RecordDecoder};
use citywise_schemas::{load_config_file, AssessmentResponse, ResponseOptions, SchemaError};
use serde_json::json;
use std::io::Write;

const NOW: u64 = 1_704_067_200_000;

#[test]
fn json_sources_to_dashboard_response() {
    let payloads = [
        json!({
            "type": "ground_station",
            "timestamp": NOW,
            "confidence": 0.95,
            "measurements": { "pm25": 45.3, "pm10": 39.6, "no2": 96.0 }
        }),
        json!({
            "type": "satellite",
            "timestamp": NOW - 3_600_000,
            "measurements": { "pm25": 45.3, "aod": 0.8 }
        }),
    ];

    let sources: Vec<SourceRecord> = payloads
        .iter()
        .map(|p| codec::decode_source_record_json(p).map(|d| d.value))
        .collect::<Result<_, _>>()
        .unwrap();

    let context = AttributionContext {
        land_use: LandUse { road_density: Some(0.9), ..LandUse::default() },
        ..AttributionContext::default()
    };
    let assessment = assess(&sources, &context, &[], NOW);
    let json = AssessmentResponse::new(&assessment, &ResponseOptions::default())
        .to_json_value()
        .unwrap();

    assert_eq!(json["aqi"], 125);
    assert_eq!(json["category"], "Unhealthy for Sensitive Groups");
    assert_eq!(json["primaryPollutant"], "pm25");
    let exceeded: Vec<&str> = json["whoExceedances"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["pollutant"].as_str().unwrap())
        .collect();
    assert_eq!(exceeded, ["pm25", "no2"]);
    assert!(json["sourceAttribution"]["traffic"].as_f64().unwrap() > 0.5);
    assert!(json["confidence"].as_f64().unwrap() > 0.0);
}

#[test]
fn avro_binary_round_trip() {
    let record = SourceRecord::new(
        SourceType::ModelPrediction,
        citywise_core::PollutantReading::from_pairs(&[(Pollutant::O3, 88.0), (Pollutant::Co, 700.0)]).unwrap(),
        NOW,
    )
    .with_confidence(0.6)
    .unwrap();

    let bytes = codec::write_source_record(&record).unwrap();
    let decoded = codec::read_source_record(&bytes).unwrap();
    assert_eq!(decoded.value, record);
    assert!(decoded.report.is_valid());

    let reading = record.measurements;
    let bytes = codec::write_reading(&reading, NOW, Some("bengaluru-07")).unwrap();
    assert_eq!(codec::read_reading(&bytes).unwrap().value, reading);
}

#[test]
fn invalid_records_are_rejected_with_all_issues() {
    let value = apache_avro::types::Value::from(json!({
        "type": "lidar",
        "confidence": 3.0,
        "measurements": { "pm25": -1.0, "xyz": 2.0 }
    }));

    let report = RecordDecoder::new().strict().validate_source_record(&value);
    // missing timestamp, confidence, negative pm25, unknown type, unknown pollutant
    assert_eq!(report.errors.len(), 5);
    assert!(matches!(
        RecordDecoder::new().strict().decode_source_record(&value),
        Err(SchemaError::InvalidRecord(_))
    ));
}

#[test]
fn config_file_drives_engine() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"forecast": {{"defaultHours": 6, "utcOffsetSeconds": 19800}}}}"#).unwrap();

    let config = load_config_file(file.path()).unwrap();
    assert_eq!(config.forecast.default_hours, 6);

    let engine = citywise_core::Engine::new(config, citywise_core::FixedTime::new(NOW));
    let reading = citywise_core::PollutantReading::from_pairs(&[(Pollutant::Pm25, 20.0)]).unwrap();
    let assessment = engine.assess_reading(&reading, &AttributionContext::default(), &[]);
    assert_eq!(assessment.forecast.len(), 6);

    // 01:00 UTC is 06:30 at UTC+5:30, still night
    let first = assessment.forecast[0].measurements.get(Pollutant::Pm25).unwrap();
    assert!((first - 14.0).abs() < 1e-9);
}

#[test]
fn missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(SchemaError::Io(_))));
}
