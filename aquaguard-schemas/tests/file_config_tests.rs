//! Tests for loading engine configuration and payloads from files

use std::io::Write;

use aquaguard_core::{
    DenominatorPolicy, EngineConfig, Parameter, ReadingHistory, ThresholdConfig, WaterQualityEngine,
};
use aquaguard_schemas::{
    load_engine_config, parse_thresholds, save_engine_config, LatestReadingsDto, SchemaError,
    TankReportDto,
};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_engine_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"{{ "warningMargin": 0.0, "denominator": "allParameters" }}"#
    )
    .unwrap();
    temp_file.flush().unwrap();

    let config = load_engine_config(temp_file.path()).unwrap();
    assert_eq!(config, EngineConfig::legacy());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("engine.json");

    let config = EngineConfig::default()
        .with_warning_margin(0.25)
        .with_moving_average_window(7)
        .with_denominator(DenominatorPolicy::AllParameters);
    save_engine_config(&path, &config).unwrap();

    assert_eq!(load_engine_config(&path).unwrap(), config);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    match load_engine_config(&path) {
        Err(SchemaError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_is_json_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{{ warningMargin: ").unwrap();
    temp_file.flush().unwrap();

    assert!(matches!(
        load_engine_config(temp_file.path()),
        Err(SchemaError::Json(_))
    ));
}

#[test]
fn test_json_payloads_through_engine() {
    let readings = LatestReadingsDto::from_json(
        r#"{
            "ph":          { "value": 6.0,  "unit": "",    "timestamp": "2024-03-01T12:00:00Z" },
            "ammonia":     { "value": 0.5,  "unit": "ppm", "timestamp": "2024-03-01T12:00:00Z" },
            "temperature": { "value": 25,   "unit": "°C",  "timestamp": "2024-03-01T12:00:00Z" },
            "turbidity":   { "value": 1.5,  "unit": "NTU", "timestamp": "2024-03-01T12:00:00Z" }
        }"#,
    )
    .unwrap()
    .to_reading_set()
    .unwrap();

    let thresholds = parse_thresholds(r#"{ "emailAlertsEnabled": false }"#).unwrap();
    assert_eq!(thresholds.ph, ThresholdConfig::default().ph);

    let report = WaterQualityEngine::default().evaluate(&readings, &ReadingHistory::new(), &thresholds);
    let dto = TankReportDto::from(&report);

    assert_eq!(dto.health.tier, "concerned");
    assert_eq!(dto.alerts.len(), 2);
    for alert in &dto.alerts {
        assert_eq!(alert.channels, vec!["inApp".to_string()]);
    }
    assert_eq!(
        dto.evaluations[Parameter::Ph.index()].status,
        "critical"
    );
}
