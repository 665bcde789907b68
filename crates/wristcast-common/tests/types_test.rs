//! Tests for shared domain types.

use wristcast_common::{MeasurementSystem, RecordIndex};

#[test]
fn test_measurement_system_persistence_strings() {
    assert_eq!(MeasurementSystem::Metric.as_str(), "Metric");
    assert_eq!(MeasurementSystem::UsCustomary.as_str(), "USCustomary");
    assert_eq!(MeasurementSystem::Metric.to_string(), "Metric");
}

#[test]
fn test_measurement_system_parse() {
    assert_eq!(
        "Metric".parse::<MeasurementSystem>().unwrap(),
        MeasurementSystem::Metric
    );
    assert_eq!(
        "USCustomary".parse::<MeasurementSystem>().unwrap(),
        MeasurementSystem::UsCustomary
    );

    assert!("metric".parse::<MeasurementSystem>().is_err());
    assert!("Imperial".parse::<MeasurementSystem>().is_err());
    assert!(String::new().parse::<MeasurementSystem>().is_err());
}

#[test]
fn test_measurement_system_serde_encoding() {
    let json = serde_json::to_string(&MeasurementSystem::UsCustomary).unwrap();
    assert_eq!(json, "\"USCustomary\"");

    let parsed: MeasurementSystem = serde_json::from_str("\"Metric\"").unwrap();
    assert_eq!(parsed, MeasurementSystem::Metric);
}

#[test]
fn test_default_system_is_metric() {
    assert_eq!(MeasurementSystem::default(), MeasurementSystem::Metric);
}

#[test]
fn test_record_index_conversions() {
    let index: RecordIndex = 3.into();
    assert_eq!(index, RecordIndex(3));
    assert_eq!(index.to_string(), "3");
    assert_eq!(index.0, 3);
}
