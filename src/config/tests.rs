use crate::config::Config;
use crate::core::types::RowUnit;

#[test]
fn parses_full_config() {
    let json = r#"{
        "creditCeiling": 21,
        "window": { "startHour": 8, "endHour": 20, "rowUnitMinutes": 30, "includeWeekend": true },
        "fileLoggingEnabled": false
    }"#;
    let config = Config::from_json_str(json).unwrap();
    assert_eq!(config.credit_ceiling(), 21);
    assert_eq!(config.window().row_unit(), RowUnit::HalfHour);
    assert!(config.window().include_weekend());
    assert_eq!(config.window().columns(), 7);
    assert!(!config.file_logging_enabled());
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.credit_ceiling(), 18);
    assert_eq!(config.window().start_minute(), 9 * 60);
    assert_eq!(config.window().end_minute(), 18 * 60);
    assert_eq!(config.window().columns(), 5);
    assert!(config.file_logging_enabled());
}

#[test]
fn rejects_unsupported_row_unit() {
    let json = r#"{ "window": { "rowUnitMinutes": 45 } }"#;
    let err = Config::from_json_str(json).unwrap_err();
    assert!(err.to_string().contains("row unit"));
}

#[test]
fn rejects_inverted_window() {
    let json = r#"{ "window": { "startHour": 18, "endHour": 9 } }"#;
    assert!(Config::from_json_str(json).is_err());
}

#[test]
fn rejects_zero_credit_ceiling() {
    let json = r#"{ "creditCeiling": 0 }"#;
    let err = Config::from_json_str(json).unwrap_err();
    assert!(err.to_string().contains("ceiling"));
}

#[test]
fn load_from_reports_missing_file() {
    let err = Config::load_from("definitely-not-here.json").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
