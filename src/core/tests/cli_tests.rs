use crate::core::cli::CliPaths;
use std::path::PathBuf;

fn args(list: &[&str]) -> std::vec::IntoIter<String> {
    list.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn positional_catalog_and_plan_with_defaults() {
    let paths = CliPaths::from_args(args(&["catalog.json", "plan.json"])).unwrap();
    assert_eq!(paths.catalog_path, PathBuf::from("catalog.json"));
    assert_eq!(paths.plan_path, PathBuf::from("plan.json"));
    assert_eq!(paths.config_path, PathBuf::from("config.json"));
    assert_eq!(paths.logs_dir, PathBuf::from("logs"));
}

#[test]
fn flags_override_defaults() {
    let paths = CliPaths::from_args(args(&[
        "catalog.json",
        "plan.json",
        "--config",
        "custom.json",
        "--logs",
        "tmp/logs",
    ]))
    .unwrap();
    assert_eq!(paths.config_path, PathBuf::from("custom.json"));
    assert_eq!(paths.logs_dir, PathBuf::from("tmp/logs"));
}

#[test]
fn missing_positionals_print_usage() {
    let err = CliPaths::from_args(args(&["catalog.json"])).unwrap_err();
    assert!(err.contains("Usage:"));
}

#[test]
fn unknown_flag_is_rejected() {
    let err = CliPaths::from_args(args(&["catalog.json", "plan.json", "--wat"])).unwrap_err();
    assert!(err.contains("Unknown argument"));
}

#[test]
fn flag_without_value_is_rejected() {
    let err = CliPaths::from_args(args(&["catalog.json", "plan.json", "--config"])).unwrap_err();
    assert!(err.contains("Missing value"));
}
