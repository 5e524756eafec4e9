//! Integration tests for configuration loading

use std::io::Write;
use tempfile::NamedTempFile;
use veil::anonymization::config::{CategoricalMethod, NumericalMethod};
use veil::config::{load_config, VeilConfig};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
        [anonymization]
        k = 5
        categorical_method = "suppression"
        numerical_method = "microaggregation"
        bin_count = 10

        [logging]
        level = "debug"
        local_enabled = false
        local_rotation = "hourly"
        "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.anonymization.k, 5);
    assert_eq!(
        config.anonymization.categorical_method,
        CategoricalMethod::Suppression
    );
    assert_eq!(
        config.anonymization.numerical_method,
        NumericalMethod::Microaggregation
    );
    assert_eq!(config.anonymization.bin_count, 10);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_partial_config_uses_defaults() {
    let file = write_config(
        r#"
        [anonymization]
        k = 3
        "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.anonymization.k, 3);
    assert_eq!(
        config.anonymization.categorical_method,
        CategoricalMethod::Generalization
    );
    assert_eq!(config.anonymization.bin_count, 5);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_is_all_defaults() {
    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    let defaults = VeilConfig::default();
    assert_eq!(config.anonymization.k, defaults.anonymization.k);
    assert_eq!(config.logging.level, defaults.logging.level);
}

#[test]
fn test_from_file_convenience_wrapper() {
    let file = write_config(
        r#"
        [anonymization]
        k = 4
        "#,
    );

    let config = VeilConfig::from_file(file.path()).unwrap();
    assert_eq!(config.anonymization.k, 4);
}

#[test]
fn test_invalid_k_in_file_rejected() {
    let file = write_config(
        r#"
        [anonymization]
        k = 1
        "#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_unknown_method_in_file_rejected() {
    let file = write_config(
        r#"
        [anonymization]
        categorical_method = "masking"
        "#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_invalid_log_level_in_file_rejected() {
    let file = write_config(
        r#"
        [logging]
        level = "loud"
        "#,
    );
    assert!(load_config(file.path()).is_err());
}
