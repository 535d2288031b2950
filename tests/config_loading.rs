use std::fs;
use std::path::PathBuf;

use jplaunch::config::{default_config_path, load_and_validate};
use jplaunch::errors::LaunchError;
use tempfile::TempDir;

fn write_config(root: &TempDir, contents: &str) -> PathBuf {
    let path = root.path().join("Jplaunch.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn full_config_round_trips_into_launch_config() {
    let root = TempDir::new().unwrap();
    let path = write_config(
        &root,
        r#"
        [launcher]
        build_dir = "target"
        timeout_seconds = 120
        reports_dir = "target/junit-reports"
        strict = true
        test_module = "com.acme.tests"
        java = "/opt/jdk/bin/java"

        tags = ["fast", "(a | b) & !c"]

        [parameters]
        "junit.jupiter.execution.parallel.enabled" = "true"

        [classpath]
        elements = ["target/classes", "target/test-classes"]
        "#,
    );

    let cfg = load_and_validate(&path).unwrap();
    assert_eq!(cfg.build_dir, PathBuf::from("target"));
    assert_eq!(cfg.timeout_seconds, 120);
    assert_eq!(cfg.reports_dir, Some(PathBuf::from("target/junit-reports")));
    assert!(cfg.strict);
    assert_eq!(cfg.test_module.as_deref(), Some("com.acme.tests"));
    assert_eq!(cfg.java, Some(PathBuf::from("/opt/jdk/bin/java")));
    assert_eq!(cfg.tags, vec!["fast", "(a | b) & !c"]);
    assert_eq!(
        cfg.parameters
            .get("junit.jupiter.execution.parallel.enabled")
            .map(String::as_str),
        Some("true")
    );
    assert_eq!(cfg.classpath_elements.len(), 2);
}

#[test]
fn defaults_are_applied() {
    let root = TempDir::new().unwrap();
    let path = write_config(
        &root,
        r#"
        [launcher]
        build_dir = "target"

        [classpath]
        elements = ["target/classes"]
        "#,
    );

    let cfg = load_and_validate(&path).unwrap();
    assert_eq!(cfg.timeout_seconds, 300);
    assert!(!cfg.strict);
    assert!(!cfg.skip);
    assert!(cfg.reports_dir.is_none());
    assert!(cfg.test_module.is_none());
    assert!(cfg.tags.is_empty());
    assert!(cfg.parameters.is_empty());
}

#[test]
fn malformed_toml_is_a_toml_error() {
    let root = TempDir::new().unwrap();
    let path = write_config(&root, "[launcher\nbuild_dir = ");

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, LaunchError::TomlError(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let root = TempDir::new().unwrap();
    let err = load_and_validate(root.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, LaunchError::IoError(_)));
}

#[test]
fn default_config_path_is_jplaunch_toml() {
    assert_eq!(default_config_path(), PathBuf::from("Jplaunch.toml"));
}
