// tests/config_test.rs
use std::io::Write;
use tempfile::NamedTempFile;
use version_stamp::config::{load_config, Config, MissingFieldPolicy};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.source_file, "./src/version.cpp");
    assert_eq!(config.labels.major, "VERSION_MAJOR { ");
    assert_eq!(config.labels.minor, "VERSION_MINOR { ");
    assert_eq!(config.labels.patch, "VERSION_PATCH { ");
    assert_eq!(config.labels.build, "VERSION_BUILD { ");
    assert_eq!(config.labels.full, None);
    assert!(!config.doxygen.enabled);
    assert_eq!(
        config.behavior.on_missing_field,
        MissingFieldPolicy::DefaultZero
    );
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
source_file = "./src/version.hpp"

[labels]
build = "const_version_number_t VERSION_BUILD { "
full = "const std::string_view FULL_VERSION { "

[doxygen]
enabled = true
path = "./.doxygen/ProjectNumber"

[behavior]
on_missing_field = "error"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.source_file, "./src/version.hpp");
    assert_eq!(
        config.labels.build,
        "const_version_number_t VERSION_BUILD { "
    );
    assert_eq!(
        config.labels.full.as_deref(),
        Some("const std::string_view FULL_VERSION { ")
    );
    assert!(config.doxygen.enabled);
    assert_eq!(config.behavior.on_missing_field, MissingFieldPolicy::Error);
}

#[test]
fn test_partial_config_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
source_file = "./version.txt"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.source_file, "./version.txt");
    // Unspecified sections fall back to defaults
    assert_eq!(config.labels.build, "VERSION_BUILD { ");
    assert_eq!(config.labels.full, None);
    assert!(!config.doxygen.enabled);
    assert_eq!(
        config.behavior.on_missing_field,
        MissingFieldPolicy::DefaultZero
    );
}

#[test]
fn test_invalid_toml_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"source_file = [not valid").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
fn test_unknown_policy_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[behavior]\non_missing_field = \"shrug\"\n")
        .unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(result.is_err());
}

#[test]
fn test_missing_custom_path_fails() {
    let result = load_config(Some("/no/such/version-stamp.toml"));
    assert!(result.is_err());
}
