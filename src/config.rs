use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for version-stamp.
///
/// Contains the managed source file path, the field label literals, the
/// documentation-config output settings, and behavior options. Every
/// field has a default so the tool runs with no configuration file at
/// all.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_source_file")]
    pub source_file: String,

    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub doxygen: DoxygenConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default path of the managed version source file.
fn default_source_file() -> String {
    "./src/version.cpp".to_string()
}

fn default_major_label() -> String {
    "VERSION_MAJOR { ".to_string()
}

fn default_minor_label() -> String {
    "VERSION_MINOR { ".to_string()
}

fn default_patch_label() -> String {
    "VERSION_PATCH { ".to_string()
}

fn default_build_label() -> String {
    "VERSION_BUILD { ".to_string()
}

/// Label literals that anchor each managed field in the source file.
///
/// A label is the exact text preceding a field's payload on its line,
/// e.g. `VERSION_BUILD { ` for the line `VERSION_BUILD { 1045 };`.
/// `full` is optional: when set, the matching line has its payload
/// replaced with the quoted composed version string on every run.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LabelsConfig {
    #[serde(default = "default_major_label")]
    pub major: String,

    #[serde(default = "default_minor_label")]
    pub minor: String,

    #[serde(default = "default_patch_label")]
    pub patch: String,

    #[serde(default = "default_build_label")]
    pub build: String,

    #[serde(default)]
    pub full: Option<String>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        LabelsConfig {
            major: default_major_label(),
            minor: default_minor_label(),
            patch: default_patch_label(),
            build: default_build_label(),
            full: None,
        }
    }
}

/// Configuration for the secondary documentation-config output.
///
/// When enabled, the composed version is written to `path` as a
/// single-line `PROJECT_NUMBER` assignment after each successful bump.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DoxygenConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_doxygen_path")]
    pub path: String,
}

/// Returns the default documentation-config output path.
fn default_doxygen_path() -> String {
    "./.doxygen/ProjectNumber".to_string()
}

impl Default for DoxygenConfig {
    fn default() -> Self {
        DoxygenConfig {
            enabled: false,
            path: default_doxygen_path(),
        }
    }
}

/// What to do when a field label never occurs in the source file.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MissingFieldPolicy {
    /// Treat the field as 0 and emit a warning (matches the historical
    /// behavior of the tool this replaces).
    #[default]
    DefaultZero,
    /// Abort the run with a missing-field error.
    Error,
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub on_missing_field: MissingFieldPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_file: default_source_file(),
            labels: LabelsConfig::default(),
            doxygen: DoxygenConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `version-stamp.toml` in current directory
/// 3. `.version-stamp.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./version-stamp.toml").exists() {
        fs::read_to_string("./version-stamp.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".version-stamp.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
