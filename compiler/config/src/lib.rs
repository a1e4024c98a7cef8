#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! wrapgen Configuration
//!
//! This crate provides configuration management for wrapgen. It handles
//! loading and saving the optional configuration file that supplies:
//! - Generation defaults (service name, client name, template directory)
//! - Logging configuration
//!
//! Configuration is stored in TOML format. Every field has a default, so
//! a partial file — or no file at all — is valid; command-line flags
//! always take precedence over configured values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file on disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation defaults
    pub generation: GenerationConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Generation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Name of the generated service type
    pub service_name: String,
    /// Name of the generated client type
    pub client_name: String,
    /// Directory holding an externally supplied template set; `None`
    /// selects the templates bundled with the binary
    pub template_dir: Option<PathBuf>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            service_name: "Service".to_string(),
            client_name: "ServiceClient".to_string(),
            template_dir: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Whether trace output is written to stderr
    pub trace: bool,
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/wrapgen/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("wrapgen");
        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn from_file_reads_a_full_config() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let toml_content = r#"
            [generation]
            service_name = "Storage"
            client_name = "StorageClient"
            template_dir = "custom-templates"

            [logging]
            trace = true
        "#;
        fs::write(&temp_file, toml_content).expect("Failed to write TOML content");

        let loaded = Config::from_file(&temp_file).expect("Failed to load config");
        assert_eq!(loaded.generation.service_name, "Storage");
        assert_eq!(loaded.generation.client_name, "StorageClient");
        assert_eq!(loaded.generation.template_dir, Some(PathBuf::from("custom-templates")));
        assert!(loaded.logging.trace);
    }

    #[test]
    fn partial_and_empty_files_fall_back_to_defaults() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&temp_file, "[generation]\nservice_name = \"Kv\"\n")
            .expect("Failed to write TOML content");

        let loaded = Config::from_file(&temp_file).expect("Failed to load config");
        assert_eq!(loaded.generation.service_name, "Kv");
        assert_eq!(loaded.generation.client_name, "ServiceClient");
        assert_eq!(loaded.generation.template_dir, None);
        assert!(!loaded.logging.trace);

        let empty = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&empty, "").expect("Failed to write empty file");
        assert_eq!(Config::from_file(&empty).expect("Failed to load config"), Config::default());
    }

    #[test]
    fn from_file_errors_are_typed() {
        let result = Config::from_file("nonexistent_file.toml");
        match result.expect_err("Expected error for nonexistent file") {
            ConfigError::FileRead(_) => {}
            other => panic!("Expected FileRead error, got {:?}", other),
        }

        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&temp_file, "invalid toml content").expect("Failed to write invalid TOML");
        match Config::from_file(&temp_file).expect_err("Expected parse error") {
            ConfigError::Parse(_) => {}
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn save_round_trips() {
        let mut config = Config::default();
        config.generation.service_name = "Registry".to_string();
        config.logging.trace = true;

        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        config.save(&temp_file).expect("Failed to save config");

        let loaded = Config::from_file(&temp_file).expect("Failed to re-load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn default_path_points_into_the_wrapgen_config_dir() {
        let path = Config::default_path().expect("Failed to get default config path");
        let path_str = path.to_str().expect("Path should be valid UTF-8");
        assert!(path_str.contains("wrapgen"));
        assert!(path_str.ends_with("config.toml"));
    }

    #[test]
    fn defaults_match_the_documented_names() {
        let config = Config::default();
        assert_eq!(config.generation.service_name, "Service");
        assert_eq!(config.generation.client_name, "ServiceClient");
        assert_eq!(config.generation.template_dir, None);
        assert!(!config.logging.trace);
    }
}
