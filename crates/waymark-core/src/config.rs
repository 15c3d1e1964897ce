//! Layered application configuration.
//!
//! Values resolve defaults -> config file -> environment, highest precedence
//! winning. The app only needs two settings: where the key-value files live
//! and which OSRM endpoint computes route geometry.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WaymarkError};

/// Default OSRM endpoint (the public demo server, as used by the routing
/// widget this app's overlays are modeled on).
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Waymark
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the per-key JSON files
    pub data_dir: ConfigValue<PathBuf>,

    /// Base URL of the OSRM routing service
    pub osrm_url: ConfigValue<String>,
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            data_dir: ConfigValue::new(default_data_dir(), ConfigSource::Default),
            osrm_url: ConfigValue::new(DEFAULT_OSRM_URL.to_string(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| WaymarkError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| WaymarkError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(data_dir) = file_config.data_dir {
            self.data_dir.update(data_dir, ConfigSource::File);
        }

        if let Some(osrm_url) = file_config.osrm_url {
            self.osrm_url.update(osrm_url, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Ok(dir) = env::var("WAYMARK_DATA_DIR") {
            if dir.is_empty() {
                tracing::warn!("WAYMARK_DATA_DIR is empty, ignoring");
            } else {
                self.data_dir.update(PathBuf::from(dir), ConfigSource::Environment);
            }
        }

        if let Ok(url) = env::var("WAYMARK_OSRM_URL") {
            if url.is_empty() {
                tracing::warn!("WAYMARK_OSRM_URL is empty, ignoring");
            } else {
                self.osrm_url.update(url, ConfigSource::Environment);
            }
        }

        self
    }

    /// Resolve the full layered configuration: defaults, then the standard
    /// config file if present, then the environment.
    pub fn resolve() -> Self {
        let config = Self::with_defaults();
        let config = match fs::metadata(CONFIG_FILE) {
            Ok(_) => match config.clone().load_from_file(CONFIG_FILE) {
                Ok(loaded) => loaded,
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring unreadable config file");
                    config
                }
            },
            Err(_) => config,
        };
        config.load_from_env()
    }
}

/// Well-known config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "waymark.toml";

fn default_data_dir() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".waymark"),
        None => PathBuf::from(".waymark"),
    }
}

/// TOML file schema (all fields optional)
#[derive(Debug, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    osrm_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_have_default_source() {
        let config = AppConfig::with_defaults();
        assert_eq!(config.data_dir.source, ConfigSource::Default);
        assert_eq!(config.osrm_url.value, DEFAULT_OSRM_URL);
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
data_dir = "/tmp/waymark-test"
osrm_url = "http://localhost:5000"
"#
        )
        .unwrap();

        let config = AppConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.data_dir.value, PathBuf::from("/tmp/waymark-test"));
        assert_eq!(config.data_dir.source, ConfigSource::File);
        assert_eq!(config.osrm_url.value, "http://localhost:5000");
        assert_eq!(config.osrm_url.source, ConfigSource::File);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"osrm_url = "http://localhost:5000""#).unwrap();

        let config = AppConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.osrm_url.source, ConfigSource::File);
        assert_eq!(config.data_dir.source, ConfigSource::Default);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let result = AppConfig::with_defaults().load_from_file(file.path());
        assert!(result.is_err());
    }
}
