//! Configuration loaded from TOML.

use discord_data_core::{SerializeStyle, serialize_with};
use discord_data_error::{ConfigError, DiscordDataResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every section is optional; missing sections and keys fall back to their
/// defaults.
///
/// ```toml
/// [output]
/// style = "pretty"
///
/// [logging]
/// filter = "discord_data=debug"
/// json = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscordDataConfig {
    /// JSON output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DiscordDataConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or the TOML
    /// is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> DiscordDataResult<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read file: {}", e)).with_origin(origin.as_str())
        })?;
        tracing::debug!(path = %origin, "Loaded configuration file");
        let config = parse_toml(&contents).map_err(|e| e.with_origin(origin))?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the TOML is invalid.
    pub fn from_toml_str(contents: &str) -> DiscordDataResult<Self> {
        Ok(parse_toml(contents)?)
    }

    /// Serialize a value with the configured output style.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the value has no JSON representation.
    pub fn serialize<T>(&self, value: &T) -> DiscordDataResult<String>
    where
        T: Serialize + ?Sized,
    {
        serialize_with(value, self.output.style)
    }
}

/// JSON output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Compact or pretty JSON
    #[serde(default)]
    pub style: SerializeStyle,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

#[track_caller]
fn parse_toml(contents: &str) -> Result<DiscordDataConfig, ConfigError> {
    toml::from_str(contents).map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))
}

fn default_filter() -> String {
    "info".to_string()
}
