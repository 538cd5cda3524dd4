//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smarthome.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;
use smarthome_app::services::home_controller::Limits;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Room and device bounds.
    pub limits: Limits,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// How listings are printed.
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Console output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering of the "show all" listing.
    pub format: OutputFormat,
}

/// Rendering of the "show all" listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One header line per room followed by its device lines.
    #[default]
    Text,
    /// A JSON array of room status objects.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unknown output format {other:?}"
            ))),
        }
    }
}

impl Config {
    /// Load configuration from `smarthome.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting limits are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("smarthome.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("SMARTHOME_MAX_ROOMS")
            && let Ok(max) = val.parse()
        {
            self.limits.max_rooms = max;
        }
        if let Some(val) = var("SMARTHOME_MAX_DEVICES")
            && let Ok(max) = val.parse()
        {
            self.limits.max_devices_per_room = max;
        }
        if let Some(val) = var("SMARTHOME_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("SMARTHOME_OUTPUT") {
            self.output.format = val.parse()?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_rooms == 0 {
            return Err(ConfigError::Validation(
                "max_rooms must be non-zero".to_string(),
            ));
        }
        if self.limits.max_devices_per_room == 0 {
            return Err(ConfigError::Validation(
                "max_devices_per_room must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smarthome=info,smarthome_app=info,smarthome_domain=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
