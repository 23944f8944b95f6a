//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `rsswitch.toml` in the working directory unless
//! `RSSWITCH_CONFIG` names another file. Every field has a sensible default
//! so the file is optional. Environment variables take precedence over file
//! values.

use std::path::{Path, PathBuf};

use rsswitch_adapter_device_file::DeviceFileConfig;
use rsswitch_adapter_syslog::SyslogConfig;
use rsswitch_domain::control_code::MAX_SOCKET_DIGIT;
use serde::Deserialize;

/// Default config file, relative to the working directory.
const DEFAULT_CONFIG_FILE: &str = "rsswitch.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device file settings.
    pub device: DeviceFileConfig,
    /// System log settings.
    pub syslog: SyslogConfig,
    /// Diagnostic logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, if `RSSWITCH_CONFIG` names
    /// a file that cannot be read, or if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// [`load`](Self::load) with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup("RSSWITCH_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path), true)?,
            None => Self::from_file(Path::new(DEFAULT_CONFIG_FILE), false)?,
        };
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("RSSWITCH_DEVICE") {
            self.device.path = PathBuf::from(val);
        }
        if let Some(val) = lookup("RSSWITCH_MAX_SOCKET") {
            if let Ok(max) = val.parse() {
                self.device.max_socket = max;
            }
        }
        if let Some(val) = lookup("RSSWITCH_CREATE_DEVICE") {
            if let Some(flag) = parse_flag(&val) {
                self.device.create_missing = flag;
            }
        }
        if let Some(val) = lookup("RSSWITCH_SYSLOG") {
            if let Some(flag) = parse_flag(&val) {
                self.syslog.enabled = flag;
            }
        }
        if let Some(val) = lookup("RSSWITCH_SYSLOG_SOCKET") {
            self.syslog.socket = PathBuf::from(val);
        }
        if let Some(val) = lookup("RSSWITCH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.device.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "device path must not be empty".to_string(),
            ));
        }
        if self.device.max_socket > MAX_SOCKET_DIGIT {
            return Err(ConfigError::Validation(format!(
                "max_socket must be at most {MAX_SOCKET_DIGIT}, got {}",
                self.device.max_socket
            )));
        }
        if self.syslog.enabled && self.syslog.ident.is_empty() {
            return Err(ConfigError::Validation(
                "syslog ident must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
