use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_FOLLOW_REDIRECTS, DEFAULT_SOCKET_TIMEOUT_MS, LOG_FILE_NAME,
    env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing request defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Connect timeout in milliseconds. Defaults to 5000.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds. Defaults to 10000.
    #[serde(default = "default_socket_timeout_ms")]
    pub socket_timeout_ms: u64,
    /// Whether redirects are followed. Defaults to true.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}

fn default_socket_timeout_ms() -> u64 {
    DEFAULT_SOCKET_TIMEOUT_MS
}

fn default_follow_redirects() -> bool {
    DEFAULT_FOLLOW_REDIRECTS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            connect_timeout_ms: default_connect_timeout_ms(),
            socket_timeout_ms: default_socket_timeout_ms(),
            follow_redirects: default_follow_redirects(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error; built-in defaults are used instead.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `HTTP_HELPER_CONNECT_TIMEOUT_MS` - Override connect timeout
    /// - `HTTP_HELPER_SOCKET_TIMEOUT_MS` - Override read timeout
    /// - `HTTP_HELPER_FOLLOW_REDIRECTS` - `true`/`false` (or `1`/`0`)
    /// - `HTTP_HELPER_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Unreadable or invalid config file, or failed validation
    pub fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Some(ms) = env_u64(env_vars::CONNECT_TIMEOUT_MS) {
            self.connect_timeout_ms = ms;
        }

        if let Some(ms) = env_u64(env_vars::SOCKET_TIMEOUT_MS) {
            self.socket_timeout_ms = ms;
        }

        if let Ok(raw) = std::env::var(env_vars::FOLLOW_REDIRECTS) {
            match parse_bool(&raw) {
                Some(follow) => self.follow_redirects = follow,
                None => warn!(
                    "Ignoring {}={raw}: expected true/false",
                    env_vars::FOLLOW_REDIRECTS
                ),
            }
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    ///
    /// Uses TOML format; creates the config directory if needed.
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Renders the effective configuration for display.
    ///
    /// # Notes
    /// - Shows config file location and whether it exists
    /// - Shows the log file location, marking the default one
    pub fn describe(&self) -> String {
        let config_path = get_config_path();
        let separator = "────────────────────────────────────";
        let config_location = if Path::new(&config_path).exists() {
            config_path
        } else {
            format!("{config_path}\n(Not found, using defaults)")
        };
        let log_location = match &self.log_file_path {
            Some(custom_path) => custom_path.clone(),
            None => format!("{}/{LOG_FILE_NAME}\n(Default location)", get_log_dir_path()),
        };

        [
            "Current Configuration".to_string(),
            separator.to_string(),
            format!("Config Location:\n{config_location}"),
            separator.to_string(),
            format!("Connect Timeout:\n{} ms", self.connect_timeout_ms),
            separator.to_string(),
            format!("Socket Timeout:\n{} ms", self.socket_timeout_ms),
            separator.to_string(),
            format!("Follow Redirects:\n{}", self.follow_redirects),
            separator.to_string(),
            format!("Log File Location:\n{log_location}"),
        ]
        .join("\n")
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads configuration from a custom file path without applying environment overrides.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {name}={raw}: {e}");
            None
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
