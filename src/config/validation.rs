use crate::config::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Every timeout must be greater than zero
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let timeouts = [
        ("connect_timeout_ms", config.connect_timeout_ms),
        ("socket_timeout_ms", config.socket_timeout_ms),
    ];

    for (name, value) in timeouts {
        if value == 0 {
            return Err(AppError::config_error(format!(
                "{name} must be greater than zero"
            )));
        }
    }

    validate_log_file_path(&config.log_file_path)
}

fn validate_log_file_path(log_file_path: &Option<String>) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // The rolling file appender needs the directory to exist
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_configs() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("app.log");

        let valid_configs = vec![
            Config::default(),
            Config {
                connect_timeout_ms: 1,
                socket_timeout_ms: 1,
                follow_redirects: false,
                log_file_path: Some(log_path.to_string_lossy().to_string()),
            },
        ];

        for config in valid_configs {
            assert!(
                validate_config(&config).is_ok(),
                "Config should be valid: {config:?}"
            );
        }
        assert!(log_path.parent().unwrap().exists());
    }

    #[test]
    fn test_invalid_configs() {
        let invalid_configs = vec![
            Config {
                connect_timeout_ms: 0,
                ..Config::default()
            },
            Config {
                socket_timeout_ms: 0,
                ..Config::default()
            },
            Config {
                log_file_path: Some(String::new()),
                ..Config::default()
            },
        ];

        for config in invalid_configs {
            let result = validate_config(&config);
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[test]
    fn test_zero_timeout_message_names_field() {
        let config = Config {
            socket_timeout_ms: 0,
            ..Config::default()
        };

        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: socket_timeout_ms must be greater than zero"
        );
    }
}
