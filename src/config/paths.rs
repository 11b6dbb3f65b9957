use crate::constants::APP_DIR_NAME;
use std::path::PathBuf;

/// `<platform config dir>/http_helper`, e.g. `~/.config/http_helper` on Linux.
///
/// Without a platform config dir the working directory is used.
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Location of the TOML file holding timeout and redirect defaults.
pub fn get_config_path() -> String {
    app_dir().join("config.toml").to_string_lossy().into_owned()
}

/// Directory receiving the daily request log unless a log file is configured.
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().into_owned()
}
