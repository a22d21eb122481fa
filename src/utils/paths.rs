use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".movement_core";
const EXPORT_DIR: &str = "exports";
const REPORT_DIR: &str = "reports";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the application data directory.
pub const HOME_ENV: &str = "MOVEMENT_CORE_HOME";

/// Returns the application-specific data directory, defaulting to `~/.movement_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default directory for JSON movement exports under `base`.
pub fn export_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(EXPORT_DIR)
}

/// Default directory for generated PDF reports under `base`.
pub fn report_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(REPORT_DIR)
}

/// Path to the configuration file under `base`.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
