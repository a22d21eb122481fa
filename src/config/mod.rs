use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::{FailurePolicy, MovementError, Result},
    utils::{
        ensure_parent_dir,
        paths::{app_data_dir, config_file_in, export_dir_in, report_dir_in},
    },
};

/// User-configurable output locations and failure handling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Config {
    /// Directory for JSON exports, falling back to `<base>/exports`.
    pub fn resolve_export_dir(&self, base: &Path) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| export_dir_in(base))
    }

    /// Directory for PDF reports, falling back to `<base>/reports`.
    pub fn resolve_report_dir(&self, base: &Path) -> PathBuf {
        self.report_dir
            .clone()
            .unwrap_or_else(|| report_dir_in(base))
    }
}

/// Loads and saves [`Config`] as `config.json` under the application data directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        let path = config_file_in(&base);
        Self { base, path }
    }

    /// Reads the stored configuration, or the defaults when none has been saved.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            MovementError::Config(format!("`{}`: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let json = serde_json::to_string_pretty(config)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
