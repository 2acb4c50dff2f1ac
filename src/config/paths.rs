// src/config/paths.rs

//! Platform path resolution for the config and history files.

use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "kicli";
pub const CONFIG_FILE: &str = "config.yaml";
pub const DATA_FILE: &str = "history.db";

/// `<user-config-dir>/kicli/config.yaml`
pub fn config_file_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::PathResolution { kind: "config" })?;
    Ok(app_file(&base, CONFIG_FILE))
}

/// `<user-data-dir>/kicli/history.db`
pub fn data_file_path() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or(ConfigError::PathResolution { kind: "data" })?;
    Ok(app_file(&base, DATA_FILE))
}

fn app_file(base: &Path, file_name: &str) -> PathBuf {
    base.join(APP_NAME).join(file_name)
}
