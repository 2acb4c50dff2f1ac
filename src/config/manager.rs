// src/config/manager.rs

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{load_from_file, save_to_file};
use crate::config::paths::{config_file_path, data_file_path};
use crate::config::{default_config, AppConfig, ConfigValidator};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads, validates and persists [`AppConfig`].
///
/// Both paths are resolved once at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigManager {
    config_path: PathBuf,
    data_path: PathBuf,
}

impl ConfigManager {
    /// Resolve the platform config and data paths.
    pub fn new() -> Result<Self> {
        let config_path = config_file_path()?;
        let data_path = data_file_path()?;
        Ok(Self::with_paths(config_path, data_path))
    }

    pub fn with_paths(config_path: impl Into<PathBuf>, data_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            data_path: data_path.into(),
        }
    }

    /// Defaults, then the config file, then the process environment, then validation.
    pub fn load(&self) -> Result<AppConfig> {
        self.load_with_env(EnvironmentConfig::from_env())
    }

    /// Same pipeline as [`ConfigManager::load`] with explicit environment overrides.
    pub fn load_with_env(&self, overrides: EnvironmentConfig) -> Result<AppConfig> {
        let mut config = default_config();

        match load_from_file(&self.config_path, &mut config) {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                info!(
                    "Configuration file {} not found, using defaults",
                    self.config_path.display()
                );
            }
            Err(e) => return Err(e),
        }

        if overrides.has_overrides() {
            info!("Applying environment overrides: {:?}", overrides.override_summary());
        }
        overrides.apply(&mut config);

        ConfigValidator::validate(&config)?;

        debug!("Configuration loaded and validated successfully");
        Ok(config)
    }

    /// Write `config` to the config path, creating its directory.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        save_to_file(config, &self.config_path)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Location reserved for the command-history store.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }
}
