//! Common test utilities and fixtures
#![allow(dead_code)]

use kicli::config::environment::ENV_VARS;
use kicli::{AppConfig, ConfigManager};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test configuration builder
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.ai.api_key = key.into();
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.config.ai.api_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.config.ai.model_name = model.into();
        self
    }

    pub fn with_scrollback(mut self, lines: i64) -> Self {
        self.config.advanced.max_scrollback_lines = lines;
        self
    }

    pub fn with_primary_color(mut self, color: impl Into<String>) -> Self {
        self.config.theme.colors.primary = color.into();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A manager whose files live in a temporary directory
pub struct TestManager {
    pub manager: ConfigManager,
    _temp_dir: TempDir,
}

impl TestManager {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let manager = ConfigManager::with_paths(
            temp_dir.path().join("config").join("kicli").join("config.yaml"),
            temp_dir.path().join("data").join("kicli").join("history.db"),
        );
        Self { manager, _temp_dir: temp_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.manager.config_path().to_path_buf()
    }

    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).expect("Failed to write config file");
    }
}

/// Remove every `KICLI_*` variable the overlay reads.
pub fn clear_kicli_env() {
    for name in ENV_VARS {
        std::env::remove_var(name);
    }
}
