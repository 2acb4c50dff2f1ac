// src/config/mod.rs

pub mod app;
pub mod environment;
pub mod loader;
pub mod manager;
pub mod paths;
pub mod validation;

pub use app::{
    default_config, AdvancedConfig, AiConfig, AppConfig, ColorConfig, KeybindingsConfig,
    ThemeConfig,
};
pub use environment::{apply_env_overrides, EnvironmentConfig};
pub use loader::{load_from_file, save_to_file};
pub use manager::ConfigManager;
pub use validation::{validate_config, ConfigValidator};
