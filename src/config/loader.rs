// src/config/loader.rs

use crate::config::AppConfig;
use crate::error::{ConfigError, Result};
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Reads the YAML file at `config_path` and merges it onto `config`.
///
/// Only keys present in the document overwrite; everything else keeps its
/// current value. A missing file yields [`ConfigError::NotFound`] and leaves
/// `config` untouched.
pub fn load_from_file(config_path: &Path, config: &mut AppConfig) -> Result<()> {
    let bytes = fs::read(config_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound { path: config_path.to_path_buf() },
        _ => ConfigError::Read { path: config_path.to_path_buf(), source: e },
    })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        debug!("Config file {} is empty, keeping current values", config_path.display());
        return Ok(());
    }

    let parse_err = |e| ConfigError::Parse { path: config_path.to_path_buf(), source: e };

    let document: Value = serde_yaml::from_slice(&bytes).map_err(parse_err)?;
    let mut merged = serde_yaml::to_value(&*config).map_err(ConfigError::Serialize)?;
    merge_value(&mut merged, document);

    *config = serde_yaml::from_value(merged).map_err(parse_err)?;
    info!("Loaded configuration from file: {}", config_path.display());
    Ok(())
}

/// Deep-merges `overlay` onto `base`.
///
/// Mappings merge key by key, a null overlay keeps the base, any other value
/// replaces it. A plain number or bool landing on a string slot is kept as
/// its text, so `quit: 0` still reads as the chord `"0"`.
pub fn merge_value(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::String(base_str), Value::Number(number)) => *base_str = number.to_string(),
        (Value::String(base_str), Value::Bool(flag)) => *base_str = flag.to_string(),
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, overlay_field) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_field) => merge_value(base_field, overlay_field),
                    None => {
                        debug!("Ignoring unknown config key: {:?}", key);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Writes `config` as YAML to `config_path`, creating parent directories.
///
/// The file is truncated in place; a failed write may leave it partial.
pub fn save_to_file(config: &AppConfig, config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| ConfigError::CreateDir { path: parent.to_path_buf(), source: e })?;
    }

    let yaml_content = serde_yaml::to_string(config).map_err(ConfigError::Serialize)?;

    fs::write(config_path, yaml_content)
        .map_err(|e| ConfigError::Write { path: config_path.to_path_buf(), source: e })?;

    info!("Configuration saved to: {}", config_path.display());
    Ok(())
}
