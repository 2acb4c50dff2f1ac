// src/config/validation.rs

use crate::config::{AdvancedConfig, AiConfig, AppConfig, ThemeConfig};
use crate::error::{ConfigError, Result};
use tracing::{debug, warn};
use url::Url;

/// Ordered, fail-fast validation: AI, then advanced, then theme.
///
/// Each section stops at its first violation; errors are never aggregated.
/// Keybindings are not checked.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &AppConfig) -> Result<()> {
        debug!("Starting configuration validation");

        if let Err(e) = Self::validate_ai_config(&config.ai) {
            warn!("AI config validation failed: {}", e);
            return Err(e);
        }
        debug!("AI config validation passed");

        if let Err(e) = Self::validate_advanced_config(&config.advanced) {
            warn!("Advanced config validation failed: {}", e);
            return Err(e);
        }
        debug!("Advanced config validation passed");

        if let Err(e) = Self::validate_theme_config(&config.theme) {
            warn!("Theme config validation failed: {}", e);
            return Err(e);
        }
        debug!("Theme config validation passed");

        Ok(())
    }

    /// The API URL must be absolute with a scheme; relative or scheme-less
    /// values such as `api.example.com/v1` are rejected as `InvalidApiUrl`.
    fn validate_ai_config(ai: &AiConfig) -> Result<()> {
        if ai.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Url::parse(&ai.api_url).map_err(|e| ConfigError::InvalidApiUrl {
            url: ai.api_url.clone(),
            source: e,
        })?;

        if ai.model_name.trim().is_empty() {
            return Err(ConfigError::invalid("model name cannot be empty"));
        }

        Ok(())
    }

    fn validate_advanced_config(advanced: &AdvancedConfig) -> Result<()> {
        let limits = [
            ("max_scrollback_lines", advanced.max_scrollback_lines),
            ("max_context_messages", advanced.max_context_messages),
            ("ai_timeout_seconds", advanced.ai_timeout_seconds),
        ];

        for (field, value) in limits {
            if value <= 0 {
                return Err(ConfigError::invalid(format!("{field} must be positive")));
            }
        }
        Ok(())
    }

    fn validate_theme_config(theme: &ThemeConfig) -> Result<()> {
        for (name, color) in theme.colors.named_slots() {
            if color.trim().is_empty() {
                return Err(ConfigError::invalid(format!("color {name} cannot be empty")));
            }
            // Length is counted in bytes; a valid #RRGGBB is pure ASCII.
            if color.starts_with('#') && color.len() != 7 {
                return Err(ConfigError::invalid(format!(
                    "color {name} must be a valid hex color"
                )));
            }
        }
        Ok(())
    }
}

/// Validate a fully merged configuration.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    ConfigValidator::validate(config)
}
