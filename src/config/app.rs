// src/config/app.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root configuration aggregate.
///
/// A plain value: produced by [`AppConfig::default`], overwritten field by
/// field by the file loader and the environment overlay, then validated.
/// Invariants are only enforced by [`crate::config::ConfigValidator`].
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub theme: ThemeConfig,
    pub keybindings: KeybindingsConfig,
    pub advanced: AdvancedConfig,
}

/// AI service settings.
#[derive(Deserialize, Clone, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct AiConfig {
    pub api_url: String,
    /// Secret; empty by default and expected from the file or `KICLI_API_KEY`.
    pub api_key: String,
    pub model_name: String,
    pub streaming_enabled: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            model_name: default_model_name(),
            streaming_enabled: true,
        }
    }
}

// Keep the key out of logs and panics.
impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &mask_secret(&self.api_key))
            .field("model_name", &self.model_name)
            .field("streaming_enabled", &self.streaming_enabled)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    pub colors: ColorConfig,
}

/// Color palette. Each slot holds a `#RRGGBB` hex string or a named color.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct ColorConfig {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub ai_assistant: String,
    pub user_input: String,
    pub error: String,
    pub success: String,
    pub warning: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#00c6a8".to_string(),
            secondary: "#cbf7ed".to_string(),
            background: "#22223b".to_string(),
            ai_assistant: "#d79921".to_string(),
            user_input: "#00c6a8".to_string(),
            error: "#ff0033".to_string(),
            success: "#00ff00".to_string(),
            warning: "#ffaa00".to_string(),
        }
    }
}

impl ColorConfig {
    /// Slots paired with their file key, in validation order.
    pub fn named_slots(&self) -> [(&'static str, &str); 8] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("background", &self.background),
            ("ai_assistant", &self.ai_assistant),
            ("user_input", &self.user_input),
            ("error", &self.error),
            ("success", &self.success),
            ("warning", &self.warning),
        ]
    }
}

/// Key chords for pane navigation and prompts. Not validated.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub focus_next_pane: String,
    pub focus_prev_pane: String,
    pub scroll_up: String,
    pub scroll_down: String,
    pub confirm: String,
    pub cancel: String,
    pub quit: String,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            focus_next_pane: "ctrl+right".to_string(),
            focus_prev_pane: "ctrl+left".to_string(),
            scroll_up: "ctrl+up".to_string(),
            scroll_down: "ctrl+down".to_string(),
            confirm: "enter".to_string(),
            cancel: "esc".to_string(),
            quit: "ctrl+c".to_string(),
        }
    }
}

/// Tunables that must be strictly positive.
///
/// Signed so that a negative value from the file or environment reaches the
/// validator instead of failing as a type error.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct AdvancedConfig {
    pub max_scrollback_lines: i64,
    pub max_context_messages: i64,
    pub ai_timeout_seconds: i64,
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            max_scrollback_lines: default_max_scrollback_lines(),
            max_context_messages: default_max_context_messages(),
            ai_timeout_seconds: default_ai_timeout_seconds(),
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model_name() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_scrollback_lines() -> i64 {
    5000
}

fn default_max_context_messages() -> i64 {
    20
}

fn default_ai_timeout_seconds() -> i64 {
    30
}

/// Baseline configuration with every field populated.
///
/// The API key is empty; it has to come from the file or `KICLI_API_KEY`.
pub fn default_config() -> AppConfig {
    AppConfig::default()
}

impl AppConfig {
    /// Copy of this config with the API key masked, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.ai.api_key = mask_secret(&self.ai.api_key);
        copy
    }
}

/// Masks a secret for display, keeping a short prefix and suffix of long values.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.is_empty() {
        String::new()
    } else if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = default_config();

        assert_eq!(config.ai.api_url, "https://api.openai.com/v1/chat/completions");
        assert!(config.ai.api_key.is_empty());
        assert_eq!(config.ai.model_name, "gpt-3.5-turbo");
        assert!(config.ai.streaming_enabled);

        assert_eq!(config.advanced.max_scrollback_lines, 5000);
        assert_eq!(config.advanced.max_context_messages, 20);
        assert_eq!(config.advanced.ai_timeout_seconds, 30);

        assert_eq!(config.keybindings.quit, "ctrl+c");
        assert_eq!(config.theme.colors.background, "#22223b");
    }

    #[test]
    fn test_named_slots_order() {
        let colors = ColorConfig::default();
        let names: Vec<&str> = colors.named_slots().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "primary",
                "secondary",
                "background",
                "ai_assistant",
                "user_input",
                "error",
                "success",
                "warning",
            ]
        );
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("short"), "****");
        assert_eq!(mask_secret("sk-1234567890abcd"), "sk-1...abcd");
    }

    #[test]
    fn test_debug_does_not_leak_api_key() {
        let mut config = default_config();
        config.ai.api_key = "sk-super-secret-value".to_string();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-super-secret-value"));
        assert!(rendered.contains("sk-s...alue"));
    }

    #[test]
    fn test_redacted_leaves_original_untouched() {
        let mut config = default_config();
        config.ai.api_key = "sk-super-secret-value".to_string();

        let shown = config.redacted();
        assert_eq!(shown.ai.api_key, "sk-s...alue");
        assert_eq!(config.ai.api_key, "sk-super-secret-value");
    }

    #[test]
    fn test_yaml_field_names() {
        let yaml = serde_yaml::to_string(&default_config()).unwrap();
        for key in [
            "ai:",
            "api_url:",
            "streaming_enabled:",
            "theme:",
            "colors:",
            "ai_assistant:",
            "keybindings:",
            "focus_next_pane:",
            "advanced:",
            "ai_timeout_seconds:",
        ] {
            assert!(yaml.contains(key), "missing {key} in {yaml}");
        }
    }
}
