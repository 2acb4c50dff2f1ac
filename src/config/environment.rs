//! Environment-based configuration overrides

use crate::config::app::mask_secret;
use crate::config::AppConfig;
use std::env;
use tracing::{debug, warn};

pub const ENV_API_KEY: &str = "KICLI_API_KEY";
pub const ENV_API_URL: &str = "KICLI_API_URL";
pub const ENV_MODEL_NAME: &str = "KICLI_MODEL_NAME";
pub const ENV_STREAMING_ENABLED: &str = "KICLI_STREAMING_ENABLED";
pub const ENV_MAX_SCROLLBACK_LINES: &str = "KICLI_MAX_SCROLLBACK_LINES";
pub const ENV_MAX_CONTEXT_MESSAGES: &str = "KICLI_MAX_CONTEXT_MESSAGES";
pub const ENV_AI_TIMEOUT_SECONDS: &str = "KICLI_AI_TIMEOUT_SECONDS";

/// Every variable the overlay reads, in application order.
pub const ENV_VARS: [&str; 7] = [
    ENV_API_KEY,
    ENV_API_URL,
    ENV_MODEL_NAME,
    ENV_STREAMING_ENABLED,
    ENV_MAX_SCROLLBACK_LINES,
    ENV_MAX_CONTEXT_MESSAGES,
    ENV_AI_TIMEOUT_SECONDS,
];

/// Overrides read from the environment. `None` means "leave the field alone":
/// the variable was unset, empty, or did not parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub model_name: Option<String>,
    pub streaming_enabled: Option<bool>,
    pub max_scrollback_lines: Option<i64>,
    pub max_context_messages: Option<i64>,
    pub ai_timeout_seconds: Option<i64>,
}

impl EnvironmentConfig {
    /// Load overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load overrides through an arbitrary lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            api_key: value(ENV_API_KEY),
            api_url: value(ENV_API_URL),
            model_name: value(ENV_MODEL_NAME),
            streaming_enabled: value(ENV_STREAMING_ENABLED)
                .and_then(|v| parsed(ENV_STREAMING_ENABLED, &v, parse_bool)),
            max_scrollback_lines: value(ENV_MAX_SCROLLBACK_LINES)
                .and_then(|v| parsed(ENV_MAX_SCROLLBACK_LINES, &v, parse_int)),
            max_context_messages: value(ENV_MAX_CONTEXT_MESSAGES)
                .and_then(|v| parsed(ENV_MAX_CONTEXT_MESSAGES, &v, parse_int)),
            ai_timeout_seconds: value(ENV_AI_TIMEOUT_SECONDS)
                .and_then(|v| parsed(ENV_AI_TIMEOUT_SECONDS, &v, parse_int)),
        }
    }

    /// Overwrite the matching fields of `config`. Never fails.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(api_key) = &self.api_key {
            debug!("Overriding AI API key from {}: {}", ENV_API_KEY, mask_secret(api_key));
            config.ai.api_key = api_key.clone();
        }
        if let Some(api_url) = &self.api_url {
            debug!("Overriding AI API URL from {}: {}", ENV_API_URL, api_url);
            config.ai.api_url = api_url.clone();
        }
        if let Some(model_name) = &self.model_name {
            debug!("Overriding model name from {}: {}", ENV_MODEL_NAME, model_name);
            config.ai.model_name = model_name.clone();
        }
        if let Some(streaming) = self.streaming_enabled {
            config.ai.streaming_enabled = streaming;
        }
        if let Some(lines) = self.max_scrollback_lines {
            config.advanced.max_scrollback_lines = lines;
        }
        if let Some(messages) = self.max_context_messages {
            config.advanced.max_context_messages = messages;
        }
        if let Some(timeout) = self.ai_timeout_seconds {
            config.advanced.ai_timeout_seconds = timeout;
        }
    }

    /// Check if any environment overrides are present
    pub fn has_overrides(&self) -> bool {
        !self.override_summary().is_empty()
    }

    /// Names of the variables that will be applied
    pub fn override_summary(&self) -> Vec<&'static str> {
        let present = [
            self.api_key.is_some(),
            self.api_url.is_some(),
            self.model_name.is_some(),
            self.streaming_enabled.is_some(),
            self.max_scrollback_lines.is_some(),
            self.max_context_messages.is_some(),
            self.ai_timeout_seconds.is_some(),
        ];

        ENV_VARS
            .iter()
            .zip(present)
            .filter_map(|(name, is_set)| is_set.then_some(*name))
            .collect()
    }
}

/// Apply the process environment onto `config`.
pub fn apply_env_overrides(config: &mut AppConfig) {
    EnvironmentConfig::from_env().apply(config);
}

fn parsed<T>(name: &str, raw: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let value = parse(raw);
    if value.is_none() {
        warn!("Ignoring invalid {} environment variable: {:?}", name, raw);
    }
    value
}

/// Accepts the usual spellings: `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Decimal integer with an optional sign. No surrounding whitespace.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.parse().ok()
}
