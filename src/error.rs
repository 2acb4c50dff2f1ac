// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving, loading, validating or saving configuration.
///
/// The validation kinds (`Invalid`, `MissingApiKey`, `InvalidApiUrl`) are kept
/// apart so callers can react to a missing credential differently from a
/// malformed value. Everything else is an operational failure carrying the
/// path and the underlying cause.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("AI API key is required")]
    MissingApiKey,

    #[error("invalid AI API URL '{url}': {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize config to YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to create config directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to determine {kind} directory for this platform")]
    PathResolution { kind: &'static str },
}

impl ConfigError {
    /// Create a new generic validation error
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }

    /// True when the config file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for the validation taxonomy, false for I/O, parse and path failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Invalid(_) | Self::MissingApiKey | Self::InvalidApiUrl { .. }
        )
    }

    /// Short stable identifier, used by the CLI when reporting failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "config_not_found",
            Self::Invalid(_) => "invalid_config",
            Self::MissingApiKey => "missing_api_key",
            Self::InvalidApiUrl { .. } => "invalid_api_url",
            Self::Read { .. } => "read",
            Self::Parse { .. } => "parse",
            Self::Serialize(_) => "serialize",
            Self::CreateDir { .. } => "create_dir",
            Self::Write { .. } => "write",
            Self::PathResolution { .. } => "path_resolution",
        }
    }
}

/// Result type alias for the configuration subsystem
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_validation_kinds_are_classified() {
        assert!(ConfigError::MissingApiKey.is_validation());
        assert!(ConfigError::invalid("x").is_validation());

        let url_err = url::Url::parse("::nope::").unwrap_err();
        let err = ConfigError::InvalidApiUrl { url: "::nope::".to_string(), source: url_err };
        assert!(err.is_validation());
        assert_eq!(err.kind(), "invalid_api_url");
    }

    #[test]
    fn test_operational_errors_are_not_validation() {
        let err = ConfigError::Read {
            path: PathBuf::from("/tmp/kicli/config.yaml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_validation());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("/tmp/kicli/config.yaml"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound { path: PathBuf::from("missing.yaml") };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "config file not found: missing.yaml");
    }

    #[test]
    fn test_invalid_display_carries_reason() {
        let err = ConfigError::invalid("model name cannot be empty");
        assert_eq!(err.to_string(), "invalid configuration: model name cannot be empty");
    }
}
