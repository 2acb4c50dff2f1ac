// src/lib.rs

//! kicli: terminal assistant pairing a PTY shell pane with an AI chat pane.
//!
//! The configuration subsystem is the library's public surface. It merges
//! defaults, the YAML config file and `KICLI_*` environment variables,
//! validates the result and can write it back.

pub mod cli;
pub mod config;
pub mod error;

// Re-export key types for convenience
pub use config::{AppConfig, ConfigManager};
pub use error::{ConfigError, Result};
