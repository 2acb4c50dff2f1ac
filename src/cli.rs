use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kicli",
    version,
    about = "Terminal assistant pairing a shell pane with an AI chat pane",
    long_about = "kicli runs a pseudo-terminal shell next to an AI chat pane. Configuration is read from the platform config directory, then overridden by KICLI_* environment variables."
)]
pub struct Cli {
    /// Configuration file path (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log level filter
    #[arg(short, long, default_value = "warn", env = "RUST_LOG", global = true)]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect or initialize the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the config and data file locations
    Path,

    /// Print the merged configuration as YAML (API key masked)
    Show,

    /// Load and validate the configuration
    Validate,

    /// Write the default configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
