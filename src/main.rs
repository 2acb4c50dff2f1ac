// src/main.rs

use anyhow::{bail, Context};
use kicli::cli::{Cli, Commands, ConfigCommands};
use kicli::config::{default_config, paths};
use kicli::{ConfigError, ConfigManager};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_level: &str, json_logs: bool) {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let json_layer = json_logs.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json_logs).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn build_manager(cli: &Cli) -> Result<ConfigManager, ConfigError> {
    match &cli.config {
        Some(config_path) => Ok(ConfigManager::with_paths(
            config_path.clone(),
            paths::data_file_path()?,
        )),
        None => ConfigManager::new(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_tracing(&cli.log_level, cli.json_logs);

    let manager = build_manager(&cli).context("Failed to determine configuration paths")?;
    info!(config.path = %manager.config_path().display(), "Using configuration file");

    match cli.command {
        None => run_startup(&manager),
        Some(Commands::Config { action }) => run_config_command(&manager, action),
    }
}

/// Load the configuration the way the terminal UI does on startup.
fn run_startup(manager: &ConfigManager) -> anyhow::Result<()> {
    let config = manager
        .load()
        .map_err(|e| {
            error!(error = %e, kind = e.kind(), "Failed to load configuration. Exiting.");
            e
        })
        .context("Failed to load configuration")?;

    println!("Configuration loaded successfully!");
    println!("  model:     {}", config.ai.model_name);
    println!("  endpoint:  {}", config.ai.api_url);
    println!("  streaming: {}", config.ai.streaming_enabled);
    println!("  history:   {}", manager.data_path().display());
    Ok(())
}

fn run_config_command(manager: &ConfigManager, action: ConfigCommands) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Path => {
            println!("config: {}", manager.config_path().display());
            println!("data:   {}", manager.data_path().display());
        }
        ConfigCommands::Show => {
            let config = manager.load().context("Failed to load configuration")?;
            let yaml = serde_yaml::to_string(&config.redacted())
                .context("Failed to render configuration")?;
            print!("{yaml}");
        }
        ConfigCommands::Validate => match manager.load() {
            Ok(_) => println!("Configuration is valid: {}", manager.config_path().display()),
            Err(e) => bail!("Configuration is invalid ({}): {}", e.kind(), e),
        },
        ConfigCommands::Init { force } => {
            let path = manager.config_path();
            if path.exists() && !force {
                bail!(
                    "Config file {} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            manager
                .save(&default_config())
                .context("Failed to write default configuration")?;
            println!("Wrote default configuration to {}", path.display());
        }
    }
    Ok(())
}
