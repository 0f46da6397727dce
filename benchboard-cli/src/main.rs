//! Benchboard CLI: terminal front end for the model benchmarking page.
//!
//! Loads the asset catalog, applies selection changes from the command line,
//! runs the simulated ranking pass, and prints the leaderboard.

mod commands;
mod render;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Benchboard: rank model assets on a pseudo-benchmark leaderboard
#[derive(Parser, Debug)]
#[command(name = "benchboard", version, about, long_about = None)]
struct Cli {
    /// Workspace directory (looked up for .benchboard/config.toml)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    /// Configuration file path (replaces user and workspace config files)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Asset catalog endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Simulated run time in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the asset catalog and the default selection
    Catalog {
        /// Print the page snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a ranking pass and print the leaderboard
    Rank {
        /// Toggle an asset id in or out of the default selection (repeatable)
        #[arg(short, long = "toggle", value_name = "ASSET_ID")]
        toggles: Vec<String>,
        /// Sample input text
        #[arg(long, conflicts_with = "dataset")]
        sample: Option<String>,
        /// Dataset file (only its name is recorded)
        #[arg(long)]
        dataset: Option<PathBuf>,
        /// Print the leaderboard as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check the input schema status message
    Validate {
        /// Dataset file to validate against (sample mode when omitted)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand, Debug)]
enum ConfigAction {
    /// Create default configuration file
    Init,
    /// Show current configuration
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Human-readable stderr + JSON file logging
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(filter));

    let log_dir = directories::ProjectDirs::from("dev", "benchboard", "benchboard")
        .map(|d| d.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("."));
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::daily(&log_dir, "benchboard.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let workspace = cli
        .workspace
        .canonicalize()
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut config = match &cli.config {
        Some(path) => benchboard_core::config::load_config_file(path)?,
        None => benchboard_core::config::load_config(Some(&workspace), None)
            .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?,
    };

    if let Some(endpoint) = cli.endpoint {
        config.catalog.endpoint = Some(endpoint);
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.run.simulated_delay_ms = delay_ms;
    }

    commands::handle_command(cli.command, config, &workspace, cli.quiet).await
}
