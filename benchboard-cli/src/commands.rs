//! CLI subcommand handlers.

use crate::Commands;
use crate::ConfigAction;
use crate::render;
use async_trait::async_trait;
use benchboard_core::config::{init_workspace_config, workspace_config_path};
use benchboard_core::{
    BenchConfig, InputMode, Leaderboard, PageCallback, PageController, PageStatus, RunOutcome,
};
use std::path::Path;
use std::sync::Arc;

/// Prints page progress to stderr so stdout stays clean for results.
struct ConsoleCallback {
    quiet: bool,
}

#[async_trait]
impl PageCallback for ConsoleCallback {
    async fn on_status_change(&self, status: PageStatus) {
        tracing::debug!(%status, "Page status changed");
    }

    async fn on_message(&self, message: &str) {
        if !self.quiet {
            eprintln!("  {message}");
        }
    }

    async fn on_leaderboard(&self, leaderboard: &Leaderboard) {
        tracing::debug!(run_id = %leaderboard.run_id, "Leaderboard received");
    }
}

/// Handle a CLI subcommand.
pub async fn handle_command(
    command: Commands,
    config: BenchConfig,
    workspace: &Path,
    quiet: bool,
) -> anyhow::Result<()> {
    let callback: Arc<dyn PageCallback> = Arc::new(ConsoleCallback { quiet });
    let open_page = || PageController::from_config(&config, callback.clone());

    match command {
        Commands::Catalog { json } => handle_catalog(open_page()?, json).await,
        Commands::Rank {
            toggles,
            sample,
            dataset,
            json,
        } => handle_rank(open_page()?, &toggles, sample, dataset.as_deref(), json).await,
        Commands::Validate { dataset } => handle_validate(open_page()?, dataset.as_deref()).await,
        Commands::Config { action } => handle_config(action, &config, workspace),
    }
}

async fn handle_catalog(page: PageController, json: bool) -> anyhow::Result<()> {
    page.load_assets().await;
    let view = page.view();
    if json {
        println!("{}", view.to_json()?);
    } else {
        print!("{}", render::catalog_table(&view.assets));
    }
    Ok(())
}

async fn handle_rank(
    page: PageController,
    toggles: &[String],
    sample: Option<String>,
    dataset: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let board = rank_selection(&page, toggles, sample, dataset).await?;
    if json {
        println!("{}", board.to_json()?);
    } else {
        print!("{}", render::leaderboard_table(&board.rows));
    }
    Ok(())
}

/// Load the catalog, apply toggles and input settings, and run one ranking.
async fn rank_selection(
    page: &PageController,
    toggles: &[String],
    sample: Option<String>,
    dataset: Option<&Path>,
) -> anyhow::Result<Leaderboard> {
    page.load_assets().await;

    for id in toggles {
        let selected = page.toggle(id);
        if !page.assets().iter().any(|a| &a.id == id) {
            tracing::warn!(asset_id = %id, "Toggled id is not in the catalog, it will not be ranked");
        }
        tracing::info!(asset_id = %id, selected, "Selection changed");
    }

    if let Some(path) = dataset {
        page.set_input_mode(InputMode::Dataset);
        page.select_file(Some(path));
    } else if let Some(text) = sample {
        page.set_sample_input(text);
    }

    match page.run_ranking().await {
        RunOutcome::Completed(board) => Ok(board),
        RunOutcome::NotEnoughSelected => anyhow::bail!(page.status_message()),
        RunOutcome::AlreadyRunning => anyhow::bail!("A ranking run is already in progress"),
        RunOutcome::NotReady => anyhow::bail!("The asset catalog has not loaded"),
    }
}

async fn handle_validate(page: PageController, dataset: Option<&Path>) -> anyhow::Result<()> {
    page.load_assets().await;
    if let Some(path) = dataset {
        page.set_input_mode(InputMode::Dataset);
        page.select_file(Some(path));
    }
    let message = page.validate_schema().await;
    println!("{message}");
    Ok(())
}

fn handle_config(
    action: ConfigAction,
    config: &BenchConfig,
    workspace: &Path,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Init => {
            let config_path = workspace_config_path(workspace);
            if init_workspace_config(workspace)? {
                println!(
                    "Created default configuration at: {}",
                    config_path.display()
                );
            } else {
                println!(
                    "Configuration file already exists at: {}",
                    config_path.display()
                );
            }
            Ok(())
        }
        ConfigAction::Show => {
            println!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
    }
}
