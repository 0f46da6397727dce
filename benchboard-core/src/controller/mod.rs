//! Page controller: the benchmarking page's state machine.
//!
//! Loads the asset catalog (falling back to the demo catalog on failure),
//! tracks the user's selection and input settings, and runs the ranking
//! engine after a simulated processing delay.
//!
//! `PageController` is a cheap handle: clones share the same page. State
//! lives behind a `std::sync::Mutex` that is never held across an `.await`;
//! the two suspension points are the catalog fetch and the run delay.

pub mod callback;
pub mod types;
pub mod view;

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::asset::ModelAsset;
use crate::catalog::{AssetCatalogProvider, HttpCatalogProvider, demo_catalog};
use crate::config::{BenchConfig, RunConfig};
use crate::ranking::{Leaderboard, RankingEngine};
use crate::selection::SelectionState;

pub use callback::{NoOpCallback, PageCallback, RecordingCallback};
pub use types::{
    DEFAULT_SELECTION_SIZE, InputMode, MIN_RANKING_SELECTION, MSG_CATALOG_FALLBACK,
    MSG_CHOOSE_DATASET, MSG_LOADING, MSG_SAMPLE_SCHEMA_OK, MSG_SELECT_AT_LEAST_TWO, PageStatus,
    RunOutcome,
};
pub use view::{AssetView, PageView};

#[derive(Debug, Default)]
struct PageState {
    status: PageStatus,
    assets: Vec<ModelAsset>,
    selection: SelectionState,
    input_mode: InputMode,
    sample_input: String,
    selected_file_name: Option<String>,
    is_running: bool,
    status_message: String,
    leaderboard: Option<Leaderboard>,
}

/// Orchestrates catalog loading, selection, and ranking runs for one page.
#[derive(Clone)]
pub struct PageController {
    state: Arc<Mutex<PageState>>,
    provider: Arc<dyn AssetCatalogProvider>,
    engine: RankingEngine,
    callback: Arc<dyn PageCallback>,
    run_delay: Duration,
}

impl PageController {
    pub fn new(
        provider: Arc<dyn AssetCatalogProvider>,
        callback: Arc<dyn PageCallback>,
        config: &RunConfig,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(PageState::default())),
            provider,
            engine: RankingEngine::default(),
            callback,
            run_delay: config.simulated_delay(),
        }
    }

    /// Build a page backed by the HTTP catalog service from `config`.
    ///
    /// The config is validated first. Nothing is fetched until
    /// [`load_assets`](Self::load_assets).
    pub fn from_config(
        config: &BenchConfig,
        callback: Arc<dyn PageCallback>,
    ) -> crate::Result<Self> {
        config.validate()?;
        let provider = HttpCatalogProvider::new(&config.catalog)?;
        Ok(Self::new(Arc::new(provider), callback, &config.run))
    }

    /// Use a different ranking engine (e.g. one backed by a custom scorer).
    pub fn with_engine(mut self, engine: RankingEngine) -> Self {
        self.engine = engine;
        self
    }

    // Every mutation leaves PageState consistent, so a poisoned lock is reused.
    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn announce(&self, status: Option<PageStatus>, message: &str) {
        if let Some(status) = status {
            self.callback.on_status_change(status).await;
        }
        self.callback.on_message(message).await;
    }

    // --- Catalog ---

    /// Fetch the catalog and pre-select its first assets.
    ///
    /// Provider failures are not returned: the demo catalog is loaded instead
    /// and the page shows a warning. Any previous selection is discarded.
    pub async fn load_assets(&self) -> PageStatus {
        {
            let mut state = self.state();
            state.status = PageStatus::LoadingAssets;
            state.selection.clear();
            state.status_message = MSG_LOADING.to_string();
        }
        self.announce(Some(PageStatus::LoadingAssets), MSG_LOADING).await;

        let result = self.provider.fetch_assets().await;

        let (status, message) = {
            let mut state = self.state();
            let (assets, with_error, message) = match result {
                Ok(assets) => {
                    info!(count = assets.len(), "Asset catalog loaded");
                    let message = types::loaded_message(assets.len());
                    (assets, false, message)
                }
                Err(e) => {
                    warn!(error = %e, "Asset catalog unavailable, using demo catalog");
                    (demo_catalog(), true, MSG_CATALOG_FALLBACK.to_string())
                }
            };
            state.selection.select_first(&assets, DEFAULT_SELECTION_SIZE);
            state.assets = assets;
            state.status = PageStatus::AssetsLoaded { with_error };
            state.status_message = message.clone();
            (state.status, message)
        };
        self.announce(Some(status), &message).await;
        status
    }

    /// Replace the catalog wholesale with a fresh fetch.
    pub async fn reload(&self) -> PageStatus {
        self.load_assets().await
    }

    // --- Selection ---

    /// Toggle an asset in or out of the selection. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&self, asset_id: &str) -> bool {
        let selected = self.state().selection.toggle(asset_id);
        debug!(asset_id, selected, "Toggled asset");
        selected
    }

    pub fn is_selected(&self, asset_id: &str) -> bool {
        self.state().selection.contains(asset_id)
    }

    pub fn selected_count(&self) -> usize {
        self.state().selection.count()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.state().selection.ids().to_vec()
    }

    // --- Input settings ---

    pub fn set_input_mode(&self, mode: InputMode) {
        self.state().input_mode = mode;
    }

    pub fn input_mode(&self) -> InputMode {
        self.state().input_mode
    }

    pub fn set_sample_input(&self, text: impl Into<String>) {
        self.state().sample_input = text.into();
    }

    /// Record the chosen dataset file. Only its name is kept; the file is
    /// never opened.
    pub fn select_file(&self, path: Option<&Path>) {
        let name = path
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned());
        debug!(file = ?name, "Dataset file selected");
        self.state().selected_file_name = name;
    }

    pub fn selected_file_name(&self) -> Option<String> {
        self.state().selected_file_name.clone()
    }

    /// Update the status message as if the input schema had been checked.
    /// Nothing is actually validated and the page status does not change.
    pub async fn validate_schema(&self) -> String {
        let message = {
            let mut state = self.state();
            let message = match (state.input_mode, state.selected_file_name.as_deref()) {
                (InputMode::Dataset, Some(file)) => types::dataset_schema_message(file),
                (InputMode::Dataset, None) => MSG_CHOOSE_DATASET.to_string(),
                (InputMode::Sample, _) => MSG_SAMPLE_SCHEMA_OK.to_string(),
            };
            state.status_message = message.clone();
            message
        };
        self.announce(None, &message).await;
        message
    }

    // --- Ranking ---

    /// Run the simulated benchmark over the current selection.
    ///
    /// Ignored while another run is pending or before a catalog has loaded.
    /// With fewer than two models
    /// selected the leaderboard is left alone and a validation message is
    /// shown. Otherwise waits the configured delay, ranks the selected assets
    /// found in the loaded catalog, and replaces the leaderboard.
    pub async fn run_ranking(&self) -> RunOutcome {
        let count = {
            let mut state = self.state();
            if state.is_running {
                debug!("Run already in progress, ignoring");
                return RunOutcome::AlreadyRunning;
            }
            if !state.status.ready_for_run() {
                debug!(status = %state.status, "No catalog loaded, ignoring run");
                return RunOutcome::NotReady;
            }
            let count = state.selection.count();
            if count < MIN_RANKING_SELECTION {
                state.status_message = MSG_SELECT_AT_LEAST_TWO.to_string();
            } else {
                state.is_running = true;
                state.status = PageStatus::Running;
                state.status_message = types::running_message(count);
            }
            count
        };
        if count < MIN_RANKING_SELECTION {
            self.announce(None, MSG_SELECT_AT_LEAST_TWO).await;
            return RunOutcome::NotEnoughSelected;
        }
        info!(models = count, "Benchmark run started");
        self.announce(Some(PageStatus::Running), &types::running_message(count))
            .await;

        tokio::time::sleep(self.run_delay).await;

        let leaderboard = {
            let mut state = self.state();
            let rows = self.engine.rank(&state.selection.resolve(&state.assets));
            let leaderboard = Leaderboard::new(rows);
            state.status_message = types::complete_message(leaderboard.rows.len());
            state.leaderboard = Some(leaderboard.clone());
            state.is_running = false;
            state.status = PageStatus::RunComplete;
            leaderboard
        };
        info!(
            run_id = %leaderboard.run_id,
            models = leaderboard.rows.len(),
            top = leaderboard.top().map(|r| r.model.as_str()).unwrap_or("-"),
            "Benchmark run complete"
        );
        self.announce(
            Some(PageStatus::RunComplete),
            &types::complete_message(leaderboard.rows.len()),
        )
        .await;
        self.callback.on_leaderboard(&leaderboard).await;
        RunOutcome::Completed(leaderboard)
    }

    // --- View accessors ---

    pub fn status(&self) -> PageStatus {
        self.state().status
    }

    pub fn is_running(&self) -> bool {
        self.state().is_running
    }

    pub fn status_message(&self) -> String {
        self.state().status_message.clone()
    }

    pub fn assets(&self) -> Vec<ModelAsset> {
        self.state().assets.clone()
    }

    pub fn leaderboard(&self) -> Option<Leaderboard> {
        self.state().leaderboard.clone()
    }

    pub fn view(&self) -> PageView {
        let state = self.state();
        PageView {
            status: state.status,
            input_mode: state.input_mode,
            sample_input: state.sample_input.clone(),
            selected_file_name: state.selected_file_name.clone(),
            is_running: state.is_running,
            status_message: state.status_message.clone(),
            assets: state
                .assets
                .iter()
                .map(|a| AssetView::new(a, &state.selection))
                .collect(),
            selected_ids: state.selection.clone(),
            selected_count: state.selection.count(),
            leaderboard: state.leaderboard.clone(),
        }
    }
}
