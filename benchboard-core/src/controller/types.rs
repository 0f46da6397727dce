//! Page state enums and user-facing status messages.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ranking::Leaderboard;

/// Minimum number of selected models a ranking run needs.
pub const MIN_RANKING_SELECTION: usize = 2;

/// How many assets are pre-selected after a catalog load.
pub const DEFAULT_SELECTION_SIZE: usize = 3;

pub const MSG_LOADING: &str = "Loading model assets...";
pub const MSG_CATALOG_FALLBACK: &str = "Asset service unavailable. Showing demo models instead.";
pub const MSG_SELECT_AT_LEAST_TWO: &str = "Select at least two models to generate a ranking.";
pub const MSG_CHOOSE_DATASET: &str = "Choose a dataset file before validating.";
pub const MSG_SAMPLE_SCHEMA_OK: &str = "Schema looks valid for sample input.";

/// Lifecycle of a benchmarking page session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageStatus {
    #[default]
    Idle,
    LoadingAssets,
    /// `with_error` is set when the catalog fetch failed and the demo
    /// catalog was loaded instead.
    AssetsLoaded {
        with_error: bool,
    },
    Running,
    RunComplete,
}

impl PageStatus {
    /// Whether a ranking run may start from this state.
    pub fn ready_for_run(self) -> bool {
        matches!(self, PageStatus::AssetsLoaded { .. } | PageStatus::RunComplete)
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageStatus::Idle => write!(f, "idle"),
            PageStatus::LoadingAssets => write!(f, "loading assets"),
            PageStatus::AssetsLoaded { with_error: false } => write!(f, "assets loaded"),
            PageStatus::AssetsLoaded { with_error: true } => {
                write!(f, "assets loaded (demo fallback)")
            }
            PageStatus::Running => write!(f, "running"),
            PageStatus::RunComplete => write!(f, "run complete"),
        }
    }
}

/// Where benchmark input comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Free-text sample typed into the page.
    #[default]
    Sample,
    /// A dataset file picked by the user.
    Dataset,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Sample => write!(f, "sample"),
            InputMode::Dataset => write!(f, "dataset"),
        }
    }
}

/// What a call to `run_ranking` did.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The run finished and produced a fresh leaderboard.
    Completed(Leaderboard),
    /// Fewer than [`MIN_RANKING_SELECTION`] models were selected.
    NotEnoughSelected,
    /// Another run was still in flight; nothing happened.
    AlreadyRunning,
    /// No catalog has finished loading yet; nothing happened.
    NotReady,
}

pub(crate) fn loaded_message(count: usize) -> String {
    format!("Loaded {count} model assets.")
}

pub(crate) fn running_message(count: usize) -> String {
    format!("Running benchmark across {count} models...")
}

pub(crate) fn complete_message(count: usize) -> String {
    format!("Benchmark complete. Ranked {count} models.")
}

pub(crate) fn dataset_schema_message(file_name: &str) -> String {
    format!("Schema looks valid for dataset {file_name}.")
}
