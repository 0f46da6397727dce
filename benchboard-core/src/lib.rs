//! # Benchboard Core
//!
//! Core library for the Benchboard model benchmarking page.
//! Provides the asset catalog providers, selection state, the ranking
//! engine, the page controller state machine, configuration, and error types.

pub mod asset;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod ranking;
pub mod selection;

// Re-export commonly used types at the crate root.
pub use asset::ModelAsset;
pub use catalog::{AssetCatalogProvider, HttpCatalogProvider, StaticCatalogProvider, demo_catalog};
pub use config::{BenchConfig, load_config};
pub use controller::{
    InputMode, NoOpCallback, PageCallback, PageController, PageStatus, PageView,
    RecordingCallback, RunOutcome,
};
pub use error::{BenchboardError, CatalogError, ConfigError, Result};
pub use ranking::{BenchmarkScore, CannedScorer, Leaderboard, RankingEngine, RankingRow, Scorer};
pub use selection::SelectionState;
