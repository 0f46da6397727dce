//! Integration tests for the benchmarking page.
//!
//! These drive a `PageController` end-to-end through catalog load, selection
//! changes, and ranking runs, using a paused tokio clock for the simulated
//! run delay.

use benchboard_core::catalog::{DEMO_ASSET_IDS, StaticCatalogProvider};
use benchboard_core::config::RunConfig;
use benchboard_core::controller::{MSG_CATALOG_FALLBACK, MSG_SELECT_AT_LEAST_TWO};
use benchboard_core::{
    BenchmarkScore, ModelAsset, PageController, PageStatus, RankingEngine, RecordingCallback,
    RunOutcome, Scorer,
};
use std::sync::Arc;
use std::time::Duration;

fn asset(id: &str, name: &str) -> ModelAsset {
    let mut asset = ModelAsset::new(id, name);
    asset.version = "2.1.0".to_string();
    asset
}

/// Helper to create a page over a fixed catalog with the default run delay.
fn create_page(provider: StaticCatalogProvider) -> (PageController, Arc<RecordingCallback>) {
    let callback = Arc::new(RecordingCallback::new());
    let page = PageController::new(Arc::new(provider), callback.clone(), &RunConfig::default());
    (page, callback)
}

fn completed(outcome: RunOutcome) -> benchboard_core::Leaderboard {
    match outcome {
        RunOutcome::Completed(board) => board,
        other => panic!("expected a completed run, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_toggle_scenario_after_load() {
    let catalog = vec![
        asset("A", "Alpha"),
        asset("B", "Beta"),
        asset("C", "Gamma"),
        asset("D", "Delta"),
    ];
    let (page, _) = create_page(StaticCatalogProvider::new(catalog));

    page.load_assets().await;
    assert_eq!(page.selected_ids(), ["A", "B", "C"]);

    assert!(page.toggle("D"));
    assert!(!page.toggle("A"));
    assert_eq!(page.selected_ids(), ["B", "C", "D"]);
    assert!(!page.is_selected("A"));
    assert_eq!(page.selected_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_provider_failure_uses_demo_catalog() {
    let (page, callback) = create_page(StaticCatalogProvider::failing("503 from asset service"));

    let status = page.load_assets().await;

    assert_eq!(status, PageStatus::AssetsLoaded { with_error: true });
    let ids: Vec<String> = page.assets().into_iter().map(|a| a.id).collect();
    assert_eq!(ids, DEMO_ASSET_IDS);
    assert_eq!(page.status_message(), MSG_CATALOG_FALLBACK);
    assert!(
        callback
            .messages()
            .await
            .contains(&MSG_CATALOG_FALLBACK.to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn test_single_selection_does_not_run() {
    let catalog = vec![asset("A", "Alpha"), asset("B", "Beta")];
    let (page, _) = create_page(StaticCatalogProvider::new(catalog));
    page.load_assets().await;
    completed(page.run_ranking().await);
    let before = page.leaderboard().map(|b| b.run_id);

    page.toggle("B");
    assert_eq!(page.selected_count(), 1);
    let outcome = page.run_ranking().await;

    assert!(matches!(outcome, RunOutcome::NotEnoughSelected));
    assert_eq!(page.status_message(), MSG_SELECT_AT_LEAST_TWO);
    assert_eq!(page.leaderboard().map(|b| b.run_id), before);
    assert_eq!(page.status(), PageStatus::RunComplete);
}

#[tokio::test(start_paused = true)]
async fn test_known_pair_ranking() {
    let catalog = vec![
        asset("asset-user1-sentinent-api", "Sentiment API"),
        asset("asset-user1-fraud-api", "Fraud Detection API"),
    ];
    let (page, callback) = create_page(StaticCatalogProvider::new(catalog));
    page.load_assets().await;

    let board = completed(page.run_ranking().await);

    assert_eq!(board.rows.len(), 2);
    assert_eq!(board.rows[0].model, "Fraud Detection API");
    assert_eq!(board.rows[0].rank, 1);
    assert!(board.rows[0].top);
    assert!((board.rows[0].score - 0.88).abs() < f64::EPSILON);
    assert_eq!(board.rows[1].model, "Sentiment API");
    assert_eq!(board.rows[1].rank, 2);
    assert!(!board.rows[1].top);
    assert!((board.rows[1].score - 0.86).abs() < f64::EPSILON);

    assert_eq!(
        callback.statuses().await,
        [
            PageStatus::LoadingAssets,
            PageStatus::AssetsLoaded { with_error: false },
            PageStatus::Running,
            PageStatus::RunComplete,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_run_waits_for_simulated_delay() {
    let catalog = vec![asset("A", "Alpha"), asset("B", "Beta"), asset("C", "Gamma")];
    let (page, _) = create_page(StaticCatalogProvider::new(catalog));
    page.load_assets().await;

    let handle = tokio::spawn({
        let page = page.clone();
        async move { page.run_ranking().await }
    });
    while !page.is_running() {
        tokio::task::yield_now().await;
    }
    assert_eq!(page.status(), PageStatus::Running);
    assert_eq!(page.status_message(), "Running benchmark across 3 models...");

    tokio::time::advance(Duration::from_millis(1199)).await;
    assert!(page.is_running());
    assert!(page.leaderboard().is_none());

    tokio::time::advance(Duration::from_millis(1)).await;
    let board = completed(handle.await.unwrap());
    assert_eq!(board.rows.len(), 3);
    assert!(!page.is_running());
    assert_eq!(page.status(), PageStatus::RunComplete);
}

#[tokio::test(start_paused = true)]
async fn test_reentrant_run_is_ignored() {
    let catalog = vec![asset("A", "Alpha"), asset("B", "Beta")];
    let (page, callback) = create_page(StaticCatalogProvider::new(catalog));
    page.load_assets().await;

    let (first, second) = tokio::join!(page.run_ranking(), page.run_ranking());

    assert!(matches!(first, RunOutcome::Completed(_)));
    assert!(matches!(second, RunOutcome::AlreadyRunning));
    assert_eq!(callback.leaderboards().await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_selection_changes_during_run_are_used() {
    // The ranked set is read when the delay ends, not when the run starts.
    let catalog = vec![
        asset("A", "Alpha"),
        asset("B", "Beta"),
        asset("C", "Gamma"),
        asset("D", "Delta"),
    ];
    let (page, _) = create_page(StaticCatalogProvider::new(catalog));
    page.load_assets().await;

    let handle = tokio::spawn({
        let page = page.clone();
        async move { page.run_ranking().await }
    });
    while !page.is_running() {
        tokio::task::yield_now().await;
    }
    page.toggle("D");

    let board = completed(handle.await.unwrap());
    assert_eq!(board.rows.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_demo_catalog_ranking() {
    let (page, _) = create_page(StaticCatalogProvider::failing("offline"));
    page.load_assets().await;
    page.toggle("demo-forge");

    let board = completed(page.run_ranking().await);

    let order: Vec<&str> = board.rows.iter().map(|r| r.model.as_str()).collect();
    assert_eq!(order, ["Iris-V2", "Sentinel-Edge", "Atlas-Lite", "Forge-XL"]);
    assert_eq!(board.rows[3].latency, "400ms");
    assert_eq!(board.rows[3].cost, "$0.015");
}

/// Scores by the asset version's major number, highest first.
struct VersionScorer;

impl Scorer for VersionScorer {
    fn score(&self, asset: &ModelAsset, _index: usize) -> BenchmarkScore {
        let major: f64 = asset
            .version
            .split('.')
            .next()
            .and_then(|m| m.parse().ok())
            .unwrap_or(0.0);
        BenchmarkScore {
            score: (major / 10.0).min(1.0),
            accuracy: 0.5,
            latency: "0ms".to_string(),
            cost: "$0".to_string(),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_page_with_custom_scorer() {
    let mut old = asset("old", "Old Model");
    old.version = "1.0.0".to_string();
    let mut new = asset("new", "New Model");
    new.version = "4.2.0".to_string();
    let (page, _) = create_page(StaticCatalogProvider::new(vec![old, new]));
    let page = page.with_engine(RankingEngine::new(Arc::new(VersionScorer)));
    page.load_assets().await;

    let board = completed(page.run_ranking().await);

    assert_eq!(board.rows[0].model, "New Model");
    assert!((board.rows[0].score - 0.4).abs() < 1e-9);
}
