//! Ranking engine: turns selected assets into an ordered leaderboard.
//!
//! Scoring is delegated to a [`Scorer`]; this module only owns the sort and
//! rank assignment, so a real benchmarking backend can be swapped in without
//! touching either.

pub mod scorer;

use crate::asset::ModelAsset;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

pub use scorer::{BenchmarkScore, CannedScorer, FALLBACK_SCORES, Scorer};

/// One leaderboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub rank: usize,
    pub model: String,
    pub score: f64,
    pub accuracy: f64,
    pub latency: String,
    pub cost: String,
    pub top: bool,
}

/// The output of one completed ranking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<RankingRow>,
}

impl Leaderboard {
    pub fn new(rows: Vec<RankingRow>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            rows,
        }
    }

    pub fn top(&self) -> Option<&RankingRow> {
        self.rows.iter().find(|r| r.top)
    }

    /// Pretty-printed JSON for export.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Scores and orders a selection of assets.
#[derive(Clone)]
pub struct RankingEngine {
    scorer: Arc<dyn Scorer>,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new(Arc::new(CannedScorer))
    }
}

impl RankingEngine {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }

    /// Rank `selected` by score, highest first.
    ///
    /// Equal scores keep their input order. Ranks are 1-based and dense;
    /// only rank 1 is marked `top`. Callers require at least two assets, but
    /// any input is accepted.
    pub fn rank<A: AsRef<ModelAsset>>(&self, selected: &[A]) -> Vec<RankingRow> {
        let mut rows: Vec<RankingRow> = selected
            .iter()
            .enumerate()
            .map(|(index, asset)| {
                let asset = asset.as_ref();
                let result = self.scorer.score(asset, index);
                debug!(asset = %asset.id, index, score = result.score, "Scored asset");
                RankingRow {
                    rank: 0,
                    model: asset.name.clone(),
                    score: result.score,
                    accuracy: result.accuracy,
                    latency: result.latency,
                    cost: result.cost,
                    top: false,
                }
            })
            .collect();

        // sort_by is stable, which is the tie-break.
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));

        for (pos, row) in rows.iter_mut().enumerate() {
            row.rank = pos + 1;
            row.top = pos == 0;
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn asset(id: &str, name: &str) -> ModelAsset {
        ModelAsset::new(id, name)
    }

    #[test]
    fn test_known_pair_ordering() {
        let selected = vec![
            asset("asset-user1-sentinent-api", "Sentiment API"),
            asset("asset-user1-fraud-api", "Fraud API"),
        ];
        let rows = RankingEngine::default().rank(&selected);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].model, "Fraud API");
        assert_eq!(rows[0].rank, 1);
        assert!(rows[0].top);
        assert_eq!(rows[1].model, "Sentiment API");
        assert_eq!(rows[1].rank, 2);
        assert!(!rows[1].top);
    }

    #[test]
    fn test_display_name_comes_from_live_asset() {
        let selected = vec![
            asset("asset-user1-fraud-api", "Renamed Fraud Model"),
            asset("x", "X"),
        ];
        let rows = RankingEngine::default().rank(&selected);
        assert_eq!(rows[0].model, "Renamed Fraud Model");
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Index 0 and index 5 both fall back to 0.87.
        let selected: Vec<ModelAsset> = (0..6)
            .map(|i| asset(&format!("m{i}"), &format!("Model {i}")))
            .collect();
        let rows = RankingEngine::default().rank(&selected);
        let order: Vec<&str> = rows.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(
            order,
            ["Model 0", "Model 5", "Model 1", "Model 2", "Model 3", "Model 4"]
        );
    }

    #[test]
    fn test_ranks_dense_and_single_top() {
        let selected: Vec<ModelAsset> = (0..9).map(|i| asset(&format!("m{i}"), "M")).collect();
        let rows = RankingEngine::default().rank(&selected);
        let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, (1..=9).collect::<Vec<_>>());
        assert_eq!(rows.iter().filter(|r| r.top).count(), 1);
        assert!(rows.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_empty_input() {
        let rows = RankingEngine::default().rank::<ModelAsset>(&[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let selected = vec![asset("b", "B"), asset("a", "A")];
        let before = selected.clone();
        let _ = RankingEngine::default().rank(&selected);
        assert_eq!(selected, before);
    }

    #[test]
    fn test_custom_scorer() {
        struct NameLength;
        impl Scorer for NameLength {
            fn score(&self, asset: &ModelAsset, _index: usize) -> BenchmarkScore {
                BenchmarkScore {
                    score: asset.name.len() as f64 / 100.0,
                    accuracy: 0.5,
                    latency: "1ms".to_string(),
                    cost: "$0".to_string(),
                }
            }
        }

        let engine = RankingEngine::new(Arc::new(NameLength));
        let rows = engine.rank(&[asset("a", "ab"), asset("b", "abcd")]);
        assert_eq!(rows[0].model, "abcd");
    }

    #[test]
    fn test_rank_accepts_borrowed_assets() {
        let catalog = vec![asset("asset-user1-fraud-api", "Fraud"), asset("z", "Z")];
        let refs: Vec<&ModelAsset> = catalog.iter().collect();
        let rows = RankingEngine::default().rank(&refs);
        assert_eq!(rows[0].model, "Fraud");
    }

    #[test]
    fn test_leaderboard_top() {
        let rows = RankingEngine::default().rank(&[asset("a", "A"), asset("b", "B")]);
        let board = Leaderboard::new(rows);
        assert_eq!(board.top().map(|r| r.model.as_str()), Some("A"));
    }

    #[test]
    fn test_leaderboard_json_export() {
        let rows = RankingEngine::default().rank(&[
            asset("asset-user1-churn-api", "Churn API"),
            asset("asset-user1-vision-api", "Vision API"),
        ]);
        let board = Leaderboard::new(rows);
        let json: serde_json::Value = serde_json::from_str(&board.to_json().unwrap()).unwrap();
        assert_eq!(json["rows"][0]["model"], "Churn API");
        assert_eq!(json["rows"][0]["top"], true);
        assert_eq!(json["run_id"], board.run_id.to_string());
    }
}
