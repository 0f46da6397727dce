//! Scoring strategies.

use crate::asset::ModelAsset;
use serde::{Deserialize, Serialize};

/// Benchmark figures for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkScore {
    pub score: f64,
    pub accuracy: f64,
    pub latency: String,
    pub cost: String,
}

/// Maps an asset to benchmark figures.
///
/// `index` is the asset's 0-based position in the selection being ranked.
pub trait Scorer: Send + Sync {
    fn score(&self, asset: &ModelAsset, index: usize) -> BenchmarkScore;
}

/// Hand-authored figures for catalog ids with known results.
const KNOWN_RESULTS: [(&str, f64, f64, &str, &str); 4] = [
    ("asset-user1-fraud-api", 0.88, 0.93, "210ms", "$0.015"),
    ("asset-user1-sentinent-api", 0.86, 0.91, "240ms", "$0.012"),
    ("asset-user1-churn-api", 0.83, 0.89, "310ms", "$0.018"),
    ("asset-user1-vision-api", 0.80, 0.90, "460ms", "$0.024"),
];

/// Scores cycled through for assets without a known result.
pub const FALLBACK_SCORES: [f64; 5] = [0.87, 0.85, 0.82, 0.79, 0.76];

const ACCURACY_CEILING: f64 = 0.95;

/// Canned scorer: known-id lookup, then a deterministic positional fallback.
/// Never runs a model.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedScorer;

impl CannedScorer {
    pub fn known(id: &str) -> Option<BenchmarkScore> {
        KNOWN_RESULTS
            .iter()
            .find(|(known_id, ..)| *known_id == id)
            .map(|&(_, score, accuracy, latency, cost)| BenchmarkScore {
                score,
                accuracy,
                latency: latency.to_string(),
                cost: cost.to_string(),
            })
    }

    pub fn fallback(index: usize) -> BenchmarkScore {
        let score = FALLBACK_SCORES[index % FALLBACK_SCORES.len()];
        BenchmarkScore {
            score,
            accuracy: (score + 0.06).min(ACCURACY_CEILING),
            latency: format!("{}ms", 280 + index * 40),
            // Digits are appended, not added: index 10 yields "$0.022".
            cost: format!("$0.0{}", 12 + index),
        }
    }
}

impl Scorer for CannedScorer {
    fn score(&self, asset: &ModelAsset, index: usize) -> BenchmarkScore {
        Self::known(&asset.id).unwrap_or_else(|| Self::fallback(index))
    }
}
