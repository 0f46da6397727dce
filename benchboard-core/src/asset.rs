//! Model assets: the catalog entries a user can benchmark.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when an asset carries no tags at all.
pub const UNTAGGED_SUMMARY: &str = "Benchmark-ready";

/// Storage/content metadata attached to an asset. Carried for display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageInfo {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

/// One catalog entry available for benchmarking.
///
/// Only `id` and `name` are required on the wire; everything else defaults so
/// a sparsely populated catalog entry still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAsset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub libraries: Vec<String>,
    #[serde(default)]
    pub algorithms: Vec<String>,
    #[serde(default)]
    pub storage: StorageInfo,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ModelAsset {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: String::new(),
            description: String::new(),
            owner: None,
            frameworks: Vec::new(),
            libraries: Vec::new(),
            algorithms: Vec::new(),
            storage: StorageInfo::default(),
            created_at: None,
        }
    }

    /// All tags in display order: frameworks, then libraries, then algorithms.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.frameworks
            .iter()
            .chain(&self.libraries)
            .chain(&self.algorithms)
            .map(String::as_str)
    }

    /// Short tag line for the asset picker: the first two non-empty tags, or
    /// [`UNTAGGED_SUMMARY`] when there are none.
    pub fn tag_summary(&self) -> String {
        let picked: Vec<&str> = self
            .tags()
            .filter(|t| !t.is_empty())
            .take(2)
            .collect();
        if picked.is_empty() {
            UNTAGGED_SUMMARY.to_string()
        } else {
            picked.join(" · ")
        }
    }
}

impl AsRef<ModelAsset> for ModelAsset {
    fn as_ref(&self) -> &ModelAsset {
        self
    }
}

/// Find an asset by id.
pub fn find_asset<'a>(catalog: &'a [ModelAsset], id: &str) -> Option<&'a ModelAsset> {
    catalog.iter().find(|a| a.id == id)
}
