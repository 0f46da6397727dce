//! Serializable snapshot of everything the view layer renders.

use serde::Serialize;

use super::types::{InputMode, PageStatus};
use crate::asset::ModelAsset;
use crate::ranking::Leaderboard;
use crate::selection::SelectionState;

/// One asset as shown in the picker.
#[derive(Debug, Clone, Serialize)]
pub struct AssetView {
    pub id: String,
    pub name: String,
    pub version: String,
    pub tag_summary: String,
    pub selected: bool,
}

impl AssetView {
    pub(crate) fn new(asset: &ModelAsset, selection: &SelectionState) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            version: asset.version.clone(),
            tag_summary: asset.tag_summary(),
            selected: selection.contains(&asset.id),
        }
    }
}

/// Point-in-time copy of the page's view-facing fields.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub status: PageStatus,
    pub input_mode: InputMode,
    pub sample_input: String,
    pub selected_file_name: Option<String>,
    pub is_running: bool,
    pub status_message: String,
    pub assets: Vec<AssetView>,
    pub selected_ids: SelectionState,
    pub selected_count: usize,
    pub leaderboard: Option<Leaderboard>,
}

impl PageView {
    /// Pretty-printed JSON for export.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
