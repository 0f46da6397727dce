//! Selection state: which assets are queued for benchmarking.

use crate::asset::ModelAsset;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Insertion-ordered set of selected asset ids.
///
/// Order reflects when each id was selected, not catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    order: Vec<String>,
    members: HashSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the id if selected, otherwise append it. Returns whether the id
    /// is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.members.remove(id) {
            self.order.retain(|s| s != id);
            false
        } else {
            self.members.insert(id.to_string());
            self.order.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    pub fn count(&self) -> usize {
        self.order.len()
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Replace the selection with the first `n` assets of a catalog.
    pub fn select_first(&mut self, catalog: &[ModelAsset], n: usize) {
        self.clear();
        for asset in catalog.iter().take(n) {
            self.toggle(&asset.id);
        }
    }

    /// Selected assets that exist in `catalog`, in selection order. Ids with
    /// no catalog entry are skipped.
    pub fn resolve<'a>(&self, catalog: &'a [ModelAsset]) -> Vec<&'a ModelAsset> {
        self.order
            .iter()
            .filter_map(|id| crate::asset::find_asset(catalog, id))
            .collect()
    }
}

impl Serialize for SelectionState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.order.serialize(serializer)
    }
}
