//! View-layer notifications from the page controller.

use async_trait::async_trait;

use super::types::PageStatus;
use crate::ranking::Leaderboard;

/// Receives page updates as they happen. The controller never holds its
/// state lock while awaiting a callback.
#[async_trait]
pub trait PageCallback: Send + Sync {
    /// The page moved to a new status.
    async fn on_status_change(&self, status: PageStatus);

    /// The user-visible status message changed.
    async fn on_message(&self, message: &str);

    /// A ranking run completed.
    async fn on_leaderboard(&self, leaderboard: &Leaderboard);
}

/// A callback that ignores everything.
pub struct NoOpCallback;

#[async_trait]
impl PageCallback for NoOpCallback {
    async fn on_status_change(&self, _status: PageStatus) {}
    async fn on_message(&self, _message: &str) {}
    async fn on_leaderboard(&self, _leaderboard: &Leaderboard) {}
}

/// A callback that records all events for test assertions.
#[derive(Default)]
pub struct RecordingCallback {
    statuses: tokio::sync::Mutex<Vec<PageStatus>>,
    messages: tokio::sync::Mutex<Vec<String>>,
    leaderboards: tokio::sync::Mutex<Vec<Leaderboard>>,
}

impl RecordingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn statuses(&self) -> Vec<PageStatus> {
        self.statuses.lock().await.clone()
    }

    pub async fn messages(&self) -> Vec<String> {
        self.messages.lock().await.clone()
    }

    pub async fn leaderboards(&self) -> Vec<Leaderboard> {
        self.leaderboards.lock().await.clone()
    }
}

#[async_trait]
impl PageCallback for RecordingCallback {
    async fn on_status_change(&self, status: PageStatus) {
        self.statuses.lock().await.push(status);
    }

    async fn on_message(&self, message: &str) {
        self.messages.lock().await.push(message.to_string());
    }

    async fn on_leaderboard(&self, leaderboard: &Leaderboard) {
        self.leaderboards.lock().await.push(leaderboard.clone());
    }
}
