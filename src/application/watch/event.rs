//! Session events

use serde::Serialize;

use crate::domain::value_objects::{SyncMode, SyncOutcome};

/// Progress of a watch session, rendered as log lines or NDJSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Watcher started
    WatchStarted {
        root: String,
        remote: String,
        exclusions: usize,
    },
    /// A path joined the pending batch
    FileChanged { path: String },
    /// A changed path was outside the root and left out of the batch
    PathDropped { path: String },
    /// An rsync pass is about to run
    SyncStarted { mode: SyncMode, paths: usize },
    /// An rsync pass finished without a fatal status
    SyncComplete {
        mode: SyncMode,
        outcome: SyncOutcome,
        paths: usize,
    },
    /// Fatal error, the session ends after this
    Error { message: String },
    /// Watcher output ended
    Shutdown,
}

impl SessionEvent {
    /// Convert to a single-line JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
