//! Sync mode value object
//!
//! - `Initial`: full recursive pass over the whole tree, once per session
//! - `Incremental`: targeted pass over the paths of one batch

use serde::Serialize;

/// Which kind of rsync pass to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Full-tree baseline copy at startup
    Initial,
    /// Copy of only the paths named in one batch
    Incremental,
}

impl std::fmt::Display for SyncMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncMode::Initial => write!(f, "initial"),
            SyncMode::Incremental => write!(f, "incremental"),
        }
    }
}
