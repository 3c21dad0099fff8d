//! Error types for fswatch-rsync-send
//!
//! Library code returns [`SendError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::{ExitStatus, SyncMode};

/// Result type alias for library operations
pub type SendResult<T> = Result<T, SendError>;

/// Main error type for a watch session
#[derive(Error, Debug)]
pub enum SendError {
    /// The exclusion file is missing or unreadable
    #[error("cannot read exclusion file {path}: {source}")]
    ExclusionFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filter pattern uses syntax that cannot be translated safely
    #[error("unsupported filter pattern '{pattern}': character classes are not supported")]
    UnsupportedSyntax { pattern: String },

    /// rsync exited with a status that is neither success nor tolerated
    #[error("{mode} sync failed: rsync {status}")]
    SyncFailed { mode: SyncMode, status: ExitStatus },

    /// The watcher process ended with a failure status
    #[error("watcher failed: fswatch {status}")]
    WatcherFailed { status: ExitStatus },

    /// An external program could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An environment variable holds unparseable shell words
    #[error("invalid value for {var}: unbalanced quoting in '{value}'")]
    InvalidEnvArgs { var: String, value: String },

    /// A batch was dispatched before the initial sync ran
    #[error("incremental sync requested before the initial sync completed")]
    DispatcherNotStarted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
