//! Exit status of an external process and how rsync statuses are classified

use serde::Serialize;

/// rsync exit code for "partial transfer due to vanished source files"
///
/// Files routinely change again before or while a batch is copied, so this
/// status is not treated as a failure.
pub const RSYNC_VANISHED_SOURCE_FILES: i32 = 24;

/// How an external process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "code", rename_all = "snake_case")]
pub enum ExitStatus {
    /// Normal exit with a status code
    Code(i32),
    /// Killed by a signal, no status code available
    Signaled,
}

impl ExitStatus {
    /// Returns true for a zero exit code
    pub fn is_success(&self) -> bool {
        matches!(self, ExitStatus::Code(0))
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        match status.code() {
            Some(code) => ExitStatus::Code(code),
            None => ExitStatus::Signaled,
        }
    }
}

impl std::fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitStatus::Code(code) => write!(f, "exited with status {}", code),
            ExitStatus::Signaled => write!(f, "was terminated by a signal"),
        }
    }
}

/// Result of an rsync pass that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOutcome {
    /// rsync exited with status 0
    Success,
    /// rsync reported vanished source files (status 24)
    Tolerated,
    /// Nothing was left to send, rsync was not started
    Skipped,
}

impl SyncOutcome {
    /// Classify an rsync exit status
    ///
    /// Returns the status back as the error for anything other than 0 or 24.
    pub fn classify(status: ExitStatus) -> Result<Self, ExitStatus> {
        match status {
            ExitStatus::Code(0) => Ok(SyncOutcome::Success),
            ExitStatus::Code(RSYNC_VANISHED_SOURCE_FILES) => Ok(SyncOutcome::Tolerated),
            other => Err(other),
        }
    }
}
