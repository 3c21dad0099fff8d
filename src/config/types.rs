//! Session configuration types

use std::ffi::OsString;
use std::path::PathBuf;

use super::loader::EnvOverrides;

/// Default watcher executable
pub const DEFAULT_WATCHER_PROGRAM: &str = "fswatch";
/// Default copy tool executable
pub const DEFAULT_RSYNC_PROGRAM: &str = "rsync";

/// Name of the exclusion file inside the synchronized directory
pub const EXCLUDE_FILE_NAME: &str = ".rsync-exclude";

/// Immutable configuration of one watch session
///
/// Built once at startup and passed by reference to every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Local directory being mirrored (absolute)
    pub local_root: PathBuf,
    /// rsync destination, passed through verbatim (e.g. `host:/path`)
    pub remote: String,
    /// Watcher executable
    pub watcher_program: OsString,
    /// rsync executable
    pub rsync_program: OsString,
    /// Appended to the watcher's fixed options
    pub extra_watcher_args: Vec<String>,
    /// Appended to rsync's common options
    pub extra_rsync_args: Vec<String>,
    /// Echo every constructed command line
    pub trace: bool,
    /// Pass `--dry-run` to rsync
    pub dry_run: bool,
    /// Emit NDJSON events on stdout
    pub json: bool,
}

impl SessionConfig {
    /// Create a configuration with default programs and no overrides
    ///
    /// The root is normalized lexically: trailing slashes and `.`
    /// components are dropped, `..` is kept.
    pub fn new(local_root: impl Into<PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            local_root: local_root.into().components().collect(),
            remote: remote.into(),
            watcher_program: DEFAULT_WATCHER_PROGRAM.into(),
            rsync_program: DEFAULT_RSYNC_PROGRAM.into(),
            extra_watcher_args: Vec::new(),
            extra_rsync_args: Vec::new(),
            trace: false,
            dry_run: false,
            json: false,
        }
    }

    /// Apply environment overrides
    pub fn with_env(mut self, env: EnvOverrides) -> Self {
        self.extra_watcher_args = env.extra_watcher_args;
        self.extra_rsync_args = env.extra_rsync_args;
        self.trace = env.trace;
        self
    }

    /// Set the watcher executable
    pub fn with_watcher_program(mut self, program: impl Into<OsString>) -> Self {
        self.watcher_program = program.into();
        self
    }

    /// Set the rsync executable
    pub fn with_rsync_program(mut self, program: impl Into<OsString>) -> Self {
        self.rsync_program = program.into();
        self
    }

    /// Set trace mode
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Set dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set JSON output mode
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Path of the exclusion file
    pub fn exclude_file(&self) -> PathBuf {
        self.local_root.join(EXCLUDE_FILE_NAME)
    }
}
