//! Sync executor
//!
//! Runs rsync synchronously for one pass and classifies its exit status.
//! The dispatcher does not read further change tokens until a pass has
//! finished.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::domain::ports::{OutputMode, ProcessSpawner};
use crate::domain::value_objects::{CommandLine, SyncMode, SyncOutcome};
use crate::error::{SendError, SendResult};
use crate::infrastructure::process::log_command;
use crate::infrastructure::sync::RsyncCommand;

/// What one pass did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub mode: SyncMode,
    pub outcome: SyncOutcome,
    /// Number of source paths handed to rsync (0 for an initial sync)
    pub paths: usize,
    /// Changed paths that were not below the root and were left out
    pub dropped: Vec<PathBuf>,
}

/// Local root in the forms the watcher may report it in
#[derive(Debug, Clone)]
pub struct SyncRoot {
    absolute: PathBuf,
    canonical: Option<PathBuf>,
}

impl SyncRoot {
    /// `absolute` must already be absolute; its canonical form is looked
    /// up once here
    pub fn new(absolute: impl Into<PathBuf>) -> Self {
        let absolute = absolute.into();
        let canonical = std::fs::canonicalize(&absolute)
            .ok()
            .filter(|canonical| *canonical != absolute);
        Self {
            absolute,
            canonical,
        }
    }

    /// The root as given, then its canonical form if that differs
    pub fn forms(&self) -> Vec<&Path> {
        std::iter::once(self.absolute.as_path())
            .chain(self.canonical.as_deref())
            .collect()
    }

    /// Express a reported path relative to the root
    ///
    /// Relative paths are taken as already relative to the root. Absolute
    /// paths outside the root give `None`.
    pub fn relativize(&self, path: &Path) -> Option<PathBuf> {
        if path.is_relative() {
            return Some(path.to_path_buf());
        }
        if let Ok(rest) = path.strip_prefix(&self.absolute) {
            return Some(rest.to_path_buf());
        }
        self.canonical
            .as_ref()
            .and_then(|canonical| path.strip_prefix(canonical).ok())
            .map(Path::to_path_buf)
    }
}

/// Runs initial and incremental rsync passes for one session
pub struct SyncExecutor<'a> {
    config: &'a SessionConfig,
    spawner: &'a dyn ProcessSpawner,
    root: SyncRoot,
}

impl<'a> SyncExecutor<'a> {
    pub fn new(config: &'a SessionConfig, spawner: &'a dyn ProcessSpawner) -> Self {
        Self {
            config,
            spawner,
            root: SyncRoot::new(&config.local_root),
        }
    }

    /// Full recursive sync of the root
    pub fn run_initial(&self) -> SendResult<SyncReport> {
        let command = RsyncCommand::new(self.config).initial();
        let outcome = self.execute(SyncMode::Initial, &command)?;
        Ok(SyncReport {
            mode: SyncMode::Initial,
            outcome,
            paths: 0,
            dropped: Vec::new(),
        })
    }

    /// Sync of the given changed paths, propagating deletions
    ///
    /// If no path is left after dropping those outside the root, rsync is
    /// not started and the outcome is [`SyncOutcome::Skipped`].
    pub fn run_incremental<'p, I>(&self, paths: I) -> SendResult<SyncReport>
    where
        I: IntoIterator<Item = &'p PathBuf>,
    {
        let mut relative = Vec::new();
        let mut dropped = Vec::new();
        for path in paths {
            match self.root.relativize(path) {
                Some(rel) => relative.push(rel),
                None => {
                    warn!(path = %path.display(), "ignoring change outside the watched directory");
                    dropped.push(path.clone());
                }
            }
        }

        if relative.is_empty() {
            return Ok(SyncReport {
                mode: SyncMode::Incremental,
                outcome: SyncOutcome::Skipped,
                paths: 0,
                dropped,
            });
        }

        let command =
            RsyncCommand::new(self.config).incremental(relative.iter().map(PathBuf::as_path));
        let outcome = self.execute(SyncMode::Incremental, &command)?;
        Ok(SyncReport {
            mode: SyncMode::Incremental,
            outcome,
            paths: relative.len(),
            dropped,
        })
    }

    fn execute(&self, mode: SyncMode, command: &CommandLine) -> SendResult<SyncOutcome> {
        log_command(command, self.config.trace);

        let output = if self.config.json {
            OutputMode::Discard
        } else {
            OutputMode::Inherit
        };
        let status = self.spawner.run(command, output)?;

        match SyncOutcome::classify(status) {
            Ok(SyncOutcome::Tolerated) => {
                warn!(%mode, "some files vanished before they could be transferred");
                Ok(SyncOutcome::Tolerated)
            }
            Ok(outcome) => {
                info!(%mode, "sync finished");
                Ok(outcome)
            }
            Err(status) => Err(SendError::SyncFailed { mode, status }),
        }
    }
}
