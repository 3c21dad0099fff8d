//! fswatch process adapter

use std::io::Read;

use tracing::debug;

use super::records::ChangeTokens;
use crate::config::SessionConfig;
use crate::domain::ports::{OutputMode, ProcessSpawner, SpawnedProcess};
use crate::domain::value_objects::{ChangeToken, CommandLine, MatchExpression};
use crate::error::{SendError, SendResult};
use crate::infrastructure::process::log_command;

/// Fixed watcher options: recursive, extended regex exclusions, a batch
/// marker after every batch of events, NUL-terminated records
pub const FSWATCH_OPTIONS: &[&str] = &["--recursive", "--extended", "--batch-marker", "--print0"];

/// Build the watcher command line
///
/// Order: fixed options, extra arguments from the environment, one
/// `--exclude` per expression, the watched directory.
pub fn fswatch_command(config: &SessionConfig, exclusions: &[MatchExpression]) -> CommandLine {
    CommandLine::new(&config.watcher_program)
        .args(FSWATCH_OPTIONS)
        .args(&config.extra_watcher_args)
        .args(exclusions.iter().map(MatchExpression::to_exclude_arg))
        .arg(&config.local_root)
}

/// Starts the watcher for a session
pub struct FswatchWatcher<'a> {
    config: &'a SessionConfig,
    spawner: &'a dyn ProcessSpawner,
}

impl<'a> FswatchWatcher<'a> {
    pub fn new(config: &'a SessionConfig, spawner: &'a dyn ProcessSpawner) -> Self {
        Self { config, spawner }
    }

    /// Spawn the watcher and return its token stream
    pub fn start(&self, exclusions: &[MatchExpression]) -> SendResult<WatcherStream> {
        let command = fswatch_command(self.config, exclusions);
        log_command(&command, self.config.trace);

        let mut process = self.spawner.spawn(&command, OutputMode::Capture)?;
        let output = process.take_output().ok_or_else(|| {
            SendError::Io(std::io::Error::other("watcher output was not captured"))
        })?;

        Ok(WatcherStream::new(process, output))
    }
}

/// Tokens of a running watcher
///
/// Yields tokens until the watcher closes its output, then reaps the
/// process; a failing exit status is yielded as a final
/// [`SendError::WatcherFailed`].
pub struct WatcherStream {
    process: Box<dyn SpawnedProcess>,
    tokens: ChangeTokens<Box<dyn Read>>,
    finished: bool,
}

impl WatcherStream {
    pub fn new(process: Box<dyn SpawnedProcess>, output: Box<dyn Read>) -> Self {
        Self {
            process,
            tokens: ChangeTokens::new(output),
            finished: false,
        }
    }
}

impl Iterator for WatcherStream {
    type Item = SendResult<ChangeToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.tokens.next() {
            Some(Ok(token)) => Some(Ok(token)),
            Some(Err(e)) => {
                self.finished = true;
                Some(Err(e.into()))
            }
            None => {
                self.finished = true;
                match self.process.wait() {
                    Ok(status) if status.is_success() => {
                        debug!("watcher exited");
                        None
                    }
                    Ok(status) => Some(Err(SendError::WatcherFailed { status })),
                    Err(e) => Some(Err(e)),
                }
            }
        }
    }
}
