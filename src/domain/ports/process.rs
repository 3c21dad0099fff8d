//! Process port - abstraction over spawning external programs
//!
//! Both external tools (the watcher and rsync) are driven through this one
//! interface, so either can be replaced by a fake in tests.

use std::io::Read;

use crate::domain::value_objects::{CommandLine, ExitStatus};
use crate::error::SendResult;

/// What to do with the child's standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Pipe stdout back to us (see [`SpawnedProcess::take_output`])
    Capture,
    /// Share our stdout
    Inherit,
    /// Send stdout to the null device
    Discard,
}

/// A running external process
pub trait SpawnedProcess {
    /// Take the captured standard output
    ///
    /// Returns `None` if output was not captured or was already taken.
    fn take_output(&mut self) -> Option<Box<dyn Read>>;

    /// Block until the process exits
    fn wait(&mut self) -> SendResult<ExitStatus>;
}

/// Starts external processes
///
/// Implementations:
/// - `SystemSpawner` - `std::process::Command`
/// - fakes in tests that replay canned output and exit statuses
pub trait ProcessSpawner {
    /// Start `command`; `command.program()` is the executable
    fn spawn(&self, command: &CommandLine, output: OutputMode)
        -> SendResult<Box<dyn SpawnedProcess>>;

    /// Start `command` and wait for it to finish
    fn run(&self, command: &CommandLine, output: OutputMode) -> SendResult<ExitStatus> {
        let mut process = self.spawn(command, output)?;
        process.wait()
    }
}
