//! Fake process spawner for unit tests
//!
//! The watcher replays a canned byte stream; every other program (rsync)
//! returns the next queued exit status, or 0 once the queue is empty.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::io::{Cursor, Read};

use crate::domain::ports::{OutputMode, ProcessSpawner, SpawnedProcess};
use crate::domain::value_objects::{CommandLine, ExitStatus};
use crate::error::{SendError, SendResult};

pub(crate) struct FakeSpawner {
    watcher_program: OsString,
    watcher_output: Vec<u8>,
    watcher_status: ExitStatus,
    statuses: RefCell<VecDeque<ExitStatus>>,
    unavailable: Option<OsString>,
    calls: RefCell<Vec<(CommandLine, OutputMode)>>,
}

impl FakeSpawner {
    pub(crate) fn new() -> Self {
        Self {
            watcher_program: "fswatch".into(),
            watcher_output: Vec::new(),
            watcher_status: ExitStatus::Code(0),
            statuses: RefCell::new(VecDeque::new()),
            unavailable: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn with_watcher_output(mut self, output: &[u8]) -> Self {
        self.watcher_output = output.to_vec();
        self
    }

    pub(crate) fn with_watcher_status(mut self, status: ExitStatus) -> Self {
        self.watcher_status = status;
        self
    }

    /// Exit codes returned by successive rsync runs
    pub(crate) fn with_rsync_codes(self, codes: &[i32]) -> Self {
        self.statuses
            .borrow_mut()
            .extend(codes.iter().map(|c| ExitStatus::Code(*c)));
        self
    }

    /// Make spawning `program` fail as if it were not installed
    pub(crate) fn without_program(mut self, program: &str) -> Self {
        self.unavailable = Some(program.into());
        self
    }

    /// Every command spawned so far
    pub(crate) fn calls(&self) -> Vec<CommandLine> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }

    /// Output mode of every command spawned so far
    pub(crate) fn output_modes(&self) -> Vec<OutputMode> {
        self.calls.borrow().iter().map(|(_, m)| *m).collect()
    }

    /// Commands other than the watcher
    pub(crate) fn rsync_calls(&self) -> Vec<CommandLine> {
        self.calls()
            .into_iter()
            .filter(|c| c.program() != self.watcher_program.as_os_str())
            .collect()
    }
}

impl ProcessSpawner for FakeSpawner {
    fn spawn(
        &self,
        command: &CommandLine,
        output: OutputMode,
    ) -> SendResult<Box<dyn SpawnedProcess>> {
        if self.unavailable.as_deref() == Some(command.program()) {
            return Err(SendError::Spawn {
                program: command.program().to_string_lossy().into_owned(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }
        self.calls.borrow_mut().push((command.clone(), output));

        if command.program() == self.watcher_program.as_os_str() {
            return Ok(Box::new(FakeProcess {
                output: Some(self.watcher_output.clone()),
                status: self.watcher_status,
            }));
        }

        let status = self
            .statuses
            .borrow_mut()
            .pop_front()
            .unwrap_or(ExitStatus::Code(0));
        Ok(Box::new(FakeProcess {
            output: None,
            status,
        }))
    }
}

struct FakeProcess {
    output: Option<Vec<u8>>,
    status: ExitStatus,
}

impl SpawnedProcess for FakeProcess {
    fn take_output(&mut self) -> Option<Box<dyn Read>> {
        self.output
            .take()
            .map(|bytes| Box::new(Cursor::new(bytes)) as Box<dyn Read>)
    }

    fn wait(&mut self) -> SendResult<ExitStatus> {
        Ok(self.status)
    }
}
