//! `std::process` backed spawner

use std::io::Read;
use std::process::{Child, Command, Stdio};

use crate::domain::ports::{OutputMode, ProcessSpawner, SpawnedProcess};
use crate::domain::value_objects::{CommandLine, ExitStatus};
use crate::error::{SendError, SendResult};

/// Spawns real operating-system processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl SystemSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSpawner for SystemSpawner {
    fn spawn(
        &self,
        command: &CommandLine,
        output: OutputMode,
    ) -> SendResult<Box<dyn SpawnedProcess>> {
        let mut cmd = Command::new(command.program());
        cmd.args(command.arguments())
            .stdin(Stdio::inherit()) // ssh may need to ask for a password
            .stderr(Stdio::inherit());

        match output {
            OutputMode::Capture => cmd.stdout(Stdio::piped()),
            OutputMode::Inherit => cmd.stdout(Stdio::inherit()),
            OutputMode::Discard => cmd.stdout(Stdio::null()),
        };

        let child = cmd.spawn().map_err(|source| SendError::Spawn {
            program: command.program().to_string_lossy().into_owned(),
            source,
        })?;

        Ok(Box::new(SystemProcess {
            child,
            reaped: false,
        }))
    }
}

/// A child started by [`SystemSpawner`]
struct SystemProcess {
    child: Child,
    reaped: bool,
}

impl SpawnedProcess for SystemProcess {
    fn take_output(&mut self) -> Option<Box<dyn Read>> {
        self.child
            .stdout
            .take()
            .map(|stdout| Box::new(stdout) as Box<dyn Read>)
    }

    fn wait(&mut self) -> SendResult<ExitStatus> {
        let status = self.child.wait()?;
        self.reaped = true;
        Ok(status.into())
    }
}

impl Drop for SystemProcess {
    // An abandoned watcher would otherwise outlive the session
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
