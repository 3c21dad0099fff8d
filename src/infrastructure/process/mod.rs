//! Process spawning
//!
//! `SystemSpawner` implements the [`ProcessSpawner`] port on top of
//! `std::process::Command`.
//!
//! [`ProcessSpawner`]: crate::domain::ports::ProcessSpawner

mod system;

pub use system::SystemSpawner;

use tracing::{debug, info};

use crate::domain::value_objects::CommandLine;

/// Log a command line before it is started
///
/// In trace mode the shell-quoted command is echoed at info level,
/// otherwise it is only visible with debug logging.
pub fn log_command(command: &CommandLine, trace: bool) {
    if trace {
        info!("+ {}", command);
    } else {
        debug!(command = %command, "spawning");
    }
}
