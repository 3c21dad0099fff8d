//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod change_token;
mod command_line;
mod exit_status;
mod filter_pattern;
mod sync_mode;

pub use change_token::{ChangeToken, BOUNDARY_MARKER};
pub use command_line::CommandLine;
pub use exit_status::{ExitStatus, SyncOutcome, RSYNC_VANISHED_SOURCE_FILES};
pub use filter_pattern::{FilterPattern, MatchExpression};
pub use sync_mode::SyncMode;
