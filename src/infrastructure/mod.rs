//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process I/O.
//!
//! ## Structure
//!
//! - `process/` - `std::process` implementation of the spawner port
//! - `watcher/` - fswatch command line and token stream
//! - `sync/` - rsync command lines

pub mod process;
pub mod sync;
pub mod watcher;

// Re-export for convenience
pub use process::{log_command, SystemSpawner};
pub use sync::RsyncCommand;
pub use watcher::{fswatch_command, ChangeTokens, FswatchWatcher, WatcherStream};
