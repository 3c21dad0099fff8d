//! Change event source backed by `fswatch`
//!
//! The watcher runs for the whole session. Its NUL-separated output is
//! exposed as a lazy iterator of [`ChangeToken`]s, so nothing is buffered
//! here beyond the record being decoded.
//!
//! [`ChangeToken`]: crate::domain::value_objects::ChangeToken

mod fswatch;
mod records;

pub use fswatch::{fswatch_command, FswatchWatcher, WatcherStream, FSWATCH_OPTIONS};
pub use records::ChangeTokens;
