//! fswatch-rsync-send - mirror a local directory to a remote rsync destination
//!
//! Runs one full rsync pass, then keeps the destination up to date by
//! sending only the paths fswatch reports, one rsync pass per batch.
//! Exclusions come from `.rsync-exclude` in the synchronized directory and
//! are applied to both the watcher and rsync.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use application::{load_exclusions, SessionEvent, SyncExecutor, WatchUseCase};
pub use config::{EnvOverrides, SessionConfig};
pub use domain::services::{translate, translate_all, translate_for_bases};
pub use domain::value_objects::{ChangeToken, FilterPattern, MatchExpression, SyncMode};
pub use error::{SendError, SendResult};
pub use infrastructure::SystemSpawner;
