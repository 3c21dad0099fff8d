//! Configuration for a watch session
//!
//! Sources, highest priority first:
//! 1. CLI arguments and flags
//! 2. Environment variables (FSWATCH_RSYNC_SEND_*)
//! 3. Built-in defaults
//!
//! The result is one immutable [`SessionConfig`].

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{EnvOverrides, ENV_EXTRA_FSWATCH_ARGS, ENV_EXTRA_RSYNC_ARGS, ENV_TRACE};
pub use types::{
    SessionConfig, DEFAULT_RSYNC_PROGRAM, DEFAULT_WATCHER_PROGRAM, EXCLUDE_FILE_NAME,
};
