//! Environment overrides
//!
//! Read once at startup; nothing below the CLI layer looks at the
//! process environment again.

use tracing::warn;

use super::env_validator::EnvVarValidator;
use crate::error::{SendError, SendResult};

/// Extra arguments appended to the fswatch invocation
pub const ENV_EXTRA_FSWATCH_ARGS: &str = "FSWATCH_RSYNC_SEND_EXTRA_FSWATCH_ARGS";
/// Extra arguments appended to every rsync invocation
pub const ENV_EXTRA_RSYNC_ARGS: &str = "FSWATCH_RSYNC_SEND_EXTRA_RSYNC_ARGS";
/// Echo every constructed command line
pub const ENV_TRACE: &str = "FSWATCH_RSYNC_SEND_TRACE";

const TRACE_VALUES: &[&str] = &["1", "true", "yes", "on", "0", "false", "no", "off"];

/// Values taken from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub extra_watcher_args: Vec<String>,
    pub extra_rsync_args: Vec<String>,
    pub trace: bool,
}

impl EnvOverrides {
    /// Load overrides from the process environment
    pub fn from_env() -> SendResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load overrides through an arbitrary lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> SendResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let extra_watcher_args = match lookup(ENV_EXTRA_FSWATCH_ARGS) {
            Some(value) => split_args(ENV_EXTRA_FSWATCH_ARGS, &value)?,
            None => Vec::new(),
        };
        let extra_rsync_args = match lookup(ENV_EXTRA_RSYNC_ARGS) {
            Some(value) => split_args(ENV_EXTRA_RSYNC_ARGS, &value)?,
            None => Vec::new(),
        };
        let trace = lookup(ENV_TRACE)
            .map(|value| parse_trace(&value))
            .unwrap_or(false);

        Ok(Self {
            extra_watcher_args,
            extra_rsync_args,
            trace,
        })
    }
}

/// Split a value into shell words
fn split_args(var: &str, value: &str) -> SendResult<Vec<String>> {
    shlex::split(value).ok_or_else(|| SendError::InvalidEnvArgs {
        var: var.to_string(),
        value: value.to_string(),
    })
}

/// Unrecognized values enable tracing, after a warning that says so
fn parse_trace(value: &str) -> bool {
    trace_setting(value).unwrap_or_else(|message| {
        warn!("{message}");
        true
    })
}

/// Empty means off; an unrecognized non-empty value is an `Err` with the
/// warning text
fn trace_setting(value: &str) -> Result<bool, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(false);
    }
    EnvVarValidator::new(ENV_TRACE, TRACE_VALUES)
        .try_parse(value, |s| match s.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
        .map_err(|message| format!("{message}; tracing enabled"))
}
