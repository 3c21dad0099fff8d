//! Exclusion set loading
//!
//! The exclusion file is shared with rsync (`--exclude-from`), so the same
//! patterns keep excluded paths out of both the watcher and the transfer.

use std::path::Path;

use tracing::debug;

use crate::application::sync_executor::SyncRoot;
use crate::config::EXCLUDE_FILE_NAME;
use crate::domain::services::translate_all;
use crate::domain::value_objects::{FilterPattern, MatchExpression};
use crate::error::{SendError, SendResult};

/// Read the filter patterns of `<root>/.rsync-exclude`
///
/// One pattern per line; empty lines are skipped. There is no fallback:
/// a missing file is an error.
pub fn read_patterns(root: &Path) -> SendResult<Vec<FilterPattern>> {
    let path = root.join(EXCLUDE_FILE_NAME);
    let content = std::fs::read_to_string(&path)
        .map_err(|source| SendError::ExclusionFile { path, source })?;

    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(FilterPattern::new)
        .collect())
}

/// Load and translate the exclusion file, preserving line order
///
/// When the root is reached through a symlink, every expression accepts
/// both the root as given and its canonical form, since some watchers
/// report resolved paths.
pub fn load_exclusions(root: &Path) -> SendResult<Vec<MatchExpression>> {
    let patterns = read_patterns(root)?;
    let sync_root = SyncRoot::new(root);
    let expressions = translate_all(&patterns, &sync_root.forms())?;

    debug!(count = expressions.len(), "loaded exclusions");
    Ok(expressions)
}
