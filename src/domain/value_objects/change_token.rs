//! Change tokens emitted by the watcher

use std::path::PathBuf;

/// Record the watcher prints at every batch boundary
pub const BOUNDARY_MARKER: &[u8] = b"NoOp";

/// One decoded record of the watcher's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeToken {
    /// A path reported as changed
    Path(PathBuf),
    /// No further changes will arrive for the current batch window
    BoundaryMarker,
}

impl ChangeToken {
    /// Decode one NUL-delimited record
    ///
    /// Returns `None` for an empty record.
    pub fn from_record(record: &[u8]) -> Option<Self> {
        if record.is_empty() {
            return None;
        }
        if record == BOUNDARY_MARKER {
            return Some(ChangeToken::BoundaryMarker);
        }
        Some(ChangeToken::Path(path_from_bytes(record)))
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
