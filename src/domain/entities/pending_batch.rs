//! Pending batch of changed paths

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

/// Distinct paths accumulated since the last boundary marker
///
/// Keeps first-arrival order so that the rsync argument list is
/// deterministic for a given token sequence.
#[derive(Debug, Default, Clone)]
pub struct PendingBatch {
    paths: IndexSet<PathBuf>,
}

impl PendingBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path; returns false if it was already pending
    pub fn insert(&mut self, path: PathBuf) -> bool {
        self.paths.insert(path)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }

    /// Empty the batch, keeping its allocation
    pub fn clear(&mut self) {
        self.paths.clear();
    }
}

impl<'a> IntoIterator for &'a PendingBatch {
    type Item = &'a PathBuf;
    type IntoIter = indexmap::set::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
