use std::path::{Path, PathBuf};

use dropcheck_git::FileChange;

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or either revision
    /// cannot be resolved.
    fn changed_files(&self, project_root: &Path, base: &str, head: &str)
    -> Result<Vec<FileChange>>;

    /// Working directory of the repository containing `project_root`.
    /// Paths from [`GitProvider::changed_files`] are relative to it.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_root` is not inside a git repository.
    fn repository_root(&self, project_root: &Path) -> Result<PathBuf>;
}
