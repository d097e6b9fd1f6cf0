use std::path::Path;

use crate::Result;

/// Abstraction for reading migration files named by the diff.
pub trait MigrationReader: Send + Sync {
    /// Reads the full content of `path`, relative to `repository_root`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OperationError::MigrationRead`] if the file is missing
    /// or unreadable.
    fn read_migration(&self, repository_root: &Path, path: &str) -> Result<String>;
}
