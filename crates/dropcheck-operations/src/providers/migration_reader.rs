use std::path::Path;

use crate::traits::MigrationReader;
use crate::{OperationError, Result};

pub struct FileSystemMigrationReader;

impl FileSystemMigrationReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemMigrationReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationReader for FileSystemMigrationReader {
    fn read_migration(&self, repository_root: &Path, path: &str) -> Result<String> {
        let full_path = repository_root.join(path);
        std::fs::read_to_string(&full_path).map_err(|source| OperationError::MigrationRead {
            path: full_path,
            source,
        })
    }
}
