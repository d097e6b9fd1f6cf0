use std::path::PathBuf;

use tracing::debug;

use crate::{FileChange, FileStatus, GitError, Result};

use super::Repository;

impl Repository {
    /// Lists the files that differ between two revisions, equivalent to
    /// `git diff --name-only <base>..<head>`.
    ///
    /// Rename detection follows the repository's `diff.renames` setting.
    /// Deleted files are reported under the path they had in `base`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either base or head cannot be resolved.
    pub fn changed_files(&self, base: &str, head: &str) -> Result<Vec<FileChange>> {
        let base_tree = self.resolve_tree(base)?;
        let head_tree = self.resolve_tree(head)?;

        let mut diff = self
            .inner
            .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?;
        diff.find_similar(None)?;

        let mut changes = Vec::new();

        for delta in diff.deltas() {
            let status = match delta.status() {
                git2::Delta::Added => FileStatus::Added,
                git2::Delta::Deleted => FileStatus::Deleted,
                git2::Delta::Modified => FileStatus::Modified,
                git2::Delta::Renamed => FileStatus::Renamed,
                git2::Delta::Copied => FileStatus::Copied,
                git2::Delta::Typechange => FileStatus::TypeChanged,
                _ => continue,
            };

            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(PathBuf::from)
                .ok_or(GitError::MissingDeltaPath)?;

            let mut change = FileChange::new(path, status);

            if status == FileStatus::Renamed || status == FileStatus::Copied {
                if let Some(old_path) = delta.old_file().path() {
                    change = change.with_old_path(old_path.to_path_buf());
                }
            }

            changes.push(change);
        }

        debug!(base, head, count = changes.len(), "listed changed files");

        Ok(changes)
    }

    fn resolve_tree(&self, refspec: &str) -> Result<git2::Tree<'_>> {
        let not_found = |source| GitError::RefNotFound {
            refspec: refspec.to_string(),
            source,
        };

        let obj = self.inner.revparse_single(refspec).map_err(not_found)?;
        obj.peel_to_tree().map_err(not_found)
    }
}
