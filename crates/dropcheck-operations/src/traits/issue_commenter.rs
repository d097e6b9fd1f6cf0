use dropcheck_core::RepositorySlug;

use crate::Result;

/// Posts comments on an issue or pull request thread.
pub trait IssueCommenter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the comment could not be created. Callers do not
    /// retry.
    fn create_comment(&self, repository: &RepositorySlug, number: u64, body: &str) -> Result<()>;
}
