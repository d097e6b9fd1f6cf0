use std::path::PathBuf;

use dropcheck_core::{PullRequestContext, filter_migrations};
use tracing::info;

use super::{Notification, NotifySettings, ScanOutcome, list_modified_files, notify, scan_migrations};
use crate::traits::{GitProvider, IssueCommenter, MigrationReader, RunReporter};
use crate::{OperationError, Result};

pub const MODIFIED_FILES_OUTPUT: &str = "modified_files";
pub const MIGRATION_FILES_OUTPUT: &str = "migration_files";

pub struct CheckInput {
    /// Any directory inside the repository. Migrations are read relative to
    /// the repository root discovered from it.
    pub project_root: PathBuf,
    /// Migration directory prefix.
    pub path: String,
    /// Migration file extension, including the dot.
    pub extension: String,
    pub message: String,
    pub fail: bool,
    pub warning: bool,
    pub strict_diff: bool,
}

#[derive(Debug)]
pub struct CheckReport {
    pub modified_files: Vec<String>,
    pub migration_files: Vec<String>,
    pub outcome: ScanOutcome,
    pub notification: Notification,
}

impl CheckReport {
    /// Whether the run was marked failed because of a detected drop.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.notification.failed
    }
}

pub struct CheckOperation<G, M, C, R> {
    git_provider: G,
    migration_reader: M,
    commenter: C,
    reporter: R,
}

impl<G, M, C, R> CheckOperation<G, M, C, R>
where
    G: GitProvider,
    M: MigrationReader,
    C: IssueCommenter,
    R: RunReporter,
{
    pub fn new(git_provider: G, migration_reader: M, commenter: C, reporter: R) -> Self {
        Self {
            git_provider,
            migration_reader,
            commenter,
            reporter,
        }
    }

    #[must_use]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Runs one check: diff, filter, scan, notify, then publish outputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the diff fails in strict mode, if the repository
    /// root cannot be resolved, if commenting on the pull request fails, or
    /// if outputs cannot be written.
    pub fn execute(&self, input: &CheckInput, context: &PullRequestContext) -> Result<CheckReport> {
        let modified_files = list_modified_files(
            &self.git_provider,
            &input.project_root,
            context,
            input.strict_diff,
        )?;

        let migration_files = filter_migrations(&modified_files, &input.path, &input.extension);
        info!(
            count = migration_files.len(),
            files = ?migration_files,
            "migration files"
        );

        let outcome = if migration_files.is_empty() {
            ScanOutcome::Clean
        } else {
            let repository_root = self.git_provider.repository_root(&input.project_root)?;
            scan_migrations(&self.migration_reader, &repository_root, &migration_files)
        };

        let settings = NotifySettings {
            message: &input.message,
            warning: input.warning,
            fail: input.fail,
        };
        let notification = notify(
            &self.commenter,
            &self.reporter,
            &outcome,
            context,
            &settings,
        )?;

        self.publish(MODIFIED_FILES_OUTPUT, &modified_files)?;
        self.publish(MIGRATION_FILES_OUTPUT, &migration_files)?;

        Ok(CheckReport {
            modified_files,
            migration_files,
            outcome,
            notification,
        })
    }

    fn publish(&self, name: &str, files: &[String]) -> Result<()> {
        let value = serde_json::to_string(files).map_err(|source| OperationError::OutputEncode {
            name: name.to_string(),
            source,
        })?;
        self.reporter.set_output(name, &value)
    }
}
