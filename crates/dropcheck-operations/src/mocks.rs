use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dropcheck_core::RepositorySlug;
use dropcheck_git::{FileChange, GitError};

use crate::traits::{GitProvider, IssueCommenter, MigrationReader, RunReporter};
use crate::{OperationError, Result};

pub struct MockGitProvider {
    changed_files: Vec<FileChange>,
    root: Option<PathBuf>,
    fail: bool,
    requests: Mutex<Vec<(PathBuf, String, String)>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changed_files: Vec::new(),
            root: None,
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_changed_files(mut self, files: Vec<FileChange>) -> Self {
        self.changed_files = files;
        self
    }

    /// Reports `root` as the repository root instead of the project root.
    #[must_use]
    pub fn with_repository_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Makes every diff fail as if the repository could not be opened.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn requested_ranges(&self) -> Vec<(String, String)> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(|(_, base, head)| (base.clone(), head.clone()))
            .collect()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn requested_roots(&self) -> Vec<PathBuf> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(|(root, _, _)| root.clone())
            .collect()
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn changed_files(
        &self,
        project_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<FileChange>> {
        self.requests.lock().expect("lock poisoned").push((
            project_root.to_path_buf(),
            base.to_string(),
            head.to_string(),
        ));

        if self.fail {
            return Err(GitError::NotARepository {
                path: project_root.to_path_buf(),
            }
            .into());
        }
        Ok(self.changed_files.clone())
    }

    fn repository_root(&self, project_root: &Path) -> Result<PathBuf> {
        if self.fail {
            return Err(GitError::NotARepository {
                path: project_root.to_path_buf(),
            }
            .into());
        }
        Ok(self
            .root
            .clone()
            .unwrap_or_else(|| project_root.to_path_buf()))
    }
}

pub struct MockMigrationReader {
    files: HashMap<String, String>,
    reads: Mutex<Vec<(PathBuf, String)>>,
}

impl MockMigrationReader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            reads: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Paths passed to `read_migration`, in call order, including failed reads.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn reads(&self) -> Vec<String> {
        self.reads
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(|(_, path)| path.clone())
            .collect()
    }

    /// Roots passed to `read_migration`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn read_roots(&self) -> Vec<PathBuf> {
        self.reads
            .lock()
            .expect("lock poisoned")
            .iter()
            .map(|(root, _)| root.clone())
            .collect()
    }

    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads().len()
    }
}

impl Default for MockMigrationReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationReader for MockMigrationReader {
    fn read_migration(&self, repository_root: &Path, path: &str) -> Result<String> {
        self.reads
            .lock()
            .expect("lock poisoned")
            .push((repository_root.to_path_buf(), path.to_string()));

        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| OperationError::MigrationRead {
                path: repository_root.join(path),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            })
    }
}

pub struct MockIssueCommenter {
    reject: bool,
    comments: Mutex<Vec<(String, u64, String)>>,
}

impl MockIssueCommenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            reject: false,
            comments: Mutex::new(Vec::new()),
        }
    }

    /// Makes every comment fail with a 403 response.
    #[must_use]
    pub fn rejecting(mut self) -> Self {
        self.reject = true;
        self
    }

    /// Posted comments as `(owner/name, number, body)`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn comments(&self) -> Vec<(String, u64, String)> {
        self.comments.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockIssueCommenter {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueCommenter for MockIssueCommenter {
    fn create_comment(&self, repository: &RepositorySlug, number: u64, body: &str) -> Result<()> {
        if self.reject {
            return Err(OperationError::CommentRejected {
                number,
                status: 403,
                body: "Resource not accessible by integration".to_string(),
            });
        }

        self.comments.lock().expect("lock poisoned").push((
            repository.to_string(),
            number,
            body.to_string(),
        ));
        Ok(())
    }
}

pub struct MockRunReporter {
    infos: Mutex<Vec<String>>,
    warnings: Mutex<Vec<(String, Option<String>)>>,
    failures: Mutex<Vec<String>>,
    outputs: Mutex<Vec<(String, String)>>,
}

impl MockRunReporter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            infos: Mutex::new(Vec::new()),
            warnings: Mutex::new(Vec::new()),
            failures: Mutex::new(Vec::new()),
            outputs: Mutex::new(Vec::new()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn warnings(&self) -> Vec<(String, Option<String>)> {
        self.warnings.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn outputs(&self) -> Vec<(String, String)> {
        self.outputs.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockRunReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunReporter for MockRunReporter {
    fn info(&self, message: &str) {
        self.infos
            .lock()
            .expect("lock poisoned")
            .push(message.to_string());
    }

    fn warning(&self, message: &str, file: Option<&str>) {
        self.warnings
            .lock()
            .expect("lock poisoned")
            .push((message.to_string(), file.map(ToString::to_string)));
    }

    fn set_failed(&self, message: &str) {
        self.failures
            .lock()
            .expect("lock poisoned")
            .push(message.to_string());
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        self.outputs
            .lock()
            .expect("lock poisoned")
            .push((name.to_string(), value.to_string()));
        Ok(())
    }
}
