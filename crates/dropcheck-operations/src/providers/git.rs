use std::path::{Path, PathBuf};

use dropcheck_git::{FileChange, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn changed_files(
        &self,
        project_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Vec<FileChange>> {
        let repo = Repository::open(project_root)?;
        Ok(repo.changed_files(base, head)?)
    }

    fn repository_root(&self, project_root: &Path) -> Result<PathBuf> {
        Ok(Repository::open(project_root)?.root().to_path_buf())
    }
}
