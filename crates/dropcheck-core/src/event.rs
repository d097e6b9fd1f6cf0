use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::{CoreError, Result};

/// The subset of a GitHub webhook payload the check reads.
///
/// Events that were not triggered by a pull request carry no `pull_request`
/// object; that is not an error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PullRequestEvent {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub base: GitRef,
    pub head: GitRef,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GitRef {
    pub sha: String,
}

impl PullRequestEvent {
    /// # Errors
    ///
    /// Returns [`CoreError::EventRead`] if the file cannot be read and
    /// [`CoreError::EventParse`] if it is not a valid event payload.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::EventRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| CoreError::EventParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepositorySlug {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidRepository {
            value: value.to_string(),
        };

        let (owner, name) = value.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Read-only description of the pull request under review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestContext {
    pub base_sha: Option<String>,
    pub head_sha: Option<String>,
    pub number: Option<u64>,
    pub repository: Option<RepositorySlug>,
}

impl PullRequestContext {
    #[must_use]
    pub fn from_event(event: &PullRequestEvent, repository: Option<RepositorySlug>) -> Self {
        let pull_request = event.pull_request.as_ref();
        Self {
            base_sha: pull_request.map(|pr| pr.base.sha.clone()),
            head_sha: pull_request.map(|pr| pr.head.sha.clone()),
            number: pull_request.map(|pr| pr.number),
            repository,
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: Option<String>) -> Self {
        if base.is_some() {
            self.base_sha = base;
        }
        self
    }

    #[must_use]
    pub fn with_head(mut self, head: Option<String>) -> Self {
        if head.is_some() {
            self.head_sha = head;
        }
        self
    }

    /// Both revisions, when known.
    #[must_use]
    pub fn revisions(&self) -> Option<(&str, &str)> {
        Some((self.base_sha.as_deref()?, self.head_sha.as_deref()?))
    }
}
