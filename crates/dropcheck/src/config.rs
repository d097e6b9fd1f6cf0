use std::path::PathBuf;

use dropcheck_core::{PullRequestContext, PullRequestEvent, RepositorySlug};
use dropcheck_operations::providers::DEFAULT_API_URL;
use tracing::debug;

use crate::error::Result;

/// Everything the run takes from the CI environment, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunConfig {
    pub repository: Option<RepositorySlug>,
    pub token: Option<String>,
    pub event_path: Option<PathBuf>,
    pub api_url: String,
    pub output_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Empty
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let repository = get("GITHUB_REPOSITORY")
            .map(|value| value.trim().parse::<RepositorySlug>())
            .transpose()?;

        Ok(Self {
            repository,
            token: get("GITHUB_TOKEN"),
            event_path: get("GITHUB_EVENT_PATH").map(PathBuf::from),
            api_url: get("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            output_path: get("GITHUB_OUTPUT").map(PathBuf::from),
        })
    }

    /// Loads the event payload and derives the pull request context.
    ///
    /// Without an event file the context is empty: no revisions and no
    /// pull request number.
    pub fn pull_request_context(&self) -> Result<PullRequestContext> {
        let event = match &self.event_path {
            Some(path) => PullRequestEvent::from_path(path)?,
            None => {
                debug!("GITHUB_EVENT_PATH is not set; running without pull request context");
                PullRequestEvent::default()
            }
        };

        Ok(PullRequestContext::from_event(
            &event,
            self.repository.clone(),
        ))
    }
}
