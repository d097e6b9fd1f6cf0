use std::time::Duration;

use dropcheck_core::RepositorySlug;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::{debug, info};

use crate::traits::IssueCommenter;
use crate::{OperationError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("dropcheck/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

/// [`IssueCommenter`] backed by the GitHub REST API.
pub struct GitHubCommenter {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubCommenter {
    /// A missing token is only reported when a comment is actually posted.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(api_url: &str, token: Option<String>) -> Result<Self> {
        let client = client_builder()
            .build()
            .map_err(OperationError::HttpClient)?;
        Ok(Self::with_client(client, api_url, token))
    }

    fn with_client(client: Client, api_url: &str, token: Option<String>) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    fn comments_url(&self, repository: &RepositorySlug, number: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{number}/comments",
            self.api_url, repository.owner, repository.name
        )
    }
}

fn client_builder() -> ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        "x-github-api-version",
        HeaderValue::from_static(API_VERSION),
    );

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
}

impl IssueCommenter for GitHubCommenter {
    fn create_comment(&self, repository: &RepositorySlug, number: u64, body: &str) -> Result<()> {
        let token = self
            .token
            .as_deref()
            .ok_or(OperationError::MissingToken { number })?;

        let url = self.comments_url(repository, number);
        debug!(%url, "posting pull request comment");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&CommentBody { body })
            .send()
            .map_err(|source| OperationError::CommentRequest { number, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(OperationError::CommentRejected {
                number,
                status: status.as_u16(),
                body,
            });
        }

        info!(repository = %repository, number, "commented on pull request");
        Ok(())
    }
}
