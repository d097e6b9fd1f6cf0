use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Core(#[from] dropcheck_core::CoreError),

    #[error(transparent)]
    Git(#[from] dropcheck_git::GitError),

    #[error("failed to read migration file '{path}'")]
    MigrationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "no base and head revision available; run on a pull_request event or pass --base and --head"
    )]
    MissingRevisions,

    #[error("a repository in 'owner/name' form is required to comment on pull request #{number}")]
    MissingRepository { number: u64 },

    #[error("a token is required to comment on pull request #{number}")]
    MissingToken { number: u64 },

    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to comment on pull request #{number}")]
    CommentRequest {
        number: u64,
        #[source]
        source: reqwest::Error,
    },

    #[error("comment on pull request #{number} was rejected with status {status}: {body}")]
    CommentRejected {
        number: u64,
        status: u16,
        body: String,
    },

    #[error("failed to encode output '{name}'")]
    OutputEncode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output '{name}' to '{path}'")]
    OutputWrite {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;

/// Renders an error followed by its `source` chain on one line, for logs.
pub struct ErrorChain<'a>(pub &'a (dyn std::error::Error + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_revisions_mentions_overrides() {
        let msg = OperationError::MissingRevisions.to_string();

        assert!(msg.contains("--base"));
        assert!(msg.contains("--head"));
    }

    #[test]
    fn comment_rejected_includes_status_and_body() {
        let err = OperationError::CommentRejected {
            number: 7,
            status: 403,
            body: "Resource not accessible by integration".to_string(),
        };

        let msg = err.to_string();

        assert!(msg.contains("#7"));
        assert!(msg.contains("403"));
        assert!(msg.contains("Resource not accessible"));
    }

    #[test]
    fn error_chain_joins_sources() {
        let err = OperationError::MigrationRead {
            path: PathBuf::from("migrations/001.sql"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        let rendered = ErrorChain(&err).to_string();

        assert_eq!(
            rendered,
            "failed to read migration file 'migrations/001.sql': gone"
        );
    }

    #[test]
    fn git_error_converts_via_from() {
        let git_err = dropcheck_git::GitError::MissingDeltaPath;

        let err: OperationError = git_err.into();

        assert!(matches!(err, OperationError::Git(_)));
    }
}
