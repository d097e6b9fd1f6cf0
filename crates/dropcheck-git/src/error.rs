use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("git operation failed")]
    Git(#[from] git2::Error),

    #[error("not a git repository: '{path}'")]
    NotARepository { path: PathBuf },

    #[error("failed to resolve revision '{refspec}'")]
    RefNotFound {
        refspec: String,
        #[source]
        source: git2::Error,
    },

    #[error("diff delta has no file path")]
    MissingDeltaPath,
}
