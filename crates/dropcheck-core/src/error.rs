use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read event payload '{path}'")]
    EventRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event payload '{path}'")]
    EventParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid repository '{value}': expected 'owner/name'")]
    InvalidRepository { value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
