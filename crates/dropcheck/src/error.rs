use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid configuration")]
    Core(#[from] dropcheck_core::CoreError),

    #[error(transparent)]
    Operation(#[from] dropcheck_operations::OperationError),
}

pub type Result<T> = std::result::Result<T, CliError>;
