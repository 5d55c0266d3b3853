use thiserror::Error;

/// Fatal errors: anything that stops a run before or outside of the replay.
///
/// Per-record and per-operation failures are not represented here; they are
/// collected as data (see [`crate::model::RecordError`] and
/// [`crate::operations::OperationError`]).
#[derive(Error, Debug)]
pub enum MixtapeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MixtapeError>;
