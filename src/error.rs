// Content Ranker Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown factor: {0}")]
    UnknownFactor(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Expected {expected} values, got {actual}")]
    WrongArity { expected: usize, actual: usize },

    #[error("{0}")]
    Command(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for RankerError {
    fn from(err: anyhow::Error) -> Self {
        RankerError::Other(err.to_string())
    }
}

impl From<clap::Error> for RankerError {
    fn from(err: clap::Error) -> Self {
        RankerError::Command(err.render().to_string())
    }
}

pub type Result<T> = std::result::Result<T, RankerError>;
