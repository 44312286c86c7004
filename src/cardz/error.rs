use crate::form::ValidationError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CardzError {
    #[error("Gift card not found: {0}")]
    CardNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, CardzError>;
