//! Error types for recipe request handlers.

use thiserror::Error;

use crate::store::StoreError;

/// Error type for request handlers.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Request body could not be decoded as a recipe.
    #[error("Invalid request body: {0}")]
    DecodeFailed(String),
    /// Store rejected or could not serve the request.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::Store(StoreError::InvalidInput(_)) => 400,
            HandlerError::Store(StoreError::NotFound(_)) => 404,
            HandlerError::Store(StoreError::LockPoisoned(_)) => 500,
        }
    }
}
