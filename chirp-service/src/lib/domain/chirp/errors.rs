use auth::TokenError;
use thiserror::Error;

use crate::store::StoreError;

/// Error for ChirpBody validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChirpBodyError {
    #[error("Chirp too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for chirp operations
#[derive(Debug, Error)]
pub enum ChirpError {
    #[error("Invalid chirp body: {0}")]
    InvalidBody(#[from] ChirpBodyError),

    #[error("Chirp not found: {0}")]
    NotFound(u64),

    #[error("Only the author may delete chirp {chirp_id}")]
    NotAuthor { chirp_id: u64 },

    #[error("Invalid token: {0}")]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
