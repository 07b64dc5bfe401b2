use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

use crate::store::StoreError;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for user operations
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("User not found: {0}")]
    NotFound(u64),

    #[error("Invalid token: {0}")]
    Token(#[from] TokenError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
