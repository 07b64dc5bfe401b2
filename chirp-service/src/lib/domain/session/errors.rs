use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

use crate::store::StoreError;

/// Top-level error for session operations.
///
/// `UnknownEmail` and `WrongPassword` deliberately share one display
/// message: the caller-visible text never reveals whether the email or the
/// password was at fault. Transport layers may still map the variants to
/// different status codes.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid credentials")]
    UnknownEmail,

    #[error("Invalid credentials")]
    WrongPassword,

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Invalid token: {0}")]
    Token(#[from] TokenError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
