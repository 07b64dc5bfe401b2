use thiserror::Error;

/// Error type for token issuance and verification.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token was signed with an unexpected algorithm")]
    UnexpectedAlgorithm,

    #[error("Token is expired")]
    Expired,

    #[error("Token is not a valid {expected} token")]
    WrongClass { expected: &'static str },

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token subject is not a user ID: {0}")]
    InvalidSubject(String),
}
