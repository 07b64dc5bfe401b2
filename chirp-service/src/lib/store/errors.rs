use auth::PasswordError;
use thiserror::Error;

/// Error type for document store operations.
///
/// A failed write never half-persists: serialization completes in memory
/// before any bytes reach disk, and the file is replaced atomically, so an
/// `Io` or `Serialization` error leaves the prior on-disk state intact.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Chirp not found: {0}")]
    ChirpNotFound(u64),

    #[error("User not found: {0}")]
    UserNotFound(u64),

    #[error("Document file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document file is corrupted: {0}")]
    Corrupted(String),

    #[error("Failed to serialize document: {0}")]
    Serialization(String),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}
