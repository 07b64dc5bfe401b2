use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::errors::EmailError;

/// A stored user account.
///
/// `password_hash` is a PHC string; the plaintext is hashed inside the
/// store at creation and never persisted. `is_promoted` is flipped only by
/// a privileged caller (billing webhook), never by the user themselves.
/// Field renames keep the on-disk document compatible with files written
/// by earlier deployments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(rename = "is_chirpy_red", default)]
    pub is_promoted: bool,
}

/// Email address value type
///
/// Only length is enforced (at most 140 characters); format validation is
/// the transport layer's concern. Comparison elsewhere is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const MAX_LENGTH: usize = 140;

    /// Create a validated email address.
    ///
    /// # Errors
    /// * `TooLong` - email exceeds 140 characters
    pub fn new(email: String) -> Result<Self, EmailError> {
        let length = email.chars().count();
        if length > Self::MAX_LENGTH {
            Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(email))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to update an existing user with optional fields.
///
/// Only supplied fields are overwritten. In particular the promotion flag
/// changes only when `promotion` is `Some`, so a self-service update can
/// never touch it regardless of what the caller sends alongside.
#[derive(Debug, Default)]
pub struct UserUpdate {
    pub email: Option<EmailAddress>,
    pub password: Option<String>,
    pub promotion: Option<bool>,
}
