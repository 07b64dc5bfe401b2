use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::chirp::errors::ChirpBodyError;

/// A stored chirp.
///
/// `id` and `author_id` are immutable after creation; the author always
/// comes from the verified access token's subject, never from the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chirp {
    pub id: u64,
    pub body: String,
    #[serde(rename = "user_id")]
    pub author_id: u64,
}

/// Chirp body value type
///
/// Ensures the body is at most 140 characters. Constructed once at the
/// service boundary; the store only ever sees valid bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpBody(String);

impl ChirpBody {
    pub const MAX_LENGTH: usize = 140;

    /// Create a validated chirp body.
    ///
    /// # Errors
    /// * `TooLong` - body exceeds 140 characters
    pub fn new(body: String) -> Result<Self, ChirpBodyError> {
        let length = body.chars().count();
        if length > Self::MAX_LENGTH {
            Err(ChirpBodyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(body))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ChirpBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_at_limit_accepted() {
        let body = "a".repeat(140);
        assert!(ChirpBody::new(body).is_ok());
    }

    #[test]
    fn test_body_over_limit_rejected() {
        let body = "a".repeat(141);
        assert!(matches!(
            ChirpBody::new(body),
            Err(ChirpBodyError::TooLong {
                max: 140,
                actual: 141
            })
        ));
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // 140 multibyte characters is still a valid chirp
        let body = "é".repeat(140);
        assert!(ChirpBody::new(body).is_ok());
    }

    #[test]
    fn test_empty_body_accepted() {
        assert!(ChirpBody::new(String::new()).is_ok());
    }
}
