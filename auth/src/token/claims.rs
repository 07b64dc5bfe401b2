use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Default access-token lifetime when the caller passes 0 seconds.
pub const DEFAULT_ACCESS_TTL_SECS: i64 = 3600;

/// Fixed refresh-token lifetime: 30 days. Not caller-configurable.
pub const REFRESH_TTL_SECS: i64 = 24 * 3600 * 30;

/// The two token classes minted by the service.
///
/// Both are signed with the same secret; the issuer string is the sole
/// discriminator and is enforced on every verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived credential for ordinary requests. Not revocable.
    Access,
    /// Long-lived credential used solely to mint new access tokens.
    /// Revocable through the store's revocation table.
    Refresh,
}

impl TokenKind {
    /// Issuer claim value for this class.
    pub const fn issuer(self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// Claim set carried by both token classes.
///
/// Fully typed: the shape is validated once at decode time and downstream
/// code works with plain fields. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Issuer: `"access"` or `"refresh"`.
    pub iss: String,

    /// Subject: the user ID, as a string.
    pub sub: String,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

impl TokenClaims {
    /// Build the claim set for one token of the given kind.
    pub fn new(kind: TokenKind, user_id: u64, issued_at: i64, ttl_seconds: i64) -> Self {
        Self {
            iss: kind.issuer().to_string(),
            sub: user_id.to_string(),
            iat: issued_at,
            exp: issued_at + ttl_seconds,
        }
    }

    /// Parse the subject claim back into a user ID.
    ///
    /// # Errors
    /// * `InvalidSubject` - subject is not a decimal user ID
    pub fn user_id(&self) -> Result<u64, TokenError> {
        self.sub
            .parse()
            .map_err(|_| TokenError::InvalidSubject(self.sub.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_for_access_kind() {
        let claims = TokenClaims::new(TokenKind::Access, 42, 1_000, 3600);

        assert_eq!(claims.iss, "access");
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iat, 1_000);
        assert_eq!(claims.exp, 4_600);
    }

    #[test]
    fn test_issuer_strings_differ_per_kind() {
        assert_eq!(TokenKind::Access.issuer(), "access");
        assert_eq!(TokenKind::Refresh.issuer(), "refresh");
        assert_ne!(TokenKind::Access.issuer(), TokenKind::Refresh.issuer());
    }

    #[test]
    fn test_user_id_roundtrip() {
        let claims = TokenClaims::new(TokenKind::Refresh, 7, 0, REFRESH_TTL_SECS);
        assert_eq!(claims.user_id().unwrap(), 7);
    }

    #[test]
    fn test_user_id_rejects_non_numeric_subject() {
        let mut claims = TokenClaims::new(TokenKind::Access, 1, 0, 60);
        claims.sub = "alice".to_string();

        assert!(matches!(
            claims.user_id(),
            Err(TokenError::InvalidSubject(_))
        ));
    }
}
