use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::claims::TokenKind;
use super::claims::DEFAULT_ACCESS_TTL_SECS;
use super::claims::REFRESH_TTL_SECS;
use super::errors::TokenError;

/// Issues and verifies both token classes with one shared secret.
///
/// Uses HS256 throughout. One secret signs every token in the system, so a
/// secret compromise invalidates the trust of all outstanding tokens; that
/// risk is accepted at this layer and not mitigated further.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a token service from the shared signing secret.
    ///
    /// The secret should be at least 32 bytes and come from environment
    /// configuration, never from code.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Mint an access token for a user.
    ///
    /// # Arguments
    /// * `user_id` - subject of the token
    /// * `ttl_seconds` - requested lifetime; 0 falls back to one hour
    ///
    /// # Errors
    /// * `SigningFailed` - token could not be signed
    pub fn issue_access(&self, user_id: u64, ttl_seconds: i64) -> Result<String, TokenError> {
        let ttl = if ttl_seconds == 0 {
            DEFAULT_ACCESS_TTL_SECS
        } else {
            ttl_seconds
        };
        self.issue(TokenKind::Access, user_id, ttl)
    }

    /// Mint a refresh token for a user. Lifetime is fixed at 30 days.
    ///
    /// # Errors
    /// * `SigningFailed` - token could not be signed
    pub fn issue_refresh(&self, user_id: u64) -> Result<String, TokenError> {
        self.issue(TokenKind::Refresh, user_id, REFRESH_TTL_SECS)
    }

    fn issue(&self, kind: TokenKind, user_id: u64, ttl_seconds: i64) -> Result<String, TokenError> {
        let claims = TokenClaims::new(kind, user_id, Utc::now().timestamp(), ttl_seconds);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a raw token as the expected class and return its claims.
    ///
    /// Checks, in one pass: HS256 algorithm, signature, expiry (zero
    /// leeway, `now >= exp` is invalid), and that the issuer claim equals
    /// the expected class's issuer. A structurally valid token of the
    /// other class fails with `WrongClass`.
    ///
    /// # Errors
    /// * `UnexpectedAlgorithm` - token header names another algorithm
    /// * `InvalidSignature` - signature does not match the secret
    /// * `Expired` - expiration time has passed
    /// * `WrongClass` - issuer claim is not the expected class
    /// * `Malformed` - token is not a decodable JWT or lacks claims
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_issuer(&[expected.issuer()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidIssuer => TokenError::WrongClass {
                    expected: expected.issuer(),
                },
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    TokenError::UnexpectedAlgorithm
                }
                _ => TokenError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify_access() {
        let tokens = TokenService::new(SECRET);

        let raw = tokens.issue_access(42, 0).expect("Failed to issue");
        let claims = tokens.verify(&raw, TokenKind::Access).expect("Failed to verify");

        assert_eq!(claims.iss, "access");
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.exp - claims.iat, DEFAULT_ACCESS_TTL_SECS);
    }

    #[test]
    fn test_issue_access_with_explicit_ttl() {
        let tokens = TokenService::new(SECRET);

        let raw = tokens.issue_access(1, 120).unwrap();
        let claims = tokens.verify(&raw, TokenKind::Access).unwrap();

        assert_eq!(claims.exp - claims.iat, 120);
    }

    #[test]
    fn test_refresh_has_fixed_thirty_day_ttl() {
        let tokens = TokenService::new(SECRET);

        let raw = tokens.issue_refresh(7).unwrap();
        let claims = tokens.verify(&raw, TokenKind::Refresh).unwrap();

        assert_eq!(claims.iss, "refresh");
        assert_eq!(claims.exp - claims.iat, REFRESH_TTL_SECS);
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let tokens = TokenService::new(SECRET);

        let raw = tokens.issue_access(42, 0).unwrap();
        let result = tokens.verify(&raw, TokenKind::Refresh);

        assert!(matches!(
            result,
            Err(TokenError::WrongClass { expected: "refresh" })
        ));
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let tokens = TokenService::new(SECRET);

        let raw = tokens.issue_refresh(42).unwrap();
        let result = tokens.verify(&raw, TokenKind::Access);

        assert!(matches!(
            result,
            Err(TokenError::WrongClass { expected: "access" })
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let tokens = TokenService::new(SECRET);
        let other = TokenService::new(b"another_secret_also_32_bytes_long!");

        let raw = tokens.issue_access(42, 0).unwrap();

        assert!(matches!(
            other.verify(&raw, TokenKind::Access),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = TokenService::new(SECRET);

        // Hand-roll a token that expired a minute ago.
        let claims = TokenClaims::new(TokenKind::Access, 42, Utc::now().timestamp() - 120, 60);
        let raw = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(
            tokens.verify(&raw, TokenKind::Access),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_token_signed_with_other_algorithm_rejected() {
        let tokens = TokenService::new(SECRET);

        // Same secret, but HS384: must not slip past the HS256 pin
        let claims = TokenClaims::new(TokenKind::Access, 42, Utc::now().timestamp(), 3600);
        let raw = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(
            tokens.verify(&raw, TokenKind::Access),
            Err(TokenError::UnexpectedAlgorithm)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let tokens = TokenService::new(SECRET);
        assert!(tokens.verify("not.a.jwt", TokenKind::Access).is_err());
    }
}
