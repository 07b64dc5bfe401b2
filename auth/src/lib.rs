//! Authentication utilities for the chirp backend.
//!
//! Two building blocks, both consumed by the service crate:
//! - Password hashing (Argon2id) for stored user credentials
//! - Signed, time-bounded session tokens in two classes (access, refresh)
//!
//! Both token classes share one symmetric secret; the issuer claim is the
//! sole discriminator between them and is enforced on every verification,
//! so an access token can never pass as a refresh token or vice versa.
//!
//! # Examples
//!
//! ```
//! use auth::{PasswordHasher, TokenKind, TokenService};
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("hunter2").unwrap();
//! assert!(hasher.verify("hunter2", &hash).unwrap());
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let access = tokens.issue_access(42, 0).unwrap();
//! let claims = tokens.verify(&access, TokenKind::Access).unwrap();
//! assert_eq!(claims.user_id().unwrap(), 42);
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenClaims;
pub use token::TokenError;
pub use token::TokenKind;
pub use token::TokenService;
pub use token::DEFAULT_ACCESS_TTL_SECS;
pub use token::REFRESH_TTL_SECS;
