pub mod claims;
pub mod errors;
pub mod service;

pub use claims::TokenClaims;
pub use claims::TokenKind;
pub use claims::DEFAULT_ACCESS_TTL_SECS;
pub use claims::REFRESH_TTL_SECS;
pub use errors::TokenError;
pub use service::TokenService;
