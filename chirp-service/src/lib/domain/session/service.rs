use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenKind;
use auth::TokenService;
use auth::DEFAULT_ACCESS_TTL_SECS;
use chrono::Utc;

use crate::domain::ports::ChirpStore;
use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Session;

/// The session lifecycle: login, refresh, revoke.
///
/// Composes the token service (mint/verify) with the store (user lookup,
/// revocation table). A refresh token, once revoked, never becomes valid
/// again; access tokens have no revocation path and simply expire.
pub struct SessionService<S>
where
    S: ChirpStore,
{
    store: Arc<S>,
    tokens: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl<S> SessionService<S>
where
    S: ChirpStore,
{
    pub fn new(store: Arc<S>, tokens: Arc<TokenService>) -> Self {
        Self {
            store,
            tokens,
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Authenticate by email and password and open a session.
    ///
    /// Looks the user up by exact email match, verifies the password
    /// against the stored hash, mints one access token (requested TTL,
    /// 0 falls back to one hour) and one 30-day refresh token, and records
    /// the refresh token as issued (timestamp 0).
    ///
    /// # Errors
    /// * `UnknownEmail` - no account with this email
    /// * `WrongPassword` - hash mismatch
    /// * `Store` - lookup or revocation-table write failed
    pub fn login(
        &self,
        email: &str,
        password: &str,
        access_ttl_seconds: i64,
    ) -> Result<Session, SessionError> {
        let user = self
            .store
            .list_users()?
            .into_iter()
            .find(|u| u.email == email)
            .ok_or(SessionError::UnknownEmail)?;

        if !self.password_hasher.verify(password, &user.password_hash)? {
            return Err(SessionError::WrongPassword);
        }

        let access_token = self.tokens.issue_access(user.id, access_ttl_seconds)?;
        let refresh_token = self.tokens.issue_refresh(user.id)?;
        self.store.record_refresh_token(&refresh_token, 0)?;

        tracing::debug!(user_id = user.id, "session opened");

        Ok(Session {
            user_id: user.id,
            email: user.email,
            is_promoted: user.is_promoted,
            access_token,
            refresh_token,
        })
    }

    /// Exchange a refresh token for a fresh one-hour access token.
    ///
    /// No new refresh token is issued.
    ///
    /// # Errors
    /// * `Token` - signature, expiry, or class check failed
    /// * `TokenRevoked` - revocation table marks the token revoked
    pub fn refresh(&self, refresh_token: &str) -> Result<String, SessionError> {
        let claims = self.tokens.verify(refresh_token, TokenKind::Refresh)?;

        if !self.store.is_refresh_token_valid(refresh_token)? {
            tracing::warn!("refresh attempted with a revoked token");
            return Err(SessionError::TokenRevoked);
        }

        let access_token = self
            .tokens
            .issue_access(claims.user_id()?, DEFAULT_ACCESS_TTL_SECS)?;
        Ok(access_token)
    }

    /// Revoke a refresh token as of now. Irreversible.
    ///
    /// # Errors
    /// * `Token` - signature, expiry, or class check failed
    /// * `TokenRevoked` - already revoked
    pub fn revoke(&self, refresh_token: &str) -> Result<(), SessionError> {
        self.tokens.verify(refresh_token, TokenKind::Refresh)?;

        if !self.store.is_refresh_token_valid(refresh_token)? {
            return Err(SessionError::TokenRevoked);
        }

        self.store
            .record_refresh_token(refresh_token, Utc::now().timestamp())?;

        tracing::debug!("refresh token revoked");
        Ok(())
    }
}
