use std::sync::Arc;

use auth::TokenKind;
use auth::TokenService;

use crate::domain::chirp::errors::ChirpError;
use crate::domain::chirp::models::Chirp;
use crate::domain::chirp::models::ChirpBody;
use crate::domain::ports::ChirpStore;

/// Chirp operations for authenticated callers.
///
/// The author of a posted chirp is always the verified access token's
/// subject; callers cannot attribute a chirp to someone else.
pub struct ChirpService<S>
where
    S: ChirpStore,
{
    store: Arc<S>,
    tokens: Arc<TokenService>,
}

impl<S> ChirpService<S>
where
    S: ChirpStore,
{
    pub fn new(store: Arc<S>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    /// Post a new chirp as the token's subject.
    ///
    /// # Errors
    /// * `Token` - access token is invalid, expired, or the wrong class
    /// * `InvalidBody` - body exceeds 140 characters (nothing is stored)
    /// * `Store` - persistence failed
    pub fn post(&self, access_token: &str, body: &str) -> Result<Chirp, ChirpError> {
        let claims = self.tokens.verify(access_token, TokenKind::Access)?;
        let author_id = claims.user_id()?;

        let body = ChirpBody::new(body.to_string())?;
        let chirp = self.store.create_chirp(body, author_id)?;

        Ok(chirp)
    }

    /// All chirps, ascending by ID.
    pub fn list(&self) -> Result<Vec<Chirp>, ChirpError> {
        Ok(self.store.list_chirps()?)
    }

    /// Look up one chirp by ID.
    ///
    /// # Errors
    /// * `NotFound` - no chirp with this ID
    pub fn get(&self, id: u64) -> Result<Chirp, ChirpError> {
        self.store
            .get_chirp(id)?
            .ok_or(ChirpError::NotFound(id))
    }

    /// Delete a chirp. Only its author may do so.
    ///
    /// # Errors
    /// * `Token` - access token is invalid
    /// * `NotFound` - no chirp with this ID
    /// * `NotAuthor` - token subject is not the chirp's author
    pub fn delete(&self, access_token: &str, id: u64) -> Result<(), ChirpError> {
        let claims = self.tokens.verify(access_token, TokenKind::Access)?;
        let caller_id = claims.user_id()?;

        let chirp = self
            .store
            .get_chirp(id)?
            .ok_or(ChirpError::NotFound(id))?;
        if chirp.author_id != caller_id {
            tracing::warn!(chirp_id = id, caller_id, "delete refused for non-author");
            return Err(ChirpError::NotAuthor { chirp_id: id });
        }

        self.store.delete_chirp(id)?;
        Ok(())
    }
}
