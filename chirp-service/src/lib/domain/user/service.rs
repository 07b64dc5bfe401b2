use std::sync::Arc;

use auth::TokenKind;
use auth::TokenService;

use crate::domain::ports::ChirpStore;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserUpdate;
use crate::store::StoreError;

/// Account operations: registration, self-service updates, and the
/// privileged promotion trigger.
pub struct UserService<S>
where
    S: ChirpStore,
{
    store: Arc<S>,
    tokens: Arc<TokenService>,
}

impl<S> UserService<S>
where
    S: ChirpStore,
{
    pub fn new(store: Arc<S>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    /// Register a new account.
    ///
    /// The store does not enforce email uniqueness, so the scan over
    /// existing users happens here, before the create. Matching is exact
    /// and case-sensitive.
    ///
    /// # Errors
    /// * `InvalidEmail` - email exceeds 140 characters
    /// * `EmailTaken` - another account already uses this email
    /// * `Store` - persistence failed
    pub fn register(&self, email: &str, password: &str) -> Result<User, UserError> {
        let email = EmailAddress::new(email.to_string())?;

        if self
            .store
            .list_users()?
            .iter()
            .any(|u| u.email == email.as_str())
        {
            return Err(UserError::EmailTaken(email.into_inner()));
        }

        let user = self.store.create_user(email, password)?;
        tracing::info!(user_id = user.id, "registered user");
        Ok(user)
    }

    /// Update the caller's own email and password.
    ///
    /// The target user is the access token's subject. The promotion flag
    /// is deliberately not part of this path; whatever the caller sends
    /// alongside, it stays untouched.
    ///
    /// # Errors
    /// * `Token` - access token is invalid, expired, or the wrong class
    /// * `InvalidEmail` - email exceeds 140 characters
    /// * `NotFound` - token subject no longer exists
    pub fn update_profile(
        &self,
        access_token: &str,
        email: &str,
        password: &str,
    ) -> Result<User, UserError> {
        let claims = self.tokens.verify(access_token, TokenKind::Access)?;
        let id = claims.user_id()?;

        let update = UserUpdate {
            email: Some(EmailAddress::new(email.to_string())?),
            password: Some(password.to_string()),
            promotion: None,
        };

        match self.store.update_user(id, update) {
            Err(StoreError::UserNotFound(id)) => Err(UserError::NotFound(id)),
            other => Ok(other?),
        }
    }

    /// Set the promotion flag for a user.
    ///
    /// Invoked by an external privileged caller (billing webhook); its
    /// authorization is established before this boundary. Email and
    /// password stay untouched.
    ///
    /// # Errors
    /// * `NotFound` - no user with this ID
    pub fn promote(&self, user_id: u64) -> Result<User, UserError> {
        let update = UserUpdate {
            email: None,
            password: None,
            promotion: Some(true),
        };

        match self.store.update_user(user_id, update) {
            Err(StoreError::UserNotFound(id)) => Err(UserError::NotFound(id)),
            other => {
                let user = other?;
                tracing::info!(user_id, "promoted user");
                Ok(user)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::chirp::models::Chirp;
    use crate::domain::chirp::models::ChirpBody;
    use crate::store::StoreError;

    mock! {
        pub TestStore {}

        impl ChirpStore for TestStore {
            fn create_chirp(&self, body: ChirpBody, author_id: u64) -> Result<Chirp, StoreError>;
            fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError>;
            fn get_chirp(&self, id: u64) -> Result<Option<Chirp>, StoreError>;
            fn delete_chirp(&self, id: u64) -> Result<(), StoreError>;
            fn create_user(&self, email: EmailAddress, password: &str) -> Result<User, StoreError>;
            fn list_users(&self) -> Result<Vec<User>, StoreError>;
            fn update_user(&self, id: u64, update: UserUpdate) -> Result<User, StoreError>;
            fn is_refresh_token_valid(&self, token: &str) -> Result<bool, StoreError>;
            fn record_refresh_token(&self, token: &str, revoked_at: i64) -> Result<(), StoreError>;
        }
    }

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn existing_user() -> User {
        User {
            id: 1,
            email: "taken@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            is_promoted: false,
        }
    }

    fn service(store: MockTestStore) -> UserService<MockTestStore> {
        UserService::new(Arc::new(store), Arc::new(TokenService::new(SECRET)))
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let mut store = MockTestStore::new();
        store
            .expect_list_users()
            .returning(|| Ok(vec![existing_user()]));

        let result = service(store).register("taken@example.com", "pw");
        assert!(matches!(result, Err(UserError::EmailTaken(_))));
    }

    #[test]
    fn test_register_duplicate_check_is_case_sensitive() {
        let mut store = MockTestStore::new();
        store
            .expect_list_users()
            .returning(|| Ok(vec![existing_user()]));
        store
            .expect_create_user()
            .withf(|email, _| email.as_str() == "TAKEN@example.com")
            .times(1)
            .returning(|email, _| {
                Ok(User {
                    id: 2,
                    email: email.into_inner(),
                    password_hash: "$argon2id$stub2".to_string(),
                    is_promoted: false,
                })
            });

        // Exact-match policy: differing case is a different address
        let user = service(store)
            .register("TAKEN@example.com", "pw")
            .expect("register failed");
        assert_eq!(user.id, 2);
    }

    #[test]
    fn test_update_profile_never_touches_promotion() {
        let tokens = TokenService::new(SECRET);
        let access = tokens.issue_access(1, 0).unwrap();

        let mut store = MockTestStore::new();
        store
            .expect_update_user()
            .withf(|id, update| {
                *id == 1
                    && update.promotion.is_none()
                    && update.email.is_some()
                    && update.password.is_some()
            })
            .times(1)
            .returning(|id, _| {
                Ok(User {
                    id,
                    email: "new@example.com".to_string(),
                    password_hash: "$argon2id$stub3".to_string(),
                    is_promoted: false,
                })
            });

        let user = service(store)
            .update_profile(&access, "new@example.com", "newpw")
            .expect("update failed");
        assert_eq!(user.email, "new@example.com");
    }

    #[test]
    fn test_promote_sets_flag_only() {
        let mut store = MockTestStore::new();
        store
            .expect_update_user()
            .withf(|id, update| {
                *id == 1
                    && update.promotion == Some(true)
                    && update.email.is_none()
                    && update.password.is_none()
            })
            .times(1)
            .returning(|id, _| {
                let mut user = existing_user();
                user.id = id;
                user.is_promoted = true;
                Ok(user)
            });

        let user = service(store).promote(1).expect("promote failed");
        assert!(user.is_promoted);
    }

    #[test]
    fn test_promote_unknown_user() {
        let mut store = MockTestStore::new();
        store
            .expect_update_user()
            .returning(|id, _| Err(StoreError::UserNotFound(id)));

        let result = service(store).promote(99);
        assert!(matches!(result, Err(UserError::NotFound(99))));
    }
}
