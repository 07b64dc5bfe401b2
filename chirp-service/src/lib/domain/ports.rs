use crate::domain::chirp::models::Chirp;
use crate::domain::chirp::models::ChirpBody;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserUpdate;
use crate::store::StoreError;

/// Persistence surface the domain services depend on.
///
/// Implemented by the file-backed `DocumentStore`; mocked in service unit
/// tests. Every method is synchronous and either completes its whole
/// read-modify-write cycle or leaves the stored document untouched.
pub trait ChirpStore: Send + Sync + 'static {
    /// Persist a new chirp and assign it the next ID.
    ///
    /// # Errors
    /// * `Io` / `Serialization` - document could not be persisted
    fn create_chirp(&self, body: ChirpBody, author_id: u64) -> Result<Chirp, StoreError>;

    /// All chirps, sorted ascending by ID. Ordering is stable so external
    /// callers may look chirps up by index.
    fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError>;

    /// Look up one chirp. `None` if absent.
    fn get_chirp(&self, id: u64) -> Result<Option<Chirp>, StoreError>;

    /// Remove a chirp. Its ID is never reassigned.
    ///
    /// # Errors
    /// * `ChirpNotFound` - no chirp with this ID
    fn delete_chirp(&self, id: u64) -> Result<(), StoreError>;

    /// Hash the password and persist a new user with the next ID.
    ///
    /// Email uniqueness is NOT enforced here; callers check via
    /// `list_users` first.
    ///
    /// # Errors
    /// * `Password` - hashing failed
    /// * `Io` / `Serialization` - document could not be persisted
    fn create_user(&self, email: EmailAddress, password: &str) -> Result<User, StoreError>;

    /// All users, sorted ascending by ID.
    fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Overwrite the fields supplied in `update`; a supplied password is
    /// re-hashed. The promotion flag changes only when `update.promotion`
    /// is present.
    ///
    /// # Errors
    /// * `UserNotFound` - no user with this ID
    fn update_user(&self, id: u64, update: UserUpdate) -> Result<User, StoreError>;

    /// Whether a refresh token is still usable according to the revocation
    /// table. A never-seen token is valid (fail open: absence only means
    /// "not yet revoked"); a recorded token is valid while its timestamp
    /// is 0 and invalid once it is positive.
    fn is_refresh_token_valid(&self, token: &str) -> Result<bool, StoreError>;

    /// Upsert a revocation-table entry: 0 marks "issued", a positive value
    /// marks "revoked at that instant". Last write wins.
    fn record_refresh_token(&self, token: &str, revoked_at: i64) -> Result<(), StoreError>;
}
