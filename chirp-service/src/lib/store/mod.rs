pub mod document;
pub mod errors;

use std::fs;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::RwLock;

use auth::PasswordHasher;

use crate::domain::chirp::models::Chirp;
use crate::domain::chirp::models::ChirpBody;
use crate::domain::ports::ChirpStore;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserUpdate;
pub use document::Document;
pub use errors::StoreError;

/// File-backed document store.
///
/// Owns the backing file exclusively for the life of the process. Every
/// operation loads the whole document, works on it in memory, and (for
/// mutations) persists the whole document back, all inside one lock hold:
/// shared for pure reads, exclusive for the full read-modify-write cycle.
/// Callers pay O(document size) per operation, which is acceptable at the
/// target workload scale.
pub struct DocumentStore {
    path: PathBuf,
    hasher: PasswordHasher,
    lock: RwLock<()>,
}

impl DocumentStore {
    /// Open the store, creating an empty backing file if absent.
    ///
    /// # Errors
    /// * `Io` - path or permission failure
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)?;

        tracing::info!(path = %path.display(), "opened document store");

        Ok(Self {
            path,
            hasher: PasswordHasher::new(),
            lock: RwLock::new(()),
        })
    }

    /// Read the whole document from disk. An empty file is an empty
    /// document.
    fn load(&self) -> Result<Document, StoreError> {
        let bytes = fs::read(&self.path)?;

        let mut doc = if bytes.is_empty() {
            Document::default()
        } else {
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupted(e.to_string()))?
        };
        doc.restore_counters();

        Ok(doc)
    }

    /// Write the whole document back to disk.
    ///
    /// Serialization happens fully in memory first, then the bytes go to a
    /// sibling temp file that is renamed over the document, so a failure
    /// at any point leaves the previous on-disk state intact.
    fn persist(&self, doc: &Document) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec(doc).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

impl ChirpStore for DocumentStore {
    fn create_chirp(&self, body: ChirpBody, author_id: u64) -> Result<Chirp, StoreError> {
        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());

        let mut doc = self.load()?;
        let chirp = Chirp {
            id: doc.allocate_chirp_id(),
            body: body.into_inner(),
            author_id,
        };
        doc.chirps.insert(chirp.id, chirp.clone());
        self.persist(&doc)?;

        tracing::debug!(chirp_id = chirp.id, author_id, "created chirp");
        Ok(chirp)
    }

    fn list_chirps(&self) -> Result<Vec<Chirp>, StoreError> {
        let _guard = self.lock.read().unwrap_or_else(|e| e.into_inner());

        // BTreeMap iteration is already ascending by ID
        Ok(self.load()?.chirps.into_values().collect())
    }

    fn get_chirp(&self, id: u64) -> Result<Option<Chirp>, StoreError> {
        let _guard = self.lock.read().unwrap_or_else(|e| e.into_inner());

        Ok(self.load()?.chirps.remove(&id))
    }

    fn delete_chirp(&self, id: u64) -> Result<(), StoreError> {
        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());

        let mut doc = self.load()?;
        if doc.chirps.remove(&id).is_none() {
            return Err(StoreError::ChirpNotFound(id));
        }
        self.persist(&doc)?;

        tracing::debug!(chirp_id = id, "deleted chirp");
        Ok(())
    }

    fn create_user(&self, email: EmailAddress, password: &str) -> Result<User, StoreError> {
        // Hash outside the lock; only the write cycle needs serializing
        let password_hash = self.hasher.hash(password)?;

        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());

        let mut doc = self.load()?;
        let user = User {
            id: doc.allocate_user_id(),
            email: email.into_inner(),
            password_hash,
            is_promoted: false,
        };
        doc.users.insert(user.id, user.clone());
        self.persist(&doc)?;

        tracing::debug!(user_id = user.id, "created user");
        Ok(user)
    }

    fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let _guard = self.lock.read().unwrap_or_else(|e| e.into_inner());

        Ok(self.load()?.users.into_values().collect())
    }

    fn update_user(&self, id: u64, update: UserUpdate) -> Result<User, StoreError> {
        let password_hash = match update.password {
            Some(password) => Some(self.hasher.hash(&password)?),
            None => None,
        };

        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());

        let mut doc = self.load()?;
        let user = doc
            .users
            .get_mut(&id)
            .ok_or(StoreError::UserNotFound(id))?;

        if let Some(email) = update.email {
            user.email = email.into_inner();
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        if let Some(promoted) = update.promotion {
            user.is_promoted = promoted;
        }

        let updated = user.clone();
        self.persist(&doc)?;

        tracing::debug!(user_id = id, "updated user");
        Ok(updated)
    }

    fn is_refresh_token_valid(&self, token: &str) -> Result<bool, StoreError> {
        let _guard = self.lock.read().unwrap_or_else(|e| e.into_inner());

        // Fail open: a token the table has never seen is "not yet revoked".
        // Signature verification upstream is what establishes validity.
        Ok(match self.load()?.refresh_tokens.get(token) {
            None => true,
            Some(&revoked_at) => revoked_at == 0,
        })
    }

    fn record_refresh_token(&self, token: &str, revoked_at: i64) -> Result<(), StoreError> {
        let _guard = self.lock.write().unwrap_or_else(|e| e.into_inner());

        let mut doc = self.load()?;
        doc.refresh_tokens.insert(token.to_string(), revoked_at);
        self.persist(&doc)?;

        Ok(())
    }
}
