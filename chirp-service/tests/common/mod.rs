#![allow(dead_code)]

use std::sync::Arc;

use auth::TokenService;
use chirp_service::store::DocumentStore;
use tempfile::TempDir;

pub const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// A document store backed by a temp directory that lives as long as the
/// test does.
pub struct TestStore {
    pub dir: TempDir,
    pub store: Arc<DocumentStore>,
}

impl TestStore {
    pub fn new() -> Self {
        init_tracing();

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = Arc::new(
            DocumentStore::open(dir.path().join("database.json"))
                .expect("Failed to open document store"),
        );

        Self { dir, store }
    }

    /// Open a second handle over the same backing file, as a process
    /// restart would.
    pub fn reopen(&self) -> DocumentStore {
        DocumentStore::open(self.dir.path().join("database.json"))
            .expect("Failed to reopen document store")
    }
}

pub fn tokens() -> Arc<TokenService> {
    Arc::new(TokenService::new(SECRET))
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}
