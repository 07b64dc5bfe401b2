//! Chirp backend core: a file-backed document store for users, chirps, and
//! refresh-token revocation state, plus the session lifecycle built on it.
//!
//! The transport layer (HTTP routing, CORS, CLI) lives elsewhere and
//! consumes the services exposed here. Nothing in this crate is async: the
//! document store does synchronous whole-file I/O under one reader/writer
//! lock, and every operation completes or fails within a single lock hold.

pub mod config;
pub mod domain;
pub mod store;

pub use domain::chirp;
pub use domain::session;
pub use domain::user;
pub use store::DocumentStore;
pub use store::StoreError;
