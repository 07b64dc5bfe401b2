use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::chirp::models::Chirp;
use crate::domain::user::models::User;

/// The persisted root: everything the store owns, serialized as one JSON
/// object.
///
/// `refresh_tokens` maps a raw refresh-token string to a Unix timestamp:
/// 0 means "issued, not revoked", any positive value is the instant of
/// revocation. The `next_*` counters are monotonic and never reused, so a
/// delete followed by a create cannot produce a duplicate ID; documents
/// written before the counters existed get them recomputed on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    #[serde(default)]
    pub chirps: BTreeMap<u64, Chirp>,

    #[serde(default)]
    pub users: BTreeMap<u64, User>,

    #[serde(default)]
    pub refresh_tokens: HashMap<String, i64>,

    #[serde(default)]
    pub next_chirp_id: u64,

    #[serde(default)]
    pub next_user_id: u64,
}

impl Document {
    /// Bring the ID counters up to date after deserialization.
    ///
    /// A counter must always exceed every existing ID. Legacy files carry
    /// no counters at all (deserialized as 0); they recover as
    /// max existing ID + 1.
    pub fn restore_counters(&mut self) {
        let min_next_chirp = self.chirps.keys().next_back().copied().unwrap_or(0) + 1;
        self.next_chirp_id = self.next_chirp_id.max(min_next_chirp);

        let min_next_user = self.users.keys().next_back().copied().unwrap_or(0) + 1;
        self.next_user_id = self.next_user_id.max(min_next_user);
    }

    /// Hand out the next chirp ID and advance the counter.
    pub fn allocate_chirp_id(&mut self) -> u64 {
        let id = self.next_chirp_id;
        self.next_chirp_id += 1;
        id
    }

    /// Hand out the next user ID and advance the counter.
    pub fn allocate_user_id(&mut self) -> u64 {
        let id = self.next_user_id;
        self.next_user_id += 1;
        id
    }
}
