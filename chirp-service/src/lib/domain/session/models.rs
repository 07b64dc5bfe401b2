/// Result of a successful login: the caller's identity plus both bearer
/// credentials. The refresh token is already recorded in the store's
/// revocation table with timestamp 0 ("issued, not revoked") when this is
/// returned.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: u64,
    pub email: String,
    pub is_promoted: bool,
    pub access_token: String,
    pub refresh_token: String,
}
