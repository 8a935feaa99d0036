use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Opaque bearer credential bound 1:1 to an identity.
/// Created on first successful authentication and reused afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    /// The opaque key presented in the Authorization header
    pub key: String,
    pub identity_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn new(key: String, identity_id: Uuid) -> Self {
        Self {
            key,
            identity_id,
            created_at: Utc::now(),
        }
    }
}
