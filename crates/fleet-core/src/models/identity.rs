//! Identity entity - a user record keyed by car id instead of a username.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user. The car id is the login key; email and phone number
/// are secondary contact fields. All three are globally unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    /// Unique vehicle identifier used to authenticate (e.g., "123-456-789")
    pub car_id: String,
    /// Stored with the domain portion lower-cased
    pub email: String,
    /// Stored in normalized form (separators stripped)
    pub phone_number: String,
    /// Argon2 PHC string; never a plaintext value
    pub password_hash: String,
    /// Inactive identities always fail authentication
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new active identity with no privileges.
    pub fn new(
        car_id: String,
        email: String,
        phone_number: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            car_id,
            email,
            phone_number,
            password_hash,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Grant staff and superuser privileges (the elevated creation path).
    pub fn with_privileges(mut self) -> Self {
        self.is_staff = true;
        self.is_superuser = true;
        self
    }

    /// Whether this identity may pass authentication.
    pub fn can_authenticate(&self) -> bool {
        self.is_active
    }
}
