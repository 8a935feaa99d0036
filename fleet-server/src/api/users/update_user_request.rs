use serde::Deserialize;

/// Profile update payload; any subset of fields may be supplied.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub car_id: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Re-hashed and stored when present and non-empty
    pub password: Option<String>,
}
