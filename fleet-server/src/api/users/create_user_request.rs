use serde::Deserialize;

/// Registration payload. Fields default to empty so an absent field and an
/// empty one fail the same required-field check.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CreateUserRequest {
    /// Vehicle identifier used as the login key (required)
    pub car_id: String,

    /// Contact email address (required)
    pub email: String,

    /// Contact phone number (required)
    pub phone_number: String,

    /// Plaintext password; hashed immediately, never stored
    pub password: String,
}
