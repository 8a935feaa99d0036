use fleet_core::Identity;

use serde::Serialize;

/// Public projection of an identity. The password hash is categorically
/// excluded from every external representation.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub car_id: String,
    pub email: String,
    pub phone_number: String,
}

impl From<Identity> for UserDto {
    fn from(identity: Identity) -> Self {
        Self {
            car_id: identity.car_id,
            email: identity.email,
            phone_number: identity.phone_number,
        }
    }
}
