use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct TokenRequest {
    pub car_id: String,
    pub password: String,
}
