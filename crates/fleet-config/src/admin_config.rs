use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Optional bootstrap administrator created at startup via the privileged
/// registration path. Either all four fields are set or none.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AdminConfig {
    pub car_id: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

impl AdminConfig {
    pub fn is_configured(&self) -> bool {
        self.car_id.is_some()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let fields = [
            &self.car_id,
            &self.email,
            &self.phone_number,
            &self.password,
        ];

        let set = fields.iter().filter(|f| f.is_some()).count();

        if set != 0 && set != fields.len() {
            return Err(ConfigError::admin(
                "admin.car_id, admin.email, admin.phone_number, and admin.password \
                 must be configured together",
            ));
        }

        Ok(())
    }
}
