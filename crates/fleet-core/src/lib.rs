pub mod error;
pub mod models;
pub mod validation;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use models::auth_token::AuthToken;
pub use models::identity::Identity;

#[cfg(test)]
mod tests;
