pub mod error_location;

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing required field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid email address: {value} {location}")]
    InvalidEmail {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid phone number: {value} {location}")]
    InvalidPhone {
        value: String,
        location: ErrorLocation,
    },

    #[error("Password must be at least {min} characters {location}")]
    WeakPassword { min: usize, location: ErrorLocation },
}

impl CoreError {
    /// The identity field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } => field,
            Self::InvalidEmail { .. } => "email",
            Self::InvalidPhone { .. } => "phone_number",
            Self::WeakPassword { .. } => "password",
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
