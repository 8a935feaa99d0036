//! Authorization header parsing.

use crate::{AuthError, Result};

use fleet_core::ErrorLocation;

use std::panic::Location;

/// Extract the token key from an `Authorization: Bearer <key>` header value.
#[track_caller]
pub fn parse_bearer(header: Option<&str>) -> Result<&str> {
    let location = ErrorLocation::from(Location::caller());

    let value = header.ok_or(AuthError::MissingHeader { location })?;

    let key = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidScheme { location })?
        .trim();

    if key.is_empty() {
        return Err(AuthError::InvalidScheme { location });
    }

    Ok(key)
}
