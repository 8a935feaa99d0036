//! Axum extractor resolving the bearer token to an active identity.

use crate::ApiError;
use crate::state::AppState;

use fleet_auth::parse_bearer;
use fleet_core::Identity;
use fleet_db::{IdentityRepository, TokenRepository};

use std::future::Future;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};

/// The identity that owns the presented token.
///
/// Rejects with 401 when the Authorization header is missing or malformed,
/// the key is unknown, or the identity has been deactivated.
pub struct CurrentIdentity(pub Identity);

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let key = parse_bearer(header)?;

            let tokens = TokenRepository::new(state.pool.clone());
            let token = tokens
                .find_by_key(key)
                .await?
                .ok_or_else(|| ApiError::unauthenticated("Unknown token"))?;

            let identities = IdentityRepository::new(state.pool.clone());
            let identity = identities
                .find_by_id(token.identity_id)
                .await?
                .ok_or_else(|| ApiError::unauthenticated("Token owner not found"))?;

            if !identity.can_authenticate() {
                return Err(ApiError::unauthenticated("Identity is inactive"));
            }

            Ok(CurrentIdentity(identity))
        }
    }
}
