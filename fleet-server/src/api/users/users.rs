//! User REST API handlers: registration, token issuance, and profile access.

use crate::{
    ApiError, ApiResult, CreateUserRequest, CurrentIdentity, TokenRequest, TokenResponse,
    UpdateUserRequest, UserDto,
};
use crate::state::AppState;

use fleet_auth::{generate_token_key, hash_password, verify_password};
use fleet_core::{Identity, validation};
use fleet_db::{IdentityRepository, TokenRepository};

use axum::{Json, extract::State, http::StatusCode};
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/users/create
///
/// Register a new identity. The password is hashed before the insert and the
/// uniqueness of car_id/email/phone_number is left to the database, so a
/// racing duplicate registration fails cleanly for exactly one caller.
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    validation::require("car_id", &request.car_id)?;
    validation::require("email", &request.email)?;
    validation::require("phone_number", &request.phone_number)?;

    validation::validate_email(&request.email)?;
    let email = validation::normalize_email(&request.email);
    let phone_number = validation::normalize_phone_number(&request.phone_number)?;
    validation::validate_password(&request.password)?;

    let password_hash = hash_password(&request.password)?;
    let identity = Identity::new(request.car_id, email, phone_number, password_hash);

    let repo = IdentityRepository::new(state.pool.clone());
    repo.create(&identity).await?;

    info!("Registered identity {}", identity.car_id);

    Ok((StatusCode::CREATED, Json(UserDto::from(identity))))
}

/// POST /api/v1/users/token
///
/// Exchange car id + password for the identity's bearer token. Every failure
/// mode (empty field, unknown car id, inactive identity, wrong password)
/// collapses into the same opaque rejection.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    if request.car_id.is_empty() || request.password.is_empty() {
        return Err(ApiError::authentication_failed());
    }

    let identities = IdentityRepository::new(state.pool.clone());
    let identity = identities
        .find_by_car_id(&request.car_id)
        .await?
        .ok_or_else(ApiError::authentication_failed)?;

    if !identity.can_authenticate() {
        debug!("Token request for inactive identity {}", identity.car_id);
        return Err(ApiError::authentication_failed());
    }

    if !verify_password(&request.password, &identity.password_hash)? {
        return Err(ApiError::authentication_failed());
    }

    let tokens = TokenRepository::new(state.pool.clone());
    let token = tokens
        .get_or_create(identity.id, &generate_token_key())
        .await?;

    info!("Issued token for identity {}", identity.car_id);

    Ok(Json(TokenResponse { token: token.key }))
}

/// GET /api/v1/users/me
///
/// Profile projection of the authenticated identity.
pub async fn get_me(CurrentIdentity(identity): CurrentIdentity) -> Json<UserDto> {
    Json(UserDto::from(identity))
}

/// PATCH /api/v1/users/me
///
/// Partial profile update. Changed unique fields go through the same
/// validation and uniqueness rules as registration; a present, non-empty
/// password is re-hashed, an absent or empty one leaves the hash untouched.
pub async fn update_me(
    State(state): State<AppState>,
    CurrentIdentity(mut identity): CurrentIdentity,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserDto>> {
    if let Some(car_id) = request.car_id {
        validation::require("car_id", &car_id)?;
        identity.car_id = car_id;
    }

    if let Some(email) = request.email {
        validation::require("email", &email)?;
        validation::validate_email(&email)?;
        identity.email = validation::normalize_email(&email);
    }

    if let Some(phone_number) = request.phone_number {
        validation::require("phone_number", &phone_number)?;
        identity.phone_number = validation::normalize_phone_number(&phone_number)?;
    }

    if let Some(password) = request.password {
        // An empty password means "no change"; never hash an empty string
        if !password.is_empty() {
            validation::validate_password(&password)?;
            identity.password_hash = hash_password(&password)?;
        }
    }

    identity.updated_at = chrono::Utc::now();

    let repo = IdentityRepository::new(state.pool.clone());
    repo.update(&identity).await?;

    debug!("Updated profile for identity {}", identity.car_id);

    Ok(Json(UserDto::from(identity)))
}
