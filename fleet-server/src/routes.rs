use crate::api::notifications::notifications::list_notifications;
use crate::api::users::users::{create_user, get_me, issue_token, update_me};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // User endpoints
        .route("/api/v1/users/create", post(create_user))
        .route("/api/v1/users/token", post(issue_token))
        // POST is deliberately not routed here; axum answers it with 405
        .route("/api/v1/users/me", get(get_me).patch(update_me))
        // Notifications (listing only)
        .route("/api/v1/notifications", get(list_notifications))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
