//! Integration tests for the notifications API stub
mod common;

use crate::common::{
    bearer_request, body_json, create_test_app_state, obtain_token, register_user, user_payload,
};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use fleet_server::routes::build_router;

#[tokio::test]
async fn test_login_required() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/notifications")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_getting_notifications() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    register_user(&app, &user_payload()).await;
    let token = obtain_token(&app, "123-456-789", "password").await;

    let response = app
        .clone()
        .oneshot(bearer_request("GET", "/api/v1/notifications", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let notifications = json["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 0);
}
