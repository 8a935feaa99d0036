#![allow(dead_code)]

//! Test infrastructure for fleet-server API tests

use fleet_server::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/fleet-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Default registration payload
pub fn user_payload() -> serde_json::Value {
    json!({
        "car_id": "123-456-789",
        "email": "test@email.com",
        "phone_number": "0544444444",
        "password": "password"
    })
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a request carrying a bearer token
pub fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Build a JSON request carrying a bearer token
pub fn bearer_json_request(
    method: &str,
    uri: &str,
    token: &str,
    body: &serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a JSON POST through the router
pub async fn post_json(app: &Router, uri: &str, body: &serde_json::Value) -> Response {
    app.clone()
        .oneshot(json_request("POST", uri, body))
        .await
        .unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Register an identity and assert success
pub async fn register_user(app: &Router, payload: &serde_json::Value) {
    let response = post_json(app, "/api/v1/users/create", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Exchange credentials for a token, asserting success
pub async fn obtain_token(app: &Router, car_id: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/v1/users/token",
        &json!({"car_id": car_id, "password": password}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["token"]
        .as_str()
        .expect("token missing from response")
        .to_string()
}

/// Flip an identity to inactive directly in the store
pub async fn deactivate_identity(pool: &SqlitePool, car_id: &str) {
    sqlx::query("UPDATE identities SET is_active = 0 WHERE car_id = ?")
        .bind(car_id)
        .execute(pool)
        .await
        .expect("Failed to deactivate identity");
}
