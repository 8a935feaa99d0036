use crate::ApiError;

use fleet_core::{CoreError, ErrorLocation};
use fleet_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Field 'car_id' is required".into(),
        field: Some("car_id".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "car_id");
}

#[tokio::test]
async fn test_conflict_error_returns_400_with_field() {
    let error = ApiError::Conflict {
        field: "email".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_authentication_failed_is_opaque_400() {
    let response = ApiError::authentication_failed().into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "AUTHENTICATION_FAILED");
    // No field hint that could leak which credential was wrong
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_unauthenticated_returns_401() {
    let response = ApiError::unauthenticated("Unknown token").into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_core_errors_map_to_field_level_validation() {
    let missing = CoreError::MissingField {
        field: "car_id",
        location: ErrorLocation::from(Location::caller()),
    };

    match ApiError::from(missing) {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("car_id")),
        other => panic!("expected Validation, got {:?}", other),
    }

    let weak = CoreError::WeakPassword {
        min: 5,
        location: ErrorLocation::from(Location::caller()),
    };

    match ApiError::from(weak) {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("password"));
            assert!(message.contains('5'));
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn test_unique_violation_maps_to_conflict() {
    let db_error = DbError::UniqueViolation {
        column: "phone_number".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    match ApiError::from(db_error) {
        ApiError::Conflict { field, .. } => assert_eq!(field, "phone_number"),
        other => panic!("expected Conflict, got {:?}", other),
    }
}
