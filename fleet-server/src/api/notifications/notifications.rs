//! Notification REST API handlers.
//!
//! Delivery and storage of notifications are not built yet; the listing
//! endpoint only enforces authentication and returns an empty set.

use crate::{CurrentIdentity, NotificationListResponse};

use axum::Json;
use log::debug;

/// GET /api/v1/notifications
///
/// List notifications for the authenticated identity.
pub async fn list_notifications(
    CurrentIdentity(identity): CurrentIdentity,
) -> Json<NotificationListResponse> {
    debug!("Listing notifications for identity {}", identity.car_id);

    Json(NotificationListResponse {
        notifications: Vec::new(),
    })
}
