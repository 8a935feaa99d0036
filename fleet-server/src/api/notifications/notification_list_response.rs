use crate::NotificationDto;
use serde::Serialize;

/// List of notifications response
#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationDto>,
}
