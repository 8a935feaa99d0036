use serde::Serialize;

/// Notification DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct NotificationDto {
    pub id: String,
    pub message: String,
    pub created_at: i64,
}
