pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_identity::CurrentIdentity,
    notifications::{
        notification_dto::NotificationDto,
        notification_list_response::NotificationListResponse,
        notifications::list_notifications,
    },
    users::{
        create_user_request::CreateUserRequest,
        token_request::TokenRequest,
        token_response::TokenResponse,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        users::{create_user, get_me, issue_token, update_me},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
