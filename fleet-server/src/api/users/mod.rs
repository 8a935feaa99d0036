pub mod create_user_request;
pub mod token_request;
pub mod token_response;
pub mod update_user_request;
pub mod user_dto;
pub mod users;
