mod auth_token;
mod identity;
