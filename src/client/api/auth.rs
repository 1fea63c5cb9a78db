use crate::{
    client::model::error::ApiError,
    model::user::{LoginDto, RegisterDto, UserDto},
};

use super::helper::{get, parse_response, post, send_request, serialize_json};

/// Get the currently logged in user, or None when there is no session
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_response(response).await
}

/// Register a new account and start a session
pub async fn register(
    name: String,
    email: String,
    password: String,
    setup_code: Option<String>,
) -> Result<UserDto, ApiError> {
    let payload = RegisterDto {
        name,
        email,
        password,
        setup_code,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/auth/register").body(body)).await?;
    parse_response(response).await
}

/// Log in with email and password
pub async fn login(email: String, password: String) -> Result<UserDto, ApiError> {
    let payload = LoginDto { email, password };
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}
