use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request reached a protected endpoint without an authenticated
    /// session. Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Usually means the account was deleted while a session for it was still
    /// live. Results in a 401 Unauthorized response.
    #[error("User {0} in session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The reason is logged server-side
    /// but not returned to the client.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login failed due to an unknown email or a wrong password.
    ///
    /// The two cases are deliberately indistinguishable so that login attempts
    /// cannot be used to probe which emails have accounts. Results in a 401
    /// Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Registration attempted with an email that already has an account.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Email already registered")]
    EmailTaken,

    /// The one-time setup code was wrong, expired, or already used.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid setup code")]
    InvalidSetupCode,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes with
/// client-safe messages:
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `EmailTaken` / `InvalidSetupCode` → 400 Bad Request
///
/// Denied access attempts are logged with their reason for diagnostics while
/// keeping client-facing messages generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to access this resource.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::warn!("User {} denied access: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to access this resource.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password.".to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "An account with this email already exists.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidSetupCode => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Invalid or expired setup code.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
