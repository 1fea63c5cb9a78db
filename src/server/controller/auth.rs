use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        data::user::UserRepository, error::AppError, middleware::session::AuthSession,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user account.
///
/// Creates a user from name, email and password, then logs the new user in by
/// storing their ID in the session. When no users exist yet, supplying the
/// one-time setup code printed to the server log grants the admin flag.
///
/// # Access Control
/// - Public endpoint, no authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to establish after successful registration
/// - `payload` - Registration data (name, email, password, optional setup code)
///
/// # Returns
/// - `201 Created` - Successfully registered, session established
/// - `400 Bad Request` - Invalid name, email, password, or setup code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.setup_code_service);

    let user = auth_service.register(payload).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// Verifies the credentials against the stored argon2 hash and stores the
/// user's ID in the session on success. Unknown emails and wrong passwords
/// produce the same response so the endpoint cannot be used to probe which
/// emails have accounts.
///
/// # Access Control
/// - Public endpoint, no authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to establish after successful login
/// - `payload` - Login credentials (email and password)
///
/// # Returns
/// - `200 OK` - Successfully logged in, session established
/// - `401 Unauthorized` - Credentials did not match
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.setup_code_service);

    let user = auth_service.login(payload).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out the current user.
///
/// Clears all session data. Safe to call without an active session.
///
/// # Access Control
/// - Public endpoint, no authentication required
///
/// # Arguments
/// - `session` - Session to clear
///
/// # Returns
/// - `200 OK` - Session cleared
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// Get the currently logged-in user.
///
/// Returns the session user, or `null` when no user is logged in or the
/// session references an account that no longer exists. The client uses this
/// on startup to restore authentication state.
///
/// # Access Control
/// - Public endpoint, no authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to read the user from
///
/// # Returns
/// - `200 OK` - The session user, or `null` when not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The session user, or null when not logged in", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Ok((StatusCode::OK, Json(None::<UserDto>)));
    };

    let Some(user) = UserRepository::new(&state.db).get_by_id(user_id).await? else {
        return Ok((StatusCode::OK, Json(None::<UserDto>)));
    };

    Ok((StatusCode::OK, Json(Some(user.into_dto()))))
}
