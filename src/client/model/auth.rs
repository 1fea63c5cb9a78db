use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::user::UserDto};

#[cfg(feature = "web")]
use crate::client::api::auth::get_user;

#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    /// Record a session established by login or registration.
    pub fn set_user(&mut self, user: UserDto) {
        self.inner.set(AuthState::Authenticated(user));
    }

    #[cfg(feature = "web")]
    pub fn fetch_user(&mut self) {
        let future = use_resource(get_user);
        if let Some(result) = &*future.read_unchecked() {
            let mut ctx = self.inner.write();
            *ctx = match result {
                Ok(Some(user)) => AuthState::Authenticated(user.clone()),
                Ok(None) => AuthState::NotLoggedIn,
                Err(e) => AuthState::Error(e.clone()),
            };
        }
    }
}

#[derive(Clone)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    /// User is authenticated
    Authenticated(UserDto),
    /// No active session
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl From<Option<UserDto>> for AuthState {
    fn from(opt: Option<UserDto>) -> Self {
        match opt {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::NotLoggedIn,
        }
    }
}

impl AuthState {
    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Check if the user has admin permissions
    pub fn is_admin(&self) -> bool {
        match self {
            AuthState::Authenticated(user) => user.admin,
            _ => false,
        }
    }

    /// Get the authenticated user, if any
    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}
