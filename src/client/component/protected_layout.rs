use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Admin,
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Admin] }
    }
}

fn check_permissions(state: &AuthState, required_permissions: &[Permission]) -> bool {
    let user = match state.user() {
        Some(u) => u,
        None => return false,
    };

    required_permissions.iter().all(|perm| match perm {
        Permission::LoggedIn => true,
        Permission::Admin => user.admin,
    })
}

#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let state = auth_context.read();
    let fetch_completed = !matches!(&*state, AuthState::Initializing);
    let user_logged_in = state.is_authenticated();
    let has_required_permissions = check_permissions(&state, &permissions);

    // Redirect based on authentication and permissions
    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        // Show loading spinner while the session is being checked
        if !fetch_completed {
            LoadingPage {  }
        } else if user_logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "You don't have permission to view this page" }
        }
        // Render page if the session is checked, logged in, and has required permissions
        else if user_logged_in && has_required_permissions {
            Outlet::<Route> {}
        }
        // If checked but not logged in, render nothing while redirecting
        // via the use_effect
    }
}
