use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::login;

#[component]
pub fn Login() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Handle redirect for authenticated users
    {
        let auth_context = use_context::<AuthContext>();
        use_effect(move || {
            let state = auth_context.read();
            if matches!(&*state, AuthState::Authenticated(_)) {
                nav.push(Route::Home {});
            }
        });
    }

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            Some(login(email(), password()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    {
        let mut auth_context = auth_context;
        use_effect(move || {
            if let Some(Some(result)) = future.read_unchecked().as_ref() {
                match result {
                    Ok(user) => {
                        auth_context.set_user(user.clone());
                        should_submit.set(false);
                        nav.push(Route::Home {});
                    }
                    Err(err) => {
                        tracing::error!("Login failed: {}", err);
                        error.set(Some(err.message.clone()));
                        should_submit.set(false);
                    }
                }
            }
        });
    }

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if email().trim().is_empty() || password().is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }

        error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let state = auth_context.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing => rsx! {
                LoadingPage {}
            },
            AuthState::Authenticated(_) => rsx! {
                // Render nothing while redirecting
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "flex flex-col items-center gap-2",
                        p {
                            class: "text-3xl font-semibold",
                            {SITE_NAME}
                        }
                        p {
                            class: "opacity-70",
                            "Sign in to manage your clinic"
                        }
                    }
                    form {
                        class: "flex flex-col gap-4 w-full max-w-sm",
                        onsubmit: on_submit,
                        div {
                            class: "form-control",
                            label {
                                class: "label",
                                span { class: "label-text", "Email" }
                            }
                            input {
                                r#type: "email",
                                class: "input input-bordered w-full",
                                value: "{email()}",
                                oninput: move |evt| email.set(evt.value()),
                                disabled: is_submitting,
                                required: true,
                            }
                        }
                        div {
                            class: "form-control",
                            label {
                                class: "label",
                                span { class: "label-text", "Password" }
                            }
                            input {
                                r#type: "password",
                                class: "input input-bordered w-full",
                                value: "{password()}",
                                oninput: move |evt| password.set(evt.value()),
                                disabled: is_submitting,
                                required: true,
                            }
                        }
                        if let Some(err) = error() {
                            div {
                                class: "alert alert-error",
                                span { "{err}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary w-full",
                            disabled: is_submitting,
                            if is_submitting {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Signing in..."
                            } else {
                                "Sign In"
                            }
                        }
                        Link {
                            to: Route::Register {},
                            class: "link link-hover text-sm text-center",
                            "No account yet? Register"
                        }
                    }
                }
            }
        }
    }
}
