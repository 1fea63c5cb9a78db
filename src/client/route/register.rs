use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    model::auth::AuthContext,
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::register;

#[component]
pub fn Register() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut setup_code = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            let code = setup_code();
            let code = if code.trim().is_empty() {
                None
            } else {
                Some(code.trim().to_string())
            };
            Some(register(name(), email(), password(), code).await)
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
                        tracing::error!("Registration failed: {}", err);
                        error.set(Some(err.message.clone()));
                        should_submit.set(false);
                    }
                }
            }
        });
    }

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() || email().trim().is_empty() {
            error.set(Some("Name and email are required".to_string()));
            return;
        }

        if password().len() < 8 {
            error.set(Some("Password must be at least 8 characters".to_string()));
            return;
        }

        if password() != confirm_password() {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx! {
        Title { "Register | {SITE_NAME}" }
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
                    "Create an account"
                }
            }
            form {
                class: "flex flex-col gap-4 w-full max-w-sm",
                onsubmit: on_submit,
                div {
                    class: "form-control",
                    label {
                        class: "label",
                        span { class: "label-text", "Name" }
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        value: "{name()}",
                        oninput: move |evt| name.set(evt.value()),
                        disabled: is_submitting,
                        required: true,
                    }
                }
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
                        minlength: 8,
                    }
                }
                div {
                    class: "form-control",
                    label {
                        class: "label",
                        span { class: "label-text", "Confirm Password" }
                    }
                    input {
                        r#type: "password",
                        class: "input input-bordered w-full",
                        value: "{confirm_password()}",
                        oninput: move |evt| confirm_password.set(evt.value()),
                        disabled: is_submitting,
                        required: true,
                    }
                }
                div {
                    class: "form-control",
                    label {
                        class: "label",
                        span { class: "label-text", "Setup Code" }
                    }
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        value: "{setup_code()}",
                        oninput: move |evt| setup_code.set(evt.value()),
                        disabled: is_submitting,
                    }
                    label {
                        class: "label",
                        span {
                            class: "label-text-alt opacity-60",
                            "Only required for the first account, printed to the server log on startup"
                        }
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
                        "Creating account..."
                    } else {
                        "Register"
                    }
                }
                Link {
                    to: Route::Login {},
                    class: "link link-hover text-sm text-center",
                    "Already have an account? Sign in"
                }
            }
        }
    }
}
