use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Modal, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::clinic::ClinicDto,
};

#[cfg(feature = "web")]
use crate::client::api::clinic::{create_clinic, get_clinics};

#[component]
pub fn Home() -> Element {
    let mut clinics = use_signal(|| None::<Vec<ClinicDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let refetch_trigger = use_signal(|| 0u32);
    let mut show_create_modal = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_clinics().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    clinics.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch clinics: {}", err);
                    clinics.set(None);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "My Clinics | {SITE_NAME}" }
        if let Some(clinics_data) = clinics() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-4xl",
                    div {
                        class: "flex justify-between items-center mb-6",
                        h1 {
                            class: "text-2xl font-bold",
                            "My Clinics"
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_create_modal.set(true),
                            "New Clinic"
                        }
                    }
                    if clinics_data.is_empty() {
                        div {
                            class: "text-center py-16 opacity-50",
                            "You are not a member of any clinic yet. Create one to get started."
                        }
                    } else {
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                            for clinic in &clinics_data {
                                Link {
                                    to: Route::Dashboard { clinic_id: clinic.id },
                                    div {
                                        class: "card bg-base-200 hover:bg-base-300 transition-colors cursor-pointer",
                                        div {
                                            class: "card-body",
                                            h2 {
                                                class: "card-title",
                                                "{clinic.name}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            CreateClinicModal {
                show: show_create_modal,
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

#[component]
fn CreateClinicModal(mut show: Signal<bool>) -> Element {
    let nav = navigator();

    let mut name = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Reset form when modal opens (clears data from previous use)
    use_effect(move || {
        if show() {
            name.set(String::new());
            should_submit.set(false);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            Some(create_clinic(name()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(clinic) => {
                    show.set(false);
                    should_submit.set(false);
                    nav.push(Route::Dashboard {
                        clinic_id: clinic.id,
                    });
                }
                Err(err) => {
                    tracing::error!("Failed to create clinic: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error.set(Some("Clinic name is required".to_string()));
            return;
        }

        error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx!(
        Modal {
            show,
            title: "New Clinic".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                div {
                    class: "form-control",
                    label {
                        class: "label",
                        span { class: "label-text", "Clinic Name" }
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
                if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "{err}" }
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show.set(false),
                        disabled: is_submitting,
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting,
                        if is_submitting {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Creating..."
                        } else {
                            "Create"
                        }
                    }
                }
            }
        }
    )
}
