mod members;
mod plans;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    route::clinic::{ClinicTab, ClinicTabs},
};

use members::MembersSection;
use plans::InsurancePlansSection;

#[cfg(feature = "web")]
use crate::client::api::clinic::{get_clinic, update_clinic};

#[component]
pub fn Settings(clinic_id: i32) -> Element {
    rsx! {
        Title { "Settings | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-4xl",
                h1 {
                    class: "text-2xl font-bold mb-6",
                    "Settings"
                }
                ClinicTabs { clinic_id, active_tab: ClinicTab::Settings }
                div {
                    class: "flex flex-col gap-6",
                    ClinicDetailsSection { clinic_id }
                    InsurancePlansSection { clinic_id }
                    MembersSection { clinic_id }
                }
            }
        }
    }
}

#[component]
fn ClinicDetailsSection(clinic_id: i32) -> Element {
    let mut name = use_signal(String::new);
    let mut loaded = use_signal(|| false);
    let mut should_submit = use_signal(|| false);
    let mut saved = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move { get_clinic(clinic_id).await });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(clinic) => {
                        // Only prefill once so typed input is not overwritten
                        if !loaded() {
                            name.set(clinic.name.clone());
                            loaded.set(true);
                        }
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch clinic: {}", err);
                        error.set(Some(err.message.clone()));
                    }
                }
            }
        });

        let submit_future = use_resource(move || async move {
            if should_submit() {
                Some(update_clinic(clinic_id, name()).await)
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = submit_future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        saved.set(true);
                        should_submit.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to update clinic: {}", err);
                        error.set(Some(err.message.clone()));
                        should_submit.set(false);
                    }
                }
            }
        });
    }

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
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title mb-4",
                    "Clinic Details"
                }
                if loaded() {
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
                                class: "input input-bordered w-full max-w-md",
                                value: "{name()}",
                                oninput: move |evt| {
                                    name.set(evt.value());
                                    saved.set(false);
                                },
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
                            class: "flex items-center gap-4",
                            button {
                                r#type: "submit",
                                class: "btn btn-primary w-fit",
                                disabled: is_submitting,
                                if is_submitting {
                                    span { class: "loading loading-spinner loading-sm mr-2" }
                                    "Saving..."
                                } else {
                                    "Save"
                                }
                            }
                            if saved() {
                                span {
                                    class: "text-success text-sm",
                                    "Saved"
                                }
                            }
                        }
                    }
                } else if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "Error loading clinic: {err}" }
                    }
                } else {
                    div {
                        class: "text-center py-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }
            }
        }
    )
}
