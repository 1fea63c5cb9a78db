use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{client::component::Modal, model::patient::PatientDto};

#[cfg(feature = "web")]
use crate::client::api::patient::{create_patient, update_patient};

#[component]
pub fn CreatePatientModal(
    clinic_id: i32,
    show: Signal<bool>,
    refetch_trigger: Signal<u32>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut sex = use_signal(|| "female".to_string());
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Reset form when modal opens (clears data from previous use)
    use_effect(move || {
        if show() {
            name.set(String::new());
            email.set(String::new());
            phone_number.set(String::new());
            sex.set("female".to_string());
            should_submit.set(false);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            Some(create_patient(clinic_id, name(), email(), phone_number(), sex()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                    should_submit.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to create patient: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error.set(Some("Patient name is required".to_string()));
            return;
        }
        if email().trim().is_empty() && phone_number().trim().is_empty() {
            error.set(Some(
                "An email address or phone number is required".to_string(),
            ));
            return;
        }

        error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx!(
        Modal {
            show,
            title: "Add Patient".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                PatientFormFields {
                    name,
                    email,
                    phone_number,
                    sex,
                    is_submitting,
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
                            "Saving..."
                        } else {
                            "Save"
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn EditPatientModal(
    clinic_id: i32,
    show: Signal<bool>,
    patient_to_edit: Signal<Option<PatientDto>>,
    refetch_trigger: Signal<u32>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut sex = use_signal(|| "female".to_string());
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Prefill the form from the selected patient when the modal opens
    use_effect(move || {
        if show() {
            if let Some(patient) = patient_to_edit() {
                name.set(patient.name.clone());
                email.set(patient.email.clone());
                phone_number.set(patient.phone_number.clone());
                sex.set(patient.sex.clone());
            }
            should_submit.set(false);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            if let Some(patient) = patient_to_edit() {
                Some(
                    update_patient(
                        clinic_id,
                        patient.id,
                        name(),
                        email(),
                        phone_number(),
                        sex(),
                    )
                    .await,
                )
            } else {
                None
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                    should_submit.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to update patient: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error.set(Some("Patient name is required".to_string()));
            return;
        }
        if email().trim().is_empty() && phone_number().trim().is_empty() {
            error.set(Some(
                "An email address or phone number is required".to_string(),
            ));
            return;
        }

        error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx!(
        Modal {
            show,
            title: "Edit Patient".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                PatientFormFields {
                    name,
                    email,
                    phone_number,
                    sex,
                    is_submitting,
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
                            "Saving..."
                        } else {
                            "Save"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn PatientFormFields(
    name: Signal<String>,
    email: Signal<String>,
    phone_number: Signal<String>,
    sex: Signal<String>,
    is_submitting: bool,
) -> Element {
    rsx! {
        div {
            class: "form-control",
            label {
                class: "label",
                span { class: "label-text", "Full Name" }
            }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "e.g. Maria Souza",
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
                placeholder: "patient@example.com",
                value: "{email()}",
                oninput: move |evt| email.set(evt.value()),
                disabled: is_submitting,
            }
        }
        div {
            class: "form-control",
            label {
                class: "label",
                span { class: "label-text", "Phone Number" }
            }
            input {
                r#type: "tel",
                class: "input input-bordered w-full",
                placeholder: "+55 11 91234-5678",
                value: "{phone_number()}",
                oninput: move |evt| phone_number.set(evt.value()),
                disabled: is_submitting,
            }
        }
        div {
            class: "form-control",
            label {
                class: "label",
                span { class: "label-text", "Sex" }
            }
            select {
                class: "select select-bordered w-full",
                value: "{sex()}",
                onchange: move |evt| sex.set(evt.value()),
                disabled: is_submitting,
                option { value: "female", "Female" }
                option { value: "male", "Male" }
                option { value: "other", "Other" }
            }
        }
    }
}
