use dioxus::prelude::*;
use dioxus_logger::tracing;
use pulldown_cmark::{html, Options, Parser};

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage, Modal, Page},
        constant::SITE_NAME,
        model::error::ApiError,
        route::clinic::component::format::format_datetime_local,
        router::Route,
    },
    model::{medical_record::MedicalRecordDto, patient::PatientDto},
};

#[cfg(feature = "web")]
use crate::client::api::{
    medical_record::{
        create_medical_record, delete_medical_record, get_medical_records, update_medical_record,
    },
    patient::get_patient_by_id,
};

#[component]
pub fn PatientDetail(clinic_id: i32, patient_id: i32) -> Element {
    let mut patient = use_signal(|| None::<PatientDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            get_patient_by_id(clinic_id, patient_id).await
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        patient.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch patient: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    rsx! {
        Title { "Patient | {SITE_NAME}" }
        if let Some(patient) = patient() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-4xl",
                    div {
                        class: "breadcrumbs text-sm mb-4",
                        ul {
                            li {
                                Link {
                                    to: Route::Patients { clinic_id },
                                    "Patients"
                                }
                            }
                            li { "{patient.name}" }
                        }
                    }
                    PatientInfoCard { patient: patient.clone() }
                    MedicalHistorySection { clinic_id, patient_id }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn PatientInfoCard(patient: PatientDto) -> Element {
    let registered = format_datetime_local(patient.created_at);

    rsx! {
        div {
            class: "card bg-base-200 mb-6",
            div {
                class: "card-body",
                h1 {
                    class: "card-title text-2xl",
                    "{patient.name}"
                }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-x-8 gap-y-1 mt-2",
                    div {
                        span { class: "opacity-50 mr-2", "Email:" }
                        "{patient.email}"
                    }
                    div {
                        span { class: "opacity-50 mr-2", "Phone:" }
                        "{patient.phone_number}"
                    }
                    div {
                        span { class: "opacity-50 mr-2", "Sex:" }
                        "{patient.sex}"
                    }
                    div {
                        span { class: "opacity-50 mr-2", "Registered:" }
                        "{registered}"
                    }
                }
            }
        }
    }
}

#[component]
fn MedicalHistorySection(clinic_id: i32, patient_id: i32) -> Element {
    let mut records = use_signal(|| None::<Vec<MedicalRecordDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut show_add_modal = use_signal(|| false);
    let mut show_edit_modal = use_signal(|| false);
    let mut record_to_edit = use_signal(|| None::<MedicalRecordDto>);

    let mut show_delete_modal = use_signal(|| false);
    let mut record_to_delete = use_signal(|| None::<i32>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_medical_records(clinic_id, patient_id).await
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        records.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch medical records: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });

        // Handle deletion with use_resource
        let delete_future = use_resource(move || async move {
            if is_deleting() {
                if let Some(record_id) = record_to_delete() {
                    Some(delete_medical_record(clinic_id, record_id).await)
                } else {
                    None
                }
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        show_delete_modal.set(false);
                        is_deleting.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete medical record: {}", err);
                        is_deleting.set(false);
                    }
                }
            }
        });
    }

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-center mb-4",
                    h2 {
                        class: "card-title",
                        "Medical History"
                    }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| show_add_modal.set(true),
                        "Add Record"
                    }
                }

                if let Some(records) = records() {
                    if records.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No medical records yet"
                        }
                    } else {
                        div {
                            class: "flex flex-col gap-4",
                            for record in records {
                                MedicalRecordCard {
                                    record,
                                    on_edit: move |record: MedicalRecordDto| {
                                        record_to_edit.set(Some(record));
                                        show_edit_modal.set(true);
                                    },
                                    on_delete: move |record_id: i32| {
                                        record_to_delete.set(Some(record_id));
                                        show_delete_modal.set(true);
                                    },
                                }
                            }
                        }
                    }
                } else if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "Error loading medical records: {err.message}" }
                    }
                } else {
                    div {
                        class: "text-center py-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }

                AddRecordModal {
                    clinic_id,
                    patient_id,
                    show: show_add_modal,
                    refetch_trigger
                }
                EditRecordModal {
                    clinic_id,
                    show: show_edit_modal,
                    record_to_edit,
                    refetch_trigger
                }

                ConfirmationModal {
                    show: show_delete_modal,
                    title: "Delete Record".to_string(),
                    message: rsx!(
                        p {
                            class: "py-4",
                            "Are you sure you want to delete this medical record? This action cannot be undone."
                        }
                    ),
                    confirm_text: "Delete".to_string(),
                    confirm_class: "btn-error".to_string(),
                    is_processing: is_deleting(),
                    processing_text: "Deleting...".to_string(),
                    on_confirm: move |_| {
                        is_deleting.set(true);
                    },
                }
            }
        }
    }
}

#[component]
fn MedicalRecordCard(
    record: MedicalRecordDto,
    on_edit: EventHandler<MedicalRecordDto>,
    on_delete: EventHandler<i32>,
) -> Element {
    let created = format_datetime_local(record.created_at);
    let edited = if record.updated_at > record.created_at {
        Some(format_datetime_local(record.updated_at))
    } else {
        None
    };

    // Render the note's markdown content as HTML
    let options = Options::all();
    let parser = Parser::new_ext(&record.content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let record_id = record.id;
    let record_for_edit = record.clone();

    rsx! {
        div {
            class: "card bg-base-100",
            div {
                class: "card-body p-4",
                div {
                    class: "flex flex-wrap justify-between items-center gap-2",
                    div {
                        class: "flex items-center gap-2",
                        span { class: "text-sm opacity-50", "{created}" }
                        if let Some(appointment_id) = record.appointment_id {
                            span {
                                class: "badge badge-ghost badge-sm",
                                "Appointment #{appointment_id}"
                            }
                        }
                        if let Some(edited) = edited {
                            span {
                                class: "text-xs opacity-50 italic",
                                "edited {edited}"
                            }
                        }
                    }
                    div {
                        class: "flex gap-2",
                        button {
                            class: "btn btn-xs",
                            onclick: move |_| on_edit.call(record_for_edit.clone()),
                            "Edit"
                        }
                        button {
                            class: "btn btn-xs btn-error",
                            onclick: move |_| on_delete.call(record_id),
                            "Delete"
                        }
                    }
                }
                div {
                    class: "prose prose-sm max-w-none mt-2",
                    dangerous_inner_html: "{html_output}"
                }
            }
        }
    }
}

#[component]
fn AddRecordModal(
    clinic_id: i32,
    patient_id: i32,
    show: Signal<bool>,
    refetch_trigger: Signal<u32>,
) -> Element {
    let mut content = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Reset form when modal opens (clears data from previous use)
    use_effect(move || {
        if show() {
            content.set(String::new());
            should_submit.set(false);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            Some(create_medical_record(clinic_id, patient_id, None, content()).await)
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
                    tracing::error!("Failed to create medical record: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if content().trim().is_empty() {
            error.set(Some("Record content is required".to_string()));
            return;
        }

        error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx!(
        Modal {
            show,
            title: "Add Medical Record".to_string(),
            prevent_close: is_submitting,
            class: "max-w-2xl",
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                RecordContentField { content, is_submitting }
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
fn EditRecordModal(
    clinic_id: i32,
    show: Signal<bool>,
    record_to_edit: Signal<Option<MedicalRecordDto>>,
    refetch_trigger: Signal<u32>,
) -> Element {
    let mut content = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Prefill with the selected record's content when the modal opens
    use_effect(move || {
        if show() {
            if let Some(record) = record_to_edit() {
                content.set(record.content.clone());
            }
            should_submit.set(false);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            if let Some(record) = record_to_edit() {
                Some(update_medical_record(clinic_id, record.id, content()).await)
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
                    tracing::error!("Failed to update medical record: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if content().trim().is_empty() {
            error.set(Some("Record content is required".to_string()));
            return;
        }

        error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx!(
        Modal {
            show,
            title: "Edit Medical Record".to_string(),
            prevent_close: is_submitting,
            class: "max-w-2xl",
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                RecordContentField { content, is_submitting }
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
fn RecordContentField(content: Signal<String>, is_submitting: bool) -> Element {
    rsx! {
        div {
            class: "form-control w-full",
            label {
                class: "label",
                span { class: "label-text", "Notes" }
                span { class: "label-text-alt opacity-50", "Markdown supported" }
            }
            textarea {
                class: "textarea textarea-bordered w-full h-48 font-mono",
                placeholder: "Symptoms, diagnosis, prescriptions...",
                value: "{content()}",
                oninput: move |evt| content.set(evt.value()),
                disabled: is_submitting,
                required: true,
            }
        }
    }
}
