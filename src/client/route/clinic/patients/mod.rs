mod detail;
mod modals;

pub use detail::PatientDetail;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, Page, Pagination, PaginationData},
        constant::SITE_NAME,
        model::error::ApiError,
        route::clinic::{ClinicTab, ClinicTabs},
        router::Route,
    },
    model::patient::{PaginatedPatientsDto, PatientDto},
};

use modals::{CreatePatientModal, EditPatientModal};

#[cfg(feature = "web")]
use crate::client::api::patient::{delete_patient, get_patients};

#[component]
pub fn Patients(clinic_id: i32) -> Element {
    rsx! {
        Title { "Patients | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 {
                    class: "text-2xl font-bold mb-6",
                    "Patients"
                }
                ClinicTabs { clinic_id, active_tab: ClinicTab::Patients }
                PatientsSection { clinic_id }
            }
        }
    }
}

#[component]
fn PatientsSection(clinic_id: i32) -> Element {
    let mut patients = use_signal(|| None::<PaginatedPatientsDto>);
    let mut error = use_signal(|| None::<ApiError>);

    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let mut search = use_signal(String::new);
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut show_create_modal = use_signal(|| false);
    let mut show_edit_modal = use_signal(|| false);
    let mut patient_to_edit = use_signal(|| None::<PatientDto>);

    let mut show_delete_modal = use_signal(|| false);
    let mut patient_to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        // Re-runs when the page, search or refetch trigger change
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            let query = Some(search()).filter(|v| !v.trim().is_empty());
            get_patients(clinic_id, page(), per_page(), query).await
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        patients.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch patients: {}", err);
                        patients.set(None);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });

        // Handle deletion with use_resource
        let delete_future = use_resource(move || async move {
            if is_deleting() {
                if let Some((id, _)) = patient_to_delete() {
                    Some(delete_patient(clinic_id, id).await)
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
                        tracing::error!("Failed to delete patient: {}", err);
                        is_deleting.set(false);
                    }
                }
            }
        });
    }

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                div {
                    class: "flex flex-col sm:flex-row justify-between sm:items-center gap-4 mb-4",
                    h2 {
                        class: "card-title",
                        "Registered Patients"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create_modal.set(true),
                        "Add Patient"
                    }
                }

                input {
                    r#type: "text",
                    class: "input input-bordered w-full max-w-sm mb-4",
                    placeholder: "Search by name...",
                    value: "{search()}",
                    oninput: move |evt| search.set(evt.value()),
                }

                // Content
                if let Some(data) = patients() {
                    if data.patients.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            if search().trim().is_empty() {
                                "No patients registered yet"
                            } else {
                                "No patients match your search"
                            }
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Phone" }
                                        th { "Sex" }
                                        th {
                                            class: "text-right",
                                            "Actions"
                                        }
                                    }
                                }
                                tbody {
                                    for patient in &data.patients {
                                        {
                                            let patient_id = patient.id;
                                            let patient_for_edit = patient.clone();
                                            let patient_name_for_delete = patient.name.clone();
                                            rsx! {
                                                tr {
                                                    td { "{patient.name}" }
                                                    td { "{patient.email}" }
                                                    td { "{patient.phone_number}" }
                                                    td { "{patient.sex}" }
                                                    td {
                                                        div {
                                                            class: "flex gap-2 justify-end",
                                                            Link {
                                                                to: Route::PatientDetail { clinic_id, patient_id },
                                                                class: "btn btn-sm",
                                                                "History"
                                                            }
                                                            button {
                                                                class: "btn btn-sm btn-primary",
                                                                onclick: move |_| {
                                                                    patient_to_edit.set(Some(patient_for_edit.clone()));
                                                                    show_edit_modal.set(true);
                                                                },
                                                                "Edit"
                                                            }
                                                            button {
                                                                class: "btn btn-sm btn-error",
                                                                onclick: move |_| {
                                                                    patient_to_delete.set(Some((patient_id, patient_name_for_delete.clone())));
                                                                    show_delete_modal.set(true);
                                                                },
                                                                "Delete"
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        Pagination {
                            page,
                            per_page,
                            data: PaginationData {
                                page: data.page,
                                per_page: data.per_page,
                                total: data.total,
                                total_pages: data.total_pages,
                            },
                            on_page_change: move |_| {},
                            on_per_page_change: move |_| {},
                        }
                    }
                } else if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "Error loading patients: {err.message}" }
                    }
                } else {
                    div {
                        class: "text-center py-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }

                CreatePatientModal {
                    clinic_id,
                    show: show_create_modal,
                    refetch_trigger
                }
                EditPatientModal {
                    clinic_id,
                    show: show_edit_modal,
                    patient_to_edit,
                    refetch_trigger
                }

                // Delete Confirmation Modal
                ConfirmationModal {
                    show: show_delete_modal,
                    title: "Delete Patient".to_string(),
                    message: rsx!(
                        if let Some((_, name)) = patient_to_delete() {
                            p {
                                class: "py-4",
                                "Are you sure you want to delete "
                                span { class: "font-bold", "{name}" }
                                "? Their appointments and medical records will be deleted as well. This action cannot be undone."
                            }
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
    )
}
