mod modals;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, Page, Pagination, PaginationData},
        constant::SITE_NAME,
        model::error::ApiError,
        route::clinic::{component::format::format_brl, ClinicTab, ClinicTabs},
    },
    model::doctor::{DoctorListItemDto, PaginatedDoctorsDto},
};

use modals::{BusinessHoursModal, CreateDoctorModal, EditDoctorModal};

#[cfg(feature = "web")]
use crate::client::api::doctor::{delete_doctor, get_doctors};

#[component]
pub fn Doctors(clinic_id: i32) -> Element {
    rsx! {
        Title { "Doctors | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 {
                    class: "text-2xl font-bold mb-6",
                    "Doctors"
                }
                ClinicTabs { clinic_id, active_tab: ClinicTab::Doctors }
                DoctorsSection { clinic_id }
            }
        }
    }
}

#[component]
fn DoctorsSection(clinic_id: i32) -> Element {
    let mut doctors = use_signal(|| None::<PaginatedDoctorsDto>);
    let mut error = use_signal(|| None::<ApiError>);

    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut show_create_modal = use_signal(|| false);
    let mut show_edit_modal = use_signal(|| false);
    let mut doctor_to_edit = use_signal(|| None::<DoctorListItemDto>);

    let mut show_hours_modal = use_signal(|| false);
    let mut doctor_for_hours = use_signal(|| None::<(i32, String)>);

    let mut show_delete_modal = use_signal(|| false);
    let mut doctor_to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_doctors(clinic_id, page(), per_page()).await
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        doctors.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch doctors: {}", err);
                        doctors.set(None);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });

        // Handle deletion with use_resource
        let delete_future = use_resource(move || async move {
            if is_deleting() {
                if let Some((id, _)) = doctor_to_delete() {
                    Some(delete_doctor(clinic_id, id).await)
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
                        tracing::error!("Failed to delete doctor: {}", err);
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
                        "Clinic Doctors"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create_modal.set(true),
                        "Add Doctor"
                    }
                }

                // Content
                if let Some(data) = doctors() {
                    if data.doctors.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No doctors registered yet"
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Specialty" }
                                        th { "Appointment Price" }
                                        th {
                                            class: "text-right",
                                            "Actions"
                                        }
                                    }
                                }
                                tbody {
                                    for doctor in &data.doctors {
                                        {
                                            let doctor_id = doctor.id;
                                            let price = format_brl(doctor.appointment_price_cents as i64);
                                            let doctor_for_edit = doctor.clone();
                                            let doctor_name_for_hours = doctor.name.clone();
                                            let doctor_name_for_delete = doctor.name.clone();
                                            rsx! {
                                                tr {
                                                    td { "{doctor.name}" }
                                                    td { "{doctor.specialty}" }
                                                    td { "{price}" }
                                                    td {
                                                        div {
                                                            class: "flex gap-2 justify-end",
                                                            button {
                                                                class: "btn btn-sm",
                                                                onclick: move |_| {
                                                                    doctor_for_hours.set(Some((doctor_id, doctor_name_for_hours.clone())));
                                                                    show_hours_modal.set(true);
                                                                },
                                                                "Hours"
                                                            }
                                                            button {
                                                                class: "btn btn-sm btn-primary",
                                                                onclick: move |_| {
                                                                    doctor_to_edit.set(Some(doctor_for_edit.clone()));
                                                                    show_edit_modal.set(true);
                                                                },
                                                                "Edit"
                                                            }
                                                            button {
                                                                class: "btn btn-sm btn-error",
                                                                onclick: move |_| {
                                                                    doctor_to_delete.set(Some((doctor_id, doctor_name_for_delete.clone())));
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
                        span { "Error loading doctors: {err.message}" }
                    }
                } else {
                    div {
                        class: "text-center py-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }

                CreateDoctorModal {
                    clinic_id,
                    show: show_create_modal,
                    refetch_trigger
                }
                EditDoctorModal {
                    clinic_id,
                    show: show_edit_modal,
                    doctor_to_edit,
                    refetch_trigger
                }
                BusinessHoursModal {
                    clinic_id,
                    show: show_hours_modal,
                    doctor: doctor_for_hours,
                }

                // Delete Confirmation Modal
                ConfirmationModal {
                    show: show_delete_modal,
                    title: "Delete Doctor".to_string(),
                    message: rsx!(
                        if let Some((_, name)) = doctor_to_delete() {
                            p {
                                class: "py-4",
                                "Are you sure you want to delete "
                                span { class: "font-bold", "{name}" }
                                "? Their appointments will be deleted as well. This action cannot be undone."
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
