mod form_fields;
mod modals;
mod payment;
mod table;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        model::error::ApiError,
        route::clinic::{ClinicTab, ClinicTabs},
    },
    model::{appointment::PaginatedAppointmentsDto, doctor::DoctorListItemDto},
};

use modals::{BookAppointmentModal, EditAppointmentModal};
use payment::PaymentModal;
use table::{AppointmentsPagination, AppointmentsTable};

#[cfg(feature = "web")]
use crate::client::api::{appointment::get_appointments, doctor::get_doctors};

#[component]
pub fn Appointments(clinic_id: i32) -> Element {
    rsx! {
        Title { "Appointments | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 {
                    class: "text-2xl font-bold mb-6",
                    "Appointments"
                }
                ClinicTabs { clinic_id, active_tab: ClinicTab::Appointments }
                AppointmentsSection { clinic_id }
            }
        }
    }
}

#[component]
fn AppointmentsSection(clinic_id: i32) -> Element {
    let mut appointments = use_signal(|| None::<PaginatedAppointmentsDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut doctors = use_signal(Vec::<DoctorListItemDto>::new);

    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);
    let mut filter_doctor = use_signal(|| None::<i32>);
    let mut filter_from = use_signal(String::new);
    let mut filter_to = use_signal(String::new);
    let refetch_trigger = use_signal(|| 0u32);

    let mut show_book_modal = use_signal(|| false);
    let show_edit_modal = use_signal(|| false);
    let appointment_to_edit = use_signal(|| None::<i32>);
    let show_payment_modal = use_signal(|| false);
    let payment_appointment = use_signal(|| None::<i32>);

    // Doctors populate the filter dropdown
    #[cfg(feature = "web")]
    {
        let doctors_future =
            use_resource(move || async move { get_doctors(clinic_id, 0, 100).await });
        use_effect(move || {
            if let Some(Ok(result)) = doctors_future.read_unchecked().as_ref() {
                doctors.set(result.doctors.clone());
            }
        });

        // Re-runs when the page, filters or refetch trigger change
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            let from = Some(filter_from()).filter(|v| !v.is_empty());
            let to = Some(filter_to()).filter(|v| !v.is_empty());
            get_appointments(clinic_id, page(), per_page(), filter_doctor(), from, to).await
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        appointments.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch appointments: {}", err);
                        appointments.set(None);
                        error.set(Some(err.clone()));
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
                        "Schedule"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_book_modal.set(true),
                        "Book Appointment"
                    }
                }

                // Filters
                div {
                    class: "flex flex-col sm:flex-row gap-3 mb-4",
                    select {
                        class: "select select-bordered select-sm",
                        value: filter_doctor().map(|id| id.to_string()).unwrap_or_default(),
                        onchange: move |evt| {
                            filter_doctor.set(evt.value().parse().ok());
                        },
                        option { value: "", selected: filter_doctor().is_none(), "All doctors" }
                        for doctor in doctors() {
                            option {
                                value: "{doctor.id}",
                                selected: filter_doctor() == Some(doctor.id),
                                "{doctor.name}"
                            }
                        }
                    }
                    input {
                        r#type: "date",
                        class: "input input-bordered input-sm",
                        value: "{filter_from()}",
                        onchange: move |evt| filter_from.set(evt.value()),
                    }
                    input {
                        r#type: "date",
                        class: "input input-bordered input-sm",
                        value: "{filter_to()}",
                        onchange: move |evt| filter_to.set(evt.value()),
                    }
                }

                // Content
                if let Some(data) = appointments() {
                    if data.appointments.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No appointments found"
                        }
                    } else {
                        AppointmentsTable {
                            clinic_id,
                            data: data.clone(),
                            refetch_trigger,
                            show_edit_modal,
                            appointment_to_edit,
                            show_payment_modal,
                            payment_appointment
                        }
                        AppointmentsPagination {
                            page,
                            per_page,
                            pagination_data: data.clone()
                        }
                    }
                } else if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "Error loading appointments: {err.message}" }
                    }
                } else {
                    div {
                        class: "text-center py-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }

                BookAppointmentModal {
                    clinic_id,
                    show: show_book_modal,
                    refetch_trigger
                }
                EditAppointmentModal {
                    clinic_id,
                    show: show_edit_modal,
                    appointment_to_edit,
                    refetch_trigger
                }
                PaymentModal {
                    clinic_id,
                    show: show_payment_modal,
                    appointment: payment_appointment,
                    refetch_trigger
                }
            }
        }
    )
}
