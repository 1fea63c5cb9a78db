use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, Pagination, PaginationData},
        route::clinic::{
            component::format::{format_brl, format_datetime_local},
            dashboard::PaymentStatusBadge,
        },
    },
    model::appointment::PaginatedAppointmentsDto,
};

#[cfg(feature = "web")]
use crate::client::api::appointment::delete_appointment;

#[component]
pub fn AppointmentsTable(
    clinic_id: i32,
    data: PaginatedAppointmentsDto,
    mut refetch_trigger: Signal<u32>,
    mut show_edit_modal: Signal<bool>,
    mut appointment_to_edit: Signal<Option<i32>>,
    mut show_payment_modal: Signal<bool>,
    mut payment_appointment: Signal<Option<i32>>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut appointment_to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);

    // Handle cancellation with use_resource
    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            if let Some((id, _)) = appointment_to_delete() {
                Some(delete_appointment(clinic_id, id).await)
            } else {
                None
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    // Trigger refetch
                    refetch_trigger.set(refetch_trigger() + 1);
                    // Close modal (data persists for smooth animation)
                    show_delete_modal.set(false);
                    is_deleting.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to cancel appointment: {}", err);
                    is_deleting.set(false);
                }
            }
        }
    });

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Date" }
                        th { "Patient" }
                        th { "Doctor" }
                        th { class: "text-right", "Price" }
                        th { class: "text-center", "Payment" }
                        th {
                            class: "text-right",
                            "Actions"
                        }
                    }
                }
                tbody {
                    for appointment in &data.appointments {
                        {
                            let appointment_id = appointment.id;
                            let patient_name_for_delete = appointment.patient_name.clone();
                            rsx! {
                                tr {
                                    td { "{format_datetime_local(appointment.date)}" }
                                    td { "{appointment.patient_name}" }
                                    td { "{appointment.doctor_name}" }
                                    td { class: "text-right", "{format_brl(appointment.price_cents as i64)}" }
                                    td {
                                        class: "text-center",
                                        PaymentStatusBadge { status: appointment.payment_status.clone() }
                                    }
                                    td {
                                        div {
                                            class: "flex gap-2 justify-end",
                                            button {
                                                class: "btn btn-sm",
                                                onclick: move |_| {
                                                    payment_appointment.set(Some(appointment_id));
                                                    show_payment_modal.set(true);
                                                },
                                                "Payment"
                                            }
                                            button {
                                                class: "btn btn-sm btn-primary",
                                                onclick: move |_| {
                                                    appointment_to_edit.set(Some(appointment_id));
                                                    show_edit_modal.set(true);
                                                },
                                                "Edit"
                                            }
                                            button {
                                                class: "btn btn-sm btn-error",
                                                onclick: move |_| {
                                                    appointment_to_delete.set(Some((appointment_id, patient_name_for_delete.clone())));
                                                    show_delete_modal.set(true);
                                                },
                                                "Cancel"
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

        // Cancel Confirmation Modal
        ConfirmationModal {
            show: show_delete_modal,
            title: "Cancel Appointment".to_string(),
            message: rsx!(
                if let Some((_, name)) = appointment_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to cancel the appointment for "
                        span { class: "font-bold", "{name}" }
                        "? The patient will be notified by email."
                    }
                }
            ),
            confirm_text: "Cancel Appointment".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: is_deleting(),
            processing_text: "Cancelling...".to_string(),
            on_confirm: move |_| {
                is_deleting.set(true);
            },
        }
    )
}

#[component]
pub fn AppointmentsPagination(
    page: Signal<u64>,
    per_page: Signal<u64>,
    pagination_data: PaginatedAppointmentsDto,
) -> Element {
    let data = PaginationData {
        page: pagination_data.page,
        per_page: pagination_data.per_page,
        total: pagination_data.total,
        total_pages: pagination_data.total_pages,
    };

    rsx!(Pagination {
        page,
        per_page,
        data,
        on_page_change: move |_| {},
        on_per_page_change: move |_| {},
    })
}
