use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::component::Modal;

use super::form_fields::{AppointmentFormData, AppointmentFormFields};

#[cfg(feature = "web")]
use crate::client::api::{
    appointment::{create_appointment, get_appointment_by_id, update_appointment},
    doctor::get_doctors,
    insurance_plan::get_insurance_plans,
};

#[component]
pub fn BookAppointmentModal(
    clinic_id: i32,
    mut show: Signal<bool>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut form = use_signal(AppointmentFormData::default);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut doctors = use_signal(Vec::new);
    let mut plans = use_signal(Vec::new);

    // Fetch doctors and plans when modal opens
    #[cfg(feature = "web")]
    {
        let doctors_future = use_resource(move || async move {
            if show() {
                get_doctors(clinic_id, 0, 100).await.ok()
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = doctors_future.read_unchecked().as_ref() {
                doctors.set(result.doctors.clone());
            }
        });

        let plans_future = use_resource(move || async move {
            if show() {
                get_insurance_plans(clinic_id).await.ok()
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = plans_future.read_unchecked().as_ref() {
                plans.set(result.clone());
            }
        });
    }

    // Reset form when modal opens (clears data from previous use)
    use_effect(move || {
        if show() {
            form.set(AppointmentFormData::default());
            should_submit.set(false);
            error.set(None);
        }
    });

    // Handle form submission with use_resource
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            let data = form();
            match (data.patient_id, data.doctor_id) {
                (Some(patient_id), Some(doctor_id)) => Some(
                    create_appointment(
                        clinic_id,
                        patient_id,
                        doctor_id,
                        data.plan_id,
                        data.date,
                        data.time,
                    )
                    .await,
                ),
                _ => None,
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
                    // Trigger refetch
                    refetch_trigger.set(refetch_trigger() + 1);
                    // Close modal (data persists for smooth animation)
                    show.set(false);
                    should_submit.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to book appointment: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if !form().is_complete() {
            error.set(Some(
                "Patient, doctor, date and time are all required".to_string(),
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
            title: "Book Appointment".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,

                AppointmentFormFields {
                    clinic_id,
                    form,
                    is_submitting,
                    doctors,
                    plans
                }

                // Error Message
                if let Some(err) = error() {
                    div {
                        class: "alert alert-error mt-4",
                        span { "{err}" }
                    }
                }

                // Modal Actions
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
                            "Booking..."
                        } else {
                            "Book"
                        }
                    }
                }
            }
        }
    )
}

#[component]
pub fn EditAppointmentModal(
    clinic_id: i32,
    mut show: Signal<bool>,
    appointment_to_edit: Signal<Option<i32>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut form = use_signal(AppointmentFormData::default);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut doctors = use_signal(Vec::new);
    let mut plans = use_signal(Vec::new);
    let mut loaded = use_signal(|| false);

    // Fetch doctors and plans when modal opens
    #[cfg(feature = "web")]
    {
        let doctors_future = use_resource(move || async move {
            if show() {
                get_doctors(clinic_id, 0, 100).await.ok()
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = doctors_future.read_unchecked().as_ref() {
                doctors.set(result.doctors.clone());
            }
        });

        let plans_future = use_resource(move || async move {
            if show() {
                get_insurance_plans(clinic_id).await.ok()
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = plans_future.read_unchecked().as_ref() {
                plans.set(result.clone());
            }
        });

        // Load the appointment being edited when the modal opens
        let appointment_future = use_resource(move || async move {
            if show() {
                match appointment_to_edit() {
                    Some(id) => Some(get_appointment_by_id(clinic_id, id).await),
                    None => None,
                }
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = appointment_future.read_unchecked().as_ref() {
                match result {
                    Ok(appointment) => {
                        form.set(AppointmentFormData {
                            patient_id: Some(appointment.patient_id),
                            patient_name: appointment.patient_name.clone(),
                            doctor_id: Some(appointment.doctor_id),
                            plan_id: appointment.health_insurance_plan_id,
                            date: appointment.date.format("%Y-%m-%d").to_string(),
                            time: appointment.date.format("%H:%M:%S").to_string(),
                        });
                        loaded.set(true);
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch appointment: {}", err);
                        error.set(Some(err.message.clone()));
                    }
                }
            }
        });
    }

    // Clear stale state when the modal opens for a different appointment
    use_effect(move || {
        if show() {
            loaded.set(false);
            should_submit.set(false);
            error.set(None);
        }
    });

    // Handle form submission with use_resource
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            let data = form();
            match (appointment_to_edit(), data.patient_id, data.doctor_id) {
                (Some(appointment_id), Some(patient_id), Some(doctor_id)) => Some(
                    update_appointment(
                        clinic_id,
                        appointment_id,
                        patient_id,
                        doctor_id,
                        data.plan_id,
                        data.date,
                        data.time,
                    )
                    .await,
                ),
                _ => None,
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
                    // Trigger refetch
                    refetch_trigger.set(refetch_trigger() + 1);
                    // Close modal (data persists for smooth animation)
                    show.set(false);
                    should_submit.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to update appointment: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if !form().is_complete() {
            error.set(Some(
                "Patient, doctor, date and time are all required".to_string(),
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
            title: "Reschedule Appointment".to_string(),
            prevent_close: is_submitting,
            if loaded() {
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: on_submit,

                    AppointmentFormFields {
                        clinic_id,
                        form,
                        is_submitting,
                        doctors,
                        plans,
                        appointment_id: appointment_to_edit()
                    }

                    // Error Message
                    if let Some(err) = error() {
                        div {
                            class: "alert alert-error mt-4",
                            span { "{err}" }
                        }
                    }

                    // Modal Actions
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
            } else if let Some(err) = error() {
                div {
                    class: "alert alert-error",
                    span { "{err}" }
                }
            } else {
                div {
                    class: "text-center py-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            }
        }
    )
}
