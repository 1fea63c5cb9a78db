use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{DropdownItem, SearchableDropdown},
        route::clinic::component::format::format_brl,
    },
    model::{doctor::DoctorListItemDto, insurance::HealthInsurancePlanDto},
};

#[cfg(feature = "web")]
use crate::client::api::{doctor::get_available_slots, patient::get_patients};

/// Form state shared by the booking and rescheduling modals.
#[derive(Clone, Default, PartialEq)]
pub struct AppointmentFormData {
    pub patient_id: Option<i32>,
    pub patient_name: String,
    pub doctor_id: Option<i32>,
    pub plan_id: Option<i32>,
    pub date: String,
    pub time: String,
}

impl AppointmentFormData {
    pub fn is_complete(&self) -> bool {
        self.patient_id.is_some()
            && self.doctor_id.is_some()
            && !self.date.is_empty()
            && !self.time.is_empty()
    }
}

#[component]
pub fn AppointmentFormFields(
    clinic_id: i32,
    mut form: Signal<AppointmentFormData>,
    is_submitting: bool,
    doctors: Signal<Vec<DoctorListItemDto>>,
    plans: Signal<Vec<HealthInsurancePlanDto>>,
    /// Set when rescheduling so the appointment's current slot stays selectable
    #[props(default = None)]
    appointment_id: Option<i32>,
) -> Element {
    let mut patient_search = use_signal(String::new);
    let mut patient_results = use_signal(Vec::new);
    let mut slots = use_signal(Vec::new);
    let mut slots_error = use_signal(|| None::<String>);

    // Patient search re-runs as the query changes
    #[cfg(feature = "web")]
    {
        let search_future = use_resource(move || async move {
            let query = patient_search();
            let query = if query.trim().is_empty() {
                None
            } else {
                Some(query.trim().to_string())
            };
            get_patients(clinic_id, 0, 10, query).await
        });
        use_effect(move || {
            if let Some(result) = search_future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => patient_results.set(data.patients.clone()),
                    Err(err) => {
                        tracing::error!("Failed to search patients: {}", err);
                        patient_results.set(Vec::new());
                    }
                }
            }
        });

        // Open slots depend on the chosen doctor and day
        let slots_future = use_resource(move || async move {
            let current = form();
            match (current.doctor_id, current.date.is_empty()) {
                (Some(doctor_id), false) => Some(
                    get_available_slots(clinic_id, doctor_id, current.date, appointment_id).await,
                ),
                _ => None,
            }
        });
        use_effect(move || {
            if let Some(result) = slots_future.read_unchecked().as_ref() {
                match result {
                    Some(Ok(data)) => {
                        slots.set(data.clone());
                        slots_error.set(None);
                    }
                    Some(Err(err)) => {
                        tracing::error!("Failed to fetch slots: {}", err);
                        slots.set(Vec::new());
                        slots_error.set(Some(err.message.clone()));
                    }
                    None => {
                        slots.set(Vec::new());
                        slots_error.set(None);
                    }
                }
            }
        });
    }

    // Plan price wins over the doctor's default when a plan is chosen
    let price_hint = {
        let current = form();
        let plan_price = current
            .plan_id
            .and_then(|id| plans().iter().find(|p| p.id == id).map(|p| p.base_price_cents));
        let doctor_price = current.doctor_id.and_then(|id| {
            doctors()
                .iter()
                .find(|d| d.id == id)
                .map(|d| d.appointment_price_cents)
        });
        plan_price.or(doctor_price)
    };

    let current = form();
    let display_patient = if current.patient_name.is_empty() {
        None
    } else {
        Some(current.patient_name.clone())
    };

    rsx!(
        div {
            class: "form-control",
            label {
                class: "label",
                span { class: "label-text", "Patient" }
            }
            SearchableDropdown {
                search_query: patient_search,
                placeholder: "Search patients by name...".to_string(),
                display_value: display_patient,
                disabled: is_submitting,
                required: true,
                empty_message: "No patients registered".to_string(),
                not_found_message: "No patients match your search".to_string(),
                has_items: !patient_results().is_empty(),
                for patient in patient_results() {
                    {
                        let patient_id = patient.id;
                        let patient_name = patient.name.clone();
                        let patient_name_for_select = patient.name.clone();
                        let patient_email = patient.email.clone();
                        rsx! {
                            DropdownItem {
                                selected: form().patient_id == Some(patient_id),
                                on_select: move |_| {
                                    let mut data = form.write();
                                    data.patient_id = Some(patient_id);
                                    data.patient_name = patient_name_for_select.clone();
                                },
                                div {
                                    p { "{patient_name}" }
                                    p { class: "text-xs opacity-60", "{patient_email}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        div {
            class: "form-control",
            label {
                class: "label",
                span { class: "label-text", "Doctor" }
            }
            select {
                class: "select select-bordered w-full",
                value: form().doctor_id.map(|id| id.to_string()).unwrap_or_default(),
                onchange: move |evt| {
                    let mut data = form.write();
                    data.doctor_id = evt.value().parse().ok();
                    data.time = String::new();
                },
                disabled: is_submitting,
                required: true,
                option { value: "", disabled: true, selected: form().doctor_id.is_none(), "Select a doctor" }
                for doctor in doctors() {
                    option {
                        value: "{doctor.id}",
                        selected: form().doctor_id == Some(doctor.id),
                        "{doctor.name} ({doctor.specialty})"
                    }
                }
            }
        }

        div {
            class: "form-control",
            label {
                class: "label",
                span { class: "label-text", "Insurance Plan" }
            }
            select {
                class: "select select-bordered w-full",
                value: form().plan_id.map(|id| id.to_string()).unwrap_or_default(),
                onchange: move |evt| {
                    form.write().plan_id = evt.value().parse().ok();
                },
                disabled: is_submitting,
                option { value: "", selected: form().plan_id.is_none(), "None (private appointment)" }
                for plan in plans() {
                    option {
                        value: "{plan.id}",
                        selected: form().plan_id == Some(plan.id),
                        "{plan.name}"
                    }
                }
            }
        }

        div {
            class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
            div {
                class: "form-control",
                label {
                    class: "label",
                    span { class: "label-text", "Date" }
                }
                input {
                    r#type: "date",
                    class: "input input-bordered w-full",
                    value: "{form().date}",
                    onchange: move |evt| {
                        let mut data = form.write();
                        data.date = evt.value();
                        data.time = String::new();
                    },
                    disabled: is_submitting,
                    required: true,
                }
            }
            div {
                class: "form-control",
                label {
                    class: "label",
                    span { class: "label-text", "Time" }
                }
                select {
                    class: "select select-bordered w-full",
                    value: "{form().time}",
                    onchange: move |evt| {
                        form.write().time = evt.value();
                    },
                    disabled: is_submitting
                        || form().doctor_id.is_none()
                        || form().date.is_empty(),
                    required: true,
                    option { value: "", disabled: true, selected: form().time.is_empty(), "Select a time" }
                    for slot in slots() {
                        option {
                            value: "{slot.value}",
                            selected: form().time == slot.value,
                            "{slot.label}"
                        }
                    }
                }
                if let Some(err) = slots_error() {
                    label {
                        class: "label",
                        span { class: "label-text-alt text-error", "{err}" }
                    }
                } else if form().doctor_id.is_some() && !form().date.is_empty() && slots().is_empty() {
                    label {
                        class: "label",
                        span { class: "label-text-alt opacity-60", "No open slots on this day" }
                    }
                }
            }
        }

        if let Some(price) = price_hint {
            div {
                class: "text-sm opacity-70",
                "Appointment price: {format_brl(price as i64)}"
            }
        }
    )
}
