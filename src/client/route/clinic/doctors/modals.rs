use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Modal,
        route::clinic::component::format::{
            format_brl, local_hm_to_utc_hms, parse_brl_input, utc_hms_to_local_hm,
        },
    },
    model::doctor::{BusinessHourDto, DoctorListItemDto},
};

#[cfg(feature = "web")]
use crate::client::api::doctor::{
    create_doctor, get_doctor_by_id, update_business_hours, update_doctor,
};

static WEEKDAY_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[component]
pub fn CreateDoctorModal(
    clinic_id: i32,
    show: Signal<bool>,
    refetch_trigger: Signal<u32>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut specialty = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Reset form when modal opens (clears data from previous use)
    use_effect(move || {
        if show() {
            name.set(String::new());
            specialty.set(String::new());
            price.set(String::new());
            should_submit.set(false);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            match parse_brl_input(&price()) {
                Some(cents) => {
                    Some(create_doctor(clinic_id, name(), specialty(), cents).await)
                }
                None => None,
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
                    tracing::error!("Failed to create doctor: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error.set(Some("Doctor name is required".to_string()));
            return;
        }
        if parse_brl_input(&price()).filter(|cents| *cents > 0).is_none() {
            error.set(Some(
                "Enter a positive appointment price, e.g. 250,00".to_string(),
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
            title: "Add Doctor".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                DoctorFormFields {
                    name,
                    specialty,
                    price,
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
pub fn EditDoctorModal(
    clinic_id: i32,
    show: Signal<bool>,
    doctor_to_edit: Signal<Option<DoctorListItemDto>>,
    refetch_trigger: Signal<u32>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut specialty = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Prefill the form from the selected doctor when the modal opens
    use_effect(move || {
        if show() {
            if let Some(doctor) = doctor_to_edit() {
                name.set(doctor.name.clone());
                specialty.set(doctor.specialty.clone());
                price.set(format_brl(doctor.appointment_price_cents as i64));
            }
            should_submit.set(false);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            match (doctor_to_edit(), parse_brl_input(&price())) {
                (Some(doctor), Some(cents)) => {
                    Some(update_doctor(clinic_id, doctor.id, name(), specialty(), cents).await)
                }
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
                    refetch_trigger.set(refetch_trigger() + 1);
                    show.set(false);
                    should_submit.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to update doctor: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error.set(Some("Doctor name is required".to_string()));
            return;
        }
        if parse_brl_input(&price()).filter(|cents| *cents > 0).is_none() {
            error.set(Some(
                "Enter a positive appointment price, e.g. 250,00".to_string(),
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
            title: "Edit Doctor".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                DoctorFormFields {
                    name,
                    specialty,
                    price,
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
fn DoctorFormFields(
    name: Signal<String>,
    specialty: Signal<String>,
    price: Signal<String>,
    is_submitting: bool,
) -> Element {
    rsx! {
        div {
            class: "form-control",
            label {
                class: "label",
                span { class: "label-text", "Name" }
            }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "e.g. Dr. Ana Lima",
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
                span { class: "label-text", "Specialty" }
            }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "e.g. Cardiology",
                value: "{specialty()}",
                oninput: move |evt| specialty.set(evt.value()),
                disabled: is_submitting,
            }
        }
        div {
            class: "form-control",
            label {
                class: "label",
                span { class: "label-text", "Appointment Price" }
            }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "e.g. 250,00",
                value: "{price()}",
                oninput: move |evt| price.set(evt.value()),
                disabled: is_submitting,
                required: true,
            }
        }
    }
}

/// One weekday row of the schedule editor, times as local "HH:MM" values.
#[derive(Clone, PartialEq, Default)]
struct DayFormRow {
    enabled: bool,
    start: String,
    end: String,
}

#[component]
pub fn BusinessHoursModal(
    clinic_id: i32,
    show: Signal<bool>,
    doctor: Signal<Option<(i32, String)>>,
) -> Element {
    let mut days = use_signal(|| vec![DayFormRow::default(); 7]);
    let mut loaded = use_signal(|| false);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Reset state when the modal opens; rows are filled once the fetch lands
    use_effect(move || {
        if show() {
            days.set(vec![DayFormRow::default(); 7]);
            loaded.set(false);
            should_submit.set(false);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    {
        // Fetch the doctor's current schedule when the modal opens
        let doctor_future = use_resource(move || async move {
            if show() {
                match doctor() {
                    Some((doctor_id, _)) => Some(get_doctor_by_id(clinic_id, doctor_id).await),
                    None => None,
                }
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = doctor_future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        let mut rows = vec![DayFormRow::default(); 7];
                        for hour in &data.business_hours {
                            let Ok(index) = usize::try_from(hour.weekday) else {
                                continue;
                            };
                            if index >= rows.len() {
                                continue;
                            }
                            rows[index] = DayFormRow {
                                enabled: hour.enabled,
                                start: hour
                                    .start_time
                                    .as_deref()
                                    .map(utc_hms_to_local_hm)
                                    .unwrap_or_default(),
                                end: hour
                                    .end_time
                                    .as_deref()
                                    .map(utc_hms_to_local_hm)
                                    .unwrap_or_default(),
                            };
                        }
                        days.set(rows);
                        loaded.set(true);
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch doctor schedule: {}", err);
                        error.set(Some(err.message.clone()));
                    }
                }
            }
        });

        // Handle form submission with use_resource
        let submit_future = use_resource(move || async move {
            if should_submit() {
                match doctor() {
                    Some((doctor_id, _)) => {
                        let rows: Vec<BusinessHourDto> = days()
                            .iter()
                            .enumerate()
                            .map(|(weekday, row)| BusinessHourDto {
                                weekday: weekday as i32,
                                enabled: row.enabled,
                                start_time: if row.enabled {
                                    local_hm_to_utc_hms(&row.start)
                                } else {
                                    None
                                },
                                end_time: if row.enabled {
                                    local_hm_to_utc_hms(&row.end)
                                } else {
                                    None
                                },
                            })
                            .collect();
                        Some(update_business_hours(clinic_id, doctor_id, rows).await)
                    }
                    None => None,
                }
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = submit_future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        show.set(false);
                        should_submit.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to update doctor schedule: {}", err);
                        error.set(Some(err.message.clone()));
                        should_submit.set(false);
                    }
                }
            }
        });
    }

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let invalid = days().iter().any(|row| {
            row.enabled
                && (local_hm_to_utc_hms(&row.start).is_none()
                    || local_hm_to_utc_hms(&row.end).is_none())
        });
        if invalid {
            error.set(Some(
                "Each open day needs an opening and a closing time".to_string(),
            ));
            return;
        }

        error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let title = match doctor() {
        Some((_, name)) => format!("Business Hours: {}", name),
        None => "Business Hours".to_string(),
    };
    let rows = days();

    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_submitting,
            class: "max-w-2xl",
            if loaded() {
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: on_submit,
                    div {
                        class: "flex flex-col gap-2",
                        for (index, day) in rows.iter().enumerate() {
                            {
                                let enabled = day.enabled;
                                let start = day.start.clone();
                                let end = day.end.clone();
                                let label = WEEKDAY_LABELS[index];
                                rsx! {
                                    div {
                                        key: "{index}",
                                        class: "flex items-center gap-3 p-2 bg-base-100 rounded-box",
                                        label {
                                            class: "label cursor-pointer gap-2 w-32",
                                            input {
                                                r#type: "checkbox",
                                                class: "checkbox checkbox-sm",
                                                checked: enabled,
                                                disabled: is_submitting,
                                                onchange: move |evt| {
                                                    days.write()[index].enabled = evt.checked();
                                                },
                                            }
                                            span { class: "label-text", "{label}" }
                                        }
                                        if enabled {
                                            input {
                                                r#type: "time",
                                                class: "input input-bordered input-sm",
                                                value: "{start}",
                                                disabled: is_submitting,
                                                oninput: move |evt| {
                                                    days.write()[index].start = evt.value();
                                                },
                                            }
                                            span { class: "opacity-50", "to" }
                                            input {
                                                r#type: "time",
                                                class: "input input-bordered input-sm",
                                                value: "{end}",
                                                disabled: is_submitting,
                                                oninput: move |evt| {
                                                    days.write()[index].end = evt.value();
                                                },
                                            }
                                        } else {
                                            span {
                                                class: "opacity-50 text-sm",
                                                "Closed"
                                            }
                                        }
                                    }
                                }
                            }
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
                                "Saving..."
                            } else {
                                "Save Schedule"
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
