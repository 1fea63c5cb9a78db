use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ConfirmationModal, Modal},
        model::error::ApiError,
        route::clinic::component::format::{format_brl, parse_brl_input},
    },
    model::insurance::HealthInsurancePlanDto,
};

#[cfg(feature = "web")]
use crate::client::api::insurance_plan::{
    create_insurance_plan, delete_insurance_plan, get_insurance_plans, update_insurance_plan,
};

#[component]
pub fn InsurancePlansSection(clinic_id: i32) -> Element {
    let mut plans = use_signal(|| None::<Vec<HealthInsurancePlanDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut show_create_modal = use_signal(|| false);
    let mut show_edit_modal = use_signal(|| false);
    let mut plan_to_edit = use_signal(|| None::<HealthInsurancePlanDto>);

    let mut show_delete_modal = use_signal(|| false);
    let mut plan_to_delete = use_signal(|| None::<(i32, String)>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_insurance_plans(clinic_id).await
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        plans.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch insurance plans: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });

        // Handle deletion with use_resource
        let delete_future = use_resource(move || async move {
            if is_deleting() {
                if let Some((id, _)) = plan_to_delete() {
                    Some(delete_insurance_plan(clinic_id, id).await)
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
                        tracing::error!("Failed to delete insurance plan: {}", err);
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
                    class: "flex justify-between items-center mb-4",
                    h2 {
                        class: "card-title",
                        "Insurance Plans"
                    }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| show_create_modal.set(true),
                        "Add Plan"
                    }
                }

                if let Some(plans) = plans() {
                    if plans.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No insurance plans accepted yet"
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Plan" }
                                        th { "Appointment Price" }
                                        th {
                                            class: "text-right",
                                            "Actions"
                                        }
                                    }
                                }
                                tbody {
                                    for plan in &plans {
                                        {
                                            let plan_id = plan.id;
                                            let price = format_brl(plan.base_price_cents as i64);
                                            let plan_for_edit = plan.clone();
                                            let plan_name_for_delete = plan.name.clone();
                                            rsx! {
                                                tr {
                                                    td { "{plan.name}" }
                                                    td { "{price}" }
                                                    td {
                                                        div {
                                                            class: "flex gap-2 justify-end",
                                                            button {
                                                                class: "btn btn-sm btn-primary",
                                                                onclick: move |_| {
                                                                    plan_to_edit.set(Some(plan_for_edit.clone()));
                                                                    show_edit_modal.set(true);
                                                                },
                                                                "Edit"
                                                            }
                                                            button {
                                                                class: "btn btn-sm btn-error",
                                                                onclick: move |_| {
                                                                    plan_to_delete.set(Some((plan_id, plan_name_for_delete.clone())));
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
                    }
                } else if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "Error loading insurance plans: {err.message}" }
                    }
                } else {
                    div {
                        class: "text-center py-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }

                CreatePlanModal {
                    clinic_id,
                    show: show_create_modal,
                    refetch_trigger
                }
                EditPlanModal {
                    clinic_id,
                    show: show_edit_modal,
                    plan_to_edit,
                    refetch_trigger
                }

                // Delete Confirmation Modal
                ConfirmationModal {
                    show: show_delete_modal,
                    title: "Delete Insurance Plan".to_string(),
                    message: rsx!(
                        if let Some((_, name)) = plan_to_delete() {
                            p {
                                class: "py-4",
                                "Are you sure you want to stop accepting "
                                span { class: "font-bold", "{name}" }
                                "? Appointments already booked under this plan keep their agreed price."
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

#[component]
fn CreatePlanModal(clinic_id: i32, show: Signal<bool>, refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Reset form when modal opens (clears data from previous use)
    use_effect(move || {
        if show() {
            name.set(String::new());
            price.set(String::new());
            should_submit.set(false);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            match parse_brl_input(&price()) {
                Some(cents) => Some(create_insurance_plan(clinic_id, name(), cents).await),
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
                    tracing::error!("Failed to create insurance plan: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error.set(Some("Plan name is required".to_string()));
            return;
        }
        if parse_brl_input(&price()).filter(|cents| *cents > 0).is_none() {
            error.set(Some(
                "Enter a positive appointment price, e.g. 180,00".to_string(),
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
            title: "Add Insurance Plan".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                PlanFormFields { name, price, is_submitting }
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
fn EditPlanModal(
    clinic_id: i32,
    show: Signal<bool>,
    plan_to_edit: Signal<Option<HealthInsurancePlanDto>>,
    refetch_trigger: Signal<u32>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Prefill the form from the selected plan when the modal opens
    use_effect(move || {
        if show() {
            if let Some(plan) = plan_to_edit() {
                name.set(plan.name.clone());
                price.set(format_brl(plan.base_price_cents as i64));
            }
            should_submit.set(false);
            error.set(None);
        }
    });

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            match (plan_to_edit(), parse_brl_input(&price())) {
                (Some(plan), Some(cents)) => {
                    Some(update_insurance_plan(clinic_id, plan.id, name(), cents).await)
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
                    tracing::error!("Failed to update insurance plan: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error.set(Some("Plan name is required".to_string()));
            return;
        }
        if parse_brl_input(&price()).filter(|cents| *cents > 0).is_none() {
            error.set(Some(
                "Enter a positive appointment price, e.g. 180,00".to_string(),
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
            title: "Edit Insurance Plan".to_string(),
            prevent_close: is_submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                PlanFormFields { name, price, is_submitting }
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
fn PlanFormFields(name: Signal<String>, price: Signal<String>, is_submitting: bool) -> Element {
    rsx! {
        div {
            class: "form-control",
            label {
                class: "label",
                span { class: "label-text", "Plan Name" }
            }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "e.g. MediSaude Gold",
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
                span { class: "label-text", "Appointment Price" }
            }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "e.g. 180,00",
                value: "{price()}",
                oninput: move |evt| price.set(evt.value()),
                disabled: is_submitting,
                required: true,
            }
        }
    }
}
