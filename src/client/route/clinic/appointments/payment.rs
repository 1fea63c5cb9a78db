use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Modal,
        route::clinic::{
            component::format::{
                format_brl, format_datetime_local, method_label, parse_brl_input, PAYMENT_METHODS,
            },
            dashboard::PaymentStatusBadge,
        },
    },
    model::payment::PaymentDto,
};

#[cfg(feature = "web")]
use crate::client::api::payment::{
    add_payment_transaction, delete_payment_transaction, get_payment,
};

#[component]
pub fn PaymentModal(
    clinic_id: i32,
    mut show: Signal<bool>,
    appointment: Signal<Option<i32>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut payment = use_signal(|| None::<PaymentDto>);
    let mut error = use_signal(|| None::<String>);

    let mut method = use_signal(|| "cash".to_string());
    let mut amount = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut transaction_to_delete = use_signal(|| None::<i32>);

    // Fetch the payment when the modal opens
    #[cfg(feature = "web")]
    {
        let payment_future = use_resource(move || async move {
            if show() {
                match appointment() {
                    Some(id) => Some(get_payment(clinic_id, id).await),
                    None => None,
                }
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = payment_future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        payment.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch payment: {}", err);
                        payment.set(None);
                        error.set(Some(err.message.clone()));
                    }
                }
            }
        });

        // Record a payment, the server returns the updated aggregate
        let add_future = use_resource(move || async move {
            if should_submit() {
                let cents = parse_brl_input(&amount());
                match (appointment(), cents) {
                    (Some(id), Some(cents)) => {
                        Some(add_payment_transaction(clinic_id, id, method(), cents).await)
                    }
                    _ => None,
                }
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = add_future.read_unchecked().as_ref() {
                match result {
                    Ok(updated) => {
                        payment.set(Some(updated.clone()));
                        amount.set(String::new());
                        error.set(None);
                        should_submit.set(false);
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => {
                        tracing::error!("Failed to record payment: {}", err);
                        error.set(Some(err.message.clone()));
                        should_submit.set(false);
                    }
                }
            }
        });

        // Void a transaction, the server returns the updated aggregate
        let delete_future = use_resource(move || async move {
            match (appointment(), transaction_to_delete()) {
                (Some(id), Some(transaction_id)) => {
                    Some(delete_payment_transaction(clinic_id, id, transaction_id).await)
                }
                _ => None,
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
                match result {
                    Ok(updated) => {
                        payment.set(Some(updated.clone()));
                        error.set(None);
                        transaction_to_delete.set(None);
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => {
                        tracing::error!("Failed to void transaction: {}", err);
                        error.set(Some(err.message.clone()));
                        transaction_to_delete.set(None);
                    }
                }
            }
        });
    }

    // Reset the entry form when the modal opens
    use_effect(move || {
        if show() {
            method.set("cash".to_string());
            amount.set(String::new());
            should_submit.set(false);
            error.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if parse_brl_input(&amount()).filter(|cents| *cents > 0).is_none() {
            error.set(Some("Enter a positive amount, e.g. 150,00".to_string()));
            return;
        }

        error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let is_busy = is_submitting || transaction_to_delete().is_some();

    rsx!(
        Modal {
            show,
            title: "Payment".to_string(),
            prevent_close: is_busy,
            if let Some(data) = payment() {
                div {
                    class: "flex flex-col gap-4",
                    div {
                        class: "flex items-center justify-between",
                        PaymentStatusBadge { status: data.status.clone() }
                        if data.change_cents > 0 {
                            span {
                                class: "text-sm opacity-70",
                                "Change due: {format_brl(data.change_cents as i64)}"
                            }
                        }
                    }
                    div {
                        class: "grid grid-cols-3 gap-2 text-center",
                        div {
                            class: "bg-base-200 rounded-lg p-3",
                            p { class: "text-xs opacity-60", "Total" }
                            p { class: "font-semibold", "{format_brl(data.total_cents as i64)}" }
                        }
                        div {
                            class: "bg-base-200 rounded-lg p-3",
                            p { class: "text-xs opacity-60", "Paid" }
                            p { class: "font-semibold", "{format_brl(data.paid_cents as i64)}" }
                        }
                        div {
                            class: "bg-base-200 rounded-lg p-3",
                            p { class: "text-xs opacity-60", "Remaining" }
                            p { class: "font-semibold", "{format_brl(data.remaining_cents as i64)}" }
                        }
                    }

                    if data.transactions.is_empty() {
                        div {
                            class: "text-center py-4 opacity-50 text-sm",
                            "No payments recorded yet"
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-sm w-full",
                                thead {
                                    tr {
                                        th { "Method" }
                                        th { class: "text-right", "Amount" }
                                        th { "Recorded" }
                                        th { }
                                    }
                                }
                                tbody {
                                    for transaction in &data.transactions {
                                        {
                                            let transaction_id = transaction.id;
                                            rsx! {
                                                tr {
                                                    td { "{method_label(&transaction.method)}" }
                                                    td { class: "text-right", "{format_brl(transaction.amount_cents as i64)}" }
                                                    td { "{format_datetime_local(transaction.created_at)}" }
                                                    td {
                                                        class: "text-right",
                                                        button {
                                                            class: "btn btn-xs btn-ghost text-error",
                                                            disabled: is_busy,
                                                            onclick: move |_| {
                                                                transaction_to_delete.set(Some(transaction_id));
                                                            },
                                                            "Void"
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

                    form {
                        class: "flex flex-col gap-3 border-t border-base-300 pt-4",
                        onsubmit: on_submit,
                        p { class: "font-semibold text-sm", "Record a payment" }
                        div {
                            class: "grid grid-cols-2 gap-3",
                            select {
                                class: "select select-bordered w-full",
                                value: "{method()}",
                                onchange: move |evt| method.set(evt.value()),
                                disabled: is_busy,
                                for (value, label) in PAYMENT_METHODS {
                                    option {
                                        value: "{value}",
                                        selected: method() == value,
                                        "{label}"
                                    }
                                }
                            }
                            input {
                                r#type: "text",
                                class: "input input-bordered w-full",
                                placeholder: "Amount, e.g. 150,00",
                                value: "{amount()}",
                                oninput: move |evt| amount.set(evt.value()),
                                disabled: is_busy,
                                required: true,
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
                                disabled: is_busy,
                                "Close"
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: is_busy,
                                if is_submitting {
                                    span { class: "loading loading-spinner loading-sm mr-2" }
                                    "Recording..."
                                } else {
                                    "Record Payment"
                                }
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
