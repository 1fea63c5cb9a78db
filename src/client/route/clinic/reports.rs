use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        model::error::ApiError,
        route::clinic::{
            component::format::{format_brl, format_datetime_local, method_label},
            ClinicTab, ClinicTabs,
        },
    },
    model::report::RevenueReportDto,
};

#[cfg(feature = "web")]
use crate::client::api::report::get_revenue_report;

/// Download link for a report export, carrying the active date filters
fn export_url(clinic_id: i32, extension: &str, from: &str, to: &str) -> String {
    let mut url = format!(
        "/api/clinics/{}/reports/revenue/export.{}",
        clinic_id, extension
    );
    let mut params = Vec::new();
    if !from.is_empty() {
        params.push(format!("from={}", from));
    }
    if !to.is_empty() {
        params.push(format!("to={}", to));
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

#[component]
pub fn Reports(clinic_id: i32) -> Element {
    rsx! {
        Title { "Reports | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 {
                    class: "text-2xl font-bold mb-6",
                    "Reports"
                }
                ClinicTabs { clinic_id, active_tab: ClinicTab::Reports }
                ReportSection { clinic_id }
            }
        }
    }
}

#[component]
fn ReportSection(clinic_id: i32) -> Element {
    let mut report = use_signal(|| None::<RevenueReportDto>);
    let mut error = use_signal(|| None::<ApiError>);

    let mut filter_from = use_signal(String::new);
    let mut filter_to = use_signal(String::new);

    #[cfg(feature = "web")]
    {
        // Re-runs when the date filters change; empty filters mean the
        // server's default 30 day window
        let future = use_resource(move || async move {
            let from = Some(filter_from()).filter(|v| !v.is_empty());
            let to = Some(filter_to()).filter(|v| !v.is_empty());
            get_revenue_report(clinic_id, from, to).await
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        report.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch revenue report: {}", err);
                        report.set(None);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    let csv_url = export_url(clinic_id, "csv", &filter_from(), &filter_to());
    let pdf_url = export_url(clinic_id, "pdf", &filter_from(), &filter_to());

    rsx!(
        div {
            class: "flex flex-col gap-6",
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    div {
                        class: "flex flex-col sm:flex-row justify-between sm:items-end gap-4",
                        div {
                            class: "flex flex-wrap items-end gap-4",
                            div {
                                class: "form-control",
                                label {
                                    class: "label",
                                    span { class: "label-text", "From" }
                                }
                                input {
                                    r#type: "date",
                                    class: "input input-bordered input-sm",
                                    value: "{filter_from()}",
                                    oninput: move |evt| filter_from.set(evt.value()),
                                }
                            }
                            div {
                                class: "form-control",
                                label {
                                    class: "label",
                                    span { class: "label-text", "To" }
                                }
                                input {
                                    r#type: "date",
                                    class: "input input-bordered input-sm",
                                    value: "{filter_to()}",
                                    oninput: move |evt| filter_to.set(evt.value()),
                                }
                            }
                            button {
                                class: "btn btn-sm btn-ghost",
                                onclick: move |_| {
                                    filter_from.set(String::new());
                                    filter_to.set(String::new());
                                },
                                "Last 30 days"
                            }
                        }
                        div {
                            class: "flex gap-2",
                            a {
                                class: "btn btn-sm btn-outline",
                                href: "{csv_url}",
                                "Export CSV"
                            }
                            a {
                                class: "btn btn-sm btn-outline",
                                href: "{pdf_url}",
                                "Export PDF"
                            }
                        }
                    }
                }
            }

            if let Some(data) = report() {
                ReportContent { data }
            } else if let Some(err) = error() {
                div {
                    class: "alert alert-error",
                    span { "Error loading report: {err.message}" }
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

#[component]
fn ReportContent(data: RevenueReportDto) -> Element {
    rsx! {
        div {
            class: "text-sm opacity-70",
            "Period: {data.from} to {data.to}"
        }
        div {
            class: "stats stats-vertical sm:stats-horizontal shadow w-full",
            div {
                class: "stat",
                div { class: "stat-title", "Billed" }
                div {
                    class: "stat-value",
                    "{format_brl(data.summary.revenue_cents)}"
                }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Appointments" }
                div {
                    class: "stat-value",
                    "{data.summary.appointment_count}"
                }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Received" }
                div {
                    class: "stat-value text-primary",
                    "{format_brl(data.summary.paid_cents)}"
                }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Outstanding" }
                div {
                    class: "stat-value",
                    "{format_brl(data.summary.outstanding_cents)}"
                }
            }
        }

        div {
            class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    h2 {
                        class: "card-title",
                        "By Payment Method"
                    }
                    if data.methods.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No payments recorded in this period"
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Method" }
                                        th { class: "text-right", "Transactions" }
                                        th { class: "text-right", "Amount" }
                                    }
                                }
                                tbody {
                                    for method in &data.methods {
                                        tr {
                                            td { "{method_label(&method.method)}" }
                                            td {
                                                class: "text-right",
                                                "{method.transaction_count}"
                                            }
                                            td {
                                                class: "text-right",
                                                "{format_brl(method.amount_cents)}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    h2 {
                        class: "card-title",
                        "Top Doctors"
                    }
                    if data.top_doctors.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No billed appointments in this period"
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Doctor" }
                                        th { class: "text-right", "Appointments" }
                                        th { class: "text-right", "Revenue" }
                                    }
                                }
                                tbody {
                                    for doctor in &data.top_doctors {
                                        tr {
                                            td { "{doctor.doctor_name}" }
                                            td {
                                                class: "text-right",
                                                "{doctor.appointment_count}"
                                            }
                                            td {
                                                class: "text-right",
                                                "{format_brl(doctor.revenue_cents)}"
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

        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Daily Revenue"
                }
                if data.daily.is_empty() {
                    div {
                        class: "text-center py-8 opacity-50",
                        "No revenue in this period"
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra table-sm w-full",
                            thead {
                                tr {
                                    th { "Date" }
                                    th { class: "text-right", "Billed" }
                                }
                            }
                            tbody {
                                for day in &data.daily {
                                    tr {
                                        td { "{day.date}" }
                                        td {
                                            class: "text-right",
                                            "{format_brl(day.revenue_cents)}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Recent Transactions"
                }
                if data.recent_transactions.is_empty() {
                    div {
                        class: "text-center py-8 opacity-50",
                        "No transactions in this period"
                    }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "When" }
                                    th { "Patient" }
                                    th { "Method" }
                                    th { class: "text-right", "Amount" }
                                }
                            }
                            tbody {
                                for transaction in &data.recent_transactions {
                                    tr {
                                        td { "{format_datetime_local(transaction.created_at)}" }
                                        td { "{transaction.patient_name}" }
                                        td { "{method_label(&transaction.method)}" }
                                        td {
                                            class: "text-right",
                                            "{format_brl(transaction.amount_cents as i64)}"
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
