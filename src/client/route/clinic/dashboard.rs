use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        route::clinic::{
            component::format::{format_brl, format_datetime_local, today_local},
            ClinicTab, ClinicTabs,
        },
        router::Route,
    },
    model::{appointment::PaginatedAppointmentsDto, clinic::ClinicDto, report::RevenueReportDto},
};

#[cfg(feature = "web")]
use crate::client::api::{
    appointment::get_appointments, clinic::get_clinic, report::get_revenue_report,
};

/// First day of the current local month, as "YYYY-MM-DD"
fn first_of_month() -> String {
    let today = today_local();
    format!("{}-01", &today[..7])
}

#[component]
pub fn Dashboard(clinic_id: i32) -> Element {
    let mut clinic = use_signal(|| None::<ClinicDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut today_appointments = use_signal(|| None::<PaginatedAppointmentsDto>);
    let mut month_report = use_signal(|| None::<RevenueReportDto>);

    #[cfg(feature = "web")]
    {
        let clinic_future = use_resource(move || async move { get_clinic(clinic_id).await });
        use_effect(move || {
            if let Some(result) = clinic_future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        clinic.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch clinic: {}", err);
                        clinic.set(None);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });

        // Refresh timer for the schedule table - bumps once per minute
        let mut refresh_tick = use_signal(|| 0u32);
        use_future(move || async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(60_000).await;
                refresh_tick += 1;
            }
        });

        let appointments_future = use_resource(move || async move {
            let _ = refresh_tick(); // Read tick to track changes
            let today = today_local();
            get_appointments(clinic_id, 0, 50, None, Some(today.clone()), Some(today)).await
        });
        use_effect(move || {
            if let Some(Ok(data)) = appointments_future.read_unchecked().as_ref() {
                today_appointments.set(Some(data.clone()));
            }
        });

        let report_future = use_resource(move || async move {
            get_revenue_report(clinic_id, Some(first_of_month()), Some(today_local())).await
        });
        use_effect(move || {
            if let Some(Ok(data)) = report_future.read_unchecked().as_ref() {
                month_report.set(Some(data.clone()));
            }
        });
    }

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        if let Some(clinic_data) = clinic() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-6xl",
                    h1 {
                        class: "text-2xl font-bold mb-6",
                        "{clinic_data.name}"
                    }
                    ClinicTabs { clinic_id, active_tab: ClinicTab::Dashboard }
                    div {
                        class: "stats stats-vertical lg:stats-horizontal w-full mb-6",
                        div {
                            class: "stat",
                            div { class: "stat-title", "Appointments Today" }
                            div {
                                class: "stat-value",
                                if let Some(data) = today_appointments() {
                                    "{data.total}"
                                } else {
                                    "-"
                                }
                            }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "Received This Month" }
                            div {
                                class: "stat-value text-primary",
                                if let Some(report) = month_report() {
                                    "{format_brl(report.summary.paid_cents)}"
                                } else {
                                    "-"
                                }
                            }
                        }
                        div {
                            class: "stat",
                            div { class: "stat-title", "Outstanding This Month" }
                            div {
                                class: "stat-value",
                                if let Some(report) = month_report() {
                                    "{format_brl(report.summary.outstanding_cents)}"
                                } else {
                                    "-"
                                }
                            }
                        }
                    }
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            div {
                                class: "flex justify-between items-center mb-4",
                                h2 {
                                    class: "card-title",
                                    "Today's Schedule"
                                }
                                Link {
                                    to: Route::Appointments { clinic_id },
                                    class: "btn btn-sm btn-outline",
                                    "All Appointments"
                                }
                            }
                            if let Some(data) = today_appointments() {
                                if data.appointments.is_empty() {
                                    div {
                                        class: "text-center py-8 opacity-50",
                                        "No appointments scheduled for today"
                                    }
                                } else {
                                    div {
                                        class: "overflow-x-auto",
                                        table {
                                            class: "table table-zebra w-full",
                                            thead {
                                                tr {
                                                    th { "Time" }
                                                    th { "Patient" }
                                                    th { "Doctor" }
                                                    th { class: "text-center", "Payment" }
                                                }
                                            }
                                            tbody {
                                                for appointment in &data.appointments {
                                                    tr {
                                                        td { "{format_datetime_local(appointment.date)}" }
                                                        td { "{appointment.patient_name}" }
                                                        td { "{appointment.doctor_name}" }
                                                        td {
                                                            class: "text-center",
                                                            PaymentStatusBadge { status: appointment.payment_status.clone() }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            } else {
                                div {
                                    class: "text-center py-8",
                                    span { class: "loading loading-spinner loading-lg" }
                                }
                            }
                        }
                    }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}

#[component]
pub fn PaymentStatusBadge(status: String) -> Element {
    let (class, label) = match status.as_str() {
        "paid" => ("badge badge-success", "Paid"),
        "partial" => ("badge badge-warning", "Partial"),
        "pending" => ("badge badge-ghost", "Pending"),
        _ => ("badge badge-ghost", "Unknown"),
    };

    rsx!(span { class: "{class}", "{label}" })
}
