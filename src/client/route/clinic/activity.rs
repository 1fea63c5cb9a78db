use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{Page, Pagination, PaginationData},
        constant::SITE_NAME,
        model::error::ApiError,
        route::clinic::{component::format::format_datetime_local, ClinicTab, ClinicTabs},
    },
    model::security_log::PaginatedSecurityLogsDto,
};

#[cfg(feature = "web")]
use crate::client::api::security_log::get_security_logs;

#[component]
pub fn Activity(clinic_id: i32) -> Element {
    rsx! {
        Title { "Activity | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 {
                    class: "text-2xl font-bold mb-6",
                    "Activity"
                }
                ClinicTabs { clinic_id, active_tab: ClinicTab::Activity }
                ActivitySection { clinic_id }
            }
        }
    }
}

#[component]
fn ActivitySection(clinic_id: i32) -> Element {
    let mut logs = use_signal(|| None::<PaginatedSecurityLogsDto>);
    let mut error = use_signal(|| None::<ApiError>);

    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 25u64);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            get_security_logs(clinic_id, page(), per_page()).await
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        logs.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch security logs: {}", err);
                        logs.set(None);
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
                h2 {
                    class: "card-title mb-4",
                    "Audit Trail"
                }

                if let Some(data) = logs() {
                    if data.logs.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No activity recorded yet"
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "table table-zebra table-sm w-full",
                                thead {
                                    tr {
                                        th { "When" }
                                        th { "User" }
                                        th { "Action" }
                                        th { "Entity" }
                                        th { class: "text-center", "Result" }
                                        th { "Detail" }
                                    }
                                }
                                tbody {
                                    for log in &data.logs {
                                        {
                                            let when = format_datetime_local(log.created_at);
                                            let user = log
                                                .user_name
                                                .clone()
                                                .unwrap_or_else(|| "System".to_string());
                                            let entity = match log.entity_id {
                                                Some(id) => format!("{} #{}", log.entity, id),
                                                None => log.entity.clone(),
                                            };
                                            let detail = log.detail.clone().unwrap_or_default();
                                            rsx! {
                                                tr {
                                                    td {
                                                        class: "whitespace-nowrap",
                                                        "{when}"
                                                    }
                                                    td { "{user}" }
                                                    td { "{log.action}" }
                                                    td { "{entity}" }
                                                    td {
                                                        class: "text-center",
                                                        if log.success {
                                                            span { class: "badge badge-success badge-sm", "OK" }
                                                        } else {
                                                            span { class: "badge badge-error badge-sm", "Failed" }
                                                        }
                                                    }
                                                    td {
                                                        class: "max-w-xs truncate",
                                                        title: "{detail}",
                                                        "{detail}"
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
                        span { "Error loading activity: {err.message}" }
                    }
                } else {
                    div {
                        class: "text-center py-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }
            }
        }
    )
}
