use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page, Pagination, PaginationData,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::user::PaginatedUsersDto,
};

#[cfg(feature = "web")]
use crate::client::api::user::get_all_users;

#[component]
pub fn AdminUsers() -> Element {
    let mut users = use_signal(|| None::<PaginatedUsersDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let page = use_signal(|| 0u64);
    let per_page = use_signal(|| 10u64);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_all_users(page(), per_page()).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(data) => {
                    users.set(Some(data.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch users: {}", err);
                    users.set(None);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Users | {SITE_NAME}" }
        if let Some(data) = users() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-4xl",
                    h1 {
                        class: "text-2xl font-bold mb-6",
                        "Registered Users"
                    }
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { class: "text-center", "Role" }
                                }
                            }
                            tbody {
                                for user in &data.users {
                                    tr {
                                        td { "{user.name}" }
                                        td { "{user.email}" }
                                        td {
                                            class: "text-center",
                                            if user.admin {
                                                span { class: "badge badge-primary", "Admin" }
                                            } else {
                                                span { class: "badge badge-ghost", "Member" }
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
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}
