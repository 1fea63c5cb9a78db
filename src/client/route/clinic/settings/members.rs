use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{client::model::error::ApiError, model::clinic::ClinicMemberDto};

#[cfg(feature = "web")]
use crate::client::api::clinic::{add_clinic_member, get_clinic_members};

#[component]
pub fn MembersSection(clinic_id: i32) -> Element {
    let mut members = use_signal(|| None::<Vec<ClinicMemberDto>>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut refetch_trigger = use_signal(|| 0u32);

    let mut email = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut add_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_clinic_members(clinic_id).await
        });
        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(data) => {
                        members.set(Some(data.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        tracing::error!("Failed to fetch clinic members: {}", err);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });

        // Handle member invitation with use_resource
        let submit_future = use_resource(move || async move {
            if should_submit() {
                Some(add_clinic_member(clinic_id, email()).await)
            } else {
                None
            }
        });
        use_effect(move || {
            if let Some(Some(result)) = submit_future.read_unchecked().as_ref() {
                match result {
                    Ok(_) => {
                        refetch_trigger.set(refetch_trigger() + 1);
                        email.set(String::new());
                        add_error.set(None);
                        should_submit.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to add clinic member: {}", err);
                        add_error.set(Some(err.message.clone()));
                        should_submit.set(false);
                    }
                }
            }
        });
    }

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if email().trim().is_empty() {
            add_error.set(Some("An email address is required".to_string()));
            return;
        }

        add_error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx!(
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 {
                    class: "card-title mb-4",
                    "Staff Members"
                }

                if let Some(members) = members() {
                    if members.is_empty() {
                        div {
                            class: "text-center py-8 opacity-50",
                            "No members yet"
                        }
                    } else {
                        div {
                            class: "overflow-x-auto mb-4",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                    }
                                }
                                tbody {
                                    for member in &members {
                                        tr {
                                            td { "{member.name}" }
                                            td { "{member.email}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else if let Some(err) = error() {
                    div {
                        class: "alert alert-error",
                        span { "Error loading members: {err.message}" }
                    }
                } else {
                    div {
                        class: "text-center py-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                }

                form {
                    class: "flex flex-col gap-2",
                    onsubmit: on_submit,
                    label {
                        class: "label",
                        span {
                            class: "label-text",
                            "Add a member by the email of their account"
                        }
                    }
                    div {
                        class: "flex gap-2",
                        input {
                            r#type: "email",
                            class: "input input-bordered flex-1 max-w-md",
                            placeholder: "colleague@example.com",
                            value: "{email()}",
                            oninput: move |evt| email.set(evt.value()),
                            disabled: is_submitting,
                            required: true,
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting,
                            if is_submitting {
                                span { class: "loading loading-spinner loading-sm mr-2" }
                                "Adding..."
                            } else {
                                "Add Member"
                            }
                        }
                    }
                    if let Some(err) = add_error() {
                        div {
                            class: "alert alert-error",
                            span { "{err}" }
                        }
                    }
                }
            }
        }
    )
}
