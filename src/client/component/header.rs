use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaRightFromBracket, Icon};

use crate::client::{
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();
    let state = auth_context.read();

    let user_logged_in = state.is_authenticated();
    let user_is_admin = state.is_admin();
    let fetch_completed = !matches!(&*state, AuthState::Initializing);

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            div {
                Link {
                    to: Route::Home {},
                    p {
                        class: "md:text-xl font-semibold text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if fetch_completed && user_logged_in {
                if user_is_admin {
                    Link {
                        to: Route::AdminUsers {},
                        class: "btn btn-outline",
                        p {
                            "Users"
                        }
                    }
                }
                a {
                    href: "/api/auth/logout",
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 18,
                            height: 18,
                            icon: FaRightFromBracket
                        }
                        p {
                            "Logout"
                        }
                    }
                }
            } else if fetch_completed {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    p {
                        "Login"
                    }
                }
            }
        }
    })
}
