use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        Title { "Page Not Found | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-4 items-center justify-center",
            h1 {
                class: "text-5xl font-bold",
                "404"
            }
            p {
                class: "text-lg opacity-70",
                "The page you are looking for does not exist."
            }
            Link {
                to: Route::Home {},
                class: "btn btn-primary",
                "Go Home"
            }
        }
    }
}
