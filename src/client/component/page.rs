use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center w-full h-full",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "flex items-center justify-center w-full h-full",
            div {
                class: "flex flex-col items-center gap-4 text-center",
                if status > 0 {
                    p { class: "text-5xl font-bold", "{status}" }
                }
                p { class: "text-lg", "{message}" }
                Link {
                    to: Route::Home {},
                    class: "btn btn-outline",
                    "Back to home"
                }
            }
        }
    )
}

/// Inline error for failures inside an otherwise rendered page.
#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx!(
        div {
            role: "alert",
            class: "alert alert-error",
            span { "{message}" }
        }
    )
}
