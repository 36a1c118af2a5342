use dioxus::prelude::*;

use crate::client::model::notification::NotificationContext;

#[component]
pub fn NotificationBanner() -> Element {
    let mut notification = use_context::<NotificationContext>();

    let current = notification.read().clone();
    if !current.open {
        return rsx!();
    }

    let alert_class = current.severity.alert_class();

    rsx!(
        div {
            class: "toast toast-top toast-center top-24 z-30",
            div {
                role: "alert",
                class: "alert {alert_class} shadow-lg",
                span { "{current.message}" }
                button {
                    class: "btn btn-sm btn-circle btn-ghost",
                    onclick: move |_| notification.hide(),
                    "✕"
                }
            }
        }
    )
}
