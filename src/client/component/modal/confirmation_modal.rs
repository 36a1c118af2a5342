use dioxus::prelude::*;

use super::Modal;

/// Yes/no dialog for destructive actions such as deleting a club or leaving one.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: String,
    confirm_text: String,
    confirm_class: Option<String>,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    let confirm_class = confirm_class.unwrap_or_else(|| "btn-error".to_string());

    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            p { class: "py-2", "{message}" }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    onclick: move |_| show.set(false),
                    disabled: is_processing,
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    onclick: move |_| on_confirm.call(()),
                    disabled: is_processing,
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{confirm_text}"
                }
            }
        }
    )
}
