use dioxus::prelude::*;

use super::Modal;

/// Asks for an optional comment before a review action. A blank comment is passed as `None`.
#[component]
pub fn CommentModal(
    show: Signal<bool>,
    title: String,
    label: String,
    confirm_text: String,
    confirm_class: String,
    is_processing: bool,
    on_confirm: EventHandler<Option<String>>,
) -> Element {
    let mut comment = use_signal(String::new);

    // Start from an empty comment every time the dialog opens
    use_effect(move || {
        if show() {
            comment.set(String::new());
        }
    });

    rsx!(
        Modal {
            show,
            title,
            prevent_close: is_processing,
            fieldset {
                class: "fieldset",
                legend { class: "fieldset-legend", "{label}" }
                textarea {
                    class: "textarea w-full",
                    rows: 3,
                    value: "{comment}",
                    disabled: is_processing,
                    oninput: move |evt| comment.set(evt.value()),
                }
            }
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
                    disabled: is_processing,
                    onclick: move |_| {
                        let text = comment.peek().trim().to_string();
                        on_confirm.call((!text.is_empty()).then_some(text));
                    },
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                    }
                    "{confirm_text}"
                }
            }
        }
    )
}
