pub mod comment_modal;
pub mod confirmation_modal;

use dioxus::prelude::*;

pub use comment_modal::CommentModal;
pub use confirmation_modal::ConfirmationModal;

/// Dialog shown while `show` is true.
///
/// Escape, the close button and a backdrop click all close it unless `prevent_close` is set,
/// which callers use while a request is in flight.
#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    prevent_close: bool,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();
    let mut close = move || {
        if !prevent_close {
            show.set(false);
        }
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            role: "dialog",
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box {class} border border-base-300 w-11/12 max-w-lg",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 {
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    if !prevent_close {
                        button {
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: move |_| close(),
                            "✕"
                        }
                    }
                }
                div {
                    {children}
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| close(),
            }
        }
    )
}
