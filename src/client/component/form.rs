//! Inputs bound by name to a [`FormState`] signal.

use dioxus::prelude::*;

use crate::client::model::form::{FormState, SUBMIT_ERROR_KEY};

#[component]
fn FieldError(form: Signal<FormState>, name: String) -> Element {
    let error = form.read().error(&name).map(str::to_string);

    rsx!(
        if let Some(error) = error {
            p { class: "label text-error text-sm", "{error}" }
        }
    )
}

#[component]
pub fn TextField(
    mut form: Signal<FormState>,
    name: String,
    label: String,
    input_type: Option<&'static str>,
    placeholder: Option<String>,
) -> Element {
    let value = form.read().value(&name).to_string();
    let has_error = form.read().error(&name).is_some();
    let disabled = form.read().submitting;
    let field = name.clone();

    rsx!(
        fieldset {
            class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            input {
                r#type: input_type.unwrap_or("text"),
                class: "input w-full",
                class: if has_error { "input-error" },
                name: "{name}",
                value: "{value}",
                placeholder: placeholder.unwrap_or_default(),
                disabled,
                oninput: move |evt| form.write().handle_change(&field, evt.value()),
            }
            FieldError { form, name: name.clone() }
        }
    )
}

#[component]
pub fn TextArea(
    mut form: Signal<FormState>,
    name: String,
    label: String,
    rows: Option<u32>,
) -> Element {
    let value = form.read().value(&name).to_string();
    let has_error = form.read().error(&name).is_some();
    let disabled = form.read().submitting;
    let field = name.clone();

    rsx!(
        fieldset {
            class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            textarea {
                class: "textarea w-full",
                class: if has_error { "textarea-error" },
                name: "{name}",
                rows: rows.unwrap_or(4),
                value: "{value}",
                disabled,
                oninput: move |evt| form.write().handle_change(&field, evt.value()),
            }
            FieldError { form, name: name.clone() }
        }
    )
}

/// A select whose options are `(value, label)` pairs.
#[component]
pub fn SelectField(
    mut form: Signal<FormState>,
    name: String,
    label: String,
    options: Vec<(String, String)>,
) -> Element {
    let selected = form.read().value(&name).to_string();
    let has_error = form.read().error(&name).is_some();
    let disabled = form.read().submitting;
    let field = name.clone();

    rsx!(
        fieldset {
            class: "fieldset",
            legend { class: "fieldset-legend", "{label}" }
            select {
                class: "select w-full",
                class: if has_error { "select-error" },
                name: "{name}",
                disabled,
                onchange: move |evt| form.write().handle_change(&field, evt.value()),
                option { value: "", disabled: true, selected: selected.is_empty(), "Select..." }
                for (value, text) in options {
                    option {
                        key: "{value}",
                        selected: value == selected,
                        value: "{value}",
                        "{text}"
                    }
                }
            }
            FieldError { form, name: name.clone() }
        }
    )
}

/// Error of the submit callback, shown above the form actions.
#[component]
pub fn SubmitError(form: Signal<FormState>) -> Element {
    let error = form.read().error(SUBMIT_ERROR_KEY).map(str::to_string);

    rsx!(
        if let Some(error) = error {
            div {
                role: "alert",
                class: "alert alert-error alert-soft my-2",
                span { "{error}" }
            }
        }
    )
}

#[component]
pub fn SubmitButton(form: Signal<FormState>, label: String, processing_label: String) -> Element {
    let submitting = form.read().submitting;

    rsx!(
        button {
            r#type: "submit",
            class: "btn btn-primary w-full mt-4",
            disabled: submitting,
            if submitting {
                span { class: "loading loading-spinner loading-sm mr-2" }
                "{processing_label}"
            } else {
                "{label}"
            }
        }
    )
}
