use std::{collections::BTreeMap, future::Future};

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::model::error::ApiError;

pub type FormValues = BTreeMap<String, String>;
pub type FieldErrors = BTreeMap<String, String>;

/// Error key for failures of the submit callback itself rather than of one field.
pub const SUBMIT_ERROR_KEY: &str = "submit";

/// Removes `name` from submitted values, reading a missing field as empty.
pub fn take_value(values: &mut FormValues, name: &str) -> String {
    values.remove(name).unwrap_or_default()
}

/// Values and errors of one form.
///
/// Fields are addressed by name. A field missing from `values` reads as empty.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FormState {
    initial: FormValues,
    pub values: FormValues,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl FormState {
    pub fn new<'a>(initial: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let initial: FormValues = initial
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Sets a field's value and clears that field's error.
    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
        self.errors.remove(name);
    }

    /// Validates the current values and marks the form as submitting.
    ///
    /// Returns the values to submit, or `None` when validation produced errors, in which case the
    /// errors replace the previous ones and nothing should be sent.
    pub fn begin_submit(
        &mut self,
        validate: Option<&dyn Fn(&FormValues) -> FieldErrors>,
    ) -> Option<FormValues> {
        let errors = validate.map(|validate| validate(&self.values)).unwrap_or_default();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.errors.clear();
        self.submitting = true;
        Some(self.values.clone())
    }

    /// Records the outcome of the submit callback. A failure is kept under `submit`.
    pub fn finish_submit(&mut self, result: &Result<(), ApiError>) {
        self.submitting = false;
        if let Err(error) = result {
            self.errors
                .insert(SUBMIT_ERROR_KEY.to_string(), error.message.clone());
        }
    }

    /// Restores the initial values and clears every error.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.submitting = false;
    }
}

/// Where a [`FormState`] lives: a signal in views, a plain value in tests.
pub trait FormHandle {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R;
}

impl FormHandle for Signal<FormState> {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R {
        f(&mut *self.write())
    }
}

impl FormHandle for &mut FormState {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R {
        f(&mut **self)
    }
}

/// Validates, runs `on_submit` with the values and captures its failure.
///
/// Returns whether the callback ran and succeeded. The form is not borrowed while `on_submit`
/// runs, so a view holding it in a signal keeps re-rendering.
pub async fn submit_form<H, F, Fut>(
    mut form: H,
    validate: Option<&dyn Fn(&FormValues) -> FieldErrors>,
    on_submit: F,
) -> bool
where
    H: FormHandle,
    F: FnOnce(FormValues) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let Some(values) = form.with_form(|form| form.begin_submit(validate)) else {
        tracing::debug!("Form submission blocked by validation");
        return false;
    };

    let result = on_submit(values).await;
    form.with_form(|form| form.finish_submit(&result));
    result.is_ok()
}
