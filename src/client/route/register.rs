use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        component::{page::LoadingPage, Page, SelectField, SubmitButton, SubmitError, TextField},
        constant::SITE_NAME,
        format::role_label,
        model::{
            auth::{AuthContext, AuthState},
            form::{submit_form, take_value, FieldErrors, FormValues, FormState},
        },
        route::login::use_redirect_when_signed_in,
        router::Route,
        validation::validate_registration,
    },
    model::user::{RegisterDto, Role},
};

/// Registration checks plus a valid account type.
fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = validate_registration(values);
    let role = values.get("role").map(String::as_str).unwrap_or_default();
    if Role::parse(role).is_none() {
        errors.insert("role".to_string(), "Please choose an account type".to_string());
    }
    errors
}

#[component]
pub fn Register() -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let form = use_signal(|| {
        FormState::new([
            ("username", ""),
            ("email", ""),
            ("first_name", ""),
            ("last_name", ""),
            ("password", ""),
            ("confirm_password", ""),
            ("role", Role::Member.as_str()),
        ])
    });

    use_redirect_when_signed_in();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut auth = auth;
        spawn(async move {
            submit_form(form, Some(&validate), |mut values| async move {
                let role = Role::parse(&take_value(&mut values, "role")).unwrap_or(Role::Member);
                let data = RegisterDto {
                    username: take_value(&mut values, "username"),
                    email: take_value(&mut values, "email"),
                    password: take_value(&mut values, "password"),
                    first_name: take_value(&mut values, "first_name"),
                    last_name: take_value(&mut values, "last_name"),
                };
                auth.register(&api, data, role).await.map(|_| ())
            })
            .await;
        });
    };

    let roles: Vec<(String, String)> = Role::ALL
        .into_iter()
        .map(|role| (role.as_str().to_string(), role_label(role).to_string()))
        .collect();

    let state = auth.read().clone();

    rsx! {
        Title { "Register | {SITE_NAME}" }
        match state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::Unauthenticated | AuthState::Authenticating => rsx! {
                Page {
                    class: "flex items-center justify-center w-full h-full",
                    div {
                        class: "card bg-base-200 w-full max-w-lg shadow-sm",
                        form {
                            class: "card-body",
                            onsubmit,
                            h1 { class: "card-title text-2xl justify-center", "Create your account" }
                            div {
                                class: "grid gap-x-4 sm:grid-cols-2",
                                TextField { form, name: "first_name", label: "First name" }
                                TextField { form, name: "last_name", label: "Last name" }
                            }
                            TextField { form, name: "username", label: "Username" }
                            TextField { form, name: "email", label: "Email", input_type: "email" }
                            SelectField { form, name: "role", label: "Account type", options: roles }
                            TextField { form, name: "password", label: "Password", input_type: "password" }
                            TextField { form, name: "confirm_password", label: "Confirm password", input_type: "password" }
                            SubmitError { form }
                            SubmitButton { form, label: "Register", processing_label: "Creating account..." }
                            p {
                                class: "text-sm text-center mt-2",
                                "Already registered? "
                                Link { to: Route::Login {}, class: "link", "Login" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::validation::PASSWORD_MISMATCH;

    fn values(role: &str, confirmation: &str) -> FormValues {
        [
            ("username", "ada"),
            ("email", "ada@example.org"),
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("password", "Analytical1"),
            ("confirm_password", confirmation),
            ("role", role),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn accepts_every_account_type() {
        for role in Role::ALL {
            assert!(validate(&values(role.as_str(), "Analytical1")).is_empty());
        }
    }

    #[test]
    fn rejects_unknown_account_type() {
        let errors = validate(&values("admin", "Analytical1"));

        assert!(errors.contains_key("role"));
    }

    #[tokio::test]
    async fn password_mismatch_never_submits() {
        let mut form = FormState::default();
        form.values = values("member", "Analytical2");
        let mut called = false;

        let submitted = submit_form(&mut form, Some(&validate), |_| {
            called = true;
            async { Ok(()) }
        })
        .await;

        assert!(!submitted);
        assert!(!called);
        assert_eq!(form.error("confirm_password"), Some(PASSWORD_MISMATCH));
    }
}
