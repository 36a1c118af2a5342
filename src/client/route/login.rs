use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        component::{page::LoadingPage, Page, SubmitButton, SubmitError, TextField},
        constant::SITE_NAME,
        model::{
            auth::{AuthContext, AuthState},
            form::{submit_form, take_value, FormState},
        },
        router::Route,
        validation::validate_login,
    },
    model::user::LoginDto,
};

/// Sends signed-in users to their landing page. Shared by the login and registration pages.
pub fn use_redirect_when_signed_in() {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if let Some(role) = auth.read().role() {
            nav.replace(Route::landing(role));
        }
    });
}

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let form = use_signal(|| FormState::new([("username", ""), ("password", "")]));

    use_redirect_when_signed_in();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut auth = auth;
        spawn(async move {
            submit_form(form, Some(&validate_login), |mut values| async move {
                let credentials = LoginDto {
                    username: take_value(&mut values, "username"),
                    password: take_value(&mut values, "password"),
                };
                auth.login(&api, credentials).await.map(|_| ())
            })
            .await;
        });
    };

    let state = auth.read().clone();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::Unauthenticated | AuthState::Authenticating => rsx! {
                Page {
                    class: "flex items-center justify-center w-full h-full",
                    div {
                        class: "card bg-base-200 w-full max-w-md shadow-sm",
                        form {
                            class: "card-body",
                            onsubmit,
                            h1 { class: "card-title text-2xl justify-center", "Sign in to {SITE_NAME}" }
                            TextField { form, name: "username", label: "Username" }
                            TextField { form, name: "password", label: "Password", input_type: "password" }
                            SubmitError { form }
                            SubmitButton { form, label: "Login", processing_label: "Signing in..." }
                            p {
                                class: "text-sm text-center mt-2",
                                "No account yet? "
                                Link { to: Route::Register {}, class: "link", "Register" }
                            }
                        }
                    }
                }
            }
        }
    }
}
