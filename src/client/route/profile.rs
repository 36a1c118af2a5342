use dioxus::prelude::*;

use crate::{
    client::{
        api::{user::update_profile, ApiClient},
        component::{Page, SubmitButton, SubmitError, TextField},
        constant::SITE_NAME,
        format::{format_date, role_label},
        model::{
            auth::AuthContext,
            form::{submit_form, take_value, FormState, FormValues},
            notification::NotificationContext,
        },
        validation::validate_profile,
    },
    model::user::{UpdateProfileDto, UserDto},
};

/// Only changed, non-empty fields are sent.
pub fn profile_changes(user: &UserDto, mut values: FormValues) -> UpdateProfileDto {
    let changed = |value: String, current: &str| {
        let value = value.trim().to_string();
        (!value.is_empty() && value != current).then_some(value)
    };

    UpdateProfileDto {
        first_name: changed(take_value(&mut values, "first_name"), &user.first_name),
        last_name: changed(take_value(&mut values, "last_name"), &user.last_name),
        email: changed(take_value(&mut values, "email"), &user.email),
    }
}

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let notification = use_context::<NotificationContext>();

    let form = use_signal(|| {
        let state = auth.read();
        let user = state.user();
        FormState::new([
            ("first_name", user.map(|u| u.first_name.as_str()).unwrap_or_default()),
            ("last_name", user.map(|u| u.last_name.as_str()).unwrap_or_default()),
            ("email", user.map(|u| u.email.as_str()).unwrap_or_default()),
        ])
    });

    // Guarded route; the user is only missing for the render that follows a logout
    let Some(user) = auth.read().user().cloned() else {
        return rsx!();
    };

    let onsubmit = {
        let user = user.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let user = user.clone();
            let mut auth = auth;
            let mut notification = notification;
            spawn(async move {
                let saved = submit_form(form, Some(&validate_profile), |values| async move {
                    let changes = profile_changes(&user, values);
                    if changes == UpdateProfileDto::default() {
                        return Ok(());
                    }
                    update_profile(&api, &changes).await?;
                    auth.refresh_user(&api).await.map(|_| ())
                })
                .await;
                if saved {
                    notification.success("Profile updated");
                }
            });
        }
    };

    rsx! {
        Title { "Profile | {SITE_NAME}" }
        Page {
            class: "flex justify-center w-full",
            div {
                class: "w-full max-w-xl flex flex-col gap-6",
                div {
                    class: "flex items-center gap-4",
                    div {
                        class: "avatar avatar-placeholder",
                        div {
                            class: "bg-neutral text-neutral-content w-16 rounded-full",
                            span { class: "text-xl", "{user.initials()}" }
                        }
                    }
                    div {
                        h1 { class: "text-2xl font-bold", "{user.display_name()}" }
                        p { class: "opacity-70", "@{user.username} · {role_label(user.role)}" }
                        if let Some(joined) = user.date_joined {
                            p { class: "text-sm opacity-50", "Joined {format_date(&joined)}" }
                        }
                    }
                }
                form {
                    class: "card bg-base-200 card-body",
                    onsubmit,
                    h2 { class: "card-title", "Edit profile" }
                    div {
                        class: "grid gap-x-4 sm:grid-cols-2",
                        TextField { form, name: "first_name", label: "First name" }
                        TextField { form, name: "last_name", label: "Last name" }
                    }
                    TextField { form, name: "email", label: "Email", input_type: "email" }
                    SubmitError { form }
                    SubmitButton { form, label: "Save", processing_label: "Saving..." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::Role;

    fn user() -> UserDto {
        UserDto {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.org".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Member,
            profile_picture: None,
            date_joined: None,
            is_active: true,
        }
    }

    fn values(first_name: &str, last_name: &str, email: &str) -> FormValues {
        [
            ("first_name", first_name),
            ("last_name", last_name),
            ("email", email),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn sends_only_changed_fields() {
        let changes = profile_changes(&user(), values("Ada", "King", " ada@example.org "));

        assert_eq!(
            changes,
            UpdateProfileDto {
                last_name: Some("King".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn blank_fields_are_left_alone() {
        let changes = profile_changes(&user(), values("", "", ""));

        assert_eq!(changes, UpdateProfileDto::default());
    }
}
