use dioxus::prelude::*;

use crate::{
    client::{
        api::{user::list_coordinators, ApiClient},
        component::{
            ErrorPage, LoadingPage, Page, SelectField, SubmitButton, SubmitError, TextArea,
            TextField,
        },
        constant::SITE_NAME,
        format::club_status_label,
        model::{
            auth::AuthContext,
            club::ClubStore,
            error::ApiError,
            event::can_manage_event,
            form::{submit_form, take_value, FormState, FormValues},
            notification::NotificationContext,
        },
        router::Route,
        validation::validate_club,
    },
    model::{
        club::{ClubDto, ClubStatus, CreateClubDto, UpdateClubDto},
        user::{Role, UserDto},
    },
};

/// Options of the coordinator select. The empty value leaves the club without a coordinator.
pub fn coordinator_options(coordinators: &[UserDto]) -> Vec<(String, String)> {
    std::iter::once((String::new(), "No coordinator".to_string()))
        .chain(
            coordinators
                .iter()
                .map(|user| (user.id.to_string(), user.display_name())),
        )
        .collect()
}

pub fn club_from_values(mut values: FormValues) -> CreateClubDto {
    CreateClubDto {
        name: take_value(&mut values, "name").trim().to_string(),
        description: take_value(&mut values, "description").trim().to_string(),
        coordinator: take_value(&mut values, "coordinator").parse().ok(),
    }
}

/// Only changed fields are sent.
///
/// Coordinator and status are officer decisions; a coordinator's values for them are ignored.
pub fn club_changes(club: &ClubDto, mut values: FormValues, officer: bool) -> UpdateClubDto {
    let changed = |value: String, current: &str| {
        let value = value.trim().to_string();
        (value != current).then_some(value)
    };

    let mut changes = UpdateClubDto {
        name: changed(take_value(&mut values, "name"), &club.name),
        description: changed(take_value(&mut values, "description"), &club.description),
        ..Default::default()
    };

    if officer {
        changes.coordinator = take_value(&mut values, "coordinator")
            .parse::<i32>()
            .ok()
            .filter(|id| club.coordinator != Some(*id));
        changes.status = ClubStatus::parse(&take_value(&mut values, "status"))
            .filter(|status| *status != club.status);
    }

    changes
}

fn initial_values(club: Option<&ClubDto>) -> FormState {
    let coordinator = club
        .and_then(|c| c.coordinator)
        .map(|id| id.to_string())
        .unwrap_or_default();
    let status = club.map(|c| c.status).unwrap_or(ClubStatus::Active);

    FormState::new([
        ("name", club.map(|c| c.name.as_str()).unwrap_or_default()),
        (
            "description",
            club.map(|c| c.description.as_str()).unwrap_or_default(),
        ),
        ("coordinator", coordinator.as_str()),
        ("status", status.as_str()),
    ])
}

/// Direct club creation, reserved to officers. Coordinators go through a creation request.
#[component]
pub fn ClubCreate() -> Element {
    let api = use_context::<ApiClient>();

    let coordinators = use_resource(move || {
        let api = api.clone();
        async move { list_coordinators(&api).await }
    });

    rsx! {
        Title { "New club | {SITE_NAME}" }
        match &*coordinators.read_unchecked() {
            Some(Ok(coordinators)) => rsx! {
                ClubForm { club: None, coordinators: coordinators.clone(), officer: true }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            None => rsx! { LoadingPage {} },
        }
    }
}

#[component]
pub fn ClubEdit(id: i32) -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let clubs = use_context::<ClubStore>();

    let loaded = use_resource(use_reactive!(|id| {
        let api = api.clone();
        let officer = auth.read().role() == Some(Role::StudentLifeOfficer);
        async move {
            // Only officers reassign coordinators
            let coordinators = async {
                if officer {
                    list_coordinators(&api).await
                } else {
                    Ok(Vec::new())
                }
            };
            let (club, coordinators) =
                futures::try_join!(clubs.fetch_one(&api, id), coordinators)?;
            Ok::<_, ApiError>((club, coordinators))
        }
    }));

    let user = auth.read().user().cloned();
    let officer = user.as_ref().map(|u| u.role) == Some(Role::StudentLifeOfficer);

    rsx! {
        Title { "Edit club | {SITE_NAME}" }
        match &*loaded.read_unchecked() {
            Some(Ok((club, coordinators))) => {
                if can_manage_event(user.as_ref(), Some(club)) {
                    rsx! {
                        ClubForm {
                            club: Some(club.clone()),
                            coordinators: coordinators.clone(),
                            officer,
                        }
                    }
                } else {
                    rsx! {
                        ErrorPage { status: 403, message: "Only the club's coordinator can edit this club." }
                    }
                }
            }
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            None => rsx! { LoadingPage {} },
        }
    }
}

/// Create form when `club` is `None`, edit form otherwise.
#[component]
fn ClubForm(club: Option<ClubDto>, coordinators: Vec<UserDto>, officer: bool) -> Element {
    let api = use_context::<ApiClient>();
    let clubs = use_context::<ClubStore>();
    let notification = use_context::<NotificationContext>();
    let nav = navigator();

    let editing = club.is_some();
    let form = {
        let club = club.clone();
        use_signal(move || initial_values(club.as_ref()))
    };

    let mut saved_club = use_signal(|| None::<i32>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let club = club.clone();
        let mut notification = notification;
        spawn(async move {
            let saved = submit_form(form, Some(&validate_club), |values| async move {
                let saved = match club {
                    Some(club) => {
                        let changes = club_changes(&club, values, officer);
                        clubs.update(&api, club.id, changes).await?
                    }
                    None => clubs.create(&api, club_from_values(values)).await?,
                };
                saved_club.set(Some(saved.id));
                Ok(())
            })
            .await;
            if let (true, Some(id)) = (saved, saved_club()) {
                notification.success(if editing { "Club updated" } else { "Club created" });
                nav.push(Route::ClubDetail { id });
            }
        });
    };

    let coordinator_choices = coordinator_options(&coordinators);
    let status_options: Vec<(String, String)> = ClubStatus::ALL
        .into_iter()
        .map(|status| {
            (
                status.as_str().to_string(),
                club_status_label(status).to_string(),
            )
        })
        .collect();

    rsx! {
        Page {
            class: "flex justify-center w-full",
            form {
                class: "card bg-base-200 card-body w-full max-w-2xl",
                onsubmit,
                h1 {
                    class: "card-title text-2xl",
                    if editing { "Edit club" } else { "New club" }
                }
                TextField { form, name: "name", label: "Club name" }
                TextArea { form, name: "description", label: "Objectives" }
                if officer {
                    SelectField { form, name: "coordinator", label: "Coordinator", options: coordinator_choices }
                    if editing {
                        SelectField { form, name: "status", label: "Status", options: status_options }
                    }
                }
                SubmitError { form }
                SubmitButton {
                    form,
                    label: if editing { "Save changes".to_string() } else { "Create club".to_string() },
                    processing_label: "Saving...",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn club() -> ClubDto {
        ClubDto {
            id: 3,
            name: "Robotics".to_string(),
            description: "We build small robots, program them and race them every Friday".to_string(),
            status: ClubStatus::Active,
            coordinator: Some(2),
            created_at: None,
            creation_request: None,
        }
    }

    fn coordinator(id: i32, first_name: &str) -> UserDto {
        UserDto {
            id,
            username: format!("user{}", id),
            email: format!("user{}@example.org", id),
            first_name: first_name.to_string(),
            last_name: "Hopper".to_string(),
            role: Role::Coordinator,
            profile_picture: None,
            date_joined: None,
            is_active: true,
        }
    }

    #[test]
    fn coordinator_choice_may_stay_empty() {
        let options = coordinator_options(&[coordinator(2, "Grace"), coordinator(5, "Anita")]);

        assert_eq!(options[0], (String::new(), "No coordinator".to_string()));
        assert_eq!(options[1], ("2".to_string(), "Grace Hopper".to_string()));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn new_club_without_coordinator() {
        let dto = club_from_values(values(&[
            ("name", " Chess Club "),
            ("description", "Weekly games"),
            ("coordinator", ""),
        ]));

        assert_eq!(dto.name, "Chess Club");
        assert_eq!(dto.coordinator, None);
        assert_eq!(
            club_from_values(values(&[("coordinator", "5")])).coordinator,
            Some(5)
        );
    }

    #[test]
    fn edit_sends_only_changed_fields() {
        let changes = club_changes(
            &club(),
            values(&[
                ("name", "Robotics "),
                ("description", "We build robots"),
                ("coordinator", "2"),
                ("status", "active"),
            ]),
            true,
        );

        assert_eq!(
            changes,
            UpdateClubDto {
                description: Some("We build robots".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn only_officers_reassign_or_archive() {
        let form = values(&[
            ("name", "Robotics"),
            ("description", "We build small robots, program them and race them every Friday"),
            ("coordinator", "5"),
            ("status", "archived"),
        ]);

        let by_coordinator = club_changes(&club(), form.clone(), false);
        let by_officer = club_changes(&club(), form, true);

        assert_eq!(by_coordinator, UpdateClubDto::default());
        assert_eq!(by_officer.coordinator, Some(5));
        assert_eq!(by_officer.status, Some(ClubStatus::Archived));
    }

    #[test]
    fn edit_form_starts_from_the_club() {
        let form = initial_values(Some(&club()));

        assert_eq!(form.value("name"), "Robotics");
        assert_eq!(form.value("coordinator"), "2");
        assert_eq!(form.value("status"), "active");
        assert!(validate_club(&form.values).is_empty());
        assert!(validate_club(&initial_values(None).values).contains_key("name"));
    }
}
