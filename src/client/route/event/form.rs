use chrono::Utc;
use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        component::{
            ErrorPage, LoadingPage, Page, SelectField, SubmitButton, SubmitError, TextArea,
            TextField,
        },
        constant::SITE_NAME,
        format::{datetime_input_value, event_type_label},
        model::{
            auth::AuthContext,
            club::ClubStore,
            error::ApiError,
            event::{can_manage_event, EventStore},
            form::{submit_form, take_value, FormState, FormValues},
            notification::NotificationContext,
        },
        router::Route,
        validation::{parse_datetime, validate_event},
    },
    model::{
        club::{ClubDto, ClubStatus},
        event::{CreateEventDto, EventDto, EventType},
        user::UserDto,
    },
};

/// Active clubs whose events `user` may manage.
pub fn manageable_clubs(clubs: &[ClubDto], user: Option<&UserDto>) -> Vec<ClubDto> {
    clubs
        .iter()
        .filter(|club| club.status == ClubStatus::Active && can_manage_event(user, Some(club)))
        .cloned()
        .collect()
}

/// Builds the request body from validated form values.
pub fn event_from_values(mut values: FormValues) -> Result<CreateEventDto, ApiError> {
    let invalid = |field: &str| ApiError::local(format!("Invalid {}", field));

    let start_time = parse_datetime(&take_value(&mut values, "start_time"))
        .ok_or_else(|| invalid("start time"))?;
    let end_time =
        parse_datetime(&take_value(&mut values, "end_time")).ok_or_else(|| invalid("end time"))?;
    let club = take_value(&mut values, "club")
        .parse::<i32>()
        .map_err(|_| invalid("club"))?;
    let event_type = match take_value(&mut values, "event_type").as_str() {
        "private" => EventType::Private,
        _ => EventType::Public,
    };

    Ok(CreateEventDto {
        club,
        title: take_value(&mut values, "title").trim().to_string(),
        description: take_value(&mut values, "description").trim().to_string(),
        start_time,
        end_time,
        location: take_value(&mut values, "location").trim().to_string(),
        event_type,
    })
}

fn initial_values(event: Option<&EventDto>, default_club: Option<i32>) -> FormState {
    let club = event
        .map(|e| e.club)
        .or(default_club)
        .map(|id| id.to_string())
        .unwrap_or_default();
    let start_time = event
        .map(|e| datetime_input_value(&e.start_time))
        .unwrap_or_default();
    let end_time = event
        .map(|e| datetime_input_value(&e.end_time))
        .unwrap_or_default();
    let event_type = match event.map(|e| e.event_type) {
        Some(EventType::Private) => "private",
        _ => "public",
    };

    FormState::new([
        ("title", event.map(|e| e.title.as_str()).unwrap_or_default()),
        (
            "description",
            event.map(|e| e.description.as_str()).unwrap_or_default(),
        ),
        ("start_time", start_time.as_str()),
        ("end_time", end_time.as_str()),
        ("location", event.map(|e| e.location.as_str()).unwrap_or_default()),
        ("event_type", event_type),
        ("club", club.as_str()),
    ])
}

#[component]
pub fn EventCreate() -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let clubs = use_context::<ClubStore>();

    let loaded = use_resource(move || {
        let api = api.clone();
        async move { clubs.fetch(&api).await }
    });

    let user = auth.read().user().cloned();

    rsx! {
        Title { "New event | {SITE_NAME}" }
        match &*loaded.read_unchecked() {
            Some(Ok(all_clubs)) => {
                let options = manageable_clubs(all_clubs, user.as_ref());
                rsx! {
                    if options.is_empty() {
                        ErrorPage { status: 0, message: "You do not manage any active club yet." }
                    } else {
                        EventForm { event: None, clubs: options }
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

#[component]
pub fn EventEdit(id: i32) -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let clubs = use_context::<ClubStore>();
    let events = use_context::<EventStore>();

    let loaded = use_resource(use_reactive!(|id| {
        let api = api.clone();
        async move {
            let (event, all_clubs) =
                futures::try_join!(events.fetch_one(&api, id), clubs.fetch(&api))?;
            Ok::<_, ApiError>((event, all_clubs))
        }
    }));

    let user = auth.read().user().cloned();

    rsx! {
        Title { "Edit event | {SITE_NAME}" }
        match &*loaded.read_unchecked() {
            Some(Ok((event, all_clubs))) => {
                let owner = all_clubs.iter().find(|club| club.id == event.club);
                if can_manage_event(user.as_ref(), owner) {
                    rsx! {
                        EventForm {
                            event: Some(event.clone()),
                            clubs: owner.cloned().into_iter().collect::<Vec<_>>(),
                        }
                    }
                } else {
                    rsx! {
                        ErrorPage { status: 403, message: "Only the club's coordinator can edit this event." }
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

/// Create form when `event` is `None`, edit form otherwise.
#[component]
fn EventForm(event: Option<EventDto>, clubs: Vec<ClubDto>) -> Element {
    let api = use_context::<ApiClient>();
    let events = use_context::<EventStore>();
    let notification = use_context::<NotificationContext>();
    let nav = navigator();

    let editing = event.as_ref().map(|e| e.id);
    let form = {
        let event = event.clone();
        let default_club = clubs.first().map(|club| club.id);
        use_signal(move || initial_values(event.as_ref(), default_club))
    };

    let mut saved_event = use_signal(|| None::<i32>);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut notification = notification;
        spawn(async move {
            let validate =
                |values: &FormValues| validate_event(values, Utc::now(), editing.is_none());
            let saved = submit_form(form, Some(&validate), |values| async move {
                let dto = event_from_values(values)?;
                let saved = match editing {
                    Some(id) => events.update(&api, id, dto.into()).await?,
                    None => events.create(&api, dto).await?,
                };
                saved_event.set(Some(saved.id));
                Ok(())
            })
            .await;
            if let (true, Some(id)) = (saved, saved_event()) {
                notification.success(if editing.is_some() {
                    "Event updated"
                } else {
                    "Event created"
                });
                nav.push(Route::EventDetail { id });
            }
        });
    };

    let club_options: Vec<(String, String)> = clubs
        .iter()
        .map(|club| (club.id.to_string(), club.name.clone()))
        .collect();
    let type_options: Vec<(String, String)> = [EventType::Public, EventType::Private]
        .into_iter()
        .map(|t| {
            let value = match t {
                EventType::Public => "public",
                EventType::Private => "private",
            };
            (value.to_string(), event_type_label(t).to_string())
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
                    if editing.is_some() { "Edit event" } else { "New event" }
                }
                SelectField { form, name: "club", label: "Club", options: club_options }
                TextField { form, name: "title", label: "Title" }
                TextArea { form, name: "description", label: "Description" }
                div {
                    class: "grid gap-x-4 sm:grid-cols-2",
                    TextField { form, name: "start_time", label: "Starts (UTC)", input_type: "datetime-local" }
                    TextField { form, name: "end_time", label: "Ends (UTC)", input_type: "datetime-local" }
                }
                TextField { form, name: "location", label: "Location" }
                SelectField { form, name: "event_type", label: "Visibility", options: type_options }
                SubmitError { form }
                SubmitButton {
                    form,
                    label: if editing.is_some() { "Save changes".to_string() } else { "Create event".to_string() },
                    processing_label: "Saving...",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::model::{event::EventStatus, user::Role};

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn club(id: i32, coordinator: i32, status: ClubStatus) -> ClubDto {
        ClubDto {
            id,
            name: format!("Club {}", id),
            description: String::new(),
            status,
            coordinator: Some(coordinator),
            created_at: None,
            creation_request: None,
        }
    }

    fn user(id: i32, role: Role) -> UserDto {
        UserDto {
            id,
            username: "grace".to_string(),
            email: "grace@example.org".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            role,
            profile_picture: None,
            date_joined: None,
            is_active: true,
        }
    }

    #[test]
    fn coordinator_picks_only_own_active_club() {
        let clubs = [
            club(1, 2, ClubStatus::Active),
            club(2, 3, ClubStatus::Active),
            club(3, 2, ClubStatus::Archived),
        ];

        let own = manageable_clubs(&clubs, Some(&user(2, Role::Coordinator)));
        let all = manageable_clubs(&clubs, Some(&user(9, Role::StudentLifeOfficer)));

        assert_eq!(own.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn builds_event_from_form_values() {
        let dto = event_from_values(values(&[
            ("club", "4"),
            ("title", " Open Night "),
            ("description", "Come and meet the team"),
            ("start_time", "2025-04-01T18:00"),
            ("end_time", "2025-04-01T20:30"),
            ("location", "Hall B"),
            ("event_type", "private"),
        ]))
        .unwrap();

        assert_eq!(dto.club, 4);
        assert_eq!(dto.title, "Open Night");
        assert_eq!(dto.event_type, EventType::Private);
        assert_eq!(dto.end_time - dto.start_time, Duration::minutes(150));
    }

    #[test]
    fn unparsable_club_is_a_local_error() {
        let err = event_from_values(values(&[
            ("start_time", "2025-04-01T18:00"),
            ("end_time", "2025-04-01T20:30"),
            ("club", ""),
        ]))
        .unwrap_err();

        assert_eq!(err.status, 0);
    }

    #[test]
    fn edit_form_starts_from_the_event() {
        let start_time = Utc.with_ymd_and_hms(2025, 4, 1, 18, 0, 0).unwrap();
        let event = EventDto {
            id: 8,
            club: 4,
            title: "Open Night".to_string(),
            description: "Come and meet the team".to_string(),
            start_time,
            end_time: start_time + Duration::hours(2),
            location: "Hall B".to_string(),
            event_type: EventType::Private,
            status: EventStatus::Upcoming,
            created_by: 2,
        };

        let form = initial_values(Some(&event), Some(1));

        assert_eq!(form.value("club"), "4");
        assert_eq!(form.value("start_time"), "2025-04-01T18:00");
        assert_eq!(form.value("end_time"), "2025-04-01T20:00");
        assert_eq!(form.value("event_type"), "private");
    }

    #[test]
    fn past_start_is_rejected_on_create_before_any_request() {
        let now = Utc::now();
        let start = datetime_input_value(&(now - Duration::hours(1)));
        let end = datetime_input_value(&(now + Duration::hours(1)));
        let values = values(&[
            ("title", "Open Night"),
            ("description", "Come and meet the team"),
            ("start_time", start.as_str()),
            ("end_time", end.as_str()),
            ("location", "Hall B"),
            ("club", "4"),
        ]);

        let errors = validate_event(&values, now, true);

        assert_eq!(
            errors.get("start_time").map(String::as_str),
            Some("Start time must be in the future")
        );
        assert!(validate_event(&values, now, false).is_empty());
    }
}
