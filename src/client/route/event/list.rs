use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        component::{ErrorAlert, EventCard, Page},
        constant::SITE_NAME,
        model::{auth::AuthContext, club::ClubStore, event::EventStore},
        router::Route,
    },
    model::{event::EventDto, user::Role},
};

/// Events matching a title search, soonest first. With `upcoming_only`, past and cancelled
/// events are left out.
pub fn filter_events(
    events: &[EventDto],
    now: DateTime<Utc>,
    upcoming_only: bool,
    query: &str,
) -> Vec<EventDto> {
    let query = query.trim().to_lowercase();

    let mut filtered: Vec<EventDto> = events
        .iter()
        .filter(|event| !upcoming_only || event.is_upcoming_at(now))
        .filter(|event| query.is_empty() || event.title.to_lowercase().contains(&query))
        .cloned()
        .collect();
    filtered.sort_by_key(|event| event.start_time);
    filtered
}

#[component]
pub fn EventList() -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let events = use_context::<EventStore>();
    let clubs = use_context::<ClubStore>();
    let mut query = use_signal(String::new);
    let mut upcoming_only = use_signal(|| true);

    use_resource(move || {
        let api = api.clone();
        async move {
            // Club names are only decoration, a failure is already logged by the store
            let _ = clubs.fetch(&api).await;
            events.fetch(&api).await
        }
    });

    let can_create = auth
        .read()
        .has_role(&[Role::Coordinator, Role::StudentLifeOfficer]);
    let club_names: HashMap<i32, String> = clubs
        .read()
        .items
        .iter()
        .map(|club| (club.id, club.name.clone()))
        .collect();
    let state = events.read();
    let visible = filter_events(&state.items, Utc::now(), upcoming_only(), &query());

    rsx! {
        Title { "Events | {SITE_NAME}" }
        Page {
            class: "flex justify-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                div {
                    class: "flex flex-wrap justify-between items-center gap-4",
                    h1 { class: "text-2xl font-bold", "Events" }
                    div {
                        class: "flex flex-wrap gap-4 items-center",
                        input {
                            r#type: "search",
                            class: "input",
                            placeholder: "Search events",
                            value: "{query}",
                            oninput: move |evt| query.set(evt.value()),
                        }
                        label {
                            class: "label cursor-pointer gap-2",
                            input {
                                r#type: "checkbox",
                                class: "toggle toggle-sm",
                                checked: upcoming_only(),
                                onchange: move |evt| upcoming_only.set(evt.checked()),
                            }
                            "Upcoming only"
                        }
                        if can_create {
                            Link { to: Route::EventCreate {}, class: "btn btn-primary", "New event" }
                        }
                    }
                }
                if let Some(error) = state.error.clone() {
                    ErrorAlert { message: error }
                }
                if state.loading && state.items.is_empty() {
                    div {
                        class: "flex justify-center",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                } else if visible.is_empty() {
                    p { class: "opacity-60", "No event to show." }
                } else {
                    div {
                        class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                        for event in visible {
                            EventCard {
                                key: "{event.id}",
                                club_name: club_names.get(&event.club).cloned(),
                                event,
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
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::model::event::{EventStatus, EventType};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn event(id: i32, title: &str, days: i64, status: EventStatus) -> EventDto {
        let start_time = now() + Duration::days(days);
        EventDto {
            id,
            club: 1,
            title: title.to_string(),
            description: String::new(),
            start_time,
            end_time: start_time + Duration::hours(2),
            location: "Library".to_string(),
            event_type: EventType::Public,
            status,
            created_by: 2,
        }
    }

    fn events() -> Vec<EventDto> {
        vec![
            event(1, "Spring Tournament", 10, EventStatus::Upcoming),
            event(2, "Winter Blitz", -30, EventStatus::Completed),
            event(3, "Open Night", 2, EventStatus::Upcoming),
            event(4, "Spring Social", 5, EventStatus::Cancelled),
        ]
    }

    fn ids(events: Vec<EventDto>) -> Vec<i32> {
        events.into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn upcoming_events_sorted_by_start() {
        assert_eq!(ids(filter_events(&events(), now(), true, "")), vec![3, 1]);
    }

    #[test]
    fn all_events_include_past_and_cancelled() {
        assert_eq!(
            ids(filter_events(&events(), now(), false, "")),
            vec![2, 3, 4, 1]
        );
    }

    #[test]
    fn search_matches_title() {
        assert_eq!(ids(filter_events(&events(), now(), false, "spring")), vec![4, 1]);
    }
}
