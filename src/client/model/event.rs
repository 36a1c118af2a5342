use dioxus::prelude::*;

use crate::{
    client::{
        api::{
            event::{
                create_event, delete_event, get_event, list_club_events, list_events,
                register_for_event, unregister_from_event, update_event,
            },
            ApiClient,
        },
        model::{
            cache::{track, ListCache},
            error::ApiError,
        },
    },
    model::{
        club::ClubDto,
        event::{CreateEventDto, EventDto, UpdateEventDto},
        user::{Role, UserDto},
    },
};

/// Whether `user` may edit or delete the events of `club`.
///
/// Student-life officers manage every club's events; a coordinator manages only their own club's.
pub fn can_manage_event(user: Option<&UserDto>, club: Option<&ClubDto>) -> bool {
    let Some(user) = user else {
        return false;
    };

    match user.role {
        Role::StudentLifeOfficer => true,
        Role::Coordinator => club.is_some_and(|club| club.coordinator == Some(user.id)),
        Role::Member => false,
    }
}

#[derive(Clone, Copy)]
pub struct EventStore {
    inner: Signal<ListCache<EventDto>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(ListCache::default()),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = ListCache<EventDto>> + '_ {
        self.inner.read()
    }

    pub async fn fetch(&self, api: &ApiClient) -> Result<Vec<EventDto>, ApiError> {
        track(self.inner, "fetch events", list_events(api), |list, events| {
            list.replace_all(events.clone())
        })
        .await
    }

    pub async fn fetch_for_club(
        &self,
        api: &ApiClient,
        club_id: i32,
    ) -> Result<Vec<EventDto>, ApiError> {
        track(
            self.inner,
            "fetch club events",
            list_club_events(api, club_id),
            |list, events| list.replace_all(events.clone()),
        )
        .await
    }

    pub async fn fetch_one(&self, api: &ApiClient, id: i32) -> Result<EventDto, ApiError> {
        track(self.inner, "fetch event", get_event(api, id), |list, event| {
            list.upsert(event.clone())
        })
        .await
    }

    pub async fn create(
        &self,
        api: &ApiClient,
        event: CreateEventDto,
    ) -> Result<EventDto, ApiError> {
        track(
            self.inner,
            "create event",
            create_event(api, &event),
            |list, event| list.append(event.clone()),
        )
        .await
    }

    pub async fn update(
        &self,
        api: &ApiClient,
        id: i32,
        event: UpdateEventDto,
    ) -> Result<EventDto, ApiError> {
        track(
            self.inner,
            "update event",
            update_event(api, id, &event),
            |list, event| list.upsert(event.clone()),
        )
        .await
    }

    pub async fn delete(&self, api: &ApiClient, id: i32) -> Result<(), ApiError> {
        track(self.inner, "delete event", delete_event(api, id), |list, _| {
            list.remove(id)
        })
        .await
    }

    /// Registers the current user, then re-fetches the event.
    pub async fn register(&self, api: &ApiClient, id: i32) -> Result<EventDto, ApiError> {
        track(
            self.inner,
            "register for event",
            register_for_event(api, id),
            |_, _| {},
        )
        .await?;
        self.fetch_one(api, id).await
    }

    /// Unregisters the current user, then re-fetches the event.
    pub async fn unregister(&self, api: &ApiClient, id: i32) -> Result<EventDto, ApiError> {
        track(
            self.inner,
            "unregister from event",
            unregister_from_event(api, id),
            |_, _| {},
        )
        .await?;
        self.fetch_one(api, id).await
    }
}
