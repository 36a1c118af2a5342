use crate::{
    client::{api::helper::ApiClient, model::error::ApiError},
    model::event::{CreateEventDto, EventDto, UpdateEventDto},
};

pub async fn list_events(api: &ApiClient) -> Result<Vec<EventDto>, ApiError> {
    api.get_list("/api/events/", "Failed to fetch events").await
}

pub async fn list_club_events(api: &ApiClient, club_id: i32) -> Result<Vec<EventDto>, ApiError> {
    let url = format!("/api/events/by-club/{}/", club_id);
    api.get_list(&url, "Failed to fetch club events").await
}

pub async fn get_event(api: &ApiClient, id: i32) -> Result<EventDto, ApiError> {
    let url = format!("/api/events/{}/", id);
    api.get(&url, "Failed to fetch event").await
}

pub async fn create_event(api: &ApiClient, event: &CreateEventDto) -> Result<EventDto, ApiError> {
    api.post("/api/events/", event, "Failed to create event")
        .await
}

pub async fn update_event(
    api: &ApiClient,
    id: i32,
    event: &UpdateEventDto,
) -> Result<EventDto, ApiError> {
    let url = format!("/api/events/{}/", id);
    api.patch(&url, event, "Failed to update event").await
}

pub async fn delete_event(api: &ApiClient, id: i32) -> Result<(), ApiError> {
    let url = format!("/api/events/{}/", id);
    api.delete(&url, "Failed to delete event").await
}

pub async fn register_for_event(api: &ApiClient, id: i32) -> Result<(), ApiError> {
    let url = format!("/api/events/{}/register/", id);
    api.post_empty(&url, "Failed to register for event").await
}

pub async fn unregister_from_event(api: &ApiClient, id: i32) -> Result<(), ApiError> {
    let url = format!("/api/events/{}/unregister/", id);
    api.delete(&url, "Failed to unregister from event").await
}
