use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    Public,
    Private,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventDto {
    pub id: i32,
    pub club: i32,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub status: EventStatus,
    pub created_by: i32,
}

impl EventDto {
    pub fn is_upcoming_at(&self, now: DateTime<Utc>) -> bool {
        self.status == EventStatus::Upcoming && self.start_time > now
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateEventDto {
    pub club: i32,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: String,
    pub event_type: EventType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UpdateEventDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}

impl From<CreateEventDto> for UpdateEventDto {
    fn from(dto: CreateEventDto) -> Self {
        Self {
            title: Some(dto.title),
            description: Some(dto.description),
            start_time: Some(dto.start_time),
            end_time: Some(dto.end_time),
            location: Some(dto.location),
            event_type: Some(dto.event_type),
            status: None,
        }
    }
}
