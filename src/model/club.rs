use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClubStatus {
    #[default]
    Pending,
    Active,
    Archived,
}

impl ClubStatus {
    pub const ALL: [ClubStatus; 3] = [ClubStatus::Pending, ClubStatus::Active, ClubStatus::Archived];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClubStatus::Pending => "pending",
            ClubStatus::Active => "active",
            ClubStatus::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Option<ClubStatus> {
        ClubStatus::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClubDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: ClubStatus,
    /// User id of the club's single coordinator, if one is assigned.
    #[serde(default)]
    pub coordinator: Option<i32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub creation_request: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreateClubDto {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<i32>,
}

/// Partial club update. Fields left as `None` are not sent and keep their value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UpdateClubDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClubStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClubRequestDto {
    pub id: i32,
    pub club_name: String,
    pub description: String,
    #[serde(default)]
    pub status: RequestStatus,
    /// User id of the requesting coordinator.
    pub coordinator: i32,
    #[serde(default)]
    pub student_life_officer_comment: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl ClubRequestDto {
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreateClubRequestDto {
    pub club_name: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReviewClubRequestDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_life_officer_comment: Option<String>,
}
