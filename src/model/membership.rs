use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    #[default]
    Pending,
    Active,
    Rejected,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRole {
    #[default]
    Member,
    Treasurer,
    Secretary,
}

/// A user's membership of a club. A membership in `Pending` status is a membership request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MembershipDto {
    pub id: i32,
    pub user: i32,
    pub club: i32,
    #[serde(default)]
    pub role: MembershipRole,
    #[serde(default)]
    pub status: MembershipStatus,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JoinClubDto {
    pub club: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpdateMembershipStatusDto {
    pub status: MembershipStatus,
}
