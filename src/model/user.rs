use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member,
    Coordinator,
    StudentLifeOfficer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Member, Role::Coordinator, Role::StudentLifeOfficer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Coordinator => "coordinator",
            Role::StudentLifeOfficer => "student_life_officer",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

fn default_active() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i32,
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl UserDto {
    /// "First Last", falling back to the username and then the email when no name is set.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if !full.is_empty() {
            full.to_string()
        } else if !self.username.is_empty() {
            self.username.clone()
        } else {
            self.email.clone()
        }
    }

    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UpdateProfileDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
