use crate::{
    client::{api::helper::ApiClient, model::error::ApiError},
    model::user::{AuthResponseDto, LoginDto, RegisterDto, Role, UserDto},
};

pub async fn login(api: &ApiClient, credentials: &LoginDto) -> Result<AuthResponseDto, ApiError> {
    api.post("/auth/login/", credentials, "Login failed").await
}

/// Registration endpoint for each role. Student-life officers register under the `rva` path.
pub fn register_path(role: Role) -> &'static str {
    match role {
        Role::Member => "/auth/register/member/",
        Role::Coordinator => "/auth/register/coordinator/",
        Role::StudentLifeOfficer => "/auth/register/rva/",
    }
}

pub async fn register(
    api: &ApiClient,
    data: &RegisterDto,
    role: Role,
) -> Result<AuthResponseDto, ApiError> {
    api.post(register_path(role), data, "Registration failed")
        .await
}

pub async fn current_user(api: &ApiClient) -> Result<UserDto, ApiError> {
    api.get("/auth/me/", "Failed to fetch current user").await
}

/// Forgets the stored session. The backend keeps no session state for token auth, so nothing is
/// sent.
pub fn logout(api: &ApiClient) {
    api.credentials().clear();
}
