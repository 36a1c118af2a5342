use crate::{
    client::{api::helper::ApiClient, model::error::ApiError},
    model::user::{UpdateProfileDto, UserDto},
};

pub async fn list_coordinators(api: &ApiClient) -> Result<Vec<UserDto>, ApiError> {
    api.get_list("/users/coordinators/", "Failed to fetch coordinators")
        .await
}

pub async fn list_members(api: &ApiClient) -> Result<Vec<UserDto>, ApiError> {
    api.get_list("/users/members/", "Failed to fetch members")
        .await
}

pub async fn list_student_life_officers(api: &ApiClient) -> Result<Vec<UserDto>, ApiError> {
    api.get_list("/users/rvas/", "Failed to fetch student life officers")
        .await
}

pub async fn update_profile(
    api: &ApiClient,
    profile: &UpdateProfileDto,
) -> Result<UserDto, ApiError> {
    api.patch("/auth/me/", profile, "Failed to update profile")
        .await
}
