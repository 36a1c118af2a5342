use crate::{
    client::{api::helper::ApiClient, model::error::ApiError},
    model::club::{ClubDto, CreateClubDto, UpdateClubDto},
};

pub async fn list_clubs(api: &ApiClient) -> Result<Vec<ClubDto>, ApiError> {
    api.get_list("/api/clubs/", "Failed to fetch clubs").await
}

pub async fn get_club(api: &ApiClient, id: i32) -> Result<ClubDto, ApiError> {
    let url = format!("/api/clubs/{}/", id);
    api.get(&url, "Failed to fetch club").await
}

pub async fn create_club(api: &ApiClient, club: &CreateClubDto) -> Result<ClubDto, ApiError> {
    api.post("/api/clubs/", club, "Failed to create club").await
}

pub async fn update_club(
    api: &ApiClient,
    id: i32,
    club: &UpdateClubDto,
) -> Result<ClubDto, ApiError> {
    let url = format!("/api/clubs/{}/", id);
    api.patch(&url, club, "Failed to update club").await
}

pub async fn delete_club(api: &ApiClient, id: i32) -> Result<(), ApiError> {
    let url = format!("/api/clubs/{}/", id);
    api.delete(&url, "Failed to delete club").await
}
