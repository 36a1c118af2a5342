use crate::{
    client::{api::helper::ApiClient, model::error::ApiError},
    model::{
        api::StatusDto,
        club::{ClubRequestDto, CreateClubRequestDto, ReviewClubRequestDto},
    },
};

pub async fn list_club_requests(api: &ApiClient) -> Result<Vec<ClubRequestDto>, ApiError> {
    api.get_list("/api/clubs/requests/", "Failed to fetch club requests")
        .await
}

pub async fn get_club_request(api: &ApiClient, id: i32) -> Result<ClubRequestDto, ApiError> {
    let url = format!("/api/clubs/requests/{}/", id);
    api.get(&url, "Failed to fetch club request").await
}

pub async fn create_club_request(
    api: &ApiClient,
    request: &CreateClubRequestDto,
) -> Result<ClubRequestDto, ApiError> {
    api.post(
        "/api/clubs/requests/",
        request,
        "Failed to submit club request",
    )
    .await
}

pub async fn approve_club_request(api: &ApiClient, id: i32) -> Result<StatusDto, ApiError> {
    let url = format!("/api/clubs/requests/{}/approve/", id);
    api.patch(
        &url,
        &ReviewClubRequestDto::default(),
        "Failed to approve club request",
    )
    .await
}

/// Rejects a pending request. A blank comment is not sent.
pub async fn reject_club_request(
    api: &ApiClient,
    id: i32,
    comment: Option<String>,
) -> Result<StatusDto, ApiError> {
    let url = format!("/api/clubs/requests/{}/reject/", id);
    let review = ReviewClubRequestDto {
        student_life_officer_comment: comment.filter(|c| !c.trim().is_empty()),
    };
    api.patch(&url, &review, "Failed to reject club request")
        .await
}
