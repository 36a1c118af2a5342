use crate::{
    client::{api::helper::ApiClient, model::error::ApiError},
    model::membership::{JoinClubDto, MembershipDto, MembershipStatus, UpdateMembershipStatusDto},
};

pub async fn list_memberships(api: &ApiClient) -> Result<Vec<MembershipDto>, ApiError> {
    api.get_list("/api/memberships/", "Failed to fetch memberships")
        .await
}

pub async fn get_membership(api: &ApiClient, id: i32) -> Result<MembershipDto, ApiError> {
    let url = format!("/api/memberships/{}/", id);
    api.get(&url, "Failed to fetch membership").await
}

pub async fn list_club_memberships(
    api: &ApiClient,
    club_id: i32,
) -> Result<Vec<MembershipDto>, ApiError> {
    let url = format!("/api/memberships/?club={}", club_id);
    api.get_list(&url, "Failed to fetch club members").await
}

pub async fn list_my_memberships(api: &ApiClient) -> Result<Vec<MembershipDto>, ApiError> {
    api.get_list("/api/memberships/?user=me", "Failed to fetch your memberships")
        .await
}

/// Asks to join a club. The backend creates the membership in `pending` status.
pub async fn join_club(api: &ApiClient, club_id: i32) -> Result<MembershipDto, ApiError> {
    api.post(
        "/api/memberships/",
        &JoinClubDto { club: club_id },
        "Failed to join club",
    )
    .await
}

pub async fn leave_club(api: &ApiClient, membership_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/memberships/{}/", membership_id);
    api.delete(&url, "Failed to leave club").await
}

pub async fn update_membership_status(
    api: &ApiClient,
    membership_id: i32,
    status: MembershipStatus,
) -> Result<MembershipDto, ApiError> {
    let url = format!("/api/memberships/{}/", membership_id);
    api.patch(
        &url,
        &UpdateMembershipStatusDto { status },
        "Failed to update membership",
    )
    .await
}

pub async fn approve_membership_request(
    api: &ApiClient,
    membership_id: i32,
) -> Result<MembershipDto, ApiError> {
    update_membership_status(api, membership_id, MembershipStatus::Active).await
}

pub async fn reject_membership_request(
    api: &ApiClient,
    membership_id: i32,
) -> Result<MembershipDto, ApiError> {
    update_membership_status(api, membership_id, MembershipStatus::Rejected).await
}
