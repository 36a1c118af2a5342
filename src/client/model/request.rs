use dioxus::prelude::*;

use crate::{
    client::{
        api::{
            club_request::{
                approve_club_request, create_club_request, list_club_requests,
                reject_club_request,
            },
            ApiClient,
        },
        model::{
            cache::{track, ListCache},
            error::ApiError,
        },
    },
    model::club::{ClubRequestDto, CreateClubRequestDto},
};

/// Club creation requests, as seen by the officer reviewing them or the coordinator who sent them.
#[derive(Clone, Copy)]
pub struct RequestStore {
    inner: Signal<ListCache<ClubRequestDto>>,
}

impl RequestStore {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(ListCache::default()),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = ListCache<ClubRequestDto>> + '_ {
        self.inner.read()
    }

    pub async fn fetch(&self, api: &ApiClient) -> Result<Vec<ClubRequestDto>, ApiError> {
        track(
            self.inner,
            "fetch club requests",
            list_club_requests(api),
            |list, requests| list.replace_all(requests.clone()),
        )
        .await
    }

    pub async fn create(
        &self,
        api: &ApiClient,
        request: CreateClubRequestDto,
    ) -> Result<ClubRequestDto, ApiError> {
        track(
            self.inner,
            "submit club request",
            create_club_request(api, &request),
            |list, request| list.append(request.clone()),
        )
        .await
    }

    /// Approves a request, then re-fetches the list so its new status comes from the backend.
    pub async fn approve(&self, api: &ApiClient, id: i32) -> Result<(), ApiError> {
        track(
            self.inner,
            "approve club request",
            approve_club_request(api, id),
            |_, _| {},
        )
        .await?;
        self.fetch(api).await.map(|_| ())
    }

    /// Rejects a request with an optional comment, then re-fetches the list.
    pub async fn reject(
        &self,
        api: &ApiClient,
        id: i32,
        comment: Option<String>,
    ) -> Result<(), ApiError> {
        track(
            self.inner,
            "reject club request",
            reject_club_request(api, id, comment),
            |_, _| {},
        )
        .await?;
        self.fetch(api).await.map(|_| ())
    }
}
