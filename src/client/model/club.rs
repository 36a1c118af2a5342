use dioxus::prelude::*;

use crate::{
    client::{
        api::{
            club::{create_club, delete_club, get_club, list_clubs, update_club},
            ApiClient,
        },
        model::{
            cache::{track, ListCache},
            error::ApiError,
        },
    },
    model::club::{ClubDto, CreateClubDto, UpdateClubDto},
};

/// Shared club list, provided at the app root.
#[derive(Clone, Copy)]
pub struct ClubStore {
    inner: Signal<ListCache<ClubDto>>,
}

impl ClubStore {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(ListCache::default()),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = ListCache<ClubDto>> + '_ {
        self.inner.read()
    }

    pub async fn fetch(&self, api: &ApiClient) -> Result<Vec<ClubDto>, ApiError> {
        track(self.inner, "fetch clubs", list_clubs(api), |list, clubs| {
            list.replace_all(clubs.clone())
        })
        .await
    }

    pub async fn fetch_one(&self, api: &ApiClient, id: i32) -> Result<ClubDto, ApiError> {
        track(self.inner, "fetch club", get_club(api, id), |list, club| {
            list.upsert(club.clone())
        })
        .await
    }

    pub async fn create(&self, api: &ApiClient, club: CreateClubDto) -> Result<ClubDto, ApiError> {
        track(self.inner, "create club", create_club(api, &club), |list, club| {
            list.append(club.clone())
        })
        .await
    }

    pub async fn update(
        &self,
        api: &ApiClient,
        id: i32,
        club: UpdateClubDto,
    ) -> Result<ClubDto, ApiError> {
        track(
            self.inner,
            "update club",
            update_club(api, id, &club),
            |list, club| list.upsert(club.clone()),
        )
        .await
    }

    pub async fn delete(&self, api: &ApiClient, id: i32) -> Result<(), ApiError> {
        track(self.inner, "delete club", delete_club(api, id), |list, _| {
            list.remove(id)
        })
        .await
    }
}
