//! Dashboard loaders.
//!
//! Each dashboard needs several collections at once. They are fetched in parallel with
//! `try_join!`, so the first failure fails the whole load and no partial dashboard is shown.

use chrono::{DateTime, Utc};
use futures::try_join;

use crate::{
    client::{
        api::{
            club::list_clubs,
            club_request::list_club_requests,
            event::{list_club_events, list_events},
            helper::ApiClient,
            membership::{list_club_memberships, list_memberships},
            user::list_student_life_officers,
        },
        model::error::ApiError,
    },
    model::{
        club::{ClubDto, ClubRequestDto, ClubStatus},
        event::EventDto,
        membership::{MembershipDto, MembershipStatus},
        user::UserDto,
    },
};

pub const HOME_PREVIEW_LIMIT: usize = 6;
pub const RECENT_REQUEST_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct HomeOverview {
    pub clubs: Vec<ClubDto>,
    pub events: Vec<EventDto>,
}

impl HomeOverview {
    /// Keeps the first few clubs and events, in the order the backend returned them.
    pub fn from_lists(mut clubs: Vec<ClubDto>, mut events: Vec<EventDto>) -> Self {
        clubs.truncate(HOME_PREVIEW_LIMIT);
        events.truncate(HOME_PREVIEW_LIMIT);
        Self { clubs, events }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct OfficerStats {
    pub total_clubs: usize,
    pub active_clubs: usize,
    pub pending_requests: usize,
    /// Memberships across every club.
    pub active_memberships: usize,
    pub pending_memberships: usize,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct OfficerDashboard {
    pub stats: OfficerStats,
    /// Most recently submitted pending requests, newest first.
    pub recent_requests: Vec<ClubRequestDto>,
    /// Every student-life officer, by name.
    pub team: Vec<UserDto>,
}

impl OfficerDashboard {
    pub fn from_lists(
        clubs: &[ClubDto],
        requests: Vec<ClubRequestDto>,
        memberships: &[MembershipDto],
        mut team: Vec<UserDto>,
    ) -> Self {
        let with_status =
            |status: MembershipStatus| memberships.iter().filter(|m| m.status == status).count();
        let mut pending: Vec<ClubRequestDto> =
            requests.into_iter().filter(|r| r.is_pending()).collect();

        let stats = OfficerStats {
            total_clubs: clubs.len(),
            active_clubs: clubs
                .iter()
                .filter(|c| c.status == ClubStatus::Active)
                .count(),
            pending_requests: pending.len(),
            active_memberships: with_status(MembershipStatus::Active),
            pending_memberships: with_status(MembershipStatus::Pending),
        };

        // Requests without a submission time sort last.
        pending.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        pending.truncate(RECENT_REQUEST_LIMIT);

        team.sort_by_key(UserDto::display_name);

        Self {
            stats,
            recent_requests: pending,
            team,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct CoordinatorStats {
    pub active_members: usize,
    pub pending_requests: usize,
    pub upcoming_events: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoordinatorDashboard {
    pub club: ClubDto,
    pub stats: CoordinatorStats,
    pub pending_memberships: Vec<MembershipDto>,
    /// Upcoming events, soonest first.
    pub upcoming_events: Vec<EventDto>,
}

impl CoordinatorDashboard {
    pub fn from_lists(
        club: ClubDto,
        memberships: Vec<MembershipDto>,
        events: Vec<EventDto>,
        now: DateTime<Utc>,
    ) -> Self {
        let active_members = memberships
            .iter()
            .filter(|m| m.status == MembershipStatus::Active)
            .count();
        let pending_memberships: Vec<MembershipDto> = memberships
            .into_iter()
            .filter(|m| m.status == MembershipStatus::Pending)
            .collect();
        let mut upcoming_events: Vec<EventDto> = events
            .into_iter()
            .filter(|e| e.is_upcoming_at(now))
            .collect();
        upcoming_events.sort_by_key(|e| e.start_time);

        Self {
            club,
            stats: CoordinatorStats {
                active_members,
                pending_requests: pending_memberships.len(),
                upcoming_events: upcoming_events.len(),
            },
            pending_memberships,
            upcoming_events,
        }
    }
}

/// The club coordinated by `user_id`, if any. A coordinator manages at most one club.
pub fn find_coordinated_club(clubs: Vec<ClubDto>, user_id: i32) -> Option<ClubDto> {
    clubs.into_iter().find(|c| c.coordinator == Some(user_id))
}

pub async fn load_home(api: &ApiClient) -> Result<HomeOverview, ApiError> {
    let (clubs, events) = try_join!(list_clubs(api), list_events(api))?;
    Ok(HomeOverview::from_lists(clubs, events))
}

pub async fn load_officer_dashboard(api: &ApiClient) -> Result<OfficerDashboard, ApiError> {
    let (clubs, requests, memberships, team) = try_join!(
        list_clubs(api),
        list_club_requests(api),
        list_memberships(api),
        list_student_life_officers(api)
    )?;
    Ok(OfficerDashboard::from_lists(
        &clubs,
        requests,
        &memberships,
        team,
    ))
}

/// Loads the dashboard of the club `user_id` coordinates. `Ok(None)` means the user coordinates
/// no club yet.
pub async fn load_coordinator_dashboard(
    api: &ApiClient,
    user_id: i32,
) -> Result<Option<CoordinatorDashboard>, ApiError> {
    let Some(club) = find_coordinated_club(list_clubs(api).await?, user_id) else {
        return Ok(None);
    };

    let (memberships, events) = try_join!(
        list_club_memberships(api, club.id),
        list_club_events(api, club.id)
    )?;

    Ok(Some(CoordinatorDashboard::from_lists(
        club,
        memberships,
        events,
        Utc::now(),
    )))
}
