use super::*;
use crate::client::api::dashboard::{
    load_coordinator_dashboard, load_home, load_officer_dashboard, HOME_PREVIEW_LIMIT,
    RECENT_REQUEST_LIMIT,
};

/// Tests that the home overview keeps only the first clubs and events.
///
/// Expected: six of each, in backend order
#[tokio::test]
async fn home_keeps_first_six() {
    let test = TestBuilder::new().build().await;
    let (api, _) = client(&test);
    let clubs = factory::create_clubs(8);
    let first_club = clubs[0]["id"].as_i64().unwrap() as i32;
    let events = factory::create_events(1, 9);

    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clubs/");
            then.status(200).json_body(json!(clubs));
        })
        .await;
    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/events/");
            then.status(200).json_body(json!(events));
        })
        .await;

    let overview = load_home(&api).await.unwrap();

    assert_eq!(overview.clubs.len(), HOME_PREVIEW_LIMIT);
    assert_eq!(overview.events.len(), HOME_PREVIEW_LIMIT);
    assert_eq!(overview.clubs[0].id, first_club);
}

/// Tests that one failed call fails the whole dashboard load.
///
/// Expected: Err carrying the failing call's message
#[tokio::test]
async fn home_fails_when_any_call_fails() {
    let test = TestBuilder::new().build().await;
    let (api, _) = client(&test);

    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clubs/");
            then.status(200).json_body(json!([fixture::club::json()]));
        })
        .await;
    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/events/");
            then.status(503);
        })
        .await;

    let err = load_home(&api).await.unwrap_err();

    assert_eq!(err.status, 503);
    assert_eq!(err.message, "Failed to fetch events");
}

/// Tests the officer dashboard's stats, recent request ordering and team list.
///
/// Expected: counts over all clubs, requests and memberships, newest five pending first, team by
/// name
#[tokio::test]
async fn officer_dashboard_shows_recent_pending() {
    let test = signed_in().await;
    let (api, _) = client(&test);
    let mut requests = factory::create_requests(7);
    let newest = requests[6]["id"].as_i64().unwrap() as i32;
    requests.push(
        fixture::club_request::builder()
            .id(500)
            .status("approved")
            .build(),
    );

    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clubs/");
            then.status(200).json_body(json!([
                fixture::club::json(),
                fixture::club::builder().id(2).status("archived").build(),
            ]));
        })
        .await;
    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clubs/requests/");
            then.status(200).json_body(json!(requests));
        })
        .await;

    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/memberships/");
            then.status(200).json_body(json!([
                fixture::membership::json(),
                fixture::membership::builder().id(2).user(3).build(),
                fixture::membership::builder().id(3).user(4).status("pending").build(),
            ]));
        })
        .await;
    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/users/rvas/");
            then.status(200).json_body(json!([
                fixture::user::builder()
                    .id(9)
                    .name("Zora", "Neale")
                    .role("student_life_officer")
                    .build(),
                fixture::user::builder()
                    .id(8)
                    .name("Bea", "Arthur")
                    .role("student_life_officer")
                    .build(),
            ]));
        })
        .await;

    let dashboard = load_officer_dashboard(&api).await.unwrap();

    assert_eq!(dashboard.stats.total_clubs, 2);
    assert_eq!(dashboard.stats.active_memberships, 2);
    assert_eq!(dashboard.stats.pending_memberships, 1);
    assert_eq!(
        dashboard.team.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![8, 9]
    );
    assert_eq!(dashboard.stats.active_clubs, 1);
    assert_eq!(dashboard.stats.pending_requests, 7);
    assert_eq!(dashboard.recent_requests.len(), RECENT_REQUEST_LIMIT);
    assert_eq!(dashboard.recent_requests[0].id, newest);
    assert!(dashboard.recent_requests.iter().all(|r| r.is_pending()));
}

/// Tests the coordinator dashboard for the club the user coordinates.
///
/// Expected: stats for club 1 only
#[tokio::test]
async fn coordinator_dashboard_counts_club_activity() {
    let test = signed_in().await;
    let (api, _) = client(&test);

    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clubs/");
            then.status(200).json_body(json!([
                fixture::club::builder().id(1).coordinator(Some(2)).build(),
                fixture::club::builder().id(2).coordinator(Some(8)).build(),
            ]));
        })
        .await;
    test.server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/memberships/")
                .query_param("club", "1");
            then.status(200).json_body(json!([
                fixture::membership::builder().id(1).build(),
                fixture::membership::builder().id(2).build(),
                fixture::membership::builder().id(3).status("pending").build(),
            ]));
        })
        .await;
    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/events/by-club/1/");
            then.status(200).json_body(json!([
                fixture::event::json(),
                fixture::event::builder().id(2).status("completed").build(),
            ]));
        })
        .await;

    let dashboard = load_coordinator_dashboard(&api, 2)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(dashboard.club.id, 1);
    assert_eq!(dashboard.stats.active_members, 2);
    assert_eq!(dashboard.stats.pending_requests, 1);
    assert_eq!(dashboard.stats.upcoming_events, 1);
}

/// Tests a coordinator whose club has not been created yet.
///
/// Expected: Ok(None) without fetching memberships
#[tokio::test]
async fn coordinator_without_club() {
    let test = signed_in().await;
    let (api, _) = client(&test);

    test.server
        .mock_async(|when, then| {
            when.method(GET).path("/api/clubs/");
            then.status(200).json_body(json!([fixture::club::json()]));
        })
        .await;
    let memberships = test
        .server
        .mock_async(|when, then| {
            when.method(GET).path("/api/memberships/");
            then.status(200).json_body(json!([]));
        })
        .await;

    let dashboard = load_coordinator_dashboard(&api, 42).await.unwrap();

    assert!(dashboard.is_none());
    memberships.assert_calls_async(0).await;
}
