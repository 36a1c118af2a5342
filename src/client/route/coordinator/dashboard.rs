use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaCalendarDays, FaUserClock, FaUsers},
    Icon,
};

use crate::client::{
    api::{
        dashboard::{load_coordinator_dashboard, CoordinatorStats},
        user::list_members,
        ApiClient,
    },
    component::{ErrorPage, EventCard, LoadingPage, Page},
    constant::SITE_NAME,
    model::{auth::AuthContext, error::ApiError},
    route::coordinator::{user_names, PendingMemberships},
    router::Route,
};

#[component]
pub fn CoordinatorDashboard() -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let mut refetch_trigger = use_signal(|| 0u32);

    let overview = use_resource(move || {
        let api = api.clone();
        let user_id = auth.read().user().map(|user| user.id);
        let _ = refetch_trigger();
        async move {
            let Some(user_id) = user_id else {
                return Ok(None);
            };
            let (overview, members) = futures::join!(
                load_coordinator_dashboard(&api, user_id),
                list_members(&api)
            );
            // Unknown members are shown by id
            Ok::<_, ApiError>(overview?.map(|o| (o, user_names(members.unwrap_or_default()))))
        }
    });

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        match &*overview.read_unchecked() {
            Some(Ok(Some((overview, names)))) => rsx! {
                Page {
                    class: "flex justify-center w-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex flex-wrap justify-between items-center gap-4",
                            h1 { class: "text-2xl font-bold", "{overview.club.name}" }
                            div {
                                class: "flex gap-2",
                                Link { to: Route::ClubMembers {}, class: "btn btn-outline", "Manage members" }
                                Link { to: Route::EventCreate {}, class: "btn btn-primary", "New event" }
                            }
                        }
                        DashboardStats { stats: overview.stats.clone() }
                        section {
                            h2 { class: "text-xl font-bold mb-2", "Pending membership requests" }
                            PendingMemberships {
                                memberships: overview.pending_memberships.clone(),
                                names: names.clone(),
                                on_reviewed: move |_| refetch_trigger += 1,
                            }
                        }
                        section {
                            h2 { class: "text-xl font-bold mb-2", "Upcoming events" }
                            if overview.upcoming_events.is_empty() {
                                p { class: "opacity-60", "No upcoming event." }
                            } else {
                                div {
                                    class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                                    for event in overview.upcoming_events.clone() {
                                        EventCard { key: "{event.id}", event, club_name: None }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Ok(None)) => rsx! {
                Page {
                    class: "flex flex-col items-center justify-center gap-4 text-center",
                    h1 { class: "text-2xl font-bold", "You do not coordinate a club yet" }
                    p { class: "opacity-70", "Send a creation request. A student life officer will review it." }
                    Link { to: Route::ClubRequestForm {}, class: "btn btn-primary", "Request a club" }
                }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            None => rsx! { LoadingPage {} },
        }
    }
}

#[component]
fn DashboardStats(stats: CoordinatorStats) -> Element {
    rsx! {
        div {
            class: "stats stats-vertical sm:stats-horizontal bg-base-200 shadow-sm",
            div {
                class: "stat",
                div { class: "stat-figure", Icon { width: 28, height: 28, icon: FaUsers } }
                div { class: "stat-title", "Active members" }
                div { class: "stat-value", "{stats.active_members}" }
            }
            div {
                class: "stat",
                div { class: "stat-figure", Icon { width: 28, height: 28, icon: FaUserClock } }
                div { class: "stat-title", "Pending requests" }
                div { class: "stat-value", "{stats.pending_requests}" }
            }
            div {
                class: "stat",
                div { class: "stat-figure", Icon { width: 28, height: 28, icon: FaCalendarDays } }
                div { class: "stat-title", "Upcoming events" }
                div { class: "stat-value", "{stats.upcoming_events}" }
            }
        }
    }
}
