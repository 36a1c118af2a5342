use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBuilding, FaCircleCheck, FaHourglassStart, FaUsers},
    Icon,
};

use crate::client::{
    api::{
        dashboard::{load_officer_dashboard, OfficerStats},
        ApiClient,
    },
    component::{ErrorPage, LoadingPage, Page, RequestCard},
    constant::SITE_NAME,
    router::Route,
};

#[component]
pub fn OfficerDashboard() -> Element {
    let api = use_context::<ApiClient>();

    let overview = use_resource(move || {
        let api = api.clone();
        async move { load_officer_dashboard(&api).await }
    });

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        match &*overview.read_unchecked() {
            Some(Ok(overview)) => rsx! {
                Page {
                    class: "flex justify-center w-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex flex-wrap justify-between items-center gap-4",
                            h1 { class: "text-2xl font-bold", "Student life office" }
                            div {
                                class: "flex gap-2",
                                Link { to: Route::ClubList {}, class: "btn btn-outline", "All clubs" }
                                Link { to: Route::ClubRequests {}, class: "btn btn-primary", "Review requests" }
                            }
                        }
                        OfficerStatsBar { stats: overview.stats.clone() }
                        section {
                            h2 { class: "text-xl font-bold mb-2", "Latest pending requests" }
                            if overview.recent_requests.is_empty() {
                                p { class: "opacity-60", "Nothing to review." }
                            } else {
                                div {
                                    class: "grid gap-4 md:grid-cols-2",
                                    for request in overview.recent_requests.clone() {
                                        RequestCard {
                                            key: "{request.id}",
                                            request,
                                        }
                                    }
                                }
                            }
                        }
                        section {
                            h2 { class: "text-xl font-bold mb-2", "Student life office team" }
                            ul {
                                class: "list bg-base-200 rounded-box",
                                for officer in overview.team.clone() {
                                    li {
                                        key: "{officer.id}",
                                        class: "list-row",
                                        span { class: "font-semibold", "{officer.display_name()}" }
                                        span { class: "opacity-60", "{officer.email}" }
                                    }
                                }
                            }
                        }
                    }
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
fn OfficerStatsBar(stats: OfficerStats) -> Element {
    rsx! {
        div {
            class: "stats stats-vertical sm:stats-horizontal bg-base-200 shadow-sm",
            div {
                class: "stat",
                div { class: "stat-figure", Icon { width: 28, height: 28, icon: FaBuilding } }
                div { class: "stat-title", "Clubs" }
                div { class: "stat-value", "{stats.total_clubs}" }
            }
            div {
                class: "stat",
                div { class: "stat-figure", Icon { width: 28, height: 28, icon: FaCircleCheck } }
                div { class: "stat-title", "Active clubs" }
                div { class: "stat-value", "{stats.active_clubs}" }
            }
            div {
                class: "stat",
                div { class: "stat-figure", Icon { width: 28, height: 28, icon: FaHourglassStart } }
                div { class: "stat-title", "Pending requests" }
                div { class: "stat-value", "{stats.pending_requests}" }
            }
            div {
                class: "stat",
                div { class: "stat-figure", Icon { width: 28, height: 28, icon: FaUsers } }
                div { class: "stat-title", "Club members" }
                div { class: "stat-value", "{stats.active_memberships}" }
                div { class: "stat-desc", "{stats.pending_memberships} waiting for approval" }
            }
        }
    }
}
