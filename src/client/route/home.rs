use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{dashboard::load_home, ApiClient},
    component::{ClubCard, ErrorAlert, EventCard, Page},
    constant::{SITE_DESCRIPTION, SITE_NAME},
    model::auth::AuthContext,
    router::Route,
};

#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();

    let signed_in = auth.read().is_authenticated();

    // The overview endpoints need a session, so visitors only get the welcome banner
    let overview = use_resource(move || {
        let api = api.clone();
        let signed_in = auth.read().is_authenticated();
        async move {
            if !signed_in {
                return None;
            }
            let result = load_home(&api).await;
            if let Err(err) = &result {
                tracing::error!("Failed to load home overview: {}", err);
            }
            Some(result)
        }
    });

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-8",
                div {
                    class: "hero bg-base-200 rounded-box py-10",
                    div {
                        class: "hero-content text-center flex-col",
                        h1 { class: "text-4xl font-bold", {SITE_NAME} }
                        p { class: "opacity-80", {SITE_DESCRIPTION} }
                        if !signed_in {
                            div {
                                class: "flex gap-2",
                                Link { to: Route::Login {}, class: "btn btn-primary", "Login" }
                                Link { to: Route::Register {}, class: "btn btn-outline", "Create an account" }
                            }
                        }
                    }
                }

                match &*overview.read_unchecked() {
                    Some(Some(Ok(overview))) => rsx! {
                        section {
                            div {
                                class: "flex justify-between items-center mb-4",
                                h2 { class: "text-2xl font-bold", "Clubs" }
                                Link { to: Route::ClubList {}, class: "link", "See all clubs" }
                            }
                            if overview.clubs.is_empty() {
                                p { class: "opacity-60", "No clubs yet." }
                            }
                            div {
                                class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                                for club in overview.clubs.clone() {
                                    ClubCard { key: "{club.id}", club }
                                }
                            }
                        }
                        section {
                            div {
                                class: "flex justify-between items-center mb-4",
                                h2 { class: "text-2xl font-bold", "Events" }
                                Link { to: Route::EventList {}, class: "link", "See all events" }
                            }
                            if overview.events.is_empty() {
                                p { class: "opacity-60", "No events planned." }
                            }
                            div {
                                class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                                for event in overview.events.clone() {
                                    EventCard { key: "{event.id}", event, club_name: None }
                                }
                            }
                        }
                    },
                    Some(Some(Err(err))) => rsx! {
                        ErrorAlert { message: err.message.clone() }
                    },
                    Some(None) => rsx! {},
                    None => rsx! {
                        div {
                            class: "flex justify-center",
                            span { class: "loading loading-spinner loading-lg" }
                        }
                    },
                }
            }
        }
    }
}
