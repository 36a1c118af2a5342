use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaMagnifyingGlass, Icon};

use crate::{
    client::{
        api::ApiClient,
        component::{ClubCard, ErrorAlert, Page},
        constant::SITE_NAME,
        model::{auth::AuthContext, club::ClubStore},
        router::Route,
    },
    model::{
        club::{ClubDto, ClubStatus},
        user::Role,
    },
};

/// Clubs shown in the directory, filtered by a case-insensitive name or description search.
///
/// Officers review every club; everyone else only browses active ones.
pub fn visible_clubs(clubs: &[ClubDto], role: Option<Role>, query: &str) -> Vec<ClubDto> {
    let query = query.trim().to_lowercase();
    let show_all = matches!(role, Some(Role::StudentLifeOfficer));

    clubs
        .iter()
        .filter(|club| show_all || club.status == ClubStatus::Active)
        .filter(|club| {
            query.is_empty()
                || club.name.to_lowercase().contains(&query)
                || club.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[component]
pub fn ClubList() -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let clubs = use_context::<ClubStore>();
    let mut query = use_signal(String::new);

    // Fetch on first render
    use_resource(move || {
        let api = api.clone();
        async move { clubs.fetch(&api).await }
    });

    let role = auth.read().role();
    let state = clubs.read();
    let visible = visible_clubs(&state.items, role, &query());

    rsx! {
        Title { "Clubs | {SITE_NAME}" }
        Page {
            class: "flex justify-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                div {
                    class: "flex flex-wrap justify-between items-center gap-4",
                    h1 { class: "text-2xl font-bold", "Clubs" }
                    div {
                        class: "flex gap-2 items-center",
                        label {
                            class: "input",
                            Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                            input {
                                r#type: "search",
                                placeholder: "Search clubs",
                                value: "{query}",
                                oninput: move |evt| query.set(evt.value()),
                            }
                        }
                        if role == Some(Role::Coordinator) {
                            Link {
                                to: Route::ClubRequestForm {},
                                class: "btn btn-primary",
                                "Request a club"
                            }
                        }
                        if role == Some(Role::StudentLifeOfficer) {
                            Link {
                                to: Route::ClubCreate {},
                                class: "btn btn-primary",
                                "New club"
                            }
                        }
                    }
                }
                if let Some(error) = state.error.clone() {
                    ErrorAlert { message: error }
                }
                if state.loading && state.items.is_empty() {
                    div {
                        class: "flex justify-center",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                } else if visible.is_empty() {
                    p { class: "opacity-60", "No club matches your search." }
                } else {
                    div {
                        class: "grid gap-4 md:grid-cols-2 lg:grid-cols-3",
                        for club in visible {
                            ClubCard { key: "{club.id}", club }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club(id: i32, name: &str, status: ClubStatus) -> ClubDto {
        ClubDto {
            id,
            name: name.to_string(),
            description: format!("{} meets every week", name),
            status,
            coordinator: None,
            created_at: None,
            creation_request: None,
        }
    }

    fn clubs() -> Vec<ClubDto> {
        vec![
            club(1, "Chess Club", ClubStatus::Active),
            club(2, "Robotics", ClubStatus::Active),
            club(3, "Film Society", ClubStatus::Archived),
        ]
    }

    fn ids(clubs: Vec<ClubDto>) -> Vec<i32> {
        clubs.into_iter().map(|club| club.id).collect()
    }

    #[test]
    fn members_only_see_active_clubs() {
        assert_eq!(ids(visible_clubs(&clubs(), Some(Role::Member), "")), vec![1, 2]);
        assert_eq!(
            ids(visible_clubs(&clubs(), Some(Role::StudentLifeOfficer), "")),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn search_ignores_case() {
        assert_eq!(
            ids(visible_clubs(&clubs(), Some(Role::Member), "  CHESS ")),
            vec![1]
        );
        assert!(visible_clubs(&clubs(), Some(Role::Member), "film").is_empty());
    }
}
