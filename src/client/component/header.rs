use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowRightFromBracket, FaUsers},
    Icon,
};

use crate::{
    client::{
        api::ApiClient,
        constant::SITE_NAME,
        format::role_label,
        model::auth::{AuthContext, AuthState},
        router::Route,
    },
    model::user::Role,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

impl NavItem {
    fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }
}

/// Navigation entries for the current auth state. Nothing is listed until the state settles.
pub fn nav_items(state: &AuthState) -> Vec<NavItem> {
    let mut items = vec![NavItem::new("Home", Route::Home {})];

    match state {
        AuthState::Initializing | AuthState::Authenticating => return Vec::new(),
        AuthState::Unauthenticated => {
            items.push(NavItem::new("Login", Route::Login {}));
            items.push(NavItem::new("Register", Route::Register {}));
            return items;
        }
        AuthState::Authenticated(_) => {
            items.push(NavItem::new("Clubs", Route::ClubList {}));
        }
    }

    match state.role() {
        Some(Role::Member) => {
            items.push(NavItem::new("Events", Route::EventList {}));
            items.push(NavItem::new("My memberships", Route::MyMemberships {}));
        }
        Some(Role::Coordinator) => {
            items.push(NavItem::new("Dashboard", Route::CoordinatorDashboard {}));
            items.push(NavItem::new("Events", Route::EventList {}));
            items.push(NavItem::new("Members", Route::ClubMembers {}));
            items.push(NavItem::new("Create club", Route::ClubRequestForm {}));
        }
        Some(Role::StudentLifeOfficer) => {
            items.push(NavItem::new("Dashboard", Route::OfficerDashboard {}));
            items.push(NavItem::new("Club requests", Route::ClubRequests {}));
        }
        None => {}
    }

    items
}

#[component]
pub fn Header() -> Element {
    let mut auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let nav = navigator();

    let state = auth.read().clone();
    let items = nav_items(&state);

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-6",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaUsers
                    }
                    p {
                        class: "md:text-xl text-wrap font-semibold",
                        {SITE_NAME}
                    }
                }
            }
            ul {
                class: "menu menu-horizontal hidden md:flex gap-1",
                for item in items {
                    li {
                        key: "{item.label}",
                        Link {
                            to: item.route,
                            active_class: "menu-active",
                            "{item.label}"
                        }
                    }
                }
            }
        }
        if let AuthState::Authenticated(user) = state {
            div {
                class: "flex items-center gap-2",
                Link {
                    to: Route::Profile {},
                    class: "btn btn-ghost flex gap-2 items-center",
                    div {
                        class: "avatar avatar-placeholder",
                        div {
                            class: "bg-neutral text-neutral-content w-8 rounded-full",
                            span { class: "text-xs", "{user.initials()}" }
                        }
                    }
                    div {
                        class: "hidden sm:flex flex-col items-start",
                        span { "{user.display_name()}" }
                        span { class: "text-xs opacity-60", {role_label(user.role)} }
                    }
                }
                button {
                    class: "btn btn-outline flex gap-2 items-center",
                    onclick: move |_| {
                        auth.logout(&api);
                        nav.push(Route::Login {});
                    },
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaArrowRightFromBracket
                    }
                    p {
                        "Logout"
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserDto;

    fn signed_in(role: Role) -> AuthState {
        AuthState::Authenticated(UserDto {
            id: 7,
            username: "grace".to_string(),
            email: "grace@example.org".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            role,
            profile_picture: None,
            date_joined: None,
            is_active: true,
        })
    }

    fn labels(state: &AuthState) -> Vec<&'static str> {
        nav_items(state).into_iter().map(|item| item.label).collect()
    }

    #[test]
    fn visitors_see_login_and_register() {
        assert_eq!(
            labels(&AuthState::Unauthenticated),
            vec!["Home", "Login", "Register"]
        );
    }

    #[test]
    fn nothing_is_listed_while_pending() {
        assert!(nav_items(&AuthState::Initializing).is_empty());
    }

    #[test]
    fn each_role_gets_its_own_entries() {
        assert_eq!(
            labels(&signed_in(Role::Member)),
            vec!["Home", "Clubs", "Events", "My memberships"]
        );
        assert_eq!(
            labels(&signed_in(Role::Coordinator)),
            vec!["Home", "Clubs", "Dashboard", "Events", "Members", "Create club"]
        );
        assert_eq!(
            labels(&signed_in(Role::StudentLifeOfficer)),
            vec!["Home", "Clubs", "Dashboard", "Club requests"]
        );
    }

    #[test]
    fn dashboard_entry_matches_role() {
        let officer = nav_items(&signed_in(Role::StudentLifeOfficer));
        let dashboard = officer.iter().find(|item| item.label == "Dashboard");

        assert_eq!(
            dashboard.map(|item| &item.route),
            Some(&Route::OfficerDashboard {})
        );
    }
}
