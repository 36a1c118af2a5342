use dioxus::prelude::*;

use crate::{
    client::{
        component::page::LoadingPage,
        model::auth::{AuthContext, AuthState},
        router::Route,
    },
    model::user::Role,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    /// Auth state not settled yet
    Loading,
    Allow,
    Redirect(Route),
}

/// Decides whether the current user may see a route restricted to `roles`.
///
/// Visitors and users whose role is not listed get the same redirect.
pub fn check_access(state: &AuthState, roles: &[Role]) -> Access {
    if state.is_pending() {
        return Access::Loading;
    }

    if state.has_role(roles) {
        Access::Allow
    } else {
        Access::Redirect(Route::Unauthorized {})
    }
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { roles: Role::ALL.to_vec() }
    }
}

#[component]
pub fn RequiresMember() -> Element {
    rsx! {
        ProtectedLayout { roles: vec![Role::Member] }
    }
}

#[component]
pub fn RequiresCoordinator() -> Element {
    rsx! {
        ProtectedLayout { roles: vec![Role::Coordinator] }
    }
}

#[component]
pub fn RequiresOfficer() -> Element {
    rsx! {
        ProtectedLayout { roles: vec![Role::StudentLifeOfficer] }
    }
}

/// Event and club editing are open to coordinators and student-life officers.
#[component]
pub fn RequiresManager() -> Element {
    rsx! {
        ProtectedLayout { roles: vec![Role::Coordinator, Role::StudentLifeOfficer] }
    }
}

#[component]
pub fn ProtectedLayout(roles: Vec<Role>) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let access = check_access(&auth.read(), &roles);

    use_effect(use_reactive!(|access| {
        if let Access::Redirect(route) = access {
            nav.replace(route);
        }
    }));

    rsx! {
        match access {
            Access::Allow => rsx! { Outlet::<Route> {} },
            // Render the loading page while settling or redirecting
            Access::Loading | Access::Redirect(_) => rsx! { LoadingPage {} },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::user::UserDto;

    fn signed_in(role: Role) -> AuthState {
        AuthState::Authenticated(UserDto {
            id: 1,
            username: "ada".to_string(),
            email: "ada@example.org".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role,
            profile_picture: None,
            date_joined: None,
            is_active: true,
        })
    }

    #[test]
    fn waits_while_auth_is_pending() {
        assert_eq!(
            check_access(&AuthState::Initializing, &Role::ALL),
            Access::Loading
        );
        assert_eq!(
            check_access(&AuthState::Authenticating, &[Role::Member]),
            Access::Loading
        );
    }

    #[test]
    fn visitors_are_redirected_from_every_protected_route() {
        for roles in [
            Role::ALL.to_vec(),
            vec![Role::Member],
            vec![Role::Coordinator],
            vec![Role::StudentLifeOfficer],
        ] {
            assert_eq!(
                check_access(&AuthState::Unauthenticated, &roles),
                Access::Redirect(Route::Unauthorized {})
            );
        }
    }

    #[test]
    fn disallowed_roles_are_denied_identically() {
        let officer_only = [Role::StudentLifeOfficer];

        let member = check_access(&signed_in(Role::Member), &officer_only);
        let coordinator = check_access(&signed_in(Role::Coordinator), &officer_only);

        assert_eq!(member, Access::Redirect(Route::Unauthorized {}));
        assert_eq!(member, coordinator);
        assert_eq!(
            check_access(&signed_in(Role::StudentLifeOfficer), &officer_only),
            Access::Allow
        );
    }
}
