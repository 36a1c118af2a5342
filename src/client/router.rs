use dioxus::prelude::*;

use crate::model::user::Role;

use crate::client::component::{
    Layout, RequiresCoordinator, RequiresManager, RequiresLoggedIn, RequiresMember,
    RequiresOfficer,
};
use crate::client::route::{
    club::{ClubCreate, ClubDetail, ClubEdit, ClubList, ClubRequestForm},
    coordinator::{ClubMembers, CoordinatorDashboard},
    event::{EventCreate, EventDetail, EventEdit, EventList},
    officer::{ClubRequests, OfficerDashboard},
    Home, Login, MyMemberships, NotFound, Profile, Register, Unauthorized,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/unauthorized")]
    Unauthorized {},

    #[layout(RequiresLoggedIn)]
        #[route("/clubs")]
        ClubList {},

        #[route("/clubs/:id")]
        ClubDetail { id: i32 },

        #[route("/events")]
        EventList {},

        #[route("/events/:id")]
        EventDetail { id: i32 },

        #[route("/profile")]
        Profile {},
    #[end_layout]

    #[layout(RequiresMember)]
        #[route("/memberships")]
        MyMemberships {},
    #[end_layout]

    #[layout(RequiresCoordinator)]
        #[route("/clubs/request")]
        ClubRequestForm {},

        #[nest("/coordinator")]
            #[route("/")]
            CoordinatorDashboard {},

            #[route("/members")]
            ClubMembers {},
        #[end_nest]
    #[end_layout]

    #[layout(RequiresManager)]
        #[route("/clubs/:id/edit")]
        ClubEdit { id: i32 },

        #[route("/events/new")]
        EventCreate {},

        #[route("/events/:id/edit")]
        EventEdit { id: i32 },
    #[end_layout]

    #[layout(RequiresOfficer)]
        #[route("/clubs/new")]
        ClubCreate {},

        #[nest("/officer")]
            #[route("/")]
            OfficerDashboard {},

            #[route("/requests")]
            ClubRequests {},
        #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Page a user lands on after signing in.
    pub fn landing(role: Role) -> Route {
        match role {
            Role::Member => Route::ClubList {},
            Role::Coordinator => Route::CoordinatorDashboard {},
            Role::StudentLifeOfficer => Route::OfficerDashboard {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_depends_on_role() {
        assert_eq!(Route::landing(Role::Member), Route::ClubList {});
        assert_eq!(
            Route::landing(Role::Coordinator),
            Route::CoordinatorDashboard {}
        );
        assert_eq!(
            Route::landing(Role::StudentLifeOfficer),
            Route::OfficerDashboard {}
        );
    }

    #[test]
    fn nested_routes_parse() {
        assert_eq!(
            "/events/4/edit".parse::<Route>().ok(),
            Some(Route::EventEdit { id: 4 })
        );
        assert_eq!(
            "/clubs/request".parse::<Route>().ok(),
            Some(Route::ClubRequestForm {})
        );
        assert_eq!("/clubs/12".parse::<Route>().ok(), Some(Route::ClubDetail { id: 12 }));
    }

    #[test]
    fn club_management_routes_parse() {
        assert_eq!("/clubs/new".parse::<Route>().ok(), Some(Route::ClubCreate {}));
        assert_eq!(
            "/clubs/3/edit".parse::<Route>().ok(),
            Some(Route::ClubEdit { id: 3 })
        );
    }
}
