use dioxus::prelude::*;

use crate::client::{
    component::{Header, NotificationBanner},
    model::{auth::AuthContext, notification::NotificationContext},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        SessionExpiryRedirect {  }
        NotificationBanner {  }
        Outlet::<Route> {}
    })
}

/// Sends the user to the login page once the backend has rejected their token.
#[component]
fn SessionExpiryRedirect() -> Element {
    let mut auth = use_context::<AuthContext>();
    let mut notification = use_context::<NotificationContext>();
    let nav = navigator();

    use_effect(move || {
        if auth.session_expired() {
            auth.acknowledge_expiry();
            notification.show(
                "Your session has expired, please log in again",
                crate::client::model::notification::Severity::Warning,
            );
            nav.push(Route::Login {});
        }
    });

    rsx!()
}
