use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaLock, Icon};

use crate::client::{
    component::Page, constant::SITE_NAME, model::auth::AuthContext, router::Route,
};

#[component]
pub fn Unauthorized() -> Element {
    let auth = use_context::<AuthContext>();
    let signed_in = auth.read().is_authenticated();

    rsx! {
        Title { "Access denied | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center w-full h-full",
            div {
                class: "flex flex-col items-center gap-4 text-center",
                Icon { width: 48, height: 48, icon: FaLock }
                h1 { class: "text-3xl font-bold", "Access denied" }
                if signed_in {
                    p { "Your account does not have access to this page." }
                    Link { to: Route::Home {}, class: "btn btn-outline", "Back to home" }
                } else {
                    p { "Please log in to continue." }
                    Link { to: Route::Login {}, class: "btn btn-primary", "Login" }
                }
            }
        }
    }
}
