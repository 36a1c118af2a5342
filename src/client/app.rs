use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    config::Config,
    constant::{SITE_DESCRIPTION, SITE_NAME},
    model::{
        auth::AuthContext, club::ClubStore, event::EventStore, notification::NotificationContext,
        request::RequestStore,
    },
    router::Route,
    storage::CredentialStore,
};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(Config::from_env);

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "description",
            content: SITE_DESCRIPTION
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        match config {
            Ok(config) => rsx! { ClubHub { config } },
            // Rendered outside the router, so no navigation is available here
            Err(err) => rsx! {
                div {
                    class: "min-h-screen flex items-center justify-center",
                    div {
                        role: "alert",
                        class: "alert alert-error",
                        "Invalid configuration: {err}"
                    }
                }
            },
        }
    }
}

/// Shared state for every page, then the router.
#[component]
fn ClubHub(config: Config) -> Element {
    let mut auth = use_context_provider(AuthContext::new);
    use_context_provider(ClubStore::new);
    use_context_provider(EventStore::new);
    use_context_provider(RequestStore::new);
    use_context_provider(NotificationContext::new);

    let api = use_context_provider(move || {
        tracing::info!("Using backend at {}", config.api_base_url);
        ApiClient::new(&config, CredentialStore::platform()).with_unauthorized_hook(move || {
            let mut auth = auth;
            auth.expire();
        })
    });

    // Restore the stored session once on startup
    use_hook(move || {
        spawn(async move {
            auth.restore(&api).await;
        })
    });

    rsx! {
        Router::<Route> {}
    }
}
