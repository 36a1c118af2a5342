use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_regular_icons::{FaCalendar, FaClock},
    icons::fa_solid_icons::FaLocationDot,
    Icon,
};

use crate::{
    client::{
        api::ApiClient,
        component::{ConfirmationModal, ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        format::{event_status_label, event_type_label, format_datetime},
        model::{
            auth::AuthContext,
            club::ClubStore,
            event::{can_manage_event, EventStore},
            notification::NotificationContext,
        },
        router::Route,
    },
    model::{
        event::{EventDto, EventStatus},
        user::Role,
    },
};

/// Members can sign up for events that have not started and were not cancelled.
pub fn can_register(role: Option<Role>, event: &EventDto, now: DateTime<Utc>) -> bool {
    role == Some(Role::Member) && event.status == EventStatus::Upcoming && event.start_time > now
}

#[component]
pub fn EventDetail(id: i32) -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let events = use_context::<EventStore>();
    let clubs = use_context::<ClubStore>();
    let mut notification = use_context::<NotificationContext>();
    let nav = navigator();

    let mut is_processing = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    // Outcome of the last registration action in this view
    let mut registered = use_signal(|| None::<bool>);

    let event = {
        let api = api.clone();
        use_resource(use_reactive!(|id| {
            let api = api.clone();
            async move { events.fetch_one(&api, id).await }
        }))
    };

    // The owning club decides who may edit the event
    let club_id = event
        .read_unchecked()
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .map(|event| event.club);
    let club = {
        let api = api.clone();
        use_resource(use_reactive!(|club_id| {
            let api = api.clone();
            async move {
                match club_id {
                    Some(club_id) => clubs.fetch_one(&api, club_id).await.ok(),
                    None => None,
                }
            }
        }))
    };

    let on_registration = {
        let api = api.clone();
        move |register: bool| {
            let api = api.clone();
            spawn(async move {
                is_processing.set(true);
                let result = if register {
                    events.register(&api, id).await
                } else {
                    events.unregister(&api, id).await
                };
                match result {
                    Ok(_) => {
                        registered.set(Some(register));
                        notification.success(if register {
                            "You are registered for this event"
                        } else {
                            "Your registration was cancelled"
                        });
                    }
                    Err(err) => notification.error(err.message),
                }
                is_processing.set(false);
            });
        }
    };

    let on_delete = {
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn(async move {
                is_processing.set(true);
                match events.delete(&api, id).await {
                    Ok(()) => {
                        notification.success("Event deleted");
                        show_delete_modal.set(false);
                        nav.push(Route::EventList {});
                    }
                    Err(err) => notification.error(err.message),
                }
                is_processing.set(false);
            });
        }
    };

    let user = auth.read().user().cloned();
    let role = user.as_ref().map(|u| u.role);
    let club_data = club.read_unchecked().as_ref().cloned().flatten();

    rsx! {
        match &*event.read_unchecked() {
            Some(Ok(event)) => {
                let can_manage = can_manage_event(user.as_ref(), club_data.as_ref());
                let registrable = can_register(role, event, Utc::now());
                let on_register = on_registration.clone();
                let on_unregister = on_registration.clone();

                rsx! {
                    Title { "{event.title} | {SITE_NAME}" }
                    Page {
                        class: "flex justify-center w-full",
                        div {
                            class: "w-full max-w-3xl card bg-base-200",
                            div {
                                class: "card-body gap-4",
                                div {
                                    class: "flex flex-wrap justify-between items-start gap-2",
                                    div {
                                        h1 { class: "text-3xl font-bold", "{event.title}" }
                                        if let Some(club) = club_data.clone() {
                                            Link {
                                                to: Route::ClubDetail { id: club.id },
                                                class: "link link-hover opacity-70",
                                                "{club.name}"
                                            }
                                        }
                                    }
                                    div {
                                        class: "flex gap-1",
                                        span { class: "badge badge-outline", {event_type_label(event.event_type)} }
                                        span { class: "badge badge-info", {event_status_label(event.status)} }
                                    }
                                }
                                p { class: "whitespace-pre-line", "{event.description}" }
                                div {
                                    class: "flex flex-col gap-2",
                                    span {
                                        class: "flex items-center gap-2",
                                        Icon { width: 16, height: 16, icon: FaCalendar }
                                        "Starts {format_datetime(&event.start_time)}"
                                    }
                                    span {
                                        class: "flex items-center gap-2",
                                        Icon { width: 16, height: 16, icon: FaClock }
                                        "Ends {format_datetime(&event.end_time)}"
                                    }
                                    span {
                                        class: "flex items-center gap-2",
                                        Icon { width: 16, height: 16, icon: FaLocationDot }
                                        "{event.location}"
                                    }
                                }
                                div {
                                    class: "card-actions justify-end",
                                    if registrable {
                                        if registered() != Some(true) {
                                            button {
                                                class: "btn btn-primary",
                                                disabled: is_processing(),
                                                onclick: move |_| on_register(true),
                                                "Register"
                                            }
                                        }
                                        if registered() != Some(false) {
                                            button {
                                                class: "btn btn-outline",
                                                disabled: is_processing(),
                                                onclick: move |_| on_unregister(false),
                                                "Unregister"
                                            }
                                        }
                                    }
                                    if can_manage {
                                        Link {
                                            to: Route::EventEdit { id: event.id },
                                            class: "btn btn-outline",
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-error btn-outline",
                                            onclick: move |_| show_delete_modal.set(true),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    ConfirmationModal {
                        show: show_delete_modal,
                        title: "Delete event",
                        message: format!("Delete {}? Registered members will no longer see it.", event.title),
                        confirm_text: "Delete",
                        is_processing: is_processing(),
                        on_confirm: on_delete,
                    }
                }
            }
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            None => rsx! { LoadingPage {} },
        }
    }
}
