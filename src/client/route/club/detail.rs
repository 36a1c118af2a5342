use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{
            club_request::get_club_request,
            membership::{join_club, leave_club, list_my_memberships},
            ApiClient,
        },
        component::{ConfirmationModal, ErrorAlert, ErrorPage, EventCard, LoadingPage, Page},
        constant::SITE_NAME,
        format::{club_status_label, format_date, membership_status_label},
        model::{
            auth::AuthContext,
            club::ClubStore,
            event::{can_manage_event, EventStore},
            notification::NotificationContext,
        },
        router::Route,
    },
    model::{
        club::{ClubDto, ClubRequestDto, ClubStatus},
        membership::{MembershipDto, MembershipStatus},
        user::{Role, UserDto},
    },
};

/// What the current user can do about membership of a club.
#[derive(Clone, Debug, PartialEq)]
pub enum MembershipAction {
    /// Coordinators and officers do not join clubs
    None,
    Join,
    /// A request or membership exists; it can be withdrawn
    Leave(MembershipDto),
}

pub fn membership_action(
    role: Option<Role>,
    club: &ClubDto,
    memberships: &[MembershipDto],
) -> MembershipAction {
    if role != Some(Role::Member) || club.status != ClubStatus::Active {
        return MembershipAction::None;
    }

    match memberships
        .iter()
        .find(|m| m.club == club.id && m.status != MembershipStatus::Rejected)
    {
        Some(membership) => MembershipAction::Leave(membership.clone()),
        None => MembershipAction::Join,
    }
}

/// Where a club came from, shown to the people who manage it.
pub fn origin_summary(request: &ClubRequestDto) -> String {
    match request.submitted_at {
        Some(submitted_at) => format!(
            "Created from the request for \"{}\" submitted {}",
            request.club_name,
            format_date(&submitted_at)
        ),
        None => format!("Created from the request for \"{}\"", request.club_name),
    }
}

#[component]
pub fn ClubDetail(id: i32) -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let clubs = use_context::<ClubStore>();
    let event_store = use_context::<EventStore>();
    let mut notification = use_context::<NotificationContext>();
    let nav = navigator();

    let mut membership_trigger = use_signal(|| 0u32);
    let mut is_processing = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);

    let club = {
        let api = api.clone();
        use_resource(use_reactive!(|id| {
            let api = api.clone();
            async move { clubs.fetch_one(&api, id).await }
        }))
    };

    let events = {
        let api = api.clone();
        use_resource(use_reactive!(|id| {
            let api = api.clone();
            async move { event_store.fetch_for_club(&api, id).await }
        }))
    };

    let memberships = {
        let api = api.clone();
        use_resource(move || {
            let api = api.clone();
            let _ = membership_trigger();
            let is_member = auth.read().role() == Some(Role::Member);
            async move {
                if !is_member {
                    return Ok(Vec::new());
                }
                list_my_memberships(&api).await
            }
        })
    };

    let on_join = {
        let api = api.clone();
        move |_: MouseEvent| {
            let api = api.clone();
            spawn(async move {
                is_processing.set(true);
                match join_club(&api, id).await {
                    Ok(_) => {
                        notification.success("Membership request sent");
                        membership_trigger += 1;
                    }
                    Err(err) => {
                        tracing::error!("Failed to join club {}: {}", id, err);
                        notification.error(err.message);
                    }
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
                match clubs.delete(&api, id).await {
                    Ok(()) => {
                        notification.success("Club deleted");
                        show_delete_modal.set(false);
                        nav.push(Route::ClubList {});
                    }
                    Err(err) => notification.error(err.message),
                }
                is_processing.set(false);
            });
        }
    };

    let user: Option<UserDto> = auth.read().user().cloned();
    let role = user.as_ref().map(|u| u.role);

    rsx! {
        match &*club.read_unchecked() {
            Some(Ok(club)) => {
                let can_manage = can_manage_event(user.as_ref(), Some(club));
                let is_coordinator = user.as_ref().is_some_and(|u| club.coordinator == Some(u.id));
                let action = match &*memberships.read_unchecked() {
                    Some(Ok(memberships)) => membership_action(role, club, memberships),
                    _ => MembershipAction::None,
                };
                let badge = if club.status == ClubStatus::Active { "badge-success" } else { "badge-ghost" };

                rsx! {
                    Title { "{club.name} | {SITE_NAME}" }
                    Page {
                        class: "flex justify-center w-full",
                        div {
                            class: "w-full max-w-5xl flex flex-col gap-6",
                            div {
                                class: "flex flex-wrap justify-between items-start gap-4",
                                div {
                                    h1 { class: "text-3xl font-bold", "{club.name}" }
                                    div {
                                        class: "flex gap-2 items-center mt-2",
                                        span { class: "badge {badge}", {club_status_label(club.status)} }
                                        if let Some(created_at) = club.created_at {
                                            span { class: "text-sm opacity-60", "Created {format_date(&created_at)}" }
                                        }
                                    }
                                }
                                div {
                                    class: "flex flex-wrap gap-2",
                                    match action.clone() {
                                        MembershipAction::Join => rsx! {
                                            button {
                                                class: "btn btn-primary",
                                                disabled: is_processing(),
                                                onclick: on_join,
                                                "Join club"
                                            }
                                        },
                                        MembershipAction::Leave(membership) => rsx! {
                                            span { class: "badge badge-outline self-center", {membership_status_label(membership.status)} }
                                            MembershipLeaveButton {
                                                membership_id: membership.id,
                                                on_left: move |_| membership_trigger += 1,
                                            }
                                        },
                                        MembershipAction::None => rsx! {},
                                    }
                                    if is_coordinator {
                                        Link { to: Route::ClubMembers {}, class: "btn btn-outline", "Manage members" }
                                    }
                                    if can_manage {
                                        Link { to: Route::ClubEdit { id }, class: "btn btn-outline", "Edit club" }
                                        Link { to: Route::EventCreate {}, class: "btn btn-outline", "New event" }
                                    }
                                    if role == Some(Role::StudentLifeOfficer) {
                                        button {
                                            class: "btn btn-error btn-outline",
                                            onclick: move |_| show_delete_modal.set(true),
                                            "Delete club"
                                        }
                                    }
                                }
                            }
                            p { class: "whitespace-pre-line opacity-90", "{club.description}" }
                            if let (true, Some(request_id)) = (can_manage, club.creation_request) {
                                CreationRequest { id: request_id }
                            }

                            section {
                                h2 { class: "text-2xl font-bold mb-4", "Events" }
                                match &*events.read_unchecked() {
                                    Some(Ok(events)) if events.is_empty() => rsx! {
                                        p { class: "opacity-60", "This club has no events yet." }
                                    },
                                    Some(Ok(events)) => rsx! {
                                        div {
                                            class: "grid gap-4 md:grid-cols-2",
                                            for event in events.clone() {
                                                EventCard { key: "{event.id}", event, club_name: None }
                                            }
                                        }
                                    },
                                    Some(Err(err)) => rsx! { ErrorAlert { message: err.message.clone() } },
                                    None => rsx! { span { class: "loading loading-spinner" } },
                                }
                            }
                        }
                    }
                    ConfirmationModal {
                        show: show_delete_modal,
                        title: "Delete club",
                        message: format!("Delete {} and all of its events? This cannot be undone.", club.name),
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

#[component]
fn CreationRequest(id: i32) -> Element {
    let api = use_context::<ApiClient>();

    let request = use_resource(use_reactive!(|id| {
        let api = api.clone();
        async move { get_club_request(&api, id).await }
    }));

    match &*request.read_unchecked() {
        Some(Ok(request)) => rsx! {
            div {
                class: "text-sm opacity-60",
                p { {origin_summary(request)} }
                if let Some(comment) = request.student_life_officer_comment.clone() {
                    p { class: "italic", "Reviewer comment: {comment}" }
                }
            }
        },
        // Secondary detail; the page stays usable without it
        _ => rsx! {},
    }
}

/// Withdraws a membership or a pending membership request after confirmation.
#[component]
fn MembershipLeaveButton(membership_id: i32, on_left: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let mut notification = use_context::<NotificationContext>();
    let mut show_modal = use_signal(|| false);
    let mut is_leaving = use_signal(|| false);

    let on_confirm = move |_: ()| {
        let api = api.clone();
        spawn(async move {
            is_leaving.set(true);
            match leave_club(&api, membership_id).await {
                Ok(()) => {
                    notification.success("You left the club");
                    show_modal.set(false);
                    on_left.call(());
                }
                Err(err) => {
                    tracing::error!("Failed to leave club: {}", err);
                    notification.error(err.message);
                }
            }
            is_leaving.set(false);
        });
    };

    rsx! {
        button {
            class: "btn btn-outline btn-error",
            onclick: move |_| show_modal.set(true),
            "Leave"
        }
        ConfirmationModal {
            show: show_modal,
            title: "Leave club",
            message: "Your membership or pending request will be withdrawn.",
            confirm_text: "Leave",
            is_processing: is_leaving(),
            on_confirm,
        }
    }
}
