use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_regular_icons::{FaCalendar, FaClock},
    icons::fa_solid_icons::FaLocationDot,
    Icon,
};

use crate::{
    client::{
        format::{
            club_status_label, event_status_label, event_type_label, format_date, format_datetime,
            request_status_badge, request_status_label, truncate_text,
        },
        router::Route,
    },
    model::{
        club::{ClubDto, ClubRequestDto, ClubStatus},
        event::EventDto,
    },
};

const DESCRIPTION_PREVIEW_CHARS: usize = 140;

#[component]
pub fn ClubCard(club: ClubDto) -> Element {
    let badge = match club.status {
        ClubStatus::Active => "badge-success",
        ClubStatus::Pending => "badge-warning",
        ClubStatus::Archived => "badge-ghost",
    };
    let description = truncate_text(&club.description, DESCRIPTION_PREVIEW_CHARS);

    rsx!(
        div {
            class: "card bg-base-200 shadow-sm",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-start gap-2",
                    h2 { class: "card-title", "{club.name}" }
                    span { class: "badge {badge}", {club_status_label(club.status)} }
                }
                p { class: "opacity-80", "{description}" }
                if let Some(created_at) = club.created_at {
                    p { class: "text-xs opacity-50", "Since {format_date(&created_at)}" }
                }
                div {
                    class: "card-actions justify-end",
                    Link {
                        to: Route::ClubDetail { id: club.id },
                        class: "btn btn-sm btn-outline",
                        "View club"
                    }
                }
            }
        }
    )
}

#[component]
pub fn EventCard(event: EventDto, club_name: Option<String>) -> Element {
    let description = truncate_text(&event.description, DESCRIPTION_PREVIEW_CHARS);

    rsx!(
        div {
            class: "card bg-base-200 shadow-sm",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-start gap-2",
                    h2 { class: "card-title", "{event.title}" }
                    div {
                        class: "flex gap-1",
                        span { class: "badge badge-outline", {event_type_label(event.event_type)} }
                        span { class: "badge badge-info", {event_status_label(event.status)} }
                    }
                }
                if let Some(club_name) = club_name {
                    p { class: "text-sm opacity-60", "{club_name}" }
                }
                p { class: "opacity-80", "{description}" }
                div {
                    class: "flex flex-col gap-1 text-sm",
                    span {
                        class: "flex items-center gap-2",
                        Icon { width: 14, height: 14, icon: FaCalendar }
                        {format_datetime(&event.start_time)}
                    }
                    span {
                        class: "flex items-center gap-2",
                        Icon { width: 14, height: 14, icon: FaClock }
                        "until {format_datetime(&event.end_time)}"
                    }
                    span {
                        class: "flex items-center gap-2",
                        Icon { width: 14, height: 14, icon: FaLocationDot }
                        "{event.location}"
                    }
                }
                div {
                    class: "card-actions justify-end",
                    Link {
                        to: Route::EventDetail { id: event.id },
                        class: "btn btn-sm btn-outline",
                        "Details"
                    }
                }
            }
        }
    )
}

/// A club creation request with optional review actions.
#[component]
pub fn RequestCard(
    request: ClubRequestDto,
    on_approve: Option<EventHandler<i32>>,
    on_reject: Option<EventHandler<i32>>,
) -> Element {
    let id = request.id;
    let badge = request_status_badge(request.status);
    let reviewable = request.is_pending() && (on_approve.is_some() || on_reject.is_some());

    rsx!(
        div {
            class: "card bg-base-200 shadow-sm",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-start gap-2",
                    h2 { class: "card-title", "{request.club_name}" }
                    span { class: "badge {badge}", {request_status_label(request.status)} }
                }
                p { class: "opacity-80 whitespace-pre-line", "{request.description}" }
                if let Some(submitted_at) = request.submitted_at {
                    p { class: "text-xs opacity-50", "Submitted {format_datetime(&submitted_at)}" }
                }
                if let Some(comment) = request.student_life_officer_comment.clone() {
                    p { class: "text-sm italic", "Comment: {comment}" }
                }
                if reviewable {
                    div {
                        class: "card-actions justify-end",
                        if let Some(on_reject) = on_reject {
                            button {
                                class: "btn btn-sm btn-error btn-outline",
                                onclick: move |_| on_reject.call(id),
                                "Reject"
                            }
                        }
                        if let Some(on_approve) = on_approve {
                            button {
                                class: "btn btn-sm btn-success",
                                onclick: move |_| on_approve.call(id),
                                "Approve"
                            }
                        }
                    }
                }
            }
        }
    )
}
