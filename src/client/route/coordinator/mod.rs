pub mod dashboard;
pub mod members;

use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{
            membership::{approve_membership_request, reject_membership_request},
            ApiClient,
        },
        format::format_date,
        model::notification::NotificationContext,
    },
    model::{membership::MembershipDto, user::UserDto},
};

pub use dashboard::CoordinatorDashboard;
pub use members::ClubMembers;

/// Display names of users by id.
pub fn user_names(users: Vec<UserDto>) -> HashMap<i32, String> {
    users
        .into_iter()
        .map(|user| (user.id, user.display_name()))
        .collect()
}

pub fn member_name(names: &HashMap<i32, String>, user_id: i32) -> String {
    names
        .get(&user_id)
        .cloned()
        .unwrap_or_else(|| format!("User #{}", user_id))
}

/// Pending membership requests with approve and reject buttons. `on_reviewed` runs after either
/// action succeeds.
#[component]
pub fn PendingMemberships(
    memberships: Vec<MembershipDto>,
    names: HashMap<i32, String>,
    on_reviewed: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let mut notification = use_context::<NotificationContext>();
    let mut processing = use_signal(|| None::<i32>);

    let review = move |membership_id: i32, approve: bool| {
        let api = api.clone();
        spawn(async move {
            processing.set(Some(membership_id));
            let result = if approve {
                approve_membership_request(&api, membership_id).await
            } else {
                reject_membership_request(&api, membership_id).await
            };
            match result {
                Ok(_) => {
                    notification.success(if approve {
                        "Membership approved"
                    } else {
                        "Membership request rejected"
                    });
                    on_reviewed.call(());
                }
                Err(err) => {
                    tracing::error!("Failed to review membership {}: {}", membership_id, err);
                    notification.error(err.message);
                }
            }
            processing.set(None);
        });
    };

    rsx! {
        if memberships.is_empty() {
            p { class: "opacity-60", "No pending membership request." }
        } else {
            ul {
                class: "list bg-base-200 rounded-box",
                for membership in memberships {
                    {
                        let id = membership.id;
                        let busy = processing() == Some(id);
                        let approve = review.clone();
                        let reject = review.clone();
                        rsx! {
                            li {
                                key: "{id}",
                                class: "list-row items-center",
                                div {
                                    class: "list-col-grow",
                                    p { class: "font-medium", {member_name(&names, membership.user)} }
                                    if let Some(requested) = membership.joined_at {
                                        p { class: "text-xs opacity-60", "Requested {format_date(&requested)}" }
                                    }
                                }
                                button {
                                    class: "btn btn-sm btn-error btn-outline",
                                    disabled: busy,
                                    onclick: move |_| reject(id, false),
                                    "Reject"
                                }
                                button {
                                    class: "btn btn-sm btn-success",
                                    disabled: busy,
                                    onclick: move |_| approve(id, true),
                                    if busy {
                                        span { class: "loading loading-spinner loading-xs" }
                                    }
                                    "Approve"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
