use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{
            club::list_clubs,
            dashboard::find_coordinated_club,
            membership::{leave_club, list_club_memberships},
            user::list_members,
            ApiClient,
        },
        component::{ConfirmationModal, ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        format::{format_date, membership_role_label},
        model::{auth::AuthContext, error::ApiError, notification::NotificationContext},
        route::coordinator::{member_name, user_names, PendingMemberships},
        router::Route,
    },
    model::{
        club::ClubDto,
        membership::{MembershipDto, MembershipStatus},
    },
};

/// Memberships of one club, split for review.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Roster {
    pub pending: Vec<MembershipDto>,
    /// Sorted by display name.
    pub active: Vec<MembershipDto>,
}

/// Rejected memberships are dropped.
pub fn roster(memberships: Vec<MembershipDto>, names: &HashMap<i32, String>) -> Roster {
    let mut roster = Roster::default();
    for membership in memberships {
        match membership.status {
            MembershipStatus::Pending => roster.pending.push(membership),
            MembershipStatus::Active => roster.active.push(membership),
            MembershipStatus::Rejected => {}
        }
    }
    roster
        .active
        .sort_by_cached_key(|m| member_name(names, m.user).to_lowercase());
    roster
}

#[derive(Clone, Debug, PartialEq)]
struct ClubRoster {
    club: ClubDto,
    names: HashMap<i32, String>,
    roster: Roster,
}

async fn load_roster(api: &ApiClient, user_id: i32) -> Result<Option<ClubRoster>, ApiError> {
    let Some(club) = find_coordinated_club(list_clubs(api).await?, user_id) else {
        return Ok(None);
    };

    let (memberships, members) =
        futures::join!(list_club_memberships(api, club.id), list_members(api));
    let names = user_names(members.unwrap_or_default());
    let roster = roster(memberships?, &names);

    Ok(Some(ClubRoster {
        club,
        names,
        roster,
    }))
}

#[component]
pub fn ClubMembers() -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let mut notification = use_context::<NotificationContext>();
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_remove_modal = use_signal(|| false);
    let mut member_to_remove = use_signal(|| None::<(i32, String)>);
    let mut is_removing = use_signal(|| false);

    let loaded = {
        let api = api.clone();
        use_resource(move || {
            let api = api.clone();
            let user_id = auth.read().user().map(|user| user.id);
            let _ = refetch_trigger();
            async move {
                match user_id {
                    Some(user_id) => load_roster(&api, user_id).await,
                    None => Ok(None),
                }
            }
        })
    };

    let on_remove = move |_: ()| {
        let Some((id, name)) = member_to_remove() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            is_removing.set(true);
            match leave_club(&api, id).await {
                Ok(()) => {
                    notification.success(format!("{} was removed from the club", name));
                    show_remove_modal.set(false);
                    refetch_trigger += 1;
                }
                Err(err) => {
                    tracing::error!("Failed to remove membership {}: {}", id, err);
                    notification.error(err.message);
                }
            }
            is_removing.set(false);
        });
    };

    rsx! {
        Title { "Members | {SITE_NAME}" }
        match &*loaded.read_unchecked() {
            Some(Ok(Some(ClubRoster { club, names, roster }))) => rsx! {
                Page {
                    class: "flex justify-center w-full",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-6",
                        div {
                            h1 { class: "text-2xl font-bold", "Members" }
                            Link {
                                to: Route::ClubDetail { id: club.id },
                                class: "link link-hover opacity-70",
                                "{club.name}"
                            }
                        }
                        section {
                            h2 { class: "text-xl font-bold mb-2", "Pending requests ({roster.pending.len()})" }
                            PendingMemberships {
                                memberships: roster.pending.clone(),
                                names: names.clone(),
                                on_reviewed: move |_| refetch_trigger += 1,
                            }
                        }
                        section {
                            h2 { class: "text-xl font-bold mb-2", "Active members ({roster.active.len()})" }
                            if roster.active.is_empty() {
                                p { class: "opacity-60", "Nobody has joined yet." }
                            } else {
                                div {
                                    class: "overflow-x-auto",
                                    table {
                                        class: "table table-zebra w-full",
                                        thead {
                                            tr {
                                                th { "Name" }
                                                th { "Role" }
                                                th { "Since" }
                                                th { class: "text-right", "Actions" }
                                            }
                                        }
                                        tbody {
                                            for membership in roster.active.clone() {
                                                {
                                                    let id = membership.id;
                                                    let name = member_name(names, membership.user);
                                                    let removed_name = name.clone();
                                                    rsx! {
                                                        tr {
                                                            key: "{id}",
                                                            td { class: "font-medium", "{name}" }
                                                            td { {membership_role_label(membership.role)} }
                                                            td {
                                                                if let Some(joined_at) = membership.joined_at {
                                                                    {format_date(&joined_at)}
                                                                }
                                                            }
                                                            td {
                                                                class: "text-right",
                                                                button {
                                                                    class: "btn btn-sm btn-error btn-outline",
                                                                    onclick: move |_| {
                                                                        member_to_remove.set(Some((id, removed_name.clone())));
                                                                        show_remove_modal.set(true);
                                                                    },
                                                                    "Remove"
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Ok(None)) => rsx! {
                ErrorPage { status: 404, message: "You do not coordinate a club yet." }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            None => rsx! { LoadingPage {} },
        }

        ConfirmationModal {
            show: show_remove_modal,
            title: "Remove member",
            message: match member_to_remove() {
                Some((_, name)) => format!("Remove {} from the club?", name),
                None => String::new(),
            },
            confirm_text: "Remove",
            is_processing: is_removing(),
            on_confirm: on_remove,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::membership::MembershipRole;

    fn membership(id: i32, user: i32, status: MembershipStatus) -> MembershipDto {
        MembershipDto {
            id,
            user,
            club: 1,
            role: MembershipRole::Member,
            status,
            joined_at: None,
        }
    }

    #[test]
    fn roster_splits_by_status_and_sorts_members_by_name() {
        let names = HashMap::from([
            (10, "zoe Martin".to_string()),
            (11, "Alan Turing".to_string()),
            (12, "Grace Hopper".to_string()),
        ]);

        let roster = roster(
            vec![
                membership(1, 10, MembershipStatus::Active),
                membership(2, 11, MembershipStatus::Active),
                membership(3, 12, MembershipStatus::Pending),
                membership(4, 13, MembershipStatus::Rejected),
            ],
            &names,
        );

        assert_eq!(
            roster.active.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(
            roster.pending.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![3]
        );
    }
}
