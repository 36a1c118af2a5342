use std::collections::HashMap;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use futures::try_join;

use crate::{
    client::{
        api::{
            club::list_clubs,
            membership::{get_membership, leave_club, list_my_memberships},
            ApiClient,
        },
        component::{ConfirmationModal, ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        format::{format_date, membership_role_label, membership_status_label},
        model::{
            error::ApiError,
            notification::{NotificationContext, Severity},
        },
        router::Route,
    },
    model::membership::{MembershipDto, MembershipStatus},
};

#[derive(Clone, Debug, PartialEq)]
pub struct MembershipRow {
    pub membership: MembershipDto,
    pub club_name: String,
}

/// Pairs memberships with their club's name, active memberships first.
pub fn membership_rows(
    memberships: Vec<MembershipDto>,
    club_names: &HashMap<i32, String>,
) -> Vec<MembershipRow> {
    let mut rows: Vec<MembershipRow> = memberships
        .into_iter()
        .map(|membership| MembershipRow {
            club_name: club_names
                .get(&membership.club)
                .cloned()
                .unwrap_or_else(|| format!("Club #{}", membership.club)),
            membership,
        })
        .collect();
    rows.sort_by_key(|row| row.membership.status != MembershipStatus::Active);
    rows
}

/// Banner for the latest status of a membership request.
pub fn status_update(club_name: &str, membership: &MembershipDto) -> (Severity, String) {
    match membership.status {
        MembershipStatus::Active => (
            Severity::Success,
            format!("Your request to join {} was approved", club_name),
        ),
        MembershipStatus::Rejected => (
            Severity::Warning,
            format!("Your request to join {} was declined", club_name),
        ),
        MembershipStatus::Pending => (
            Severity::Info,
            format!("Your request to join {} is still pending", club_name),
        ),
    }
}

async fn load_rows(api: &ApiClient) -> Result<Vec<MembershipRow>, ApiError> {
    let (memberships, clubs) = try_join!(list_my_memberships(api), list_clubs(api))?;
    let names = clubs.into_iter().map(|club| (club.id, club.name)).collect();
    Ok(membership_rows(memberships, &names))
}

#[component]
pub fn MyMemberships() -> Element {
    let api = use_context::<ApiClient>();
    let mut notification = use_context::<NotificationContext>();
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_leave_modal = use_signal(|| false);
    let mut membership_to_leave = use_signal(|| None::<(i32, String)>);
    let mut is_leaving = use_signal(|| false);

    let rows = {
        let api = api.clone();
        use_resource(move || {
            let api = api.clone();
            let _ = refetch_trigger();
            async move { load_rows(&api).await }
        })
    };

    let on_check = {
        let api = api.clone();
        move |(id, club_name): (i32, String)| {
            let api = api.clone();
            spawn(async move {
                match get_membership(&api, id).await {
                    Ok(membership) => {
                        let (severity, message) = status_update(&club_name, &membership);
                        notification.show(message, severity);
                        if membership.status != MembershipStatus::Pending {
                            refetch_trigger += 1;
                        }
                    }
                    Err(err) => {
                        tracing::error!("Failed to check membership {}: {}", id, err);
                        notification.error(err.message);
                    }
                }
            });
        }
    };

    let on_leave = move |_: ()| {
        let Some((id, club_name)) = membership_to_leave() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            is_leaving.set(true);
            match leave_club(&api, id).await {
                Ok(()) => {
                    notification.success(format!("You left {}", club_name));
                    show_leave_modal.set(false);
                    refetch_trigger += 1;
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
        Title { "My memberships | {SITE_NAME}" }
        match &*rows.read_unchecked() {
            Some(Ok(rows)) => rsx! {
                Page {
                    class: "flex justify-center w-full",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-4",
                        h1 { class: "text-2xl font-bold", "My memberships" }
                        if rows.is_empty() {
                            div {
                                class: "flex flex-col items-start gap-2",
                                p { class: "opacity-60", "You have not joined any club yet." }
                                Link { to: Route::ClubList {}, class: "btn btn-primary btn-sm", "Browse clubs" }
                            }
                        } else {
                            div {
                                class: "overflow-x-auto",
                                table {
                                    class: "table table-zebra w-full",
                                    thead {
                                        tr {
                                            th { "Club" }
                                            th { "Role" }
                                            th { "Status" }
                                            th { "Since" }
                                            th { class: "text-right", "Actions" }
                                        }
                                    }
                                    tbody {
                                        for row in rows.clone() {
                                            {
                                                let id = row.membership.id;
                                                let club_name = row.club_name.clone();
                                                let pending = row.membership.status == MembershipStatus::Pending;
                                                let on_check = on_check.clone();
                                                let check_name = row.club_name.clone();
                                                rsx! {
                                                    tr {
                                                        key: "{id}",
                                                        td {
                                                            Link {
                                                                to: Route::ClubDetail { id: row.membership.club },
                                                                class: "link link-hover font-medium",
                                                                "{row.club_name}"
                                                            }
                                                        }
                                                        td { {membership_role_label(row.membership.role)} }
                                                        td { {membership_status_label(row.membership.status)} }
                                                        td {
                                                            if let Some(joined_at) = row.membership.joined_at {
                                                                {format_date(&joined_at)}
                                                            }
                                                        }
                                                        td {
                                                            class: "text-right",
                                                            if pending {
                                                                button {
                                                                    class: "btn btn-sm btn-ghost mr-2",
                                                                    onclick: move |_| on_check((id, check_name.clone())),
                                                                    "Check status"
                                                                }
                                                            }
                                                            button {
                                                                class: "btn btn-sm btn-error btn-outline",
                                                                onclick: move |_| {
                                                                    membership_to_leave.set(Some((id, club_name.clone())));
                                                                    show_leave_modal.set(true);
                                                                },
                                                                if pending {
                                                                    "Cancel request"
                                                                } else {
                                                                    "Leave"
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
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            None => rsx! { LoadingPage {} },
        }

        ConfirmationModal {
            show: show_leave_modal,
            title: "Leave club",
            message: match membership_to_leave() {
                Some((_, club_name)) => format!("Do you really want to leave {}?", club_name),
                None => String::new(),
            },
            confirm_text: "Leave",
            is_processing: is_leaving(),
            on_confirm: on_leave,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::membership::MembershipRole;

    fn membership(id: i32, club: i32, status: MembershipStatus) -> MembershipDto {
        MembershipDto {
            id,
            user: 1,
            club,
            role: MembershipRole::Member,
            status,
            joined_at: None,
        }
    }

    #[test]
    fn active_memberships_come_first() {
        let names = HashMap::from([(1, "Chess Club".to_string())]);
        let rows = membership_rows(
            vec![
                membership(1, 1, MembershipStatus::Pending),
                membership(2, 2, MembershipStatus::Active),
            ],
            &names,
        );

        assert_eq!(rows[0].membership.id, 2);
        assert_eq!(rows[0].club_name, "Club #2");
        assert_eq!(rows[1].club_name, "Chess Club");
    }

    #[test]
    fn still_pending_request_is_informational() {
        let (severity, message) =
            status_update("Chess Club", &membership(1, 1, MembershipStatus::Pending));
        assert_eq!(severity, Severity::Info);
        assert_eq!(message, "Your request to join Chess Club is still pending");

        let (severity, _) =
            status_update("Chess Club", &membership(1, 1, MembershipStatus::Rejected));
        assert_eq!(severity, Severity::Warning);
    }
}
