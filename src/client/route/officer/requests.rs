use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        component::{CommentModal, ErrorAlert, Page, RequestCard},
        constant::SITE_NAME,
        model::{notification::NotificationContext, request::RequestStore},
    },
    model::club::ClubRequestDto,
};

/// Pending requests oldest first, so the longest waiting is reviewed first. Reviewed requests
/// newest first.
pub fn review_queue(requests: &[ClubRequestDto]) -> (Vec<ClubRequestDto>, Vec<ClubRequestDto>) {
    let (mut pending, mut reviewed): (Vec<_>, Vec<_>) =
        requests.iter().cloned().partition(|r| r.is_pending());
    pending.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));
    reviewed.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    (pending, reviewed)
}

#[component]
pub fn ClubRequests() -> Element {
    let api = use_context::<ApiClient>();
    let requests = use_context::<RequestStore>();
    let mut notification = use_context::<NotificationContext>();
    let mut show_reject_modal = use_signal(|| false);
    let mut request_to_reject = use_signal(|| None::<i32>);
    let mut is_processing = use_signal(|| false);

    {
        let api = api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { requests.fetch(&api).await }
        });
    }

    let on_approve = {
        let api = api.clone();
        move |id: i32| {
            let api = api.clone();
            spawn(async move {
                is_processing.set(true);
                match requests.approve(&api, id).await {
                    Ok(()) => notification.success("Request approved, the club is now active"),
                    Err(err) => {
                        tracing::error!("Failed to approve club request {}: {}", id, err);
                        notification.error(err.message);
                    }
                }
                is_processing.set(false);
            });
        }
    };

    let on_reject = move |comment: Option<String>| {
        let Some(id) = request_to_reject() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            is_processing.set(true);
            match requests.reject(&api, id, comment).await {
                Ok(()) => {
                    notification.success("Request rejected");
                    show_reject_modal.set(false);
                    request_to_reject.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to reject club request {}: {}", id, err);
                    notification.error(err.message);
                }
            }
            is_processing.set(false);
        });
    };

    let state = requests.read();
    let (pending, reviewed) = review_queue(&state.items);

    rsx! {
        Title { "Club requests | {SITE_NAME}" }
        Page {
            class: "flex justify-center w-full",
            div {
                class: "w-full max-w-6xl flex flex-col gap-6",
                h1 { class: "text-2xl font-bold", "Club requests" }
                if let Some(error) = state.error.clone() {
                    ErrorAlert { message: error }
                }
                if state.loading && state.items.is_empty() {
                    div {
                        class: "flex justify-center",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                } else {
                    section {
                        h2 { class: "text-xl font-bold mb-2", "Waiting for review ({pending.len()})" }
                        if pending.is_empty() {
                            p { class: "opacity-60", "Nothing to review." }
                        } else {
                            div {
                                class: "grid gap-4 md:grid-cols-2",
                                for request in pending {
                                    RequestCard {
                                        key: "{request.id}",
                                        request,
                                        on_approve: on_approve.clone(),
                                        on_reject: move |id: i32| {
                                            request_to_reject.set(Some(id));
                                            show_reject_modal.set(true);
                                        },
                                    }
                                }
                            }
                        }
                    }
                    section {
                        h2 { class: "text-xl font-bold mb-2", "Reviewed" }
                        if reviewed.is_empty() {
                            p { class: "opacity-60", "No request was reviewed yet." }
                        } else {
                            div {
                                class: "grid gap-4 md:grid-cols-2",
                                for request in reviewed {
                                    RequestCard {
                                        key: "{request.id}",
                                        request,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        CommentModal {
            show: show_reject_modal,
            title: "Reject request",
            label: "Comment for the coordinator (optional)",
            confirm_text: "Reject",
            confirm_class: "btn-error",
            is_processing: is_processing(),
            on_confirm: on_reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::club::RequestStatus;

    fn request(id: i32, status: RequestStatus, day: u32) -> ClubRequestDto {
        ClubRequestDto {
            id,
            club_name: format!("Club {}", id),
            description: String::new(),
            status,
            coordinator: 2,
            student_life_officer_comment: None,
            submitted_at: Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).single(),
        }
    }

    #[test]
    fn oldest_pending_request_comes_first() {
        let requests = [
            request(1, RequestStatus::Pending, 5),
            request(2, RequestStatus::Approved, 1),
            request(3, RequestStatus::Pending, 2),
            request(4, RequestStatus::Rejected, 3),
        ];

        let (pending, reviewed) = review_queue(&requests);

        assert_eq!(pending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(reviewed.iter().map(|r| r.id).collect::<Vec<_>>(), vec![4, 2]);
    }
}
