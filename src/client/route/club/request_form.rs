use dioxus::prelude::*;

use crate::{
    client::{
        api::ApiClient,
        component::{ErrorAlert, Page, RequestCard, SubmitButton, SubmitError, TextArea, TextField},
        constant::SITE_NAME,
        model::{
            auth::AuthContext,
            form::{submit_form, take_value, FormState},
            notification::NotificationContext,
            request::RequestStore,
        },
        validation::{validate_club_request, CLUB_DESCRIPTION_MIN},
    },
    model::club::{ClubRequestDto, CreateClubRequestDto},
};

/// Requests submitted by `coordinator`, newest first.
pub fn own_requests(requests: &[ClubRequestDto], coordinator: i32) -> Vec<ClubRequestDto> {
    let mut own: Vec<ClubRequestDto> = requests
        .iter()
        .filter(|r| r.coordinator == coordinator)
        .cloned()
        .collect();
    own.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    own
}

#[component]
pub fn ClubRequestForm() -> Element {
    let auth = use_context::<AuthContext>();
    let api = use_context::<ApiClient>();
    let requests = use_context::<RequestStore>();
    let notification = use_context::<NotificationContext>();
    let mut form = use_signal(|| FormState::new([("club_name", ""), ("description", "")]));

    {
        let api = api.clone();
        use_resource(move || {
            let api = api.clone();
            async move { requests.fetch(&api).await }
        });
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut notification = notification;
        spawn(async move {
            let sent = submit_form(form, Some(&validate_club_request), |mut values| async move {
                let request = CreateClubRequestDto {
                    club_name: take_value(&mut values, "club_name").trim().to_string(),
                    description: take_value(&mut values, "description").trim().to_string(),
                };
                requests.create(&api, request).await.map(|_| ())
            })
            .await;
            if sent {
                notification.success("Your club request was sent to the student life office");
                form.write().reset();
            }
        });
    };

    let user_id = auth.read().user().map(|u| u.id);
    let state = requests.read();
    let own = user_id
        .map(|id| own_requests(&state.items, id))
        .unwrap_or_default();

    rsx! {
        Title { "Request a club | {SITE_NAME}" }
        Page {
            class: "flex justify-center w-full",
            div {
                class: "w-full max-w-3xl flex flex-col gap-8",
                form {
                    class: "card bg-base-200 card-body",
                    onsubmit,
                    h1 { class: "card-title text-2xl", "Request a new club" }
                    p {
                        class: "opacity-70 text-sm",
                        "A student life officer reviews every request. Describe the club's goals in at least {CLUB_DESCRIPTION_MIN} characters."
                    }
                    TextField { form, name: "club_name", label: "Club name" }
                    TextArea { form, name: "description", label: "Goals and activities", rows: 6 }
                    SubmitError { form }
                    SubmitButton { form, label: "Submit request", processing_label: "Submitting..." }
                }

                section {
                    h2 { class: "text-xl font-bold mb-4", "Your requests" }
                    if let Some(error) = state.error.clone() {
                        ErrorAlert { message: error }
                    }
                    if own.is_empty() {
                        p { class: "opacity-60", "You have not submitted any request yet." }
                    }
                    div {
                        class: "flex flex-col gap-4",
                        for request in own {
                            RequestCard { key: "{request.id}", request }
                        }
                    }
                }
            }
        }
    }
}
