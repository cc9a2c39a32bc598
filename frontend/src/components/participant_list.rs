use shared::actions;
use shared::validation::FormField;
use shared::{AlertDialog, ListState, Route, SubmitError, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::alert_dialog::AlertDialogModal;
use super::forms::{bind_input, FieldError};
use crate::hooks::use_navigator::use_navigator;
use crate::hooks::use_participants::use_participants;
use crate::services::api::api_client;

#[derive(Properties, PartialEq)]
pub struct ParticipantListProps {
    pub event_id: String,
}

fn participant_row(user: &User) -> Html {
    let avatar = match user.avatar_url() {
        Some(url) => html! { <img class="avatar" src={url.to_string()} alt={user.name.clone()} /> },
        None => html! { <span class="avatar avatar-initial">{user.initial()}</span> },
    };
    html! {
        <li key={user.email.clone()} class="participant">
            {avatar}
            <span class="participant-name">{&user.name}</span>
        </li>
    }
}

#[function_component(ParticipantList)]
pub fn participant_list(props: &ParticipantListProps) -> Html {
    let navigator = use_navigator();
    let participants = use_participants(&props.event_id);
    let email = use_state(String::new);
    let email_error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);
    let alert = use_state(|| Option::<AlertDialog>::None);

    let on_submit = {
        let event_id = props.event_id.clone();
        let replace = participants.replace.clone();
        let email = email.clone();
        let email_error = email_error.clone();
        let is_submitting = is_submitting.clone();
        let alert = alert.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let event_id = event_id.clone();
            let replace = replace.clone();
            let email = email.clone();
            let email_error = email_error.clone();
            let is_submitting = is_submitting.clone();
            let alert = alert.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            spawn_local(async move {
                let result = actions::add_participant(&api_client(), &event_id, &email).await;
                is_submitting.set(false);
                match result {
                    Ok(users) => {
                        replace.emit(users);
                        email.set(String::new());
                        email_error.set(None);
                    }
                    Err(SubmitError::Invalid(errors)) => {
                        email_error.set(errors.error_for(FormField::ParticipantEmail))
                    }
                    Err(SubmitError::Rejected(dialog)) => alert.set(Some(dialog)),
                    Err(SubmitError::Refresh(_)) => navigator.push(Route::Login),
                }
            });
        })
    };

    let on_alert_close = {
        let alert = alert.clone();
        Callback::from(move |_: ()| alert.set(None))
    };

    let list = match &participants.state {
        ListState::Loading => html! { <div class="loading">{"Loading..."}</div> },
        ListState::Loaded(users) => html! {
            <ul class="participant-list">
                {for users.iter().map(participant_row)}
            </ul>
        },
    };

    html! {
        <>
        {list}
        <form class="participant-form" onsubmit={on_submit} novalidate=true>
            <div class="form-group">
                <label for="participant-email">{"Add participant by email"}</label>
                <input id="participant-email" type="email" value={(*email).clone()}
                    oninput={bind_input(&email)} disabled={*is_submitting} />
                <FieldError message={(*email_error).clone()} />
            </div>
            <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                {if *is_submitting { "Adding..." } else { "Add" }}
            </button>
        </form>
        <AlertDialogModal dialog={(*alert).clone()} on_close={on_alert_close} />
        </>
    }
}
