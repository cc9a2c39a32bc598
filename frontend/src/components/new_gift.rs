use shared::actions;
use shared::validation::{FormField, FormValidation};
use shared::{AlertDialog, ListState, Route, SubmitError};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::alert_dialog::AlertDialogModal;
use super::forms::{bind_input, bind_textarea, FieldError};
use crate::hooks::use_navigator::use_navigator;
use crate::hooks::use_participants::use_participants;
use crate::services::api::api_client;

#[derive(Properties, PartialEq)]
pub struct NewGiftProps {
    pub event_id: String,
}

#[function_component(NewGift)]
pub fn new_gift(props: &NewGiftProps) -> Html {
    let navigator = use_navigator();
    let participants = use_participants(&props.event_id);
    let name = use_state(String::new);
    let to_id = use_state(String::new);
    let urls = use_state(String::new);
    let secret = use_state(|| false);
    let validation = use_state(FormValidation::default);
    let is_submitting = use_state(|| false);
    let alert = use_state(|| Option::<AlertDialog>::None);

    let on_recipient_change = {
        let to_id = to_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            to_id.set(select.value());
        })
    };

    let on_secret_change = {
        let secret = secret.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            secret.set(input.checked());
        })
    };

    let on_submit = {
        let event_id = props.event_id.clone();
        let name = name.clone();
        let to_id = to_id.clone();
        let urls = urls.clone();
        let secret = secret.clone();
        let validation = validation.clone();
        let is_submitting = is_submitting.clone();
        let alert = alert.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let event_id = event_id.clone();
            let name = (*name).clone();
            let to_id = (*to_id).clone();
            let urls: Vec<String> = urls.lines().map(str::to_string).collect();
            let secret = *secret;
            let validation = validation.clone();
            let is_submitting = is_submitting.clone();
            let alert = alert.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            spawn_local(async move {
                let result = actions::create_gift(&api_client(), &event_id, &name, &to_id, &urls, secret).await;
                is_submitting.set(false);
                match result {
                    Ok(route) => navigator.push(route),
                    Err(SubmitError::Invalid(errors)) => validation.set(errors),
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

    let recipients = match &participants.state {
        ListState::Loading => html! { <option value="" disabled=true>{"Loading..."}</option> },
        ListState::Loaded(users) => html! {
            <>
                <option value="" selected={to_id.is_empty()}>{"Choose a recipient"}</option>
                {for users.iter().map(|user| html! {
                    <option key={user.id.clone()} value={user.id.clone()} selected={*to_id == user.id}>
                        {&user.name}
                    </option>
                })}
            </>
        },
    };

    let back = Route::Gifts {
        event_id: props.event_id.clone(),
    };

    html! {
        <section class="card form-card">
            <h2>{"New gift"}</h2>
            <form onsubmit={on_submit} novalidate=true>
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input id="name" type="text" value={(*name).clone()} oninput={bind_input(&name)} disabled={*is_submitting} />
                    <FieldError message={validation.error_for(FormField::Name)} />
                </div>
                <div class="form-group">
                    <label for="recipient">{"For"}</label>
                    <select id="recipient" onchange={on_recipient_change} disabled={*is_submitting}>
                        {recipients}
                    </select>
                    <FieldError message={validation.error_for(FormField::Recipient)} />
                </div>
                <div class="form-group">
                    <label for="urls">{"Links (one per line)"}</label>
                    <textarea id="urls" rows="4" value={(*urls).clone()} oninput={bind_textarea(&urls)} disabled={*is_submitting} />
                </div>
                <div class="form-group form-check">
                    <input id="secret" type="checkbox" checked={*secret} onchange={on_secret_change} disabled={*is_submitting} />
                    <label for="secret">{"Secret (hidden from the recipient)"}</label>
                </div>
                <div class="form-buttons">
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {if *is_submitting { "Creating..." } else { "Create" }}
                    </button>
                    <a class="btn btn-secondary" href={back.path()} onclick={navigator.to(back.clone())}>{"Cancel"}</a>
                </div>
            </form>
            <AlertDialogModal dialog={(*alert).clone()} on_close={on_alert_close} />
        </section>
    }
}
