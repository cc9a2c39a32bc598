use chrono::{Datelike, Local, NaiveDate};
use shared::actions;
use shared::validation::{FormField, FormValidation};
use shared::{AlertDialog, Route, SubmitError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::alert_dialog::AlertDialogModal;
use super::forms::{bind_input, FieldError};
use crate::hooks::use_navigator::use_navigator;
use crate::services::api::api_client;

/// Next Christmas, the date the form starts on
fn default_event_date() -> String {
    let today = Local::now().date_naive();
    let this_year = NaiveDate::from_ymd_opt(today.year(), 12, 25);
    match this_year {
        Some(christmas) if christmas >= today => christmas.format("%Y-%m-%d").to_string(),
        _ => format!("{}-12-25", today.year() + 1),
    }
}

#[function_component(NewEvent)]
pub fn new_event() -> Html {
    let navigator = use_navigator();
    let name = use_state(String::new);
    let date = use_state(default_event_date);
    let validation = use_state(FormValidation::default);
    let is_submitting = use_state(|| false);
    let alert = use_state(|| Option::<AlertDialog>::None);

    let on_submit = {
        let name = name.clone();
        let date = date.clone();
        let validation = validation.clone();
        let is_submitting = is_submitting.clone();
        let alert = alert.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let name = (*name).clone();
            let date = (*date).clone();
            let validation = validation.clone();
            let is_submitting = is_submitting.clone();
            let alert = alert.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            spawn_local(async move {
                let result = actions::create_event(&api_client(), &name, &date).await;
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

    html! {
        <section class="card form-card">
            <h2>{"New event"}</h2>
            <form onsubmit={on_submit} novalidate=true>
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input id="name" type="text" value={(*name).clone()} oninput={bind_input(&name)} disabled={*is_submitting} />
                    <FieldError message={validation.error_for(FormField::Name)} />
                </div>
                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input id="date" type="date" value={(*date).clone()} oninput={bind_input(&date)} disabled={*is_submitting} />
                    <FieldError message={validation.error_for(FormField::Date)} />
                </div>
                <div class="form-buttons">
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {if *is_submitting { "Creating..." } else { "Create" }}
                    </button>
                    <a class="btn btn-secondary" href={Route::Events.path()} onclick={navigator.to(Route::Events)}>{"Cancel"}</a>
                </div>
            </form>
            <AlertDialogModal dialog={(*alert).clone()} on_close={on_alert_close} />
        </section>
    }
}
