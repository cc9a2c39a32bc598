use shared::session;
use shared::validation::{FormField, FormValidation};
use shared::{AlertDialog, Route, SubmitError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::alert_dialog::AlertDialogModal;
use super::forms::{bind_input, FieldError};
use crate::hooks::use_navigator::use_navigator;
use crate::services::api::api_client;

#[function_component(Signup)]
pub fn signup() -> Html {
    let navigator = use_navigator();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let validation = use_state(FormValidation::default);
    let is_submitting = use_state(|| false);
    let alert = use_state(|| Option::<AlertDialog>::None);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
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
            let email = (*email).clone();
            let password = (*password).clone();
            let validation = validation.clone();
            let is_submitting = is_submitting.clone();
            let alert = alert.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            spawn_local(async move {
                let result = session::signup(&api_client(), &name, &email, &password).await;
                is_submitting.set(false);
                match result {
                    Ok(route) => {
                        validation.set(FormValidation::default());
                        navigator.push(route);
                    }
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
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="auth-title">{"Sign up"}</h1>
                <form class="auth-form" onsubmit={on_submit} novalidate=true>
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input id="name" type="text" value={(*name).clone()} oninput={bind_input(&name)} disabled={*is_submitting} />
                        <FieldError message={validation.error_for(FormField::Name)} />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input id="email" type="email" value={(*email).clone()} oninput={bind_input(&email)} disabled={*is_submitting} />
                        <FieldError message={validation.error_for(FormField::Email)} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input id="password" type="password" value={(*password).clone()} oninput={bind_input(&password)} disabled={*is_submitting} />
                        <FieldError message={validation.error_for(FormField::Password)} />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {if *is_submitting { "Signing up..." } else { "Signup" }}
                    </button>
                    <p class="auth-switch">
                        {"Already registered? "}
                        <a href={Route::Login.path()} onclick={navigator.to(Route::Login)}>{"Log in"}</a>
                    </p>
                </form>
            </div>
            <AlertDialogModal dialog={(*alert).clone()} on_close={on_alert_close} />
        </div>
    }
}
