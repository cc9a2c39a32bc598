use shared::endpoints;
use shared::session;
use shared::validation::{FormField, FormValidation};
use shared::{AlertDialog, Route, SubmitError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::alert_dialog::AlertDialogModal;
use super::forms::{bind_input, FieldError};
use crate::hooks::use_navigator::use_navigator;
use crate::services::api::{api_client, app_config};

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let validation = use_state(FormValidation::default);
    let is_submitting = use_state(|| false);
    let alert = use_state(|| Option::<AlertDialog>::None);

    let on_submit = {
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

            let email = (*email).clone();
            let password = (*password).clone();
            let validation = validation.clone();
            let is_submitting = is_submitting.clone();
            let alert = alert.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            spawn_local(async move {
                let result = session::login(&api_client(), &email, &password).await;
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

    let google_href = app_config().url(endpoints::GOOGLE_SIGN_IN);
    let on_google_click = Callback::from(|_: MouseEvent| session::begin_external_sign_in(&api_client()));

    html! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="auth-title">{"Welcome to this awesome application"}</h1>
                <p class="auth-subtitle">{"Log in please. It's quick and easy!"}</p>

                <form class="auth-form" onsubmit={on_submit} novalidate=true>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                            disabled={*is_submitting}
                        />
                        <FieldError message={validation.error_for(FormField::Email)} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                            disabled={*is_submitting}
                        />
                        <FieldError message={validation.error_for(FormField::Password)} />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                        {if *is_submitting { "Logging in..." } else { "Login" }}
                    </button>
                    <p class="auth-switch">
                        {"Don't have an account? "}
                        <a href={Route::Signup.path()} onclick={navigator.to(Route::Signup)}>{"Create an account"}</a>
                    </p>
                </form>

                <div class="auth-provider">
                    <a class="btn btn-google" href={google_href} onclick={on_google_click}>{"Sign in with Google"}</a>
                </div>
            </div>
            <AlertDialogModal dialog={(*alert).clone()} on_close={on_alert_close} />
        </div>
    }
}
