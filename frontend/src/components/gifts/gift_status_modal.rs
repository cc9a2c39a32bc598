use shared::actions;
use shared::validation::FormField;
use shared::{AlertDialog, Gift, GiftRow, GiftStatus, Route, SubmitError};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::alert_dialog::AlertDialogModal;
use crate::components::forms::FieldError;
use crate::hooks::use_navigator::use_navigator;
use crate::services::api::api_client;

#[derive(Properties, PartialEq)]
pub struct GiftStatusModalProps {
    pub event_id: String,
    pub gift: GiftRow,
    /// Receives the re-fetched gift list
    pub on_updated: Callback<Vec<Gift>>,
    pub on_close: Callback<()>,
}

#[function_component(GiftStatusModal)]
pub fn gift_status_modal(props: &GiftStatusModalProps) -> Html {
    let navigator = use_navigator();
    let selected = use_state(|| props.gift.initial_selection());
    let status_error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);
    let alert = use_state(|| Option::<AlertDialog>::None);

    let on_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(status) = GiftStatus::from_code_str(&select.value()) {
                selected.set(status);
            }
        })
    };

    let on_submit = {
        let event_id = props.event_id.clone();
        let gift_id = props.gift.id.clone();
        let on_updated = props.on_updated.clone();
        let on_close = props.on_close.clone();
        let selected = selected.clone();
        let status_error = status_error.clone();
        let is_submitting = is_submitting.clone();
        let alert = alert.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let event_id = event_id.clone();
            let gift_id = gift_id.clone();
            let status = *selected;
            let on_updated = on_updated.clone();
            let on_close = on_close.clone();
            let status_error = status_error.clone();
            let is_submitting = is_submitting.clone();
            let alert = alert.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            spawn_local(async move {
                let result = actions::update_gift_status(&api_client(), &event_id, &gift_id, status).await;
                is_submitting.set(false);
                match result {
                    Ok(gifts) => {
                        on_updated.emit(gifts);
                        on_close.emit(());
                    }
                    Err(SubmitError::Invalid(errors)) => status_error.set(errors.error_for(FormField::Status)),
                    Err(SubmitError::Rejected(dialog)) => alert.set(Some(dialog)),
                    Err(SubmitError::Refresh(_)) => navigator.push(Route::Login),
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let is_submitting = is_submitting.clone();
        Callback::from(move |_: MouseEvent| {
            if !*is_submitting {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_alert_close = {
        let alert = alert.clone();
        Callback::from(move |_: ()| alert.set(None))
    };

    html! {
        <>
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{format!("Update \"{}\"", props.gift.name)}</h3>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="status">{"Status"}</label>
                        <select id="status" onchange={on_change} disabled={*is_submitting}>
                            {for GiftStatus::SELECTABLE.iter().map(|status| html! {
                                <option value={status.code().to_string()} selected={*status == *selected}>
                                    {status.label()}
                                </option>
                            })}
                        </select>
                        <FieldError message={(*status_error).clone()} />
                    </div>
                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Saving..." } else { "Save" }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={*is_submitting}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
        <AlertDialogModal dialog={(*alert).clone()} on_close={on_alert_close} />
        </>
    }
}
