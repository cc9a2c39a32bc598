use shared::actions;
use shared::validation::FormField;
use shared::{AlertDialog, ListState, Route, SubmitError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::alert_dialog::AlertDialogModal;
use crate::components::forms::{bind_textarea, FieldError};
use crate::hooks::use_comments::use_comments;
use crate::hooks::use_navigator::use_navigator;
use crate::services::api::api_client;

#[derive(Properties, PartialEq)]
pub struct CommentsPanelProps {
    pub event_id: String,
    pub gift_id: String,
    pub gift_name: String,
    pub on_close: Callback<()>,
}

/// Comment thread of one gift, fetched each time the panel is mounted
#[function_component(CommentsPanel)]
pub fn comments_panel(props: &CommentsPanelProps) -> Html {
    let navigator = use_navigator();
    let comments = use_comments(&props.event_id, &props.gift_id);
    let message = use_state(String::new);
    let message_error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);
    let alert = use_state(|| Option::<AlertDialog>::None);

    let on_submit = {
        let event_id = props.event_id.clone();
        let gift_id = props.gift_id.clone();
        let on_close = props.on_close.clone();
        let message = message.clone();
        let message_error = message_error.clone();
        let is_submitting = is_submitting.clone();
        let alert = alert.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let event_id = event_id.clone();
            let gift_id = gift_id.clone();
            let text = (*message).clone();
            let on_close = on_close.clone();
            let message_error = message_error.clone();
            let is_submitting = is_submitting.clone();
            let alert = alert.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            spawn_local(async move {
                let result = actions::add_comment(&api_client(), &event_id, &gift_id, &text).await;
                is_submitting.set(false);
                match result {
                    Ok(()) => on_close.emit(()),
                    Err(SubmitError::Invalid(errors)) => message_error.set(errors.error_for(FormField::Message)),
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
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_alert_close = {
        let alert = alert.clone();
        Callback::from(move |_: ()| alert.set(None))
    };

    let thread = match &comments.state {
        ListState::Loading => html! { <div class="loading">{"Loading..."}</div> },
        ListState::Loaded(items) if items.is_empty() => html! { <div class="empty">{"No comments yet"}</div> },
        ListState::Loaded(items) => html! {
            <ul class="comment-list">
                {for items.iter().map(|comment| html! {
                    <li key={comment.id.clone()} class="comment">
                        <div class="comment-header">
                            <span class="comment-author">{&comment.author.name}</span>
                            <span class="comment-since">{&comment.since}</span>
                        </div>
                        <p class="comment-message">{&comment.message}</p>
                    </li>
                })}
            </ul>
        },
    };

    html! {
        <>
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal comments-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{format!("Comments on \"{}\"", props.gift_name)}</h3>
                {thread}
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="comment">{"Add a comment"}</label>
                        <textarea id="comment" rows="3" value={(*message).clone()}
                            oninput={bind_textarea(&message)} disabled={*is_submitting} />
                        <FieldError message={(*message_error).clone()} />
                    </div>
                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Sending..." } else { "Comment" }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Close"}</button>
                    </div>
                </form>
            </div>
        </div>
        <AlertDialogModal dialog={(*alert).clone()} on_close={on_alert_close} />
        </>
    }
}
