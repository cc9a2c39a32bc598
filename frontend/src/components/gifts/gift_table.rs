use shared::actions;
use shared::{AlertDialog, Gift, GiftRow, ListState, Route, SubmitError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::comments_panel::CommentsPanel;
use super::gift_status_modal::GiftStatusModal;
use crate::components::alert_dialog::AlertDialogModal;
use crate::hooks::use_gifts::use_gifts;
use crate::hooks::use_navigator::use_navigator;
use crate::services::api::api_client;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct GiftTableProps {
    pub event_id: String,
}

#[function_component(GiftTable)]
pub fn gift_table(props: &GiftTableProps) -> Html {
    let navigator = use_navigator();
    let gifts = use_gifts(&props.event_id);
    let status_target = use_state(|| Option::<GiftRow>::None);
    let comments_target = use_state(|| Option::<GiftRow>::None);
    let alert = use_state(|| Option::<AlertDialog>::None);

    let on_delete = {
        let event_id = props.event_id.clone();
        let replace = gifts.replace.clone();
        let alert = alert.clone();
        let navigator = navigator.clone();

        Callback::from(move |gift_id: String| {
            let event_id = event_id.clone();
            let replace = replace.clone();
            let alert = alert.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                match actions::delete_gift(&api_client(), &event_id, &gift_id).await {
                    Ok(gifts) => replace.emit(gifts),
                    Err(SubmitError::Rejected(dialog)) => alert.set(Some(dialog)),
                    Err(e) => {
                        Logger::error_with_component("gift_table", &format!("Delete of {} failed: {}", gift_id, e));
                        navigator.push(Route::Login);
                    }
                }
            });
        })
    };

    let on_status_updated = {
        let replace = gifts.replace.clone();
        Callback::from(move |gifts: Vec<Gift>| replace.emit(gifts))
    };

    let close_status = {
        let status_target = status_target.clone();
        Callback::from(move |_: ()| status_target.set(None))
    };

    let close_comments = {
        let comments_target = comments_target.clone();
        Callback::from(move |_: ()| comments_target.set(None))
    };

    let on_alert_close = {
        let alert = alert.clone();
        Callback::from(move |_: ()| alert.set(None))
    };

    let rows: Vec<GiftRow> = match &gifts.state {
        ListState::Loading => return html! { <div class="loading">{"Loading..."}</div> },
        ListState::Loaded(gifts) => gifts.iter().map(GiftRow::new).collect(),
    };

    let new_gift = Route::NewGift {
        event_id: props.event_id.clone(),
    };

    let render_row = |row: &GiftRow| {
        let status_cell = if row.can_edit_status {
            let open = {
                let status_target = status_target.clone();
                let row = row.clone();
                Callback::from(move |_: MouseEvent| status_target.set(Some(row.clone())))
            };
            html! {
                <button type="button" class="chip chip-button" title={row.status_tooltip.clone()} onclick={open}>
                    {row.status_label}
                </button>
            }
        } else {
            html! { <span class="chip" title={row.status_tooltip.clone()}>{row.status_label}</span> }
        };

        let open_comments = {
            let comments_target = comments_target.clone();
            let row = row.clone();
            Callback::from(move |_: MouseEvent| comments_target.set(Some(row.clone())))
        };

        let delete = {
            let on_delete = on_delete.clone();
            let id = row.id.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        };

        html! {
            <tr key={row.id.clone()}>
                <th scope="row">
                    {&row.name}
                    if row.secret {
                        <span class="secret-marker" title="Secret">{" 🔒"}</span>
                    }
                </th>
                <td class="align-right">{&row.to_name}</td>
                <td class="align-right">{status_cell}</td>
                <td class="align-right">{&row.creator_name}</td>
                <td class="align-right">{&row.created}</td>
                <td class="align-right">
                    {for row.links.iter().map(|url| html! {
                        <a class="gift-link" href={url.clone()} target="_blank" rel="noopener noreferrer">{"Link"}</a>
                    })}
                </td>
                <td class="align-right gift-actions">
                    <button type="button" class="btn btn-small" onclick={open_comments}>{"Comments"}</button>
                    <button type="button" class="btn btn-small btn-danger" onclick={delete}>{"Delete"}</button>
                </td>
            </tr>
        }
    };

    html! {
        <>
        <div class="section-actions">
            <a class="btn btn-primary" href={new_gift.path()} onclick={navigator.to(new_gift.clone())}>
                {"Add new gift"}
            </a>
        </div>
        <div class="table-container">
            <table class="gifts-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th class="align-right">{"For"}</th>
                        <th class="align-right">{"Status"}</th>
                        <th class="align-right">{"Added by"}</th>
                        <th class="align-right">{"Created"}</th>
                        <th class="align-right">{"Links"}</th>
                        <th class="align-right"></th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(render_row)}
                </tbody>
            </table>
        </div>
        if let Some(row) = (*status_target).clone() {
            <GiftStatusModal
                event_id={props.event_id.clone()}
                gift={row}
                on_updated={on_status_updated}
                on_close={close_status}
            />
        }
        if let Some(row) = (*comments_target).clone() {
            <CommentsPanel
                event_id={props.event_id.clone()}
                gift_id={row.id.clone()}
                gift_name={row.name.clone()}
                on_close={close_comments}
            />
        }
        <AlertDialogModal dialog={(*alert).clone()} on_close={on_alert_close} />
        </>
    }
}
