use shared::{EventRow, ListState, Route};
use yew::prelude::*;

use crate::hooks::use_events::use_events;
use crate::hooks::use_navigator::use_navigator;

#[function_component(EventList)]
pub fn event_list() -> Html {
    let navigator = use_navigator();
    let events = use_events();

    let events = match &events.state {
        ListState::Loading => return html! { <div class="card loading">{"Loading..."}</div> },
        ListState::Loaded(events) => events,
    };

    html! {
        <section class="card events-section">
            <div class="section-actions">
                <a class="btn btn-primary" href={Route::NewEvent.path()} onclick={navigator.to(Route::NewEvent)}>
                    {"Create new event"}
                </a>
            </div>
            <div class="table-container">
                <table class="events-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th class="align-right">{"Creator"}</th>
                            <th class="align-right">{"Date"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for events.iter().map(EventRow::new).map(|row| {
                            let target = Route::Gifts { event_id: row.id.clone() };
                            html! {
                                <tr key={row.id.clone()}>
                                    <th scope="row">
                                        <a href={target.path()} onclick={navigator.to(target.clone())}>{&row.name}</a>
                                    </th>
                                    <td class="align-right">{&row.creator_name}</td>
                                    <td class="align-right">{&row.date}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
