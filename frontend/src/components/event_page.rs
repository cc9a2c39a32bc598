use yew::prelude::*;

use super::gifts::GiftTable;
use super::participant_list::ParticipantList;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Gifts,
    Participants,
}

#[derive(Properties, PartialEq)]
pub struct EventPageProps {
    pub event_id: String,
}

/// One event: its gifts and its participants, one tab each
#[function_component(EventPage)]
pub fn event_page(props: &EventPageProps) -> Html {
    let tab = use_state(|| Tab::Gifts);

    let select = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };
    let tab_class = |target: Tab| classes!("tab", (*tab == target).then_some("tab-active"));

    html! {
        <section class="card event-page">
            <div class="tabs" role="tablist">
                <button type="button" role="tab" class={tab_class(Tab::Gifts)} onclick={select(Tab::Gifts)}>
                    {"Gifts"}
                </button>
                <button type="button" role="tab" class={tab_class(Tab::Participants)} onclick={select(Tab::Participants)}>
                    {"Participants"}
                </button>
            </div>
            <div class="tab-panel">
                {match *tab {
                    Tab::Gifts => html! { <GiftTable event_id={props.event_id.clone()} /> },
                    Tab::Participants => html! { <ParticipantList event_id={props.event_id.clone()} /> },
                }}
            </div>
        </section>
    }
}
