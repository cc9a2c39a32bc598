use gloo::history::{BrowserHistory, History};
use shared::Route;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::app_bar::AppBar;
use components::event_list::EventList;
use components::event_page::EventPage;
use components::login::Login;
use components::new_event::NewEvent;
use components::new_gift::NewGift;
use components::not_found::NotFound;
use components::signup::Signup;
use hooks::use_navigator::Navigator;
use hooks::use_session_gate::use_session_gate;
use services::logging::Logger;

fn current_route(history: &BrowserHistory) -> Route {
    Route::from_path(&history.location().path())
}

fn render_route(route: &Route) -> Html {
    match route {
        Route::Login => html! { <Login /> },
        Route::Signup => html! { <Signup /> },
        Route::Events => html! { <EventList /> },
        Route::NewEvent => html! { <NewEvent /> },
        Route::Gifts { event_id } => html! { <EventPage key={event_id.clone()} event_id={event_id.clone()} /> },
        Route::NewGift { event_id } => html! { <NewGift key={event_id.clone()} event_id={event_id.clone()} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let history = use_memo((), |_| BrowserHistory::new());
    let route = use_state(|| current_route(&history));

    // Back/forward buttons and pushes both land here
    {
        let history = history.clone();
        let route = route.clone();
        use_effect_with((), move |_| {
            let listened = (*history).clone();
            let listener = history.listen(move || route.set(current_route(&listened)));
            move || drop(listener)
        });
    }

    let navigator = {
        let history = history.clone();
        (*use_memo((), move |_| {
            Navigator::new(Callback::from(move |target: Route| {
                Logger::debug_with_component("router", &format!("navigating to {}", target));
                history.push(target.path());
            }))
        }))
        .clone()
    };

    use_session_gate(&route, &navigator);

    let view = if route.is_protected() {
        html! {
            <>
                <AppBar />
                <main class="container">{render_route(&route)}</main>
            </>
        }
    } else {
        html! { <main class="container auth-container">{render_route(&route)}</main> }
    };

    html! {
        <ContextProvider<Navigator> context={navigator}>
            {view}
        </ContextProvider<Navigator>>
    }
}

fn main() {
    if let Err(e) = services::logging::init() {
        gloo::console::error!(format!("Failed to initialise logging: {}", e));
    }
    Logger::info_with_component("main", "Starting gifter frontend");
    yew::Renderer::<App>::new().render();
}
