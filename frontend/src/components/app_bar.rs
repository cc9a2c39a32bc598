use shared::session;
use shared::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_current_user::use_current_user;
use crate::hooks::use_navigator::use_navigator;
use crate::services::api::api_client;

/// Persistent navigation bar of the authenticated area
#[function_component(AppBar)]
pub fn app_bar() -> Html {
    let navigator = use_navigator();
    let current_user = use_current_user();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_backdrop_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu_open.set(false);
        })
    };

    // The login screen is shown before the server answers; the request
    // outcome only matters for the log.
    let on_logout = {
        let navigator = navigator.clone();
        let clear_user = current_user.clear.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            clear_user.emit(());
            let client = api_client();
            session::forget_session(&client);
            navigator.push(Route::Login);
            spawn_local(async move {
                session::send_logout(&client).await;
            });
        })
    };

    let Some(user) = current_user.user else {
        return html! {
            <header class="app-bar">
                <div class="container">{"Loading..."}</div>
            </header>
        };
    };

    let avatar = match user.avatar_url() {
        Some(url) => html! { <img class="avatar" src={url.to_string()} alt={user.email.clone()} /> },
        None => html! { <span class="avatar avatar-initial">{user.initial()}</span> },
    };

    html! {
        <header class="app-bar">
            <div class="container app-bar-toolbar">
                <nav class="app-bar-links">
                    <a class="btn btn-text" href={Route::Events.path()} onclick={navigator.to(Route::Events)}>
                        {"Events"}
                    </a>
                </nav>
                <div class="app-bar-user">
                    <button type="button" class="avatar-button" title="Logout" onclick={toggle_menu}>
                        {avatar}
                    </button>
                    {if *menu_open {
                        html! {
                            <>
                                <div class="menu-backdrop" onclick={on_backdrop_click}></div>
                                <ul class="user-menu">
                                    <li class="user-menu-name">{&user.name}</li>
                                    <li>
                                        <button type="button" class="menu-item" onclick={on_logout}>{"Logout"}</button>
                                    </li>
                                </ul>
                            </>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </header>
    }
}
