use shared::Route;
use yew::prelude::*;

use crate::hooks::use_navigator::use_navigator;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();
    html! {
        <section class="card not-found">
            <h2>{"Page not found"}</h2>
            <a class="btn btn-primary" href={Route::Events.path()} onclick={navigator.to(Route::Events)}>
                {"Back to events"}
            </a>
        </section>
    }
}
