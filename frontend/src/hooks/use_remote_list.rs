use shared::{ApiError, ListState, Route};
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_navigator::use_navigator;
use crate::services::api::{api_client, ApiClient};
use crate::services::logging::Logger;

pub struct UseRemoteListResult<T> {
    pub state: ListState<T>,
    /// Store a collection obtained elsewhere (e.g. after a mutation)
    pub replace: Callback<Vec<T>>,
}

/// Fetch-on-mount collection state.
///
/// `key` identifies the collection; when it changes the view goes back to
/// loading and fetches again. A failed fetch is treated as a lost session.
#[hook]
pub fn use_remote_list<T, F, Fut>(component: &'static str, key: String, fetch: F) -> UseRemoteListResult<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let state = use_state(ListState::<T>::default);
    let navigator = use_navigator();

    let refresh = {
        let state = state.clone();
        use_callback(key.clone(), move |_: (), key: &String| {
            let state = state.clone();
            let navigator = navigator.clone();
            let key = key.clone();
            let request = fetch(api_client());

            spawn_local(async move {
                match request.await {
                    Ok(items) => state.set(ListState::Loaded(items)),
                    Err(e) => {
                        Logger::error_with_component(component, &format!("Failed to fetch {}: {}", key, e));
                        navigator.push(Route::Login);
                    }
                }
            });
        })
    };

    let replace = {
        let state = state.clone();
        use_callback((), move |items: Vec<T>, _| {
            state.set(ListState::Loaded(items));
        })
    };

    use_effect_with(key, {
        let state = state.clone();
        let refresh = refresh.clone();
        move |_| {
            if !state.is_loading() {
                state.set(ListState::Loading);
            }
            refresh.emit(());
            || ()
        }
    });

    UseRemoteListResult {
        state: (*state).clone(),
        replace,
    }
}
