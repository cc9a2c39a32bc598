use shared::{Route, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_navigator::use_navigator;
use crate::services::api::api_client;
use crate::services::logging::Logger;

pub struct UseCurrentUserResult {
    pub user: Option<User>,
    /// Forget the user locally (logout)
    pub clear: Callback<()>,
}

/// Identity shown in the navigation bar; a failed fetch sends the user to login
#[hook]
pub fn use_current_user() -> UseCurrentUserResult {
    let user = use_state(|| Option::<User>::None);
    let navigator = use_navigator();

    use_effect_with((), {
        let user = user.clone();
        move |_| {
            spawn_local(async move {
                match api_client().current_user().await {
                    Ok(current) => user.set(Some(current)),
                    Err(e) => {
                        Logger::error_with_component("app_bar", &format!("Error fetching user: {}", e));
                        navigator.push(Route::Login);
                    }
                }
            });
            || ()
        }
    });

    let clear = {
        let user = user.clone();
        use_callback((), move |_, _| user.set(None))
    };

    UseCurrentUserResult {
        user: (*user).clone(),
        clear,
    }
}
