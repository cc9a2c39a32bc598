use shared::session::{check_session, redirect_for};
use shared::Route;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_navigator::Navigator;
use crate::services::api::api_client;
use crate::services::logging::Logger;

/// Checks the session once each time a route is mounted and redirects
/// between the login screens and the authenticated area.
#[hook]
pub fn use_session_gate(route: &Route, navigator: &Navigator) {
    let navigator = navigator.clone();
    use_effect_with(route.clone(), move |route| {
        let route = route.clone();
        spawn_local(async move {
            let status = check_session(&api_client()).await;
            if let Some(target) = redirect_for(&route, &status) {
                Logger::debug_with_component("session", &format!("redirecting {} -> {}", route, target));
                navigator.push(target);
            }
        });
        || ()
    });
}
