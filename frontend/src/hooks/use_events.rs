use shared::Event;
use yew::prelude::*;

use super::use_remote_list::{use_remote_list, UseRemoteListResult};

/// Events visible to the current user, fetched on mount
#[hook]
pub fn use_events() -> UseRemoteListResult<Event> {
    use_remote_list("events", "events".to_string(), |client| async move {
        client.list_events().await
    })
}
