use shared::User;
use yew::prelude::*;

use super::use_remote_list::{use_remote_list, UseRemoteListResult};

#[hook]
pub fn use_participants(event_id: &str) -> UseRemoteListResult<User> {
    let event_id = event_id.to_string();
    use_remote_list("participants", format!("participants of event {}", event_id), move |client| {
        let event_id = event_id.clone();
        async move { client.list_participants(&event_id).await }
    })
}
