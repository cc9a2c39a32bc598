use shared::Gift;
use yew::prelude::*;

use super::use_remote_list::{use_remote_list, UseRemoteListResult};

#[hook]
pub fn use_gifts(event_id: &str) -> UseRemoteListResult<Gift> {
    let event_id = event_id.to_string();
    use_remote_list("gifts", format!("gifts of event {}", event_id), move |client| {
        let event_id = event_id.clone();
        async move { client.list_gifts(&event_id).await }
    })
}
