use shared::Comment;
use yew::prelude::*;

use super::use_remote_list::{use_remote_list, UseRemoteListResult};

/// Comments of one gift; mounted when the comment panel opens, so every
/// opening fetches again
#[hook]
pub fn use_comments(event_id: &str, gift_id: &str) -> UseRemoteListResult<Comment> {
    let event_id = event_id.to_string();
    let gift_id = gift_id.to_string();
    use_remote_list("comments", format!("comments of gift {}", gift_id), move |client| {
        let event_id = event_id.clone();
        let gift_id = gift_id.clone();
        async move { client.list_comments(&event_id, &gift_id).await }
    })
}
