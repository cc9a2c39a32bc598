//! Paths of the REST API, relative to the configured base URL.

pub const CURRENT_USER: &str = "/api/user";
pub const EVENTS: &str = "/api/events";
pub const CREATE_EVENT: &str = "/api/events/create";
pub const LOGIN: &str = "/auth/login";
pub const SIGNUP: &str = "/auth/signup";
pub const LOGOUT: &str = "/auth/logout";
/// Browser navigation target, not an XHR endpoint
pub const GOOGLE_SIGN_IN: &str = "/auth?provider=google";

pub fn gifts(event_id: &str) -> String {
    format!("/api/events/{}/gifts", event_id)
}

pub fn create_gift(event_id: &str) -> String {
    format!("/api/events/{}/gifts/create", event_id)
}

pub fn update_gift(event_id: &str, gift_id: &str) -> String {
    format!("/api/events/{}/gifts/{}/update", event_id, gift_id)
}

pub fn delete_gift(event_id: &str, gift_id: &str) -> String {
    format!("/api/events/{}/gifts/{}/delete", event_id, gift_id)
}

pub fn comments(event_id: &str, gift_id: &str) -> String {
    format!("/api/events/{}/gifts/{}/comments", event_id, gift_id)
}

pub fn create_comment(event_id: &str, gift_id: &str) -> String {
    format!("/api/events/{}/gifts/{}/comments/create", event_id, gift_id)
}

pub fn participants(event_id: &str) -> String {
    format!("/api/events/{}/participants", event_id)
}

pub fn add_participant(event_id: &str) -> String {
    format!("/api/events/{}/participants/create", event_id)
}
