pub mod use_comments;
pub mod use_current_user;
pub mod use_events;
pub mod use_gifts;
pub mod use_navigator;
pub mod use_participants;
pub mod use_remote_list;
pub mod use_session_gate;
