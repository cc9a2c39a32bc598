pub mod alert_dialog;
pub mod app_bar;
pub mod event_list;
pub mod event_page;
pub mod forms;
pub mod gifts;
pub mod login;
pub mod new_event;
pub mod new_gift;
pub mod not_found;
pub mod participant_list;
pub mod signup;
