use crate::models::{format_display_date, Event, Gift, GiftStatus};

/// State of a fetch-on-mount collection view
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<T> {
    Loading,
    Loaded(Vec<T>),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<T> ListState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListState::Loading => &[],
            ListState::Loaded(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for ListState<T> {
    fn from(items: Vec<T>) -> Self {
        ListState::Loaded(items)
    }
}

/// What a gift table row shows, derived from the server record
#[derive(Debug, Clone, PartialEq)]
pub struct GiftRow {
    pub id: String,
    pub name: String,
    pub to_name: String,
    pub creator_name: String,
    pub status: GiftStatus,
    pub status_label: &'static str,
    /// "by <buyer>" for reserved and bought gifts
    pub status_tooltip: Option<String>,
    pub can_edit_status: bool,
    pub secret: bool,
    pub created: String,
    pub links: Vec<String>,
}

impl GiftRow {
    pub fn new(gift: &Gift) -> Self {
        let status_tooltip = if gift.status.has_buyer() && !gift.from_name.is_empty() {
            Some(format!("by {}", gift.from_name))
        } else {
            None
        };

        Self {
            id: gift.id.clone(),
            name: gift.name.clone(),
            to_name: gift.to_name.clone(),
            creator_name: gift.creator_name.clone(),
            status: gift.status,
            status_label: gift.status.label(),
            status_tooltip,
            can_edit_status: !gift.status_frozen,
            secret: gift.secret,
            created: format_display_date(&gift.created_at),
            links: gift.urls.clone(),
        }
    }

    /// Value the status selector starts on
    pub fn initial_selection(&self) -> GiftStatus {
        if self.status.is_known() {
            self.status
        } else {
            GiftStatus::New
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub id: String,
    pub name: String,
    pub creator_name: String,
    pub date: String,
}

impl EventRow {
    pub fn new(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            name: event.name.clone(),
            creator_name: event.creator_name.clone(),
            date: format_display_date(&event.date),
        }
    }
}
