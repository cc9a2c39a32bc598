use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Treats a `null` (or missing, with `#[serde(default)]`) collection as empty.
///
/// The API encodes empty slices as `null`; views must never see that.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// An account known to the API, either the session owner or an event participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar image URL; the API sends an empty string when there is none
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub picture: String,
}

impl User {
    pub fn avatar_url(&self) -> Option<&str> {
        let picture = self.picture.trim();
        if picture.is_empty() {
            None
        } else {
            Some(picture)
        }
    }

    /// First letter of the name, used when there is no avatar image
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .or_else(|| self.email.chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Kind of occasion. Only Christmas exists today; other codes are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum EventType {
    #[default]
    Christmas,
    Unknown(i32),
}

impl From<i32> for EventType {
    fn from(code: i32) -> Self {
        match code {
            0 => EventType::Christmas,
            other => EventType::Unknown(other),
        }
    }
}

impl From<EventType> for i32 {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::Christmas => 0,
            EventType::Unknown(code) => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub creator_name: String,
    /// RFC 3339 timestamp of the occasion
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub event_type: EventType,
}

/// Reservation state of a gift.
///
/// Codes other than 0/1/2 are kept as `Unknown` so that rendering never fails
/// on values the server may add (4 has been observed in the wild).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum GiftStatus {
    New,
    /// Someone is about to buy it
    Reserved,
    Bought,
    Unknown(i32),
}

impl GiftStatus {
    /// Values offered by the status selector, in display order
    pub const SELECTABLE: [GiftStatus; 3] = [GiftStatus::New, GiftStatus::Reserved, GiftStatus::Bought];

    pub fn code(self) -> i32 {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            GiftStatus::New => "New",
            GiftStatus::Reserved => "About to be bought",
            GiftStatus::Bought => "Bought",
            GiftStatus::Unknown(_) => "?",
        }
    }

    /// Whether the status names a buyer (`from_name`)
    pub fn has_buyer(self) -> bool {
        matches!(self, GiftStatus::Reserved | GiftStatus::Bought)
    }

    pub fn is_known(self) -> bool {
        !matches!(self, GiftStatus::Unknown(_))
    }

    /// Parses the value of a `<select>` option
    pub fn from_code_str(value: &str) -> Option<GiftStatus> {
        value.trim().parse::<i32>().ok().map(GiftStatus::from)
    }
}

impl From<i32> for GiftStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => GiftStatus::New,
            1 => GiftStatus::Reserved,
            2 => GiftStatus::Bought,
            other => GiftStatus::Unknown(other),
        }
    }
}

impl From<GiftStatus> for i32 {
    fn from(status: GiftStatus) -> Self {
        match status {
            GiftStatus::New => 0,
            GiftStatus::Reserved => 1,
            GiftStatus::Bought => 2,
            GiftStatus::Unknown(code) => code,
        }
    }
}

impl fmt::Display for GiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: String,
    pub name: String,
    pub to_name: String,
    pub creator_name: String,
    pub status: GiftStatus,
    /// Once frozen, participants can no longer change the status
    #[serde(default)]
    pub status_frozen: bool,
    /// Hidden from the recipient; only a visual marker on the client
    #[serde(default)]
    pub secret: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub urls: Vec<String>,
    /// Who reserved or bought the gift
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub from_name: String,
    #[serde(default)]
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub message: String,
    /// Server-computed relative age, e.g. "3 hours"
    #[serde(default)]
    pub since: String,
    pub author: User,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GiftList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gifts: Vec<Gift>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParticipantList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommentList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<Comment>,
}

/// Renders a timestamp the way the gift and event tables show it, e.g. "Mon Dec 25 2023"
pub fn format_display_date(date: &DateTime<Utc>) -> String {
    date.format("%a %b %d %Y").to_string()
}
