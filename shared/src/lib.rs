//! Platform-independent core of the gift registry client: wire types, routes,
//! form validation, view state and the typed API client with its session and
//! mutation flows.

pub mod actions;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod models;
pub mod requests;
pub mod routes;
pub mod session;
pub mod validation;
pub mod view_state;

#[cfg(test)]
pub(crate) mod testing;

pub use actions::{AlertDialog, SubmitError};
pub use client::{ApiError, GifterClient, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
pub use config::ClientConfig;
pub use models::{Comment, Event, EventType, Gift, GiftStatus, User};
pub use routes::Route;
pub use session::{SessionStatus, TokenStore};
pub use view_state::{EventRow, GiftRow, ListState};
