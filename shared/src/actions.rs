//! Mutation flows: validate, post once, then re-fetch or navigate.
//!
//! Nothing here updates state optimistically. Callers only ever see the
//! collection as the server returns it after the mutation.

use thiserror::Error;
use tracing::{info, warn};

use crate::client::{ApiError, GifterClient, HttpTransport};
use crate::models::{Gift, GiftStatus, User};
use crate::routes::Route;
use crate::session::TokenStore;
use crate::validation::{
    validate_comment, validate_new_event, validate_new_gift, validate_participant_email, validate_status_update,
    FormValidation,
};

/// Blocking error dialog content
#[derive(Debug, Clone, PartialEq)]
pub struct AlertDialog {
    pub title: String,
    pub message: String,
}

impl AlertDialog {
    pub fn from_api_error(title: &str, error: &ApiError) -> Self {
        Self {
            title: title.to_string(),
            message: error.payload(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Client-side validation failed; no request was sent
    #[error("form is invalid")]
    Invalid(FormValidation),
    /// The server or the network refused the mutation
    #[error("{}: {}", .0.title, .0.message)]
    Rejected(AlertDialog),
    /// The mutation went through but the follow-up fetch failed
    #[error("refresh failed: {0}")]
    Refresh(ApiError),
}

fn rejected(title: &str, error: ApiError) -> SubmitError {
    warn!(component = "actions", title, error = %error, "mutation rejected");
    SubmitError::Rejected(AlertDialog::from_api_error(title, &error))
}

/// Overwrites the status and returns the re-fetched gift list.
///
/// Any selectable status is sent as-is, backwards moves included.
pub async fn update_gift_status<T: HttpTransport, S: TokenStore>(
    client: &GifterClient<T, S>,
    event_id: &str,
    gift_id: &str,
    status: GiftStatus,
) -> Result<Vec<Gift>, SubmitError> {
    let request = validate_status_update(status).map_err(SubmitError::Invalid)?;
    client
        .update_gift(event_id, gift_id, &request)
        .await
        .map_err(|e| rejected("Failed to update", e))?;
    info!(component = "actions", gift_id, status = status.code(), "gift status updated");

    client.list_gifts(event_id).await.map_err(SubmitError::Refresh)
}

pub async fn delete_gift<T: HttpTransport, S: TokenStore>(
    client: &GifterClient<T, S>,
    event_id: &str,
    gift_id: &str,
) -> Result<Vec<Gift>, SubmitError> {
    client
        .delete_gift(event_id, gift_id)
        .await
        .map_err(|e| rejected("Failed to delete gift", e))?;
    info!(component = "actions", gift_id, "gift deleted");

    client.list_gifts(event_id).await.map_err(SubmitError::Refresh)
}

pub async fn add_participant<T: HttpTransport, S: TokenStore>(
    client: &GifterClient<T, S>,
    event_id: &str,
    email: &str,
) -> Result<Vec<User>, SubmitError> {
    let request = validate_participant_email(email).map_err(SubmitError::Invalid)?;
    client
        .add_participant(event_id, &request)
        .await
        .map_err(|e| rejected("Failed to add participant", e))?;
    info!(component = "actions", event_id, "participant added");

    client.list_participants(event_id).await.map_err(SubmitError::Refresh)
}

/// Success only closes the comment dialog; comments are fetched again when it reopens
pub async fn add_comment<T: HttpTransport, S: TokenStore>(
    client: &GifterClient<T, S>,
    event_id: &str,
    gift_id: &str,
    message: &str,
) -> Result<(), SubmitError> {
    let request = validate_comment(message).map_err(SubmitError::Invalid)?;
    client
        .create_comment(event_id, gift_id, &request)
        .await
        .map_err(|e| rejected("Failed to add comment", e))?;
    info!(component = "actions", gift_id, "comment added");
    Ok(())
}

pub async fn create_event<T: HttpTransport, S: TokenStore>(
    client: &GifterClient<T, S>,
    name: &str,
    date: &str,
) -> Result<Route, SubmitError> {
    let request = validate_new_event(name, date).map_err(SubmitError::Invalid)?;
    client
        .create_event(&request)
        .await
        .map_err(|e| rejected("Failed to create event", e))?;
    info!(component = "actions", name = %request.name, "event created");
    Ok(Route::Events)
}

pub async fn create_gift<T: HttpTransport, S: TokenStore>(
    client: &GifterClient<T, S>,
    event_id: &str,
    name: &str,
    to_id: &str,
    urls: &[String],
    secret: bool,
) -> Result<Route, SubmitError> {
    let request = validate_new_gift(name, to_id, urls, secret).map_err(SubmitError::Invalid)?;
    client
        .create_gift(event_id, &request)
        .await
        .map_err(|e| rejected("Failed to create gift", e))?;
    info!(component = "actions", event_id, name = %request.name, "gift created");
    Ok(Route::Gifts {
        event_id: event_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpMethod;
    use crate::testing::{client_with, FakeTransport, MemoryTokenStore};

    const ONE_PARTICIPANT: &str = r#"{"users":[{"id":"u1","name":"Ann","email":"ann@x.io","picture":""}]}"#;
    const TWO_PARTICIPANTS: &str = r#"{"users":[
        {"id":"u1","name":"Ann","email":"ann@x.io","picture":""},
        {"id":"u2","name":"Ben","email":"ben@x.io","picture":""}
    ]}"#;

    fn gift_json(status: i32) -> String {
        format!(
            r#"{{"gifts":[{{"id":"g1","name":"Bike","to_name":"Ann","creator_name":"Ben","status":{},"from_name":"Ben","status_frozen":false,"created_at":"2024-12-01T10:00:00Z","urls":[]}}]}}"#,
            status
        )
    }

    #[tokio::test]
    async fn test_add_participant_refetches_list() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Get, "/api/events/e1/participants", 200, ONE_PARTICIPANT);
        transport.respond(HttpMethod::Post, "/api/events/e1/participants/create", 200, "null");
        transport.respond(HttpMethod::Get, "/api/events/e1/participants", 200, TWO_PARTICIPANTS);
        let client = client_with(&transport, &MemoryTokenStore::new());

        let before = client.list_participants("e1").await.unwrap();
        assert_eq!(before.len(), 1);

        let after = add_participant(&client, "e1", "ben@x.io").await.unwrap();
        assert_eq!(after.len(), 2);
        assert_eq!(after[1].name, "Ben");

        let sent = transport.requests();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[1].body.as_deref(), Some(r#"{"participant_email":"ben@x.io"}"#));
        assert_eq!(sent[2].url, "/api/events/e1/participants");
    }

    #[tokio::test]
    async fn test_add_participant_rejected_shows_payload_and_skips_refetch() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/api/events/e1/participants/create", 400, "Unknown user");
        let client = client_with(&transport, &MemoryTokenStore::new());

        let error = add_participant(&client, "e1", "ghost@x.io").await.unwrap_err();
        assert_eq!(
            error,
            SubmitError::Rejected(AlertDialog {
                title: "Failed to add participant".to_string(),
                message: "Unknown user".to_string(),
            })
        );
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_add_participant_invalid_email_sends_nothing() {
        let transport = FakeTransport::new();
        let client = client_with(&transport, &MemoryTokenStore::new());

        let error = add_participant(&client, "e1", "").await.unwrap_err();
        assert!(matches!(error, SubmitError::Invalid(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_status_update_then_refetch() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/api/events/e1/gifts/g1/update", 200, "null");
        transport.respond(HttpMethod::Get, "/api/events/e1/gifts", 200, &gift_json(2));
        let client = client_with(&transport, &MemoryTokenStore::new());

        let gifts = update_gift_status(&client, "e1", "g1", GiftStatus::Bought).await.unwrap();
        assert_eq!(gifts[0].status, GiftStatus::Bought);
        assert_eq!(transport.requests()[0].body.as_deref(), Some(r#"{"status":2}"#));
    }

    #[tokio::test]
    async fn test_status_update_refetch_failure_is_reported() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/api/events/e1/gifts/g1/update", 200, "null");
        transport.respond(HttpMethod::Get, "/api/events/e1/gifts", 401, "Unauthorized");
        let client = client_with(&transport, &MemoryTokenStore::new());

        let error = update_gift_status(&client, "e1", "g1", GiftStatus::New).await.unwrap_err();
        assert!(matches!(error, SubmitError::Refresh(ref e) if e.is_unauthorized()));
    }

    #[tokio::test]
    async fn test_delete_gift_refetches() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/api/events/e1/gifts/g1/delete", 200, "null");
        transport.respond(HttpMethod::Get, "/api/events/e1/gifts", 200, r#"{"gifts":null}"#);
        let client = client_with(&transport, &MemoryTokenStore::new());

        let gifts = delete_gift(&client, "e1", "g1").await.unwrap();
        assert!(gifts.is_empty());
        assert_eq!(transport.requests()[0].body, None);
    }

    #[tokio::test]
    async fn test_add_comment_does_not_refetch() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/api/events/e1/gifts/g1/comments/create", 200, "null");
        let client = client_with(&transport, &MemoryTokenStore::new());

        add_comment(&client, "e1", "g1", "Already ordered").await.unwrap();
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"message":"Already ordered"}"#));
    }

    #[tokio::test]
    async fn test_create_event_navigates_to_list() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/api/events/create", 200, "null");
        let client = client_with(&transport, &MemoryTokenStore::new());

        let route = create_event(&client, "Christmas", "2025-12-25").await.unwrap();
        assert_eq!(route, Route::Events);
        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"name":"Christmas","date":"2025-12-25T00:00:00Z"}"#)
        );
    }

    #[tokio::test]
    async fn test_create_gift_navigates_to_event_gifts() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/api/events/e1/gifts/create", 500, "Error creating gift");
        transport.respond(HttpMethod::Post, "/api/events/e1/gifts/create", 200, "null");
        let client = client_with(&transport, &MemoryTokenStore::new());
        let urls = vec!["https://shop.example/bike".to_string()];

        let error = create_gift(&client, "e1", "Bike", "u1", &urls, false).await.unwrap_err();
        assert_eq!(
            error,
            SubmitError::Rejected(AlertDialog {
                title: "Failed to create gift".to_string(),
                message: "Error creating gift".to_string(),
            })
        );

        let route = create_gift(&client, "e1", "Bike", "u1", &urls, false).await.unwrap();
        assert_eq!(route, Route::Gifts { event_id: "e1".to_string() });
    }
}
