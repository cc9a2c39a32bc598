//! Typed client for the gift registry REST API.
//!
//! The client is generic over [`HttpTransport`] so that the same request
//! building, status handling and decoding runs in the browser (gloo fetch) and
//! in tests (a recording fake).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::endpoints;
use crate::models::{Comment, CommentList, Event, EventList, Gift, GiftList, ParticipantList, User};
use crate::requests::{
    AddParticipantRequest, AuthResponse, CreateCommentRequest, CreateEventRequest, CreateGiftRequest, LoginRequest,
    SignupRequest, UpdateGiftRequest,
};
use crate::session::TokenStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully resolved request handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body, already serialized
    pub body: Option<String>,
    pub bearer_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced an HTTP response (offline, CORS, aborted...)
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends credentialed requests. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text shown to the user: the server's payload verbatim when there is one
    pub fn payload(&self) -> String {
        match self {
            ApiError::Status { status, body } => {
                if body.trim().is_empty() {
                    format!("Server error {}", status)
                } else {
                    body.clone()
                }
            }
            other => other.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        ApiError::Network(error.0)
    }
}

/// API client bound to a transport and to the place the access token lives
#[derive(Clone)]
pub struct GifterClient<T, S> {
    transport: T,
    tokens: S,
    config: ClientConfig,
}

impl<T: HttpTransport, S: TokenStore> GifterClient<T, S> {
    pub fn new(transport: T, tokens: S, config: ClientConfig) -> Self {
        Self { transport, tokens, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    fn request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let bearer_token = if self.config.forward_bearer_token {
            self.tokens.load()
        } else {
            None
        };
        HttpRequest {
            method,
            url: self.config.url(path),
            body,
            bearer_token,
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(component = "api", method = ?request.method, url = %request.url, "sending request");
        let response = self.transport.send(request).await?;
        if response.is_ok() {
            Ok(response)
        } else {
            warn!(component = "api", status = response.status, "request rejected");
            Err(ApiError::Status {
                status: response.status,
                body: response.body,
            })
        }
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.execute(self.request(HttpMethod::Get, path, None)).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(self.request(HttpMethod::Post, path, Some(body))).await
    }

    /// Identity behind the current session cookie
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json(endpoints::CURRENT_USER).await
    }

    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let list: EventList = self.get_json(endpoints::EVENTS).await?;
        Ok(list.events)
    }

    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<(), ApiError> {
        self.post_json(endpoints::CREATE_EVENT, request).await.map(|_| ())
    }

    pub async fn list_gifts(&self, event_id: &str) -> Result<Vec<Gift>, ApiError> {
        let list: GiftList = self.get_json(&endpoints::gifts(event_id)).await?;
        Ok(list.gifts)
    }

    pub async fn create_gift(&self, event_id: &str, request: &CreateGiftRequest) -> Result<(), ApiError> {
        self.post_json(&endpoints::create_gift(event_id), request).await.map(|_| ())
    }

    pub async fn update_gift(
        &self,
        event_id: &str,
        gift_id: &str,
        request: &UpdateGiftRequest,
    ) -> Result<(), ApiError> {
        self.post_json(&endpoints::update_gift(event_id, gift_id), request)
            .await
            .map(|_| ())
    }

    pub async fn delete_gift(&self, event_id: &str, gift_id: &str) -> Result<(), ApiError> {
        let request = self.request(HttpMethod::Post, &endpoints::delete_gift(event_id, gift_id), None);
        self.execute(request).await.map(|_| ())
    }

    pub async fn list_comments(&self, event_id: &str, gift_id: &str) -> Result<Vec<Comment>, ApiError> {
        let list: CommentList = self.get_json(&endpoints::comments(event_id, gift_id)).await?;
        Ok(list.comments)
    }

    pub async fn create_comment(
        &self,
        event_id: &str,
        gift_id: &str,
        request: &CreateCommentRequest,
    ) -> Result<(), ApiError> {
        self.post_json(&endpoints::create_comment(event_id, gift_id), request)
            .await
            .map(|_| ())
    }

    pub async fn list_participants(&self, event_id: &str) -> Result<Vec<User>, ApiError> {
        let list: ParticipantList = self.get_json(&endpoints::participants(event_id)).await?;
        Ok(list.users)
    }

    pub async fn add_participant(&self, event_id: &str, request: &AddParticipantRequest) -> Result<(), ApiError> {
        self.post_json(&endpoints::add_participant(event_id), request)
            .await
            .map(|_| ())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = self.post_json(endpoints::LOGIN, request).await?;
        Ok(parse_auth_response(&response.body))
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let response = self.post_json(endpoints::SIGNUP, request).await?;
        Ok(parse_auth_response(&response.body))
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = self.request(HttpMethod::Get, endpoints::LOGOUT, None);
        self.execute(request).await.map(|_| ())
    }
}

// The auth endpoints may answer with a redirect to an HTML page instead of
// JSON; a missing token is not an error since the cookie carries the session.
fn parse_auth_response(body: &str) -> AuthResponse {
    match serde_json::from_str::<AuthResponse>(body) {
        Ok(response) => response,
        Err(e) => {
            debug!(component = "api", error = %e, "auth response carried no token");
            AuthResponse::default()
        }
    }
}
