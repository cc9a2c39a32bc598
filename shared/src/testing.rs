//! In-memory doubles for exercising the client without a browser.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::client::{GifterClient, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::config::ClientConfig;
use crate::session::TokenStore;

type Reply = Result<HttpResponse, TransportError>;

/// Scripted transport: replies are queued per (method, url) and consumed in order.
/// Every request is recorded.
#[derive(Clone, Default)]
pub struct FakeTransport {
    replies: Rc<RefCell<HashMap<(HttpMethod, String), VecDeque<Reply>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: HttpMethod, url: &str, status: u16, body: &str) {
        self.push(
            method,
            url,
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, method: HttpMethod, url: &str, reason: &str) {
        self.push(method, url, Err(TransportError(reason.to_string())));
    }

    fn push(&self, method: HttpMethod, url: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry((method, url.to_string()))
            .or_default()
            .push_back(reply);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let key = (request.method, request.url.clone());
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 404,
                    body: format!("no scripted reply for {}", key.1),
                })
            })
    }
}

#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
    signed_out: Rc<RefCell<bool>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }

    fn is_signed_out(&self) -> bool {
        *self.signed_out.borrow()
    }

    fn set_signed_out(&self, signed_out: bool) {
        *self.signed_out.borrow_mut() = signed_out;
    }
}

/// Client sharing state with the given doubles, same-origin paths
pub fn client_with(
    transport: &FakeTransport,
    tokens: &MemoryTokenStore,
) -> GifterClient<FakeTransport, MemoryTokenStore> {
    GifterClient::new(transport.clone(), tokens.clone(), ClientConfig::default())
}
