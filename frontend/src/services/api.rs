use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder};
use shared::{ClientConfig, GifterClient, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
use web_sys::RequestCredentials;

use super::session::LocalTokenStore;

/// API client used by every hook and component
pub type ApiClient = GifterClient<GlooTransport, LocalTokenStore>;

/// Create an API client from the build-time configuration
pub fn api_client() -> ApiClient {
    let config = app_config();
    let tokens = LocalTokenStore::new(&config.token_storage_key, &config.signed_out_storage_key);
    GifterClient::new(GlooTransport, tokens, config)
}

/// `GIFTER_API_BASE_URL` set at build time points the client at another origin
pub fn app_config() -> ClientConfig {
    match option_env!("GIFTER_API_BASE_URL") {
        Some(base_url) if !base_url.trim().is_empty() => ClientConfig::with_base_url(base_url.trim()),
        _ => ClientConfig::default(),
    }
}

/// A body that cannot be read is a transport failure, not an empty payload
fn read_body(body: Result<String, gloo::net::Error>) -> Result<String, TransportError> {
    body.map_err(|e| TransportError(format!("Failed to read response body: {}", e)))
}

/// Browser fetch, always sending cookies
#[derive(Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder: RequestBuilder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        builder = builder
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json");
        if let Some(token) = &request.bearer_token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let sent = match request.body {
            Some(body) => {
                let request = builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| TransportError(format!("Failed to build request: {}", e)))?;
                request.send().await
            }
            None => builder.send().await,
        };

        let response = sent.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status();
        let body = read_body(response.text().await)?;
        Ok(HttpResponse { status, body })
    }
}
