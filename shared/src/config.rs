/// Runtime settings for the API client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path. Empty means same origin as the page.
    pub base_url: String,
    /// localStorage key holding the access token returned at login
    pub token_storage_key: String,
    /// localStorage key marking an explicit logout
    pub signed_out_storage_key: String,
    /// Send the stored token as `Authorization: Bearer` next to the session cookie
    pub forward_bearer_token: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token_storage_key: "access_token".to_string(),
            signed_out_storage_key: "signed_out".to_string(),
            forward_bearer_token: true,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.url("/api/user"), "/api/user");
        assert_eq!(config.token_storage_key, "access_token");
        assert_eq!(config.signed_out_storage_key, "signed_out");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::with_base_url("http://localhost:8080/");
        assert_eq!(config.url("/api/events"), "http://localhost:8080/api/events");
    }
}
