//! Session gate, authentication flows and access-token persistence.

use tracing::{info, warn};

use crate::actions::{AlertDialog, SubmitError};
use crate::client::{GifterClient, HttpTransport};
use crate::models::User;
use crate::routes::Route;
use crate::validation::{validate_login, validate_signup};

/// Where the access token returned at login is kept between page loads,
/// together with the marker left by an explicit logout
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
    /// True from a logout until the next successful login or signup
    fn is_signed_out(&self) -> bool;
    fn set_signed_out(&self, signed_out: bool);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    Authenticated(User),
    Anonymous,
}

impl SessionStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionStatus::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionStatus::Authenticated(user) => Some(user),
            SessionStatus::Anonymous => None,
        }
    }
}

/// One credentialed identity request; any failure means "not logged in".
///
/// After an explicit logout no request is made: the server may still honour
/// the session cookie when its logout failed.
pub async fn check_session<T: HttpTransport, S: TokenStore>(client: &GifterClient<T, S>) -> SessionStatus {
    if client.tokens().is_signed_out() {
        info!(component = "session", "signed out locally, skipping session check");
        return SessionStatus::Anonymous;
    }
    match client.current_user().await {
        Ok(user) => SessionStatus::Authenticated(user),
        Err(e) => {
            info!(component = "session", error = %e, "no valid session");
            SessionStatus::Anonymous
        }
    }
}

/// Redirect the gate applies once the session check has completed
pub fn redirect_for(route: &Route, status: &SessionStatus) -> Option<Route> {
    match (route, status.is_authenticated()) {
        (route, false) if route.is_protected() => Some(Route::Login),
        (Route::Login | Route::Signup, true) => Some(Route::Events),
        _ => None,
    }
}

/// Validates, posts `/auth/login`, stores the token and returns the landing route.
///
/// A form that fails validation never reaches the network.
pub async fn login<T: HttpTransport, S: TokenStore>(
    client: &GifterClient<T, S>,
    email: &str,
    password: &str,
) -> Result<Route, SubmitError> {
    let request = validate_login(email, password).map_err(SubmitError::Invalid)?;
    let response = client
        .login(&request)
        .await
        .map_err(|e| SubmitError::Rejected(AlertDialog::from_api_error("Failed to login", &e)))?;

    remember_session(client, response.access_token.as_deref());
    info!(component = "session", "logged in");
    Ok(Route::Events)
}

pub async fn signup<T: HttpTransport, S: TokenStore>(
    client: &GifterClient<T, S>,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Route, SubmitError> {
    let request = validate_signup(name, email, password).map_err(SubmitError::Invalid)?;
    let response = client
        .signup(&request)
        .await
        .map_err(|e| SubmitError::Rejected(AlertDialog::from_api_error("Failed to sign up", &e)))?;

    remember_session(client, response.access_token.as_deref());
    info!(component = "session", "account created");
    Ok(Route::Events)
}

fn remember_session<T: HttpTransport, S: TokenStore>(client: &GifterClient<T, S>, token: Option<&str>) {
    let tokens = client.tokens();
    tokens.set_signed_out(false);
    if let Some(token) = token {
        tokens.save(token);
    }
}

/// Starting an external (OAuth) sign-in lifts the logout marker, since that
/// flow comes back with a session cookie and never goes through `login`.
pub fn begin_external_sign_in<T: HttpTransport, S: TokenStore>(client: &GifterClient<T, S>) {
    client.tokens().set_signed_out(false);
}

/// Drops the token and marks the browser as signed out. Synchronous, so the
/// UI can leave the authenticated area before the server answers.
pub fn forget_session<T: HttpTransport, S: TokenStore>(client: &GifterClient<T, S>) {
    let tokens = client.tokens();
    tokens.clear();
    tokens.set_signed_out(true);
}

/// Tells the server the session is over. Failures are logged and otherwise ignored.
pub async fn send_logout<T: HttpTransport, S: TokenStore>(client: &GifterClient<T, S>) {
    if let Err(e) = client.logout().await {
        warn!(component = "session", error = %e, "logout request failed");
    }
}

/// Ends the session locally first, then tells the server.
///
/// The login screen is returned whatever happens to the logout request.
pub async fn logout<T: HttpTransport, S: TokenStore>(client: &GifterClient<T, S>) -> Route {
    forget_session(client);
    send_logout(client).await;
    Route::Login
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HttpMethod;
    use crate::testing::{client_with, FakeTransport, MemoryTokenStore};
    use crate::validation::{FormField, FormValidationError};

    #[tokio::test]
    async fn test_session_ok_is_authenticated() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Get, "/api/user", 200, r#"{"id":"u1","name":"Ann","email":"ann@x.io","picture":""}"#);
        let client = client_with(&transport, &MemoryTokenStore::new());

        let status = check_session(&client).await;
        assert_eq!(status.user().map(|u| u.name.as_str()), Some("Ann"));
    }

    #[tokio::test]
    async fn test_session_failures_are_anonymous() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Get, "/api/user", 401, "Unauthorized");
        transport.fail(HttpMethod::Get, "/api/user", "offline");
        let client = client_with(&transport, &MemoryTokenStore::new());

        assert_eq!(check_session(&client).await, SessionStatus::Anonymous);
        assert_eq!(check_session(&client).await, SessionStatus::Anonymous);
        // one attempt per check, no retries
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_redirect_rules() {
        let user = User {
            id: "u1".to_string(),
            name: "Ann".to_string(),
            email: "ann@x.io".to_string(),
            picture: String::new(),
        };
        let authenticated = SessionStatus::Authenticated(user);
        let anonymous = SessionStatus::Anonymous;

        assert_eq!(redirect_for(&Route::Events, &anonymous), Some(Route::Login));
        assert_eq!(redirect_for(&Route::NewEvent, &anonymous), Some(Route::Login));
        assert_eq!(redirect_for(&Route::Login, &anonymous), None);
        assert_eq!(redirect_for(&Route::Signup, &anonymous), None);
        assert_eq!(redirect_for(&Route::Login, &authenticated), Some(Route::Events));
        assert_eq!(redirect_for(&Route::Signup, &authenticated), Some(Route::Events));
        assert_eq!(redirect_for(&Route::Events, &authenticated), None);
        assert_eq!(redirect_for(&Route::NotFound, &anonymous), None);
    }

    #[tokio::test]
    async fn test_login_with_malformed_email_sends_nothing() {
        let transport = FakeTransport::new();
        let client = client_with(&transport, &MemoryTokenStore::new());

        let error = login(&client, "bob-at-example", "pw").await.unwrap_err();
        match error {
            SubmitError::Invalid(validation) => {
                assert_eq!(
                    validation.errors,
                    vec![FormValidationError::MalformedEmail(FormField::Email)]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/auth/login", 200, r#"{"access_token":"abc"}"#);
        let tokens = MemoryTokenStore::new();
        let client = client_with(&transport, &tokens);

        let route = login(&client, "bob@example.com", "pw").await.unwrap();
        assert_eq!(route, Route::Events);
        assert_eq!(tokens.load().as_deref(), Some("abc"));
        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"email":"bob@example.com","password":"pw"}"#)
        );
    }

    #[tokio::test]
    async fn test_login_rejection_surfaces_server_payload() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/auth/login", 404, "Unknown email or password\n");
        let client = client_with(&transport, &MemoryTokenStore::new());

        let error = login(&client, "bob@example.com", "wrong").await.unwrap_err();
        assert_eq!(
            error,
            SubmitError::Rejected(AlertDialog {
                title: "Failed to login".to_string(),
                message: "Unknown email or password\n".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_signup_posts_all_fields() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/auth/signup", 200, r#"{"access_token":"t2"}"#);
        let tokens = MemoryTokenStore::new();
        let client = client_with(&transport, &tokens);

        let route = signup(&client, "Bob", "bob@example.com", "pw").await.unwrap();
        assert_eq!(route, Route::Events);
        assert_eq!(tokens.load().as_deref(), Some("t2"));
        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"email":"bob@example.com","password":"pw","name":"Bob"}"#)
        );
    }

    #[tokio::test]
    async fn test_logout_survives_network_failure() {
        let transport = FakeTransport::new();
        transport.fail(HttpMethod::Get, "/auth/logout", "offline");
        let tokens = MemoryTokenStore::with_token("abc");
        let client = client_with(&transport, &tokens);

        let route = logout(&client).await;
        assert_eq!(route, Route::Login);
        assert_eq!(tokens.load(), None);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_logout_keeps_user_on_login_screen() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Get, "/auth/logout", 500, "Internal Server Error");
        transport.respond(HttpMethod::Get, "/api/user", 200, r#"{"id":"u1","name":"Ann","email":"ann@x.io","picture":""}"#);
        let tokens = MemoryTokenStore::with_token("abc");
        let client = client_with(&transport, &tokens);

        let landing = logout(&client).await;
        let status = check_session(&client).await;

        assert_eq!(landing, Route::Login);
        assert_eq!(status, SessionStatus::Anonymous);
        assert_eq!(redirect_for(&landing, &status), None);
        assert_eq!(redirect_for(&Route::Events, &status), Some(Route::Login));
        // the cookie-backed identity endpoint is not consulted after logout
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_forget_session_marks_signed_out_without_network() {
        let transport = FakeTransport::new();
        let tokens = MemoryTokenStore::with_token("abc");
        let client = client_with(&transport, &tokens);

        forget_session(&client);

        assert!(tokens.is_signed_out());
        assert_eq!(tokens.load(), None);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_login_after_logout_restores_session_check() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Post, "/auth/login", 200, r#"{"access_token":"fresh"}"#);
        transport.respond(HttpMethod::Get, "/api/user", 200, r#"{"id":"u1","name":"Ann","email":"ann@x.io","picture":""}"#);
        let tokens = MemoryTokenStore::new();
        tokens.set_signed_out(true);
        let client = client_with(&transport, &tokens);

        login(&client, "ann@x.io", "pw").await.unwrap();

        assert!(!tokens.is_signed_out());
        assert!(check_session(&client).await.is_authenticated());
    }

    #[test]
    fn test_external_sign_in_lifts_logout_marker() {
        let transport = FakeTransport::new();
        let tokens = MemoryTokenStore::new();
        tokens.set_signed_out(true);
        let client = client_with(&transport, &tokens);

        begin_external_sign_in(&client);
        assert!(!tokens.is_signed_out());
    }

    #[tokio::test]
    async fn test_logout_clears_token_before_request() {
        let transport = FakeTransport::new();
        transport.respond(HttpMethod::Get, "/auth/logout", 200, "");
        let tokens = MemoryTokenStore::with_token("abc");
        let client = client_with(&transport, &tokens);

        logout(&client).await;
        assert_eq!(transport.requests()[0].bearer_token, None);
    }
}
