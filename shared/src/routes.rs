use std::fmt;

/// Browser-side screens of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Events,
    NewEvent,
    Gifts { event_id: String },
    NewGift { event_id: String },
    NotFound,
}

impl Route {
    /// Resolve a location path (query string and trailing slash ignored)
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Login,
            ["signup"] => Route::Signup,
            // Older links still point at the pre-router landing page
            ["events"] | ["secure"] => Route::Events,
            ["events", "new"] => Route::NewEvent,
            ["events", id, "gifts"] => Route::Gifts { event_id: id.to_string() },
            ["events", id, "gifts", "create"] => Route::NewGift { event_id: id.to_string() },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Events => "/events".to_string(),
            Route::NewEvent => "/events/new".to_string(),
            Route::Gifts { event_id } => format!("/events/{}/gifts", event_id),
            Route::NewGift { event_id } => format!("/events/{}/gifts/create", event_id),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Screens that need a valid session
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Signup | Route::NotFound)
    }

    /// Event the screen belongs to, if any
    pub fn event_id(&self) -> Option<&str> {
        match self {
            Route::Gifts { event_id } | Route::NewGift { event_id } => Some(event_id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
