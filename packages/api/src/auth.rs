//! # Authentication lifecycle
//!
//! [`AuthService`] owns login, registration, and logout. Login and
//! registration are the only unauthenticated calls in the system:
//! registration creates the account without establishing a session, and
//! login persists the returned token + user snapshot through the shared
//! [`Session`]. Logout is purely local (there is no server call); the
//! bearer token simply stops being presented.
//!
//! Errors from the HTTP client propagate unchanged; user-facing messaging
//! is the caller's job.

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Credentials, LoginResponse, NewUser, User};
use crate::session::SessionEvent;

#[derive(Clone)]
pub struct AuthService {
    http: HttpClient,
}

impl AuthService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Create an account. Does not establish a session; the user still
    /// has to log in.
    pub async fn register(&self, data: &NewUser) -> Result<User, ApiError> {
        self.http.post_public("/users", data).await
    }

    /// Exchange credentials for a session. On success both session keys
    /// are persisted before this returns.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.http.post_public("/login", credentials).await?;
        self.http.session().store(&response.token, &response.user);
        Ok(response)
    }

    /// Drop the persisted session and notify subscribers. No server call.
    pub fn logout(&self) {
        self.http.session().clear(SessionEvent::LoggedOut);
    }

    /// The persisted user snapshot, if a session exists and parses.
    pub fn current_user(&self) -> Option<User> {
        self.http.session().current_user()
    }

    /// True iff both a token and a parseable user snapshot are persisted.
    pub fn is_authenticated(&self) -> bool {
        self.http.session().is_authenticated()
    }

    /// Raw accessor for the persisted bearer token.
    pub fn token(&self) -> Option<String> {
        self.http.session().token()
    }
}
