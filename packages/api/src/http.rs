//! # HTTP client: the single choke point for network I/O
//!
//! Every request to the backend goes through [`HttpClient::request`]: it
//! builds the full URL from the configured base, sets the JSON content
//! type, attaches `Authorization: Bearer <token>` when the call is
//! authorized and a token is persisted, and normalizes every failure into
//! an [`ApiError`].
//!
//! A 401 on an authorized call is not just an error: the client tears the
//! session down (both storage keys) and emits [`SessionEvent::Expired`]
//! before failing, so the UI's event subscriber redirects to the login
//! view. Downstream session logic depends on this coupling.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::session::{Session, SessionEvent};

/// Error body shape the backend uses: either `message` or `error` may carry
/// the human-readable text.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Thin wrapper over `reqwest::Client` bound to a base URL and a session.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpClient {
    pub fn new(config: &ApiConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            session,
        }
    }

    /// The session this client reads tokens from and tears down on 401.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Dispatch a request and parse the JSON response body into `T`.
    ///
    /// A 204 response resolves without reading a body, which deserializes
    /// into `()` (and nothing else); mutation endpoints that return 204
    /// should be called through [`Self::delete`].
    pub async fn request<T, B>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&B>,
        include_auth: bool,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, endpoint, body, include_auth).await?;
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|e| {
                ApiError::Request {
                    message: format!("unexpected empty response: {e}"),
                    status: status.as_u16(),
                }
            });
        }
        response.json().await.map_err(|e| ApiError::Request {
            message: format!("unexpected response body: {e}"),
            status: status.as_u16(),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(endpoint, Method::GET, None::<&()>, true).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, Method::POST, Some(body), true).await
    }

    /// POST without attaching credentials; login and registration only.
    pub async fn post_public<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, Method::POST, Some(body), false)
            .await
    }

    pub async fn patch<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, Method::PATCH, Some(body), true)
            .await
    }

    /// DELETE resolves on any success status; the 204 body is ignored.
    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, endpoint, None::<&()>, true)
            .await?;
        Ok(())
    }

    /// Dispatch and classify the response, returning it only on success.
    async fn send<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        include_auth: bool,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%method, %url, "dispatching request");

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if include_auth {
            if let Some(token) = self.session.token() {
                request = request.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::debug!(error = %e, "transport failure");
            ApiError::Connectivity
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED && include_auth {
            // Session teardown is a deliberate side effect of interpreting
            // the response, not just error signaling.
            self.session.clear(SessionEvent::Expired);
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response)
    }
}

/// Extract the server-provided message from a failed response, falling back
/// to a `"<status>: <reason>"` line when the body is not the expected JSON.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let fallback = format!(
        "{}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("unknown error")
    );
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message.or(body.error).unwrap_or(fallback),
        Err(_) => fallback,
    };
    ApiError::Request {
        message,
        status: status.as_u16(),
    }
}
