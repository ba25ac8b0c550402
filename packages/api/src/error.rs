//! Error types for the data layer.
//!
//! # Design
//! `Unauthorized` gets a dedicated variant because it carries a side effect:
//! by the time a caller sees it, the HTTP client has already torn the
//! session down and emitted a session-expired event. All other non-2xx
//! responses land in `Request` with the server's message (or a status-line
//! fallback) and the raw status code. Transport-level failures are
//! normalized into `Connectivity` so every page can show the same
//! "check your connection" text.

use thiserror::Error;

/// Errors surfaced by the HTTP client and the entity services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 401 on an authorized call. The session has
    /// already been cleared when this is returned.
    #[error("session expired, please log in again")]
    Unauthorized,

    /// The server answered with a non-2xx status other than 401.
    #[error("{message}")]
    Request { message: String, status: u16 },

    /// The request never produced an HTTP response.
    #[error("could not reach the server, check your connection")]
    Connectivity,
}

impl ApiError {
    /// Status code of a `Request` error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
