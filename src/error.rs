//! Error taxonomy for the BookRider client
//!
//! Every failure a screen can see is one of four kinds: missing/stale
//! credentials, a non-2xx response, a transport failure, or a client-side
//! validation failure. All four are caught at the screen boundary and
//! rendered as a dismissible modal message; none may crash a screen.

use thiserror::Error;

/// Shown when an error response carries no usable `message` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer token in the session store, or the stored token is
    /// already past its expiration timestamp.
    #[error("not authenticated")]
    Unauthenticated,

    /// Non-2xx response. `message` is the `message` field of the JSON
    /// error body when present, [`FALLBACK_ERROR_MESSAGE`] otherwise.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Transport failure: DNS, timeout, connection refused.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Client-side rule failure, detected before any request is sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn http(status: u16, message: Option<String>) -> Self {
        ApiError::Http {
            status,
            message: message.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        }
    }

    /// The text a screen puts in its error modal.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthenticated => "You are not logged in".to_string(),
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Network(e) => {
                if e.is_timeout() {
                    "The server took too long to respond".to_string()
                } else if e.is_connect() {
                    "Could not reach the server".to_string()
                } else {
                    format!("Network error: {}", e)
                }
            }
            ApiError::Validation(message) => message.clone(),
        }
    }

    /// Whether the screen should redirect to login instead of showing
    /// an error modal.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated | ApiError::Http { status: 401, .. }
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_without_message_uses_fallback() {
        let err = ApiError::http(500, None);
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn http_error_message_is_shown_verbatim() {
        let err = ApiError::http(409, Some("No delivery address set for the user".into()));
        assert_eq!(err.user_message(), "No delivery address set for the user");
    }

    #[test]
    fn unauthorized_redirects_to_login() {
        assert!(ApiError::Unauthenticated.requires_login());
        assert!(ApiError::http(401, None).requires_login());
        assert!(!ApiError::http(404, None).requires_login());
    }
}
