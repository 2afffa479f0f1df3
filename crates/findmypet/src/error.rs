//! Error types for the findmypet client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, backend, credential storage and input
//! validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for findmypet operations.
///
/// Every failure the client can surface maps onto one of these variants, so
/// callers can route "session expired" back to a login screen and show the
/// server message for everything else.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (invalid credentials, expired session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Non-2xx responses from the backend.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (base URL, CPF, phone, e-mail).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Credential store failures.
    #[error("credential store error: {0}")]
    Store(#[from] StoreError),

    /// A successful response carried a body that could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The caller cancelled the request before it completed.
    #[error("request cancelled")]
    Cancelled,
}

impl Error {
    /// HTTP status associated with this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            Error::Auth(AuthError::SessionExpired { source }) => Some(source.status),
            _ => None,
        }
    }

    /// Whether the caller must route the user back to login.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Error::Auth(AuthError::SessionExpired { .. }))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {message}")]
    Setup { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout { duration_ms: 0 }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the e-mail/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The session could not be renewed; the stored credential was removed.
    ///
    /// `source` is the 401 the original request received.
    #[error("session expired ({source})")]
    SessionExpired { source: ApiError },

    /// No credential is stored.
    #[error("not authenticated")]
    NotAuthenticated,
}

/// Broad classification of a backend error status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 401.
    Unauthorized,
    /// 409, e.g. duplicate CPF or e-mail at registration.
    Conflict,
    /// Any other 4xx.
    Validation,
    /// 5xx.
    Server,
    /// Anything else that is not a success.
    Other,
}

/// A non-2xx response from the backend.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error code or reason phrase from the body (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Lenient shape of a backend error body.
#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// Build an error from a status and raw response body.
    ///
    /// Bodies that are not JSON, or JSON without `error`/`message`, leave
    /// those fields empty.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
        let non_empty = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
        Self::new(status, non_empty(parsed.error), non_empty(parsed.message))
    }

    /// Classify the status code.
    pub fn kind(&self) -> ApiErrorKind {
        match self.status {
            401 => ApiErrorKind::Unauthorized,
            409 => ApiErrorKind::Conflict,
            400..=499 => ApiErrorKind::Validation,
            500..=599 => ApiErrorKind::Server,
            _ => ApiErrorKind::Other,
        }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.kind() == ApiErrorKind::Unauthorized
    }

    /// The server message, or a generic one when the body had none.
    pub fn user_message(&self) -> String {
        if let Some(ref message) = self.message {
            return message.clone();
        }
        match self.kind() {
            ApiErrorKind::Unauthorized => "authentication required".to_string(),
            ApiErrorKind::Conflict => "the resource already exists".to_string(),
            ApiErrorKind::Validation => "the request was rejected".to_string(),
            ApiErrorKind::Server => "the server failed to process the request".to_string(),
            ApiErrorKind::Other => format!("unexpected response (HTTP {})", self.status),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid CPF.
    #[error("invalid CPF '{value}': {reason}")]
    Cpf { value: String, reason: String },

    /// Invalid phone number.
    #[error("invalid phone '{value}': {reason}")]
    Phone { value: String, reason: String },

    /// Invalid e-mail address.
    #[error("invalid e-mail '{value}': {reason}")]
    Email { value: String, reason: String },

    /// A header name or value could not be encoded.
    #[error("invalid header '{name}': {reason}")]
    Header { name: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

/// Credential store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// The stored data could not be encoded.
    #[error("could not encode credential: {message}")]
    Encode { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_statuses() {
        assert_eq!(ApiError::new(401, None, None).kind(), ApiErrorKind::Unauthorized);
        assert_eq!(ApiError::new(409, None, None).kind(), ApiErrorKind::Conflict);
        assert_eq!(ApiError::new(422, None, None).kind(), ApiErrorKind::Validation);
        assert_eq!(ApiError::new(503, None, None).kind(), ApiErrorKind::Server);
        assert_eq!(ApiError::new(302, None, None).kind(), ApiErrorKind::Other);
    }

    #[test]
    fn parses_spring_style_error_body() {
        let body = br#"{"status":400,"error":"Bad Request","message":"nomeAnimal is required"}"#;
        let err = ApiError::from_body(400, body);
        assert_eq!(err.error.as_deref(), Some("Bad Request"));
        assert_eq!(err.user_message(), "nomeAnimal is required");
        assert_eq!(err.to_string(), "HTTP 400 [Bad Request]: nomeAnimal is required");
    }

    #[test]
    fn non_json_body_falls_back_to_generic_message() {
        let err = ApiError::from_body(500, b"Internal Server Error");
        assert!(err.message.is_none());
        assert_eq!(err.user_message(), "the server failed to process the request");
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn blank_message_is_ignored() {
        let err = ApiError::from_body(400, br#"{"message":"   "}"#);
        assert!(err.message.is_none());
    }

    #[test]
    fn session_expired_exposes_original_status() {
        let err = Error::from(AuthError::SessionExpired {
            source: ApiError::new(401, None, Some("token expired".into())),
        });
        assert!(err.is_session_expired());
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("token expired"));
    }
}
