//! Request descriptors and buffered responses.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::error::{ApiError, Error, InvalidInputError};

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_reqwest().as_str())
    }
}

/// One logical call against the backend.
///
/// Built per call and consumed by [`crate::ApiClient::request`]. The
/// `Authorization` header is owned by the client; an override with that
/// name is only sent when no credential is stored.
///
/// # Example
///
/// ```
/// use findmypet::api::ApiRequest;
///
/// let request = ApiRequest::get("/animal")
///     .with_query("page", "0")
///     .with_header("Accept-Language", "pt-BR");
/// assert_eq!(request.path(), "/animal");
/// ```
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    cancellation: Option<CancellationToken>,
}

impl ApiRequest {
    /// Create a request for `path`, relative to the client's base URL.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            cancellation: None,
        }
    }

    /// A GET request for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// A POST request for `path`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// A PUT request for `path`.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// A DELETE request for `path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` and attach it as JSON.
    pub fn with_json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| InvalidInputError::Other {
            message: format!("request body could not be encoded: {e}"),
        })?;
        Ok(self.with_body(value))
    }

    /// Append a query-string pair.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add a header override.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Resolve the call with [`Error::Cancelled`] once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query-string pairs in insertion order.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Header overrides in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// JSON body, if one was attached.
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Cancellation token, if one was attached.
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }
}

/// A fully buffered backend response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Whether the body is empty or only whitespace.
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Decode the body as JSON, or `None` when the body is empty.
    pub fn json_opt<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.json().map(Some)
    }

    /// Turn a non-2xx response into [`Error::Api`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Api(self.to_api_error()))
        }
    }

    pub(crate) fn to_api_error(&self) -> ApiError {
        ApiError::from_body(self.status, &self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_parts() {
        let token = CancellationToken::new();
        let request = ApiRequest::put("/animal/3")
            .with_json(&serde_json::json!({"nomeAnimal": "Thor"}))
            .unwrap()
            .with_query("dryRun", "true")
            .with_header("X-Trace", "abc")
            .with_cancellation(token);

        assert_eq!(request.method(), Method::Put);
        assert_eq!(request.method().to_string(), "PUT");
        assert_eq!(request.body().unwrap()["nomeAnimal"], "Thor");
        assert_eq!(request.query(), &[("dryRun".to_string(), "true".to_string())]);
        assert_eq!(request.headers().len(), 1);
        assert!(request.cancellation().is_some());
    }

    #[test]
    fn empty_body_decodes_to_none() {
        let response = ApiResponse::new(201, b"  \n".to_vec());
        assert!(response.is_empty());
        assert!(response.json_opt::<serde_json::Value>().unwrap().is_none());
    }

    #[test]
    fn error_for_status_keeps_server_message() {
        let response = ApiResponse::new(409, br#"{"message":"duplicated"}"#.to_vec());
        let err = response.error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert!(err.to_string().contains("duplicated"));
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let response = ApiResponse::new(200, b"<html>".to_vec());
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
