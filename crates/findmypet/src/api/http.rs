//! HTTP transport for backend requests.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, instrument, trace};

use crate::Result;
use crate::auth::AccessToken;
use crate::config::ClientConfig;
use crate::error::{Error, InvalidInputError, TransportError};
use crate::types::ApiUrl;

use super::request::{ApiRequest, ApiResponse};

/// Thin wrapper over `reqwest` that sends one [`ApiRequest`] and buffers the
/// response. It knows nothing about refresh; that lives in the client.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    base: ApiUrl,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client from the configuration.
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()
            .map_err(|e| TransportError::Setup {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base: config.base_url().clone(),
            timeout: config.timeout(),
        })
    }

    /// Returns the base URL this client is configured for.
    pub(crate) fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Send `request`, with `Authorization: Bearer <token>` when a token is given.
    #[instrument(skip(self, request, token), fields(method = %request.method(), path = request.path()))]
    pub(crate) async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&AccessToken>,
    ) -> Result<ApiResponse> {
        let url = self.base.endpoint(request.path());
        debug!(%url, authenticated = token.is_some(), "API request");

        let mut builder = self
            .client
            .request(request.method().as_reqwest(), &url)
            .headers(Self::headers(request, token)?);

        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        trace!(status, bytes = body.len(), "API response");
        Ok(ApiResponse::new(status, body.to_vec()))
    }

    /// Build the header map: overrides first, then the bearer token, which
    /// replaces any `Authorization` override.
    fn headers(request: &ApiRequest, token: Option<&AccessToken>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (name, value) in request.headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                InvalidInputError::Header {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| InvalidInputError::Header {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                .map_err(|_| InvalidInputError::Header {
                    name: AUTHORIZATION.to_string(),
                    reason: "access token contains invalid characters".to_string(),
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self.timeout.as_millis() as u64,
            }
            .into()
        } else {
            err.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("https://api.findmypet.com").unwrap();
        let client = HttpClient::new(&ClientConfig::new(api.clone())).unwrap();
        assert_eq!(client.base().as_str(), api.as_str());
    }

    #[test]
    fn bearer_replaces_authorization_override() {
        let request = ApiRequest::get("/animal")
            .with_header("Authorization", "Basic Zm9vOmJhcg==")
            .with_header("Accept-Language", "pt-BR");
        let token = AccessToken::new("token-a");

        let headers = HttpClient::headers(&request, Some(&token)).unwrap();
        let values: Vec<_> = headers.get_all(AUTHORIZATION).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "Bearer token-a");
        assert_eq!(headers.get("accept-language").unwrap(), "pt-BR");
    }

    #[test]
    fn no_token_means_no_bearer() {
        let headers = HttpClient::headers(&ApiRequest::get("/animal"), None).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn invalid_header_is_rejected() {
        let request = ApiRequest::get("/animal").with_header("bad header", "x");
        let err = HttpClient::headers(&request, None).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InvalidInputError::Header { .. })));
    }
}
