//! The authenticated API client.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::api::endpoints::{LOGIN, LoginRequest, REFRESH, RefreshRequest, TokenPairResponse};
use crate::api::{ApiRequest, ApiResponse, HttpClient};
use crate::auth::refresh::{RefreshAction, RefreshEvent, RefreshGate, RefreshState};
use crate::auth::{AccessToken, Credential, CredentialStore, LoginCredentials, RefreshToken};
use crate::config::ClientConfig;
use crate::error::{ApiError, AuthError, Error};
use crate::models::{ListBody, Page, PageRequest};
use crate::types::ApiUrl;

/// A client for the FindMyPet backend.
///
/// Every request carries the stored access token as a bearer credential.
/// When the backend answers 401 the client refreshes the token pair once,
/// through a gate shared by all clones, and replays the request. If that
/// does not help, the stored credential is removed and the call fails with
/// [`AuthError::SessionExpired`].
///
/// # Thread Safety
///
/// Clients are cheap to clone (they use internal `Arc`) and safe to share
/// across tasks. Clones share the credential store and the refresh gate.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use findmypet::{ApiClient, ApiUrl, ClientConfig, LoginCredentials, MemoryCredentialStore};
///
/// # async fn example() -> Result<(), findmypet::Error> {
/// let config = ClientConfig::new(ApiUrl::new("https://api.findmypet.com")?);
/// let client = ApiClient::new(config, Arc::new(MemoryCredentialStore::new()))?;
///
/// client.login(&LoginCredentials::new("ana@example.com", "hunter22")).await?;
/// for animal in client.list_animals().await? {
///     println!("{:?}", animal.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    store: Arc<dyn CredentialStore>,
    gate: RefreshGate,
}

impl ApiClient {
    /// Create a client that keeps its credential in `store`.
    pub fn new(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(ClientInner {
                http: HttpClient::new(&config)?,
                store,
                gate: RefreshGate::default(),
            }),
        })
    }

    /// Returns the backend base URL.
    pub fn base_url(&self) -> &ApiUrl {
        self.inner.http.base()
    }

    /// Returns the credential store shared by this client and its clones.
    pub fn credential_store(&self) -> &Arc<dyn CredentialStore> {
        &self.inner.store
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Authenticate and store the issued token pair.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when the backend answers 401; other
    /// failures are returned as classified.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Credential> {
        info!("Logging in");

        let request = ApiRequest::post(LOGIN).with_json(&LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        })?;

        let response = self.inner.http.send(&request, None).await?;
        if !response.is_success() {
            let err = response.to_api_error();
            if err.is_auth_error() {
                return Err(AuthError::InvalidCredentials.into());
            }
            return Err(err.into());
        }

        let credential = token_pair(&response)?;
        self.inner
            .gate
            .replace(self.inner.store.as_ref(), Some(&credential))
            .await?;

        debug!("Login succeeded");
        Ok(credential)
    }

    /// Forget the stored credential. No network call is made.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<()> {
        info!("Logging out");
        self.inner.gate.replace(self.inner.store.as_ref(), None).await
    }

    /// Whether a complete credential is stored.
    pub async fn is_authenticated(&self) -> Result<bool> {
        Ok(self.inner.store.load().await?.is_some())
    }

    /// Renew the token pair now.
    ///
    /// Goes through the same gate as the automatic refresh, so it never
    /// races a refresh triggered by a rejected request. On failure the
    /// stored credential is removed.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] when nothing is stored, and
    /// [`AuthError::SessionExpired`] when the backend rejects the refresh
    /// token.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Credential> {
        info!("Refreshing credential");

        let current = self
            .inner
            .store
            .load()
            .await?
            .ok_or(AuthError::NotAuthenticated)?;

        self.renew(Some(current.access_token()))
            .await
            .map_err(|e| match e {
                Error::Api(source) if source.is_auth_error() => {
                    AuthError::SessionExpired { source }.into()
                }
                other => other,
            })
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// Send a request with the stored credential.
    ///
    /// Returns the response when the status is 2xx. A 401 triggers one
    /// refresh and one replay; every other failure is returned as is.
    /// If the request carries a cancellation token, cancelling it resolves
    /// the call with [`Error::Cancelled`] and drops the in-flight I/O.
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse> {
        match request.cancellation().cloned() {
            Some(cancel) => {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        debug!(path = request.path(), "Request cancelled");
                        Err(Error::Cancelled)
                    }
                    result = self.execute(&request) => result,
                }
            }
            None => self.execute(&request).await,
        }
    }

    #[instrument(skip(self, request), fields(method = %request.method(), path = request.path()))]
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let mut state = RefreshState::NotAttempted;
        let mut credential = self.inner.store.load().await?;
        let mut original: Option<ApiError> = None;

        loop {
            let token = credential.as_ref().map(Credential::access_token);
            let response = self.inner.http.send(request, token).await?;

            if response.status() != 401 {
                return response.error_for_status();
            }

            let rejection = original.get_or_insert_with(|| response.to_api_error());

            let (next, action) = state.next(RefreshEvent::Unauthorized);
            state = next;
            if action != RefreshAction::Refresh {
                debug!("Replayed request was rejected");
                self.discard(token).await;
                return Err(expired(rejection.clone()));
            }

            let event = match self.renew(token).await {
                Ok(renewed) => {
                    credential = Some(renewed);
                    RefreshEvent::RefreshSucceeded
                }
                Err(e) => {
                    warn!(error = %e, "Credential refresh failed");
                    RefreshEvent::RefreshFailed
                }
            };

            let (next, action) = state.next(event);
            state = next;
            if action != RefreshAction::Retry {
                // The gate already cleared the store when the refresh failed.
                return Err(expired(rejection.clone()));
            }
            debug!("Replaying request with renewed credential");
        }
    }

    /// Obtain a credential newer than `stale` through the shared gate.
    async fn renew(&self, stale: Option<&AccessToken>) -> Result<Credential> {
        self.inner
            .gate
            .renew(self.inner.store.as_ref(), stale, |refresh_token| {
                self.exchange(refresh_token)
            })
            .await
    }

    /// Trade a refresh token for a new pair. Sent without a bearer header.
    async fn exchange(&self, refresh_token: RefreshToken) -> Result<Credential> {
        let request = ApiRequest::post(REFRESH).with_json(&RefreshRequest {
            refresh_token: refresh_token.as_str(),
        })?;

        let response = self
            .inner
            .http
            .send(&request, None)
            .await?
            .error_for_status()?;

        debug!("Credential refreshed");
        token_pair(&response)
    }

    /// Drop the stored credential if it is still the one `sent` carried.
    async fn discard(&self, sent: Option<&AccessToken>) {
        match self
            .inner
            .gate
            .clear_if_current(self.inner.store.as_ref(), sent)
            .await
        {
            Ok(true) => warn!("Session expired; credential cleared"),
            Ok(false) => debug!("Stored credential changed since the replay; keeping it"),
            Err(e) => warn!(error = %e, "Failed to clear credential"),
        }
    }

    // ========================================================================
    // JSON helpers
    // ========================================================================

    /// GET `path` and decode the body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(ApiRequest::get(path)).await?.json()
    }

    /// POST `body` to `path`. An empty response body yields `None`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::post(path).with_json(body)?;
        self.request(request).await?.json_opt()
    }

    /// PUT `body` to `path`. An empty response body yields `None`.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::put(path).with_json(body)?;
        self.request(request).await?.json_opt()
    }

    /// DELETE `path`, ignoring any response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request(ApiRequest::delete(path)).await?;
        Ok(())
    }

    /// GET a list from `path`.
    ///
    /// Accepts the `{content: [...]}` envelope or a bare array. A `null`
    /// or missing `content`, a `null` body and an empty body are all an
    /// empty list.
    pub async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let response = self.request(ApiRequest::get(path)).await?;
        let body: Option<Option<ListBody<T>>> = response.json_opt()?;
        Ok(body.flatten().map(ListBody::into_items).unwrap_or_default())
    }

    /// GET one page of a list from `path`.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: PageRequest,
    ) -> Result<Page<T>> {
        let request = ApiRequest::get(path)
            .with_query("page", page.page.to_string())
            .with_query("size", page.size.to_string());
        let response = self.request(request).await?;
        let body: Option<Option<ListBody<T>>> = response.json_opt()?;

        Ok(match body.flatten() {
            Some(ListBody::Page(page)) => page,
            Some(ListBody::Items(items)) => Page {
                total_elements: Some(items.len() as u64),
                total_pages: Some(1),
                number: Some(0),
                size: Some(items.len() as u32),
                content: items,
            },
            None => Page {
                content: Vec::new(),
                total_elements: Some(0),
                total_pages: Some(0),
                number: Some(page.page),
                size: Some(page.size),
            },
        })
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url().as_str())
            .finish_non_exhaustive()
    }
}

fn expired(original: ApiError) -> Error {
    warn!(status = original.status, "Session expired");
    AuthError::SessionExpired { source: original }.into()
}

/// Decode a `{accessToken, refreshToken}` body into a complete credential.
fn token_pair(response: &ApiResponse) -> Result<Credential> {
    let pair: TokenPairResponse = response.json()?;
    Credential::from_parts(Some(pair.access_token), Some(pair.refresh_token)).ok_or_else(|| {
        Error::Decode(serde::de::Error::custom(
            "token pair response has an empty token",
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryCredentialStore;

    fn client() -> ApiClient {
        let config = ClientConfig::new(ApiUrl::new("http://localhost:8080").unwrap());
        ApiClient::new(config, Arc::new(MemoryCredentialStore::new())).unwrap()
    }

    #[test]
    fn token_pair_rejects_empty_tokens() {
        let response = ApiResponse::new(
            200,
            br#"{"accessToken":"","refreshToken":"r"}"#.to_vec(),
        );
        assert!(matches!(token_pair(&response), Err(Error::Decode(_))));
    }

    #[test]
    fn token_pair_reads_camel_case() {
        let response = ApiResponse::new(
            200,
            br#"{"accessToken":"a","refreshToken":"r"}"#.to_vec(),
        );
        let credential = token_pair(&response).unwrap();
        assert_eq!(credential.access_token().as_str(), "a");
        assert_eq!(credential.refresh_token().as_str(), "r");
    }

    #[tokio::test]
    async fn refresh_without_credential_is_not_authenticated() {
        let err = client().refresh().await.unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn logout_clears_store() {
        let credential = Credential::new(AccessToken::new("a"), RefreshToken::new("r")).unwrap();
        let store = Arc::new(MemoryCredentialStore::with_credential(credential));
        let config = ClientConfig::new(ApiUrl::new("http://localhost:8080").unwrap());
        let client = ApiClient::new(config, store).unwrap();

        assert!(client.is_authenticated().await.unwrap());
        client.logout().await.unwrap();
        assert!(!client.is_authenticated().await.unwrap());
    }

    #[test]
    fn debug_shows_base_url_only() {
        let debug = format!("{:?}", client());
        assert!(debug.contains("localhost:8080"));
    }
}
