//! Retry-once bookkeeping and the single-flight refresh gate.

use std::future::Future;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::Result;
use crate::error::AuthError;

use super::store::CredentialStore;
use super::tokens::{AccessToken, Credential, RefreshToken};

/// Refresh progress of one logical request.
///
/// Each call to `ApiClient::request` owns one of these. The transition table
/// allows a single refresh and a single retry per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefreshState {
    NotAttempted,
    Refreshing,
    Refreshed,
    Failed,
}

/// Inputs to the per-call state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefreshEvent {
    /// The server answered 401.
    Unauthorized,
    /// The gate produced a usable credential.
    RefreshSucceeded,
    /// The gate could not produce a credential.
    RefreshFailed,
}

/// What the client does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefreshAction {
    Refresh,
    Retry,
    /// Surface the original 401 as an expired session.
    Expire,
}

impl RefreshState {
    pub(crate) fn next(self, event: RefreshEvent) -> (RefreshState, RefreshAction) {
        use RefreshAction::*;
        use RefreshEvent::*;
        use RefreshState::*;

        match (self, event) {
            (NotAttempted, Unauthorized) => (Refreshing, Refresh),
            (Refreshing, RefreshSucceeded) => (Refreshed, Retry),
            (Refreshing, RefreshFailed) => (Failed, Expire),
            // The retried call was rejected too.
            (Refreshed, Unauthorized) => (Failed, Expire),
            _ => (Failed, Expire),
        }
    }
}

/// Serializes refreshes so concurrent 401s share one `/auth/refresh` call.
#[derive(Debug, Default)]
pub(crate) struct RefreshGate {
    lock: Mutex<()>,
}

impl RefreshGate {
    /// Obtain a credential newer than `stale`.
    ///
    /// `stale` is the access token the rejected request carried. If the store
    /// already holds a different token, another caller refreshed while this
    /// one waited and no network call is made. If the store is empty, a
    /// previous refresh failed (or the user logged out) and this one fails
    /// too. Otherwise `refresh` runs with the stored refresh token; its
    /// result replaces the stored credential, and its failure clears it.
    pub(crate) async fn renew<F, Fut>(
        &self,
        store: &dyn CredentialStore,
        stale: Option<&AccessToken>,
        refresh: F,
    ) -> Result<Credential>
    where
        F: FnOnce(RefreshToken) -> Fut,
        Fut: Future<Output = Result<Credential>>,
    {
        let _guard = self.lock.lock().await;

        let current = store.load().await?.ok_or(AuthError::NotAuthenticated)?;

        if stale.is_none_or(|stale| current.access_token() != stale) {
            debug!("Credential already renewed by a concurrent caller");
            return Ok(current);
        }

        match refresh(current.refresh_token().clone()).await {
            Ok(renewed) => {
                store.save(&renewed).await?;
                Ok(renewed)
            }
            Err(e) => {
                if let Err(clear_err) = store.clear().await {
                    warn!(error = %clear_err, "Failed to clear credential after refresh failure");
                }
                Err(e)
            }
        }
    }

    /// Save or clear the stored credential while holding the gate, so a
    /// refresh in flight cannot overwrite a login or resurrect a logout.
    pub(crate) async fn replace(
        &self,
        store: &dyn CredentialStore,
        credential: Option<&Credential>,
    ) -> Result<()> {
        let _guard = self.lock.lock().await;
        match credential {
            Some(credential) => store.save(credential).await,
            None => store.clear().await,
        }
    }

    /// Clear the stored credential only if it still carries `sent`.
    ///
    /// A rejected replay must not purge a credential that a concurrent login
    /// or refresh stored after the replay went out. Returns whether the
    /// store was cleared.
    pub(crate) async fn clear_if_current(
        &self,
        store: &dyn CredentialStore,
        sent: Option<&AccessToken>,
    ) -> Result<bool> {
        let _guard = self.lock.lock().await;
        match (store.load().await?, sent) {
            (Some(current), Some(sent)) if current.access_token() == sent => {
                store.clear().await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
