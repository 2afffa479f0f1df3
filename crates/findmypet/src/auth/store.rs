//! Credential store trait and the in-memory implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::Result;

use super::tokens::Credential;

/// Persistent storage for the access/refresh token pair.
///
/// The store is shared by every concurrent caller of a client. Implementations
/// must replace or clear the pair atomically: a reader never observes one
/// token from an old credential and one from a new credential.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the stored credential. A partial or unreadable credential is `None`.
    async fn load(&self) -> Result<Option<Credential>>;

    /// Store a credential, replacing any previous one.
    async fn save(&self, credential: &Credential) -> Result<()>;

    /// Remove the stored credential. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<()>;
}

/// A credential store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credential: RwLock<Option<Credential>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `credential`.
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: RwLock::new(Some(credential)),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Option<Credential>> {
        Ok(self.credential.read().await.clone())
    }

    async fn save(&self, credential: &Credential) -> Result<()> {
        *self.credential.write().await = Some(credential.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.credential.write().await = None;
        Ok(())
    }
}
