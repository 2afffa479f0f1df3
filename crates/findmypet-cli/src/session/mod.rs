//! Credential file location and client construction.

mod storage;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use findmypet::{ApiClient, ApiUrl, ClientConfig, FileCredentialStore};

use crate::cli::GlobalArgs;

pub use storage::credentials_path;

/// Build a client backed by the credentials file.
pub fn open_client(global: &GlobalArgs) -> Result<ApiClient> {
    let api_url = ApiUrl::new(&global.api_url).context("Invalid API URL")?;
    let config = ClientConfig::new(api_url)
        .with_timeout(Duration::from_secs(global.timeout_secs))
        .with_user_agent(concat!("findmypet-cli/", env!("CARGO_PKG_VERSION")));

    let path = credentials_path(global)?;
    tracing::debug!(path = %path.display(), "Using credentials file");

    ApiClient::new(config, Arc::new(FileCredentialStore::new(path)))
        .context("Failed to create API client")
}
