//! findmypet - Client library for the FindMyPet backend
//!
//! This library talks to the FindMyPet REST API with a credential-centric
//! design. All calls flow through an [`ApiClient`], which attaches the stored
//! bearer token, renews it once on a 401 and clears it when the session can
//! no longer be renewed.
//!
//! It also carries the field rules the registration form relies on: CPF
//! check digits, phone and e-mail validation and the typing masks.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use findmypet::{ApiClient, ApiUrl, ClientConfig, FileCredentialStore, LoginCredentials};
//!
//! # async fn example() -> Result<(), findmypet::Error> {
//! let config = ClientConfig::new(ApiUrl::new("http://192.168.0.15:8080")?);
//! let store = Arc::new(FileCredentialStore::new("/tmp/findmypet/credentials.json"));
//! let client = ApiClient::new(config, store)?;
//!
//! client.login(&LoginCredentials::new("ana@example.com", "hunter22")).await?;
//!
//! for report in client.list_reports().await? {
//!     println!("{:?}: {:?}", report.id, report.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
mod client;
pub mod config;
pub mod error;
pub mod mask;
pub mod models;
mod resources;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{
    Credential, CredentialStore, FileCredentialStore, LoginCredentials, MemoryCredentialStore,
};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::Error;
pub use resources::DUPLICATE_PERSON_MESSAGE;
pub use types::{ApiUrl, Cpf, Email, Phone};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
