//! Authentication types and credential storage.
//!
//! This module provides the token pair issued by the backend, the login
//! credentials used to obtain it, and the [`CredentialStore`] abstraction
//! the client reads and writes it through.

mod credentials;
mod file_store;
pub(crate) mod refresh;
mod store;
mod tokens;

pub use credentials::{LoginCredentials, MIN_PASSWORD_LEN, password_meets_minimum};
pub use file_store::FileCredentialStore;
pub use store::{CredentialStore, MemoryCredentialStore};
pub use tokens::{AccessToken, Credential, RefreshToken};
