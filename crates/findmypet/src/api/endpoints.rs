//! Endpoint paths and authentication request/response bodies.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

pub const LOGIN: &str = "/auth/login";
pub const REFRESH: &str = "/auth/refresh";
pub const PEOPLE: &str = "/pessoa";
pub const ANIMALS: &str = "/animal";
pub const REPORTS: &str = "/report";
pub const LOCATIONS: &str = "/local";
pub const SENSORS: &str = "/sensor";

/// Path of a single resource under a collection path.
pub fn item(collection: &str, id: i64) -> String {
    format!("{}/{}", collection, id)
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for `/auth/login`.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Request body for `/auth/refresh`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Response from `/auth/login` and `/auth/refresh`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}
