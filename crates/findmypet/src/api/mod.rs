//! HTTP plumbing: request descriptors, responses, endpoint paths and the
//! transport the client sends them through.

pub mod endpoints;
mod http;
mod request;

pub(crate) use http::HttpClient;
pub use request::{ApiRequest, ApiResponse, Method};
