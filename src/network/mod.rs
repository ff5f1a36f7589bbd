//! HTTP networking module
//!
//! Provides the HTTP client used for token and search requests.

mod client;
mod request;

pub use client::HttpClient;
pub use request::{GraphRequest, GraphResponse, RequestBody};
