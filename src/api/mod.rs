//! HTTP client module for the dog.ceo breeds API.
//!
//! This module provides endpoint construction, request execution, and the
//! normalization of transport and protocol failures into [`ApiError`].

mod endpoint;
mod error;
mod request;

pub use endpoint::{Endpoint, Method, DEFAULT_IMAGE_COUNT};
pub use error::ApiError;

use reqwest::Client;

/// Fixed origin every endpoint path is joined against.
pub(crate) const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Client for the public dog.ceo breeds API.
pub struct DogApiClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl DogApiClient {
    pub fn new() -> Self {
        log::debug!("Creating dog.ceo API client");
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Client pointed at a different origin. Meant for tests and local
    /// stand-ins of the API.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for DogApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
