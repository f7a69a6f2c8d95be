//! Fetch-decode-cache pipeline for breed images.

use std::sync::Arc;

use log::{debug, error};
use thiserror::Error;
use url::Url;

use crate::image_cache::{CachedImage, ImageCache};

/// Failures of the image pipeline.
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("invalid image URL")]
    InvalidUrl,

    #[error("HTTP error with status code: {0}")]
    Http(u16),

    #[error("image request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Loads images over HTTP through one shared bounded cache.
///
/// One loader serves any number of concurrent image tasks; the cache
/// serializes its own mutation. Two tasks racing on the same uncached URL
/// both download and decode, and the later store wins.
pub struct ImageLoader {
    client: reqwest::Client,
    cache: Arc<ImageCache>,
}

impl ImageLoader {
    pub fn new(cache: Arc<ImageCache>) -> Self {
        Self {
            client: reqwest::Client::new(),
            cache,
        }
    }

    pub fn cache(&self) -> &Arc<ImageCache> {
        &self.cache
    }

    /// Returns the image for `url`, from cache when possible.
    ///
    /// A miss downloads the payload, decodes it on the blocking pool, and
    /// stores the result with the encoded byte length as its cost.
    pub async fn load(&self, url: &str) -> Result<CachedImage, ImageLoadError> {
        if let Some(cached) = self.cache.get(url) {
            debug!("Image cache hit for '{url}'");
            return Ok(cached);
        }

        debug!("Image cache miss for '{url}', downloading");
        let target = Url::parse(url).map_err(|_| ImageLoadError::InvalidUrl)?;
        let response = self.client.get(target).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Image download for '{url}' failed with status {status}");
            return Err(ImageLoadError::Http(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let cost = bytes.len();
        let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .expect("blocking image decode panicked")?;

        let image = Arc::new(decoded);
        self.cache.put(url, Arc::clone(&image), cost);
        debug!("Decoded and cached image for '{url}' ({cost} bytes encoded)");

        Ok(CachedImage { image, cost })
    }
}

#[cfg(test)]
#[path = "image_loader_tests.rs"]
mod image_loader_tests;
