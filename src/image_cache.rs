//! Bounded in-memory cache for decoded breed images.

use std::sync::Arc;

use image::DynamicImage;
use log::{debug, info};
use lru::LruCache;
use parking_lot::Mutex;

/// Maximum number of cached images.
pub const MAX_ENTRIES: usize = 100;

/// Maximum aggregate cost of cached images, in bytes of encoded payload.
pub const MAX_TOTAL_COST: usize = 50 * 1024 * 1024;

/// A decoded image together with the byte size of its encoded form.
#[derive(Debug, Clone)]
pub struct CachedImage {
    pub image: Arc<DynamicImage>,
    pub cost: usize,
}

struct CacheInner {
    entries: LruCache<String, CachedImage>,
    total_cost: usize,
}

/// Shared image cache, keyed by exact URL string with no canonicalization;
/// the empty string and strings with arbitrary characters are valid keys.
///
/// Entry count and aggregate cost are both bounded; inserts evict
/// least-recently-used entries until the limits hold again. All mutation is
/// serialized behind one mutex, so concurrent calls from independent
/// image-loading tasks never corrupt the count/cost accounting.
pub struct ImageCache {
    inner: Mutex<CacheInner>,
    max_entries: usize,
    max_total_cost: usize,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::with_limits(MAX_ENTRIES, MAX_TOTAL_COST)
    }

    pub fn with_limits(max_entries: usize, max_total_cost: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: LruCache::unbounded(),
                total_cost: 0,
            }),
            max_entries,
            max_total_cost,
        }
    }

    /// Returns the cached image for `url` and refreshes its recency.
    pub fn get(&self, url: &str) -> Option<CachedImage> {
        self.inner.lock().entries.get(url).cloned()
    }

    /// Stores `image` under `url` with `cost` bytes of accounting weight,
    /// overwriting (and re-costing) any existing entry for that exact key.
    ///
    /// The entry just inserted is never evicted by its own insertion, even
    /// when its cost alone exceeds the byte limit.
    pub fn put(&self, url: impl Into<String>, image: Arc<DynamicImage>, cost: usize) {
        let url = url.into();
        let mut inner = self.inner.lock();

        if let Some(previous) = inner.entries.put(url.clone(), CachedImage { image, cost }) {
            inner.total_cost -= previous.cost;
        }
        inner.total_cost += cost;
        debug!(
            "Cached image for '{url}' (cost {cost}, {} entries, {} bytes total)",
            inner.entries.len(),
            inner.total_cost
        );

        while inner.entries.len() > 1
            && (inner.entries.len() > self.max_entries || inner.total_cost > self.max_total_cost)
        {
            match inner.entries.pop_lru() {
                Some((evicted_url, evicted)) => {
                    inner.total_cost -= evicted.cost;
                    debug!("Evicted image for '{evicted_url}' (cost {})", evicted.cost);
                }
                None => break,
            }
        }
    }

    pub fn remove(&self, url: &str) {
        let mut inner = self.inner.lock();
        if let Some(removed) = inner.entries.pop(url) {
            inner.total_cost -= removed.cost;
        }
    }

    /// Drops every entry.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.total_cost = 0;
    }

    /// Host memory-pressure signal; clears the whole cache.
    pub fn handle_memory_pressure(&self) {
        info!("Memory pressure received, clearing image cache");
        self.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    pub fn total_cost(&self) -> usize {
        self.inner.lock().total_cost
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "image_cache_tests.rs"]
mod image_cache_tests;
