//! Fetch once, serve every request after
//!
//! Fonts and emoji images are identical across requests, so a provider that
//! goes to the network each time wastes most of its latency. [`AssetCache`]
//! is an LRU map from [`AssetKey`] to shared bytes and
//! [`CachedAssetProvider`] puts one in front of any [`AssetProvider`].

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::RwLock;

use crate::cache_config;
use crate::error::Result;
use crate::traits::{AssetKey, AssetProvider};

/// Default number of cached assets (two fonts plus a few hundred glyphs)
pub const DEFAULT_ASSET_CAPACITY: usize = 512;

const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_ASSET_CAPACITY) {
    Some(v) => v,
    None => unreachable!(),
};

/// Bytes that have been cached, plus bookkeeping
#[derive(Debug, Clone)]
struct CachedValue {
    data: Arc<Vec<u8>>,
    hit_count: u32,
}

/// LRU store for asset bytes
pub struct AssetCache {
    cache: RwLock<LruCache<AssetKey, CachedValue>>,
    capacity: NonZeroUsize,
    metrics: RwLock<CacheMetrics>,
}

impl AssetCache {
    /// Zero capacity falls back to [`DEFAULT_ASSET_CAPACITY`]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(FALLBACK_CAPACITY);
        Self {
            cache: RwLock::new(LruCache::new(capacity)),
            capacity,
            metrics: RwLock::new(CacheMetrics::default()),
        }
    }

    pub fn get(&self, key: &AssetKey) -> Option<Arc<Vec<u8>>> {
        let start = Instant::now();
        let found = {
            let mut cache = self.cache.write();
            cache.get_mut(key).map(|entry| {
                entry.hit_count += 1;
                entry.data.clone()
            })
        };

        let mut metrics = self.metrics.write();
        metrics.total_requests += 1;
        if found.is_some() {
            metrics.hits += 1;
            metrics.total_hit_time += start.elapsed();
        } else {
            metrics.misses += 1;
        }
        found
    }

    pub fn insert(&self, key: AssetKey, data: Arc<Vec<u8>>) {
        self.cache.write().put(
            key,
            CachedValue {
                data,
                hit_count: 0,
            },
        );
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    pub fn stats(&self) -> CacheStats {
        let cache = self.cache.read();
        let total_hits: u32 = cache.iter().map(|(_, v)| v.hit_count).sum();
        CacheStats {
            size: cache.len(),
            capacity: self.capacity.get(),
            total_hits,
        }
    }

    pub fn metrics(&self) -> CacheMetrics {
        self.metrics.read().clone()
    }
}

impl Default for AssetCache {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_CAPACITY)
    }
}

/// Basic cache statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    pub total_hits: u32,
}

/// Request counters since the cache was created
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    pub total_requests: u64,
    pub hits: u64,
    pub misses: u64,
    pub total_hit_time: Duration,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.hits as f64 / self.total_requests as f64
        }
    }
}

/// Whether a [`CachedAssetProvider`] consults the global switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Follow [`cache_config::is_caching_enabled`]
    #[default]
    Global,
    Always,
    Never,
}

impl CachePolicy {
    fn enabled(self) -> bool {
        match self {
            CachePolicy::Global => cache_config::is_caching_enabled(),
            CachePolicy::Always => true,
            CachePolicy::Never => false,
        }
    }
}

/// Any provider, with an LRU cache in front
pub struct CachedAssetProvider<P> {
    inner: P,
    cache: AssetCache,
    policy: CachePolicy,
}

impl<P: AssetProvider> CachedAssetProvider<P> {
    pub fn new(inner: P) -> Self {
        Self::with_capacity(inner, DEFAULT_ASSET_CAPACITY)
    }

    pub fn with_capacity(inner: P, capacity: usize) -> Self {
        Self {
            inner,
            cache: AssetCache::new(capacity),
            policy: CachePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn cache(&self) -> &AssetCache {
        &self.cache
    }
}

impl<P: AssetProvider> AssetProvider for CachedAssetProvider<P> {
    fn name(&self) -> &'static str {
        "cached"
    }

    fn fetch(&self, key: &AssetKey) -> Result<Arc<Vec<u8>>> {
        if !self.policy.enabled() {
            return self.inner.fetch(key);
        }

        if let Some(data) = self.cache.get(key) {
            log::trace!("asset cache hit: {}", key.url);
            return Ok(data);
        }

        log::debug!("asset cache miss, fetching via {}: {}", self.inner.name(), key.url);
        // Failures are not cached; the next request retries
        let data = self.inner.fetch(key)?;
        self.cache.insert(key.clone(), data.clone());
        Ok(data)
    }

    fn clear_cache(&self) {
        self.cache.clear();
        self.inner.clear_cache();
    }
}
