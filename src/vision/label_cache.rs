// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! TTL-based memoization of label results, keyed by image content

use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;
use tokio::time::{Duration, Instant};

use super::types::{ImageContent, LabelResult};

/// Default time-to-live for memoized results
pub const DEFAULT_LABEL_CACHE_TTL_SECS: u64 = 60;

/// Default bound on the number of memoized results
pub const DEFAULT_LABEL_CACHE_ENTRIES: usize = 256;

/// TTL-based cache for label results
pub struct LabelCache {
    cache: RwLock<HashMap<[u8; 32], CachedEntry>>,
    ttl: Duration,
    max_entries: usize,
}

struct CachedEntry {
    result: LabelResult,
    inserted_at: Instant,
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Total entries in cache
    pub total: usize,
    /// Expired entries (not yet evicted)
    pub expired: usize,
    /// Maximum cache capacity
    pub max: usize,
}

impl LabelCache {
    /// Create a new label cache
    ///
    /// # Arguments
    /// * `ttl` - Time-to-live for cache entries
    /// * `max_entries` - Maximum number of entries to store
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get the memoized result for this exact content
    ///
    /// Returns None if not found or expired
    pub fn get(&self, content: &ImageContent) -> Option<LabelResult> {
        let cache = self.cache.read().ok()?;
        let entry = cache.get(&content.digest())?;

        if entry.inserted_at.elapsed() >= self.ttl {
            return None;
        }

        Some(entry.result.clone())
    }

    /// Memoize a result for this content
    pub fn insert(&self, content: &ImageContent, result: &LabelResult) {
        let mut cache = match self.cache.write() {
            Ok(c) => c,
            Err(_) => return,
        };

        let ttl = self.ttl;
        cache.retain(|_, entry| entry.inserted_at.elapsed() < ttl);

        let digest = content.digest();
        if !cache.contains_key(&digest) && cache.len() >= self.max_entries {
            Self::evict_oldest(&mut cache);
        }

        cache.insert(
            digest,
            CachedEntry {
                result: result.clone(),
                inserted_at: Instant::now(),
            },
        );
    }

    /// Clear all cache entries
    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let cache = match self.cache.read() {
            Ok(c) => c,
            Err(_) => {
                return CacheStats {
                    total: 0,
                    expired: 0,
                    max: self.max_entries,
                }
            }
        };

        CacheStats {
            total: cache.len(),
            expired: cache
                .values()
                .filter(|e| e.inserted_at.elapsed() >= self.ttl)
                .count(),
            max: self.max_entries,
        }
    }

    fn evict_oldest(cache: &mut HashMap<[u8; 32], CachedEntry>) {
        if let Some(oldest_key) = cache
            .iter()
            .min_by_key(|(_, v)| v.inserted_at)
            .map(|(k, _)| *k)
        {
            cache.remove(&oldest_key);
        }
    }
}

impl Default for LabelCache {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(DEFAULT_LABEL_CACHE_TTL_SECS),
            DEFAULT_LABEL_CACHE_ENTRIES,
        )
    }
}
