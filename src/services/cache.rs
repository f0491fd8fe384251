use crate::models::{QueryTokens, Recommendation};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// In-memory cache of recommendation results
///
/// Scoring is a pure function of the query tokens and the immutable
/// catalog, so a cached entry is always identical to a fresh computation.
pub struct RecommendationCache {
    entries: moka::future::Cache<String, Vec<Recommendation>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl RecommendationCache {
    /// Create a new cache holding up to `capacity` entries for `ttl_secs`
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up the recommendations for a query
    pub async fn get(&self, query: &QueryTokens) -> Option<Vec<Recommendation>> {
        let key = CacheKey::recommendations(query);

        match self.entries.get(&key).await {
            Some(recommendations) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("Cache hit: {}", key);
                Some(recommendations)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("Cache miss: {}", key);
                None
            }
        }
    }

    /// Store the recommendations for a query
    pub async fn insert(&self, query: &QueryTokens, recommendations: Vec<Recommendation>) {
        let key = CacheKey::recommendations(query);
        self.entries.insert(key, recommendations).await;
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.entries.invalidate_all();
        tracing::debug!("Recommendation cache cleared");
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let lookups = hits + misses;

        CacheStats {
            entries: self.entries.entry_count(),
            hit_count: hits,
            miss_count: misses,
            hit_rate: if lookups > 0 { hits as f64 / lookups as f64 } else { 0.0 },
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    pub hit_rate: f64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a recommendation query
    ///
    /// Tokens may contain any character except commas, so both lists are
    /// JSON-encoded to keep keys unambiguous.
    pub fn recommendations(query: &QueryTokens) -> String {
        let skills = serde_json::to_string(&query.skills).unwrap_or_default();
        let interests = serde_json::to_string(&query.interests).unwrap_or_default();
        format!("recs:{}:{}", skills, interests)
    }
}
