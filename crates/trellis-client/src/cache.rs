//! Shared, time-expiring response cache.
//!
//! Keyed by the full outbound request signature (endpoint + payload +
//! credential scope). Entries are immutable once written and expire after a
//! fixed duration. Per-key get/insert is atomic, so concurrent in-flight
//! invocations need no further locking. The cache is injected into the
//! executor at construction; its lifecycle belongs to whoever assembles the
//! engine.

use crate::response::RawResult;
use dashmap::DashMap;
use std::time::{Duration, SystemTime};

#[derive(Debug, Clone)]
struct CachedResponse {
    raw: RawResult,
    stored_at: SystemTime,
}

impl CachedResponse {
    fn is_expired(&self, ttl: Duration) -> bool {
        SystemTime::now()
            .duration_since(self.stored_at)
            .map(|age| age > ttl)
            .unwrap_or(true) // If time went backwards, consider it expired
    }
}

/// Response cache with a fixed TTL.
#[derive(Debug)]
pub struct ResponseCache {
    entries: DashMap<String, CachedResponse>,
    ttl: Duration,
}

impl ResponseCache {
    /// A cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// The cache key for one outbound request.
    pub fn signature(endpoint: &str, payload: &str, scope: &str) -> String {
        format!("{endpoint}\u{1f}{scope}\u{1f}{payload}")
    }

    /// A stored response, unless missing or expired. Expired entries are
    /// evicted on the way out.
    pub fn get(&self, key: &str) -> Option<RawResult> {
        let expired = {
            let entry = self.entries.get(key)?;
            if entry.is_expired(self.ttl) {
                true
            } else {
                return Some(entry.raw.clone());
            }
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Store a response under its request signature.
    pub fn insert(&self, key: impl Into<String>, raw: RawResult) {
        self.entries.insert(
            key.into(),
            CachedResponse {
                raw,
                stored_at: SystemTime::now(),
            },
        );
    }

    /// Number of live entries (expired entries may still be counted until
    /// their next lookup).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw() -> RawResult {
        RawResult::Opaque(json!({"describe": "body"}))
    }

    #[test]
    fn hit_within_ttl_returns_the_stored_response() {
        let cache = ResponseCache::new(Duration::from_secs(300));
        let key = ResponseCache::signature("http://e/sparql", "SELECT 1", "user");

        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), raw());
        assert_eq!(cache.get(&key), Some(raw()));
    }

    #[test]
    fn expired_entries_are_evicted_on_lookup() {
        let cache = ResponseCache::new(Duration::from_millis(10));
        let key = ResponseCache::signature("http://e/sparql", "SELECT 1", "user");

        cache.insert(key.clone(), raw());
        std::thread::sleep(Duration::from_millis(25));
        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn signatures_distinguish_endpoint_payload_and_scope() {
        let a = ResponseCache::signature("http://e/sparql", "SELECT 1", "alice");
        let b = ResponseCache::signature("http://e/sparql", "SELECT 1", "bob");
        let c = ResponseCache::signature("http://e/sparql", "SELECT 2", "alice");
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
