use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde_json::Value;
use sha2::{Digest, Sha256};

// Cache entry with its expiry deadline
pub struct CacheEntry {
    pub value: Value,
    pub expires_at: Instant,
}

// In-memory response cache with per-entry TTL. Expired entries are
// evicted lazily when a lookup finds them; there is no sweep and no
// size bound. Cached values are opaque JSON payloads.
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > Instant::now() {
                return Some(entry.value.clone());
            }
            // expired, drop the guard before removing
            drop(entry);
            self.entries.remove(key);
        }
        None
    }

    pub fn set(&self, key: &str, value: Value, ttl_secs: u64) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Instant::now() + Duration::from_secs(ttl_secs),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

// Create a cache key (hash of endpoint name + parameters)
pub fn make_cache_key(endpoint: &str, params: &[&str]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(endpoint);
    for param in params {
        hasher.update(param);
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_returns_stored_value_before_ttl() {
        let cache = ResponseCache::new();
        cache.set("k", json!({"id": 1}), 60);
        assert_eq!(cache.get("k"), Some(json!({"id": 1})));
    }

    #[test]
    fn get_misses_after_ttl_and_evicts() {
        let cache = ResponseCache::new();
        cache.set("k", json!("v"), 0);
        assert_eq!(cache.get("k"), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let cache = ResponseCache::new();
        cache.set("k", json!("old"), 60);
        cache.set("k", json!("new"), 60);
        assert_eq!(cache.get("k"), Some(json!("new")));
    }

    #[test]
    fn missing_key_is_absent() {
        let cache = ResponseCache::new();
        assert_eq!(cache.get("nope"), None);
    }

    #[test]
    fn cache_keys_depend_on_endpoint_and_params() {
        let a = make_cache_key("teams", &["Porto"]);
        let b = make_cache_key("teams", &["Benfica"]);
        let c = make_cache_key("fixtures", &["Porto"]);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, make_cache_key("teams", &["Porto"]));
    }
}
