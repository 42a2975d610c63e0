use std::time::Duration;

use crate::cache::ResponseCache;
use crate::config::Args;
use crate::rate_limit::RateLimiter;

// App's shared state. Created once at startup, shared across all
// requests via Arc, never persisted; a restart clears everything.
pub struct AppState {
    pub client: reqwest::Client,
    pub cache: ResponseCache,
    pub cache_ttl: u64, // seconds a cached response stays valid
    pub rate_limiter: RateLimiter,
    pub upstream_url: String,
    pub api_key: Option<String>, // APISPORTS_API_KEY; absence is a per-request 500
}

impl AppState {
    pub fn new(args: &Args, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            cache: ResponseCache::new(),
            cache_ttl: args.cache_ttl,
            rate_limiter: RateLimiter::new(
                args.rate_limit,
                Duration::from_secs(args.rate_window),
            ),
            upstream_url: args.upstream_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}
