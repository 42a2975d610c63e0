use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::HeaderMap;
use serde_json::Value;

use crate::cache::make_cache_key;
use crate::error::ApiError;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, CACHE_SIZE, RATE_LIMITED, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::rate_limit::client_key;
use crate::state::AppState;
use crate::upstream;

// GET /api/fixtures?teamId=<id>
// Same flow as the teams handler; teamId must be supplied exactly once.
pub async fn fixtures_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ApiError> {
    REQUEST_TOTAL.inc();

    let key = client_key(&headers, Some(peer));
    if !state.rate_limiter.check(&key) {
        RATE_LIMITED.inc();
        return Err(ApiError::RateLimited);
    }

    let start_time = Instant::now();

    let mut values = params
        .iter()
        .filter(|(name, _)| name == "teamId")
        .map(|(_, value)| value.as_str());
    let team_id = match (values.next(), values.next()) {
        (Some(id), None) if !id.is_empty() => id,
        // missing, empty, or repeated
        _ => return Err(ApiError::BadRequest("Parameter teamId invalid")),
    };

    let api_key = state.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;

    let cache_key = make_cache_key("fixtures", &[team_id]);
    if let Some(cached) = state.cache.get(&cache_key) {
        CACHE_HITS.inc();
        REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
        return Ok(Json(cached));
    }
    CACHE_MISSES.inc();
    println!("[fixtures] cache miss - calling upstream for team {}", team_id);

    let fixtures = upstream::team_fixtures(&state, api_key, team_id).await?;

    let payload = serde_json::to_value(&fixtures).map_err(|_| ApiError::Internal)?;
    state.cache.set(&cache_key, payload.clone(), state.cache_ttl);
    CACHE_SIZE.set(state.cache.len() as f64);

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
    Ok(Json(payload))
}
