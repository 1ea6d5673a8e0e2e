//! API Handlers
//!
//! HTTP request handlers for each tiered cache endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::cache::TieredCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    AddTierRequest, DisplayResponse, GetResponse, HealthResponse, PutRequest, PutResponse,
    StatsResponse, TierResponse,
};

/// Application state shared across all handlers.
///
/// `TieredCache` is a cheap clone of a lock-guarded chain, so handlers never
/// hold the lock across an await point.
#[derive(Clone, Default)]
pub struct AppState {
    pub cache: TieredCache<String, String>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: TieredCache<String, String>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState with the tier layout from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.build_cache()?))
    }
}

/// Handler for PUT /put
///
/// Writes a key-value pair into every tier.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.put(req.key.clone(), req.value);
    Ok(Json(PutResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Looks a key up across tiers. A miss in every tier is reported as 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(&key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /tiers
///
/// Returns every tier's contents in its policy-defined order.
pub async fn display_handler(State(state): State<AppState>) -> Json<DisplayResponse> {
    Json(DisplayResponse::new(state.cache.display_cache()))
}

/// Handler for POST /tiers
///
/// Appends a tier as the new last level.
pub async fn add_tier_handler(
    State(state): State<AppState>,
    Json(req): Json<AddTierRequest>,
) -> Result<(StatusCode, Json<TierResponse>)> {
    let tier = req.to_tier_config()?;
    let index = state.cache.add_cache_level(tier.capacity, tier.policy)?;
    let tier_count = index + 1;

    info!(index, policy = %tier.policy, capacity = tier.capacity, "Tier added via API");
    Ok((
        StatusCode::CREATED,
        Json(TierResponse::added(index, tier_count)),
    ))
}

/// Handler for DELETE /tiers/:index
///
/// Removes a tier and discards its entries.
pub async fn remove_tier_handler(
    State(state): State<AppState>,
    Path(index): Path<i64>,
) -> Result<Json<TierResponse>> {
    let position = usize::try_from(index).map_err(|_| CacheError::IndexOutOfRange {
        index,
        tiers: state.cache.tier_count(),
    })?;

    let tier_count = state.cache.remove_cache_level(position)?;
    Ok(Json(TierResponse::removed(position, tier_count)))
}

/// Handler for GET /stats
///
/// Returns chain-level and per-tier statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.cache.tier_count()))
}
