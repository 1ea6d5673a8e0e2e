//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{EvictionPolicy, StatsReport, TierSnapshot, TierStats};

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the PUT operation (PUT /put)
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Success message
    pub message: String,
    /// The key that was written
    pub key: String,
}

impl PutResponse {
    /// Creates a new PutResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' written to all tiers", key),
            key,
        }
    }
}

/// Response body for tier changes (POST /tiers, DELETE /tiers/:index)
#[derive(Debug, Clone, Serialize)]
pub struct TierResponse {
    pub message: String,
    /// Index of the added or removed tier
    pub index: usize,
    /// Number of tiers after the change
    pub tier_count: usize,
}

impl TierResponse {
    pub fn added(index: usize, tier_count: usize) -> Self {
        Self {
            message: format!("Tier {} added", index),
            index,
            tier_count,
        }
    }

    pub fn removed(index: usize, tier_count: usize) -> Self {
        Self {
            message: format!("Tier {} removed", index),
            index,
            tier_count,
        }
    }
}

/// One resident entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryView {
    pub key: String,
    pub value: String,
}

/// One tier's contents in its policy-defined order
#[derive(Debug, Clone, Serialize)]
pub struct TierView {
    pub index: usize,
    pub label: String,
    pub policy: EvictionPolicy,
    pub capacity: usize,
    pub entries: Vec<EntryView>,
}

impl From<TierSnapshot<String, String>> for TierView {
    fn from(snapshot: TierSnapshot<String, String>) -> Self {
        Self {
            index: snapshot.index,
            label: snapshot.label,
            policy: snapshot.policy,
            capacity: snapshot.capacity,
            entries: snapshot
                .entries
                .into_iter()
                .map(|(key, value)| EntryView { key, value })
                .collect(),
        }
    }
}

/// Response body for the display endpoint (GET /tiers)
#[derive(Debug, Clone, Serialize)]
pub struct DisplayResponse {
    pub tiers: Vec<TierView>,
}

impl DisplayResponse {
    pub fn new(snapshots: Vec<TierSnapshot<String, String>>) -> Self {
        Self {
            tiers: snapshots.into_iter().map(TierView::from).collect(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of lookups answered by some tier
    pub hits: u64,
    /// Number of lookups that missed every tier
    pub misses: u64,
    /// Evictions summed over all tiers
    pub evictions: u64,
    /// Writes made to promote hits towards L1
    pub promotions: u64,
    /// Resident entries summed over all tiers
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Per-tier counters
    pub tiers: Vec<TierStats>,
}

impl From<StatsReport> for StatsResponse {
    fn from(report: StatsReport) -> Self {
        let hit_rate = report.chain.hit_rate();
        Self {
            hits: report.chain.hits,
            misses: report.chain.misses,
            evictions: report.chain.evictions,
            promotions: report.chain.promotions,
            total_entries: report.chain.total_entries,
            hit_rate,
            tiers: report.tiers,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Number of configured tiers
    pub tiers: usize,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(tiers: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            tiers,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
