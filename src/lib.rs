//! Tiered Cache - A multi-tier in-memory key-value cache
//!
//! Each tier runs its own LRU or LFU eviction; lookups promote hits towards
//! L1 and writes propagate to every tier.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{EvictionPolicy, TierSnapshot, TieredCache};
pub use config::Config;
pub use error::{CacheError, Result};
