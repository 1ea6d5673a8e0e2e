//! Cache Module
//!
//! Multi-tier in-memory caching: per-tier LRU/LFU stores, the tier chain that
//! coordinates them, and the lock-guarded handle shared between callers.

mod chain;
mod lfu;
mod lru;
mod policy;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use chain::{TierChain, TierSnapshot};
pub use lfu::LfuStore;
pub use lru::{LruStore, LruTracker};
pub use policy::EvictionPolicy;
pub use shared::TieredCache;
pub use stats::{CacheStats, StatsReport, TierStats};
pub use store::{build_store, BoxedStore, EvictionStore};
