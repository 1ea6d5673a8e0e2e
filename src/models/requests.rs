//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::config::TierConfig;
use crate::error::Result;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

/// Request body for the PUT operation (PUT /put)
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl PutRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}

/// Request body for adding a tier (POST /tiers)
///
/// `capacity` is signed so that negative values reach validation and are
/// reported as a configuration error rather than a JSON error.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTierRequest {
    pub capacity: i64,
    /// Policy name, `LRU` or `LFU`
    pub policy: String,
}

impl AddTierRequest {
    /// Resolves the request into a validated tier layout.
    pub fn to_tier_config(&self) -> Result<TierConfig> {
        TierConfig::new(self.capacity, &self.policy)
    }
}
