//! Eviction Policy Module
//!
//! Closed set of eviction disciplines a tier can run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

// == Eviction Policy ==
/// Eviction discipline of a single tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvictionPolicy {
    /// Least Recently Used
    #[serde(rename = "LRU")]
    Lru,
    /// Least Frequently Used
    #[serde(rename = "LFU")]
    Lfu,
}

impl EvictionPolicy {
    /// Returns the canonical policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::Lru => "LRU",
            EvictionPolicy::Lfu => "LFU",
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Parsing ==
/// Policy names are matched case-insensitively after trimming.
impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_uppercase().as_str() {
            "LRU" => Ok(EvictionPolicy::Lru),
            "LFU" => Ok(EvictionPolicy::Lfu),
            _ => Err(CacheError::UnsupportedPolicy(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_policies() {
        assert_eq!("LRU".parse::<EvictionPolicy>(), Ok(EvictionPolicy::Lru));
        assert_eq!("LFU".parse::<EvictionPolicy>(), Ok(EvictionPolicy::Lfu));
        assert_eq!(" lfu ".parse::<EvictionPolicy>(), Ok(EvictionPolicy::Lfu));
    }

    #[test]
    fn test_parse_unknown_policy() {
        let result = "FIFO".parse::<EvictionPolicy>();
        assert_eq!(result, Err(CacheError::UnsupportedPolicy("FIFO".to_string())));
        assert!("".parse::<EvictionPolicy>().is_err());
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&EvictionPolicy::Lru).unwrap();
        assert_eq!(json, r#""LRU""#);
        let policy: EvictionPolicy = serde_json::from_str(r#""LFU""#).unwrap();
        assert_eq!(policy, EvictionPolicy::Lfu);
    }

    #[test]
    fn test_display() {
        assert_eq!(EvictionPolicy::Lfu.to_string(), "LFU");
    }
}
