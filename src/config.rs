//! Configuration Module
//!
//! Handles loading the tier layout and server settings from environment variables.

use std::env;

use tracing::warn;

use crate::cache::{EvictionPolicy, TieredCache};
use crate::error::{CacheError, Result};

/// Default tier layout: a small LRU L1 in front of a larger LFU L2.
pub const DEFAULT_TIERS: &str = "LRU:100,LFU:1000";

// == Tier Config ==
/// Policy and capacity of one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierConfig {
    pub policy: EvictionPolicy,
    pub capacity: usize,
}

impl TierConfig {
    /// Validates a raw capacity and policy name.
    ///
    /// Capacities below 1 fail with `InvalidConfiguration`, unknown policy
    /// names with `UnsupportedPolicy`.
    pub fn new(capacity: i64, policy: &str) -> Result<Self> {
        let policy = policy.parse::<EvictionPolicy>()?;
        let capacity = usize::try_from(capacity)
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| {
                CacheError::InvalidConfiguration(format!(
                    "Tier capacity must be a positive integer, got {}",
                    capacity
                ))
            })?;
        Ok(Self { policy, capacity })
    }
}

/// Parses a layout such as `LRU:3,LFU:2`, L1 first.
///
/// An empty string yields an empty layout.
pub fn parse_tiers(layout: &str) -> Result<Vec<TierConfig>> {
    layout
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (policy, capacity) = part.split_once(':').ok_or_else(|| {
                CacheError::InvalidConfiguration(format!(
                    "Tier '{}' is not of the form POLICY:CAPACITY",
                    part
                ))
            })?;
            let capacity = capacity.trim().parse::<i64>().map_err(|_| {
                CacheError::InvalidConfiguration(format!(
                    "Tier '{}' has a non-numeric capacity",
                    part
                ))
            })?;
            TierConfig::new(capacity, policy)
        })
        .collect()
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tier layout, L1 first
    pub tiers: Vec<TierConfig>,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TIERS` - Tier layout, e.g. `LRU:3,LFU:2` (default: `LRU:100,LFU:1000`)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// A `CACHE_TIERS` that does not parse is an error; the default layout is
    /// only used when the variable is unset. An unparsable port falls back to
    /// the default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tiers = match lookup("CACHE_TIERS") {
            Some(layout) => parse_tiers(&layout).map_err(|err| {
                warn!(layout = %layout, error = %err, "Rejected CACHE_TIERS");
                err
            })?,
            None => defaults.tiers,
        };

        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port.trim().parse().unwrap_or_else(|_| {
                warn!(port = %port, "Invalid SERVER_PORT, using {}", defaults.server_port);
                defaults.server_port
            }),
            None => defaults.server_port,
        };

        Ok(Self { tiers, server_port })
    }

    /// Builds a cache with this layout.
    pub fn build_cache<K, V>(&self) -> Result<TieredCache<K, V>>
    where
        K: Eq + std::hash::Hash + Clone + Send + 'static,
        V: Clone + Send + 'static,
    {
        let cache = TieredCache::new();
        for tier in &self.tiers {
            cache.add_cache_level(tier.capacity, tier.policy)?;
        }
        Ok(cache)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tiers: vec![
                TierConfig {
                    policy: EvictionPolicy::Lru,
                    capacity: 100,
                },
                TierConfig {
                    policy: EvictionPolicy::Lfu,
                    capacity: 1000,
                },
            ],
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.tiers, parse_tiers(DEFAULT_TIERS).unwrap());
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_config_from_env() {
        // only test in the crate that touches these variables
        env::remove_var("CACHE_TIERS");
        env::remove_var("SERVER_PORT");
        let config = Config::from_env().unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.tiers.len(), 2);

        env::set_var("CACHE_TIERS", "LRU:3,LFU:0");
        let result = Config::from_env();
        env::remove_var("CACHE_TIERS");
        assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_config_from_lookup_layout() {
        let config = Config::from_lookup(lookup_from(&[
            ("CACHE_TIERS", "LFU:5,LRU:7"),
            ("SERVER_PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.tiers, parse_tiers("LFU:5,LRU:7").unwrap());
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_config_rejects_bad_layout() {
        let result = Config::from_lookup(lookup_from(&[("CACHE_TIERS", "LRU:3,LFU:0")]));
        assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));

        let result = Config::from_lookup(lookup_from(&[("CACHE_TIERS", "LRU:3,MRU:2")]));
        assert_eq!(
            result.map(|c| c.tiers),
            Err(CacheError::UnsupportedPolicy("MRU".to_string()))
        );

        // an explicitly empty layout is kept, not replaced by the default
        let config = Config::from_lookup(lookup_from(&[("CACHE_TIERS", "")])).unwrap();
        assert!(config.tiers.is_empty());
    }

    #[test]
    fn test_config_bad_port_uses_default() {
        let config = Config::from_lookup(lookup_from(&[("SERVER_PORT", "not-a-port")])).unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.tiers, Config::default().tiers);
    }

    #[test]
    fn test_parse_tiers() {
        let tiers = parse_tiers(" LRU:3 , lfu:2 ").unwrap();
        assert_eq!(
            tiers,
            vec![
                TierConfig {
                    policy: EvictionPolicy::Lru,
                    capacity: 3
                },
                TierConfig {
                    policy: EvictionPolicy::Lfu,
                    capacity: 2
                },
            ]
        );
        assert!(parse_tiers("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tiers_errors() {
        assert!(matches!(
            parse_tiers("LRU"),
            Err(CacheError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            parse_tiers("LRU:abc"),
            Err(CacheError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            parse_tiers("LRU:0"),
            Err(CacheError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            parse_tiers("LRU:-4"),
            Err(CacheError::InvalidConfiguration(_))
        ));
        assert_eq!(
            parse_tiers("LRU:3,MRU:2"),
            Err(CacheError::UnsupportedPolicy("MRU".to_string()))
        );
    }

    #[test]
    fn test_build_cache() {
        let config = Config {
            tiers: parse_tiers("LRU:3,LFU:2").unwrap(),
            server_port: 0,
        };
        let cache = config.build_cache::<String, String>().unwrap();
        assert_eq!(cache.tier_count(), 2);
    }
}
