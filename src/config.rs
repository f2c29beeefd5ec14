//! Configuration Module
//!
//! Handles loading and managing configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default cache TTL in seconds (five minutes, ample for a browsing session).
const DEFAULT_TTL_SECS: u64 = 300;

/// Default PokeAPI base URL.
const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Reaper tick interval in seconds; defaults to the TTL, so an entry
    /// lingers at most one TTL window past expiry
    pub reap_interval: u64,
    /// Base URL for the PokeAPI
    pub base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Cache TTL in seconds (default: 300)
    /// - `REAP_INTERVAL_SECS` - Reaper tick in seconds (default: the TTL)
    /// - `POKEAPI_BASE_URL` - API base URL (default: https://pokeapi.co/api/v2)
    pub fn from_env() -> Self {
        let cache_ttl = env::var("CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_SECS);

        Self {
            cache_ttl,
            reap_interval: env::var("REAP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(cache_ttl),
            base_url: env::var("POKEAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Cache TTL as a Duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Reaper tick interval as a Duration.
    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL_SECS,
            reap_interval: DEFAULT_TTL_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
