//! Configuration Module
//!
//! Handles loading the client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Catalog endpoint used when `POKEDEX_API_URL` is unset
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote catalog, without a trailing slash
    pub api_url: String,
    /// Cache sweep interval in seconds; also the staleness threshold
    pub cache_interval: u64,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - Catalog base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_INTERVAL_SECS` - Cache sweep interval (default: 5)
    /// - `POKEDEX_HTTP_TIMEOUT_SECS` - HTTP request timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("POKEDEX_API_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            cache_interval: env::var("POKEDEX_CACHE_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval),
            // Zero would make every request time out immediately
            http_timeout: env::var("POKEDEX_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&secs: &u64| secs > 0)
                .unwrap_or(defaults.http_timeout),
        }
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_interval: 5,
            http_timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.cache_interval(), Duration::from_secs(5));
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
    }

    // Single test touching the environment so parallel tests never race on it
    #[test]
    fn test_config_from_env() {
        env::remove_var("POKEDEX_API_URL");
        env::remove_var("POKEDEX_CACHE_INTERVAL_SECS");
        env::remove_var("POKEDEX_HTTP_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.cache_interval, 5);
        assert_eq!(config.http_timeout, 10);

        env::set_var("POKEDEX_API_URL", "http://127.0.0.1:8080/api/");
        env::set_var("POKEDEX_CACHE_INTERVAL_SECS", "30");
        env::set_var("POKEDEX_HTTP_TIMEOUT_SECS", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.api_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.cache_interval, 30);
        assert_eq!(config.http_timeout, 10);

        env::set_var("POKEDEX_HTTP_TIMEOUT_SECS", "0");
        assert_eq!(Config::from_env().http_timeout, 10);

        env::set_var("POKEDEX_HTTP_TIMEOUT_SECS", "3");
        assert_eq!(Config::from_env().http_timeout(), Duration::from_secs(3));

        env::remove_var("POKEDEX_API_URL");
        env::remove_var("POKEDEX_CACHE_INTERVAL_SECS");
        env::remove_var("POKEDEX_HTTP_TIMEOUT_SECS");
    }
}
