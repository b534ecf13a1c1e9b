//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables and
//! command-line overrides, and builds the request URLs used as cache keys.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::cli::Cli;

/// Default PokeAPI base URL
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2/";

const LOCATION_AREA_ENDPOINT: &str = "location-area/";
const POKEMON_ENDPOINT: &str = "pokemon/";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API, always ending with `/`
    pub api_url: String,
    /// Cache TTL in seconds; also the reap interval
    pub cache_ttl: u64,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
    /// Number of location areas per `map` page
    pub page_size: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - API base URL (default: https://pokeapi.co/api/v2/)
    /// - `CACHE_TTL_SECS` - Cache TTL and reap interval in seconds (default: 10)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
    /// - `PAGE_SIZE` - Location areas per page (default: 20)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("POKEDEX_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| normalize_base_url(&v))
                .unwrap_or(defaults.api_url),
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .and_then(nonzero_timeout)
                .unwrap_or(defaults.http_timeout),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.page_size),
        }
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.api_url {
            self.api_url = normalize_base_url(url);
        }
        if let Some(ttl) = cli.cache_ttl {
            self.cache_ttl = ttl;
        }
        if let Some(timeout) = cli.timeout.and_then(nonzero_timeout) {
            self.http_timeout = timeout;
        }
        if let Some(page_size) = cli.page_size {
            self.page_size = page_size;
        }
        self
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// HTTP timeout as a Duration.
    pub fn http_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    // == Request URLs ==
    /// URL of the first location-area page.
    pub fn location_list_url(&self) -> String {
        format!(
            "{}{}?offset=0&limit={}",
            self.api_url, LOCATION_AREA_ENDPOINT, self.page_size
        )
    }

    /// URL of a single location area.
    pub fn location_url(&self, name: &str) -> String {
        format!("{}{}{}", self.api_url, LOCATION_AREA_ENDPOINT, name)
    }

    /// URL of a single pokemon.
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}{}{}", self.api_url, POKEMON_ENDPOINT, name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_ttl: 10,
            http_timeout: 30,
            page_size: 20,
        }
    }
}

/// A zero timeout expires every request immediately, so it counts as unset.
fn nonzero_timeout(secs: u64) -> Option<u64> {
    if secs == 0 {
        warn!("Ignoring HTTP timeout of 0s, using the default");
        return None;
    }
    Some(secs)
}

/// Ensures the base URL ends with exactly one `/`.
fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim().trim_end_matches('/'))
}
