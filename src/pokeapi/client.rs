//! PokeAPI client
//!
//! Typed lookups over the fetch-or-cache retrieval path.

use std::sync::Arc;

use tracing::instrument;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{LocationArea, LocationPage, Pokemon};
use crate::pokeapi::{retrieve, HttpTransport, Transport};

/// Client for the location-area and pokemon endpoints.
///
/// Every request URL doubles as the cache key, so one cache serves all
/// endpoints.
#[derive(Clone)]
pub struct PokeApiClient {
    config: Config,
    cache: Arc<TtlCache>,
    transport: Arc<dyn Transport>,
}

impl PokeApiClient {
    /// Creates a client over an arbitrary transport.
    pub fn new(config: Config, cache: Arc<TtlCache>, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            cache,
            transport,
        }
    }

    /// Creates a client that talks HTTP using the configured timeout.
    pub fn from_config(config: Config, cache: Arc<TtlCache>) -> Result<Self> {
        let transport = HttpTransport::new(config.http_timeout_duration())?;
        Ok(Self::new(config, cache, Arc::new(transport)))
    }

    /// Lists one page of location areas; `None` means the first page.
    #[instrument(skip(self))]
    pub async fn list_locations(&self, page_url: Option<&str>) -> Result<LocationPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.config.location_list_url(),
        };
        self.fetch(&url).await
    }

    /// Fetches one location area by name or id.
    #[instrument(skip(self))]
    pub async fn get_location(&self, name: &str) -> Result<LocationArea> {
        self.fetch(&self.config.location_url(name)).await
    }

    /// Fetches one pokemon by name or id.
    #[instrument(skip(self))]
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch(&self.config.pokemon_url(name)).await
    }

    /// The shared response cache.
    pub fn cache(&self) -> &Arc<TtlCache> {
        &self.cache
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let transport = self.transport.clone();
        retrieve(&self.cache, url, || async move { transport.get(url).await }).await
    }
}
