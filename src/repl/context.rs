//! REPL context
//!
//! State shared by every command for the lifetime of the session.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::Pokemon;
use crate::pokeapi::PokeApiClient;

/// Session state, built once at startup and handed to each command.
pub struct Context {
    /// API client; owns a handle to the shared response cache
    pub client: PokeApiClient,
    /// Page `map` shows next; `None` once the last page has been shown
    pub next_locations_url: Option<String>,
    /// Page `mapb` shows; `None` while on the first page
    pub prev_locations_url: Option<String>,
    /// Caught pokemon by name. Only grows.
    pub caught: BTreeMap<String, Pokemon>,
    /// Random source for capture attempts
    pub rng: StdRng,
}

impl Context {
    /// Creates a context positioned before the first location page.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a context with a caller-provided random source.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        let first_page = client.config().location_list_url();
        Self {
            client,
            next_locations_url: Some(first_page),
            prev_locations_url: None,
            caught: BTreeMap::new(),
            rng,
        }
    }

    /// Records a successful capture.
    pub fn record_catch(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }
}
