//! Location records
//!
//! Shapes of the `location-area` list and detail endpoints.

use serde::Deserialize;

/// A `{name, url}` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    /// Resource name
    pub name: String,
    /// Canonical URL of the resource
    #[serde(default)]
    pub url: String,
}

/// One page of the location-area list (`GET location-area/?offset=..&limit=..`)
///
/// # Fields
/// - `next`: URL of the following page, absent on the last page
/// - `previous`: URL of the preceding page, absent on the first page
/// - `results`: the location areas on this page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationPage {
    /// Total number of location areas
    #[serde(default)]
    pub count: u64,
    /// Next page URL
    #[serde(default)]
    pub next: Option<String>,
    /// Previous page URL
    #[serde(default)]
    pub previous: Option<String>,
    /// Location areas on this page
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl LocationPage {
    /// Iterates over the area names on this page, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|area| area.name.as_str())
    }
}

/// A single location area (`GET location-area/{name}`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationArea {
    /// Area name
    #[serde(default)]
    pub name: String,
    /// Pokemon that can be encountered here
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Iterates over the names of pokemon found in this area.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

/// An encounter entry within a location area.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
