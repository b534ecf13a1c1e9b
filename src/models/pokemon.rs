//! Pokemon record
//!
//! Shape of the `pokemon/{name}` endpoint.

use serde::Deserialize;

use super::NamedResource;

/// A pokemon detail record.
///
/// Every field except `name` defaults when absent so partial bodies decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pokemon {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    /// Null for some alternate forms
    #[serde(default)]
    pub base_experience: Option<i64>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// Capture difficulty score; a missing base experience counts as zero.
    pub fn difficulty(&self) -> i64 {
        self.base_experience.unwrap_or(0)
    }
}

/// A base stat such as `hp` or `speed`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// One of the pokemon's types, ordered by slot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
