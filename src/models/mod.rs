//! Record models for the PokeAPI
//!
//! This module defines the response shapes decoded from cached or freshly
//! fetched bodies. Only the fields the REPL uses are mapped.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
