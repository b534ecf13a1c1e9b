//! Pokedex - An interactive explorer for the PokeAPI
//!
//! Pages through location areas, explores them and simulates catching pokemon,
//! with every API response kept in a TTL cache swept by a background task.

pub mod cache;
pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod repl;
pub mod tasks;

pub use cache::TtlCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pokeapi::PokeApiClient;
pub use repl::Context;
