//! Command-line interface definitions.
//!
//! Flags override the values loaded from the environment by `Config::from_env`.

use clap::Parser;

/// Interactive Pokedex.
///
/// Browse location areas, explore them, and try to catch what you find.
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the PokeAPI.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Cache time-to-live in seconds (also the sweep interval).
    #[arg(long)]
    pub cache_ttl: Option<u64>,

    /// HTTP request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Number of location areas shown per `map` page.
    #[arg(long)]
    pub page_size: Option<u32>,
}
