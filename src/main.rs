//! Pokedex - An interactive explorer for the PokeAPI
//!
//! Binary entry point: wires configuration, the response cache, the API client
//! and the REPL together.

use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::repl;
use pokedex::{Config, Context, PokeApiClient, TtlCache};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables and flags
/// 3. Create the response cache, which starts its reaper
/// 4. Build the API client and session context
/// 5. Run the REPL until `exit` or end of input
/// 6. Stop the cache reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().apply_cli(&cli);
    info!(
        "Configuration loaded: api_url={}, cache_ttl={}s, http_timeout={}s, page_size={}",
        config.api_url, config.cache_ttl, config.http_timeout, config.page_size
    );

    let cache = Arc::new(TtlCache::new(config.cache_ttl_duration()));
    let client = PokeApiClient::from_config(config, cache.clone())
        .context("failed to create the PokeAPI client")?;
    let mut ctx = Context::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let result = repl::run(&mut ctx, stdin, &mut stdout).await;

    cache.stop().await;
    info!("Pokedex shutdown complete");

    result.context("REPL terminated on an I/O error")
}
