//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for retrieval and REPL commands.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The remote API answered 404 for this URL
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// The remote API answered with any other non-success status
    #[error("Remote error: {url} responded with status {status}")]
    Remote { url: String, status: u16 },

    /// The request never produced a response (connection, timeout, body read)
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// Cached or freshly fetched bytes did not match the expected record shape
    #[error("Failed to decode response for {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A command was invoked with the wrong arguments
    #[error("{0}")]
    Usage(String),

    /// `inspect` on a pokemon that has not been caught
    #[error("You have not caught {0}")]
    NotCaught(String),

    /// Paging past either end of the location list
    #[error("{0}")]
    Navigation(String),

    /// The command name is not registered
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Startup configuration could not be applied
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing REPL output or reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PokedexError {
    /// Returns true for the recoverable "remote resource does not exist" signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::NotFound { .. })
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
