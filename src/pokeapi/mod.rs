//! PokeAPI Module
//!
//! Remote access to the creature catalog, with every response passing through
//! the TTL cache.
//!
//! # Endpoints
//! - `GET location-area/?offset=..&limit=..` - Paginated location areas
//! - `GET location-area/{name}` - Pokemon encounters in one area
//! - `GET pokemon/{name}` - Pokemon details

pub mod client;
pub mod retrieval;
pub mod transport;

pub use client::PokeApiClient;
pub use retrieval::retrieve;
pub use transport::{HttpTransport, RemoteResponse, Transport};
