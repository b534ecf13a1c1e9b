//! Fetch-or-cache retrieval
//!
//! One generic lookup shared by every resource kind: serve from the cache when
//! possible, otherwise perform the remote call, keep the raw body and decode it.

use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::TtlCache;
use crate::error::{PokedexError, Result};
use crate::pokeapi::RemoteResponse;

/// Returns the record stored under `key`, fetching it with `remote` on a miss.
///
/// - Hit: the cached bytes are decoded; a decode failure is returned as-is and
///   the entry is left in place.
/// - Miss: `remote` is called exactly once. 404 becomes `NotFound`, any other
///   non-2xx becomes `Remote`, and nothing is cached in either case.
/// - Success: the body is decoded and, if that succeeds, stored byte-for-byte
///   under `key`.
///
/// The cache lock is only taken for the lookup and the insert, never while
/// `remote` runs.
pub async fn retrieve<T, F, Fut>(cache: &TtlCache, key: &str, remote: F) -> Result<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RemoteResponse>>,
{
    if let Some(cached) = cache.get(key).await {
        debug!(key, "Cache hit");
        return decode(key, &cached);
    }

    debug!(key, "Cache miss");
    let response = remote().await?;

    if response.status == 404 {
        return Err(PokedexError::NotFound {
            url: key.to_string(),
        });
    }
    if !response.is_success() {
        return Err(PokedexError::Remote {
            url: key.to_string(),
            status: response.status,
        });
    }

    let value = decode(key, &response.body)?;
    cache.add(key, response.body).await;
    debug!(key, "Cached response body");

    Ok(value)
}

fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|source| PokedexError::Decode {
        key: key.to_string(),
        source,
    })
}
