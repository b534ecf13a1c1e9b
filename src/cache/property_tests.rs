//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store's add/get/reap behavior over arbitrary keys and bodies.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use chrono::Utc;

use crate::cache::{CacheStore, TtlCache};

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(10);

// == Strategies ==
/// Generates request-URL-like keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}/[a-z0-9\\-]{1,16}".prop_map(|s| s)
}

/// Generates arbitrary response bodies
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A get right after an add, before the TTL elapses, returns the added bytes.
    #[test]
    fn prop_get_after_add(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new();
        let now = Utc::now();

        store.add(key.clone(), Bytes::from(value.clone()), now);
        store.reap(now, TEST_TTL);

        prop_assert_eq!(store.get(&key), Some(Bytes::from(value)));
    }

    // Keys that were never added are absent.
    #[test]
    fn prop_never_added_is_absent(
        added in prop::collection::vec((key_strategy(), value_strategy()), 0..20),
        probe in key_strategy()
    ) {
        let mut store = CacheStore::new();
        let now = Utc::now();

        for (key, value) in &added {
            store.add(key.clone(), Bytes::from(value.clone()), now);
        }

        if !added.iter().any(|(key, _)| key == &probe) {
            prop_assert!(store.get(&probe).is_none());
        }
    }

    // The second add wins and there is only one entry for the key.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new();
        let now = Utc::now();

        store.add(key.clone(), Bytes::from(value1), now);
        store.add(key.clone(), Bytes::from(value2.clone()), now);

        prop_assert_eq!(store.get(&key), Some(Bytes::from(value2)));
        prop_assert_eq!(store.len(), 1);
    }

    // After the TTL has strictly elapsed, a sweep removes every entry.
    #[test]
    fn prop_reap_after_ttl_removes_all(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..30),
        extra_ms in 1i64..10_000
    ) {
        let mut store = CacheStore::new();
        let start = Utc::now();

        for (key, value) in &entries {
            store.add(key.clone(), Bytes::from(value.clone()), start);
        }

        let later = start
            + chrono::Duration::from_std(TEST_TTL).unwrap()
            + chrono::Duration::milliseconds(extra_ms);
        store.reap(later, TEST_TTL);

        prop_assert!(store.is_empty());
        for (key, _) in &entries {
            prop_assert!(store.get(key).is_none());
        }
    }

    // Without elapsed time the store matches a plain map model.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();
        let now = Utc::now();

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    store.add(key.clone(), Bytes::from(value.clone()), now);
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let expected = model.get(&key).cloned().map(Bytes::from);
                    prop_assert_eq!(store.get(&key), expected);
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
    }

    // The async handle gives the same get-after-add guarantee.
    #[test]
    fn prop_ttl_cache_get_after_add(key in key_strategy(), value in value_strategy()) {
        let fetched = tokio_test::block_on(async {
            let cache = TtlCache::new(Duration::from_secs(60));
            cache.add(key.clone(), value.clone()).await;
            let fetched = cache.get(&key).await;
            cache.stop().await;
            fetched
        });

        prop_assert_eq!(fetched, Some(Bytes::from(value)));
    }
}
