//! Unit tests for the resolution cache

use newsquant::resolver::ResolutionCache;
use std::time::Duration;

#[tokio::test]
async fn test_miss_on_unknown_key() {
    let cache = ResolutionCache::new(Duration::from_secs(60));
    assert_eq!(cache.lookup("acme").await, None);
}

#[tokio::test]
async fn test_positive_entry_round_trips() {
    let cache = ResolutionCache::new(Duration::from_secs(60));
    cache.store("acme", Some("ACME".to_string())).await;
    assert_eq!(cache.lookup("acme").await, Some(Some("ACME".to_string())));
}

#[tokio::test]
async fn test_negative_entry_round_trips() {
    let cache = ResolutionCache::new(Duration::from_secs(60));
    cache.store("unresolvable name", None).await;
    assert_eq!(cache.lookup("unresolvable name").await, Some(None));
}

#[tokio::test]
async fn test_entry_expires_after_ttl() {
    let cache = ResolutionCache::new(Duration::from_millis(40));
    cache.store("acme", Some("ACME".to_string())).await;
    assert!(cache.lookup("acme").await.is_some());

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(cache.lookup("acme").await, None);
}

#[tokio::test]
async fn test_key_guard_serializes_same_key() {
    let cache = std::sync::Arc::new(ResolutionCache::new(Duration::from_secs(60)));

    let guard = cache.key_guard("acme").await;

    // A second acquisition of the same key must wait until the first guard
    // is dropped.
    let contender = {
        let cache = cache.clone();
        tokio::spawn(async move {
            let _guard = cache.key_guard("acme").await;
        })
    };

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!contender.is_finished());

    drop(guard);
    contender.await.expect("contender completes after release");
}

#[tokio::test]
async fn test_key_guard_independent_keys_do_not_block() {
    let cache = ResolutionCache::new(Duration::from_secs(60));
    let _first = cache.key_guard("acme").await;
    // Must not deadlock.
    let _second = cache.key_guard("initech").await;
}
