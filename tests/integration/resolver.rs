//! Integration tests for dynamic resolution against a mocked search service

#[path = "test_utils.rs"]
mod test_utils;

use newsquant::filters::ExchangePriceFilter;
use newsquant::resolver::DynamicResolver;
use std::sync::Arc;
use std::time::Duration;
use test_utils::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver_for(server: &MockServer, ttl: Duration) -> DynamicResolver {
    let client = test_client(server);
    let filter = Arc::new(ExchangePriceFilter::new(client.clone(), 8.0));
    DynamicResolver::new(client, filter, ttl)
}

#[tokio::test]
async fn test_concurrent_lookups_collapse_to_one_call() {
    let server = MockServer::start().await;
    // The search response is delayed so the second lookup arrives while the
    // first is still in flight; it must wait and reuse the cached outcome.
    Mock::given(method("GET"))
        .and(path("/v1/finance/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({
                    "quotes": [{"symbol": "ACME", "exchange": "NMS", "shortname": "Acme"}]
                }))
                .set_delay(Duration::from_millis(80)),
        )
        .expect(1)
        .mount(&server)
        .await;
    mock_quote(&server, "ACME", "NMS", 42.5).await;

    let resolver = Arc::new(resolver_for(&server, Duration::from_secs(60)));

    let (first, second) = tokio::join!(
        resolver.resolve_name("Acme Corp"),
        resolver.resolve_name("acme corp"),
    );

    assert_eq!(first, Some("ACME".to_string()));
    assert_eq!(second, Some("ACME".to_string()));
}

#[tokio::test]
async fn test_rejected_match_is_negatively_cached() {
    let server = MockServer::start().await;
    // The search succeeds but the match fails the price floor; the negative
    // outcome is cached, so the second resolution makes no further call.
    mock_search(&server, "Pennyco", "PNNY", "NMS", 1).await;
    mock_quote(&server, "PNNY", "NMS", 2.5).await;

    let resolver = resolver_for(&server, Duration::from_secs(60));

    assert_eq!(resolver.resolve_name("Pennyco").await, None);
    assert_eq!(resolver.resolve_name("Pennyco").await, None);
}

#[tokio::test]
async fn test_transport_failure_is_not_cached() {
    let server = MockServer::start().await;
    // Both resolutions must reach the failing service: errors are dropped,
    // not negatively cached, so the next cycle can retry.
    Mock::given(method("GET"))
        .and(path("/v1/finance/search"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let resolver = resolver_for(&server, Duration::from_secs(60));

    assert_eq!(resolver.resolve_name("Acme Corp").await, None);
    assert_eq!(resolver.resolve_name("Acme Corp").await, None);
}

#[tokio::test]
async fn test_empty_name_short_circuits() {
    let server = MockServer::start().await;
    let resolver = resolver_for(&server, Duration::from_secs(60));
    assert_eq!(resolver.resolve_name("   ").await, None);
}
