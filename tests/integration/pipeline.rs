//! End-to-end pipeline scenarios

#[path = "test_utils.rs"]
mod test_utils;

use chrono::Utc;
use newsquant::config::EngineConfig;
use newsquant::models::{NewsItem, SkipReason, TradeAction};
use std::time::Duration;
use test_utils::*;

fn positive_story() -> NewsItem {
    NewsItem::new("Acme Corp beats estimates, shares surge")
        .with_summary("Quarterly revenue growth exceeded expectations.")
        .with_published_at(Utc::now())
}

fn negative_story() -> NewsItem {
    NewsItem::new("Acme shares plunge after disappointing guidance")
        .with_summary("The company warned of declining sales and cut its outlook.")
        .with_published_at(Utc::now())
}

#[tokio::test]
async fn test_positive_news_with_rising_technicals_buys() {
    let (server, engine) = test_engine(EngineConfig::default()).await;
    // "Acme Corp" is not in the alias table: resolution must go through
    // exactly one symbol-search call.
    mock_search(&server, "Acme", "ACME", "NMS", 1).await;
    mock_quote(&server, "ACME", "NMS", 42.5).await;
    mock_chart(&server, "ACME", &rising_closes(60)).await;

    let report = engine.analyze_batch(&[positive_story()]).await;

    assert_eq!(report.tickers_detected, 1);
    assert_eq!(report.signals.len(), 1);
    let signal = &report.signals[0];
    assert_eq!(signal.symbol, "ACME");
    assert_eq!(signal.action, TradeAction::Buy);
    assert!(signal.sentiment_component > 0.0);
    assert!(signal.technical_component.expect("technical present") > 0.0);
    assert!(report.skipped.is_empty());
}

#[tokio::test]
async fn test_negative_news_with_falling_technicals_sells() {
    let (server, engine) = test_engine(EngineConfig::default()).await;
    mock_search(&server, "Acme", "ACME", "NMS", 1).await;
    mock_quote(&server, "ACME", "NMS", 42.5).await;
    mock_chart(&server, "ACME", &falling_closes(60)).await;

    let report = engine.analyze_batch(&[negative_story()]).await;

    assert_eq!(report.signals.len(), 1);
    let signal = &report.signals[0];
    assert_eq!(signal.action, TradeAction::Sell);
    assert!(signal.sentiment_component < 0.0);
    assert!(signal.technical_component.expect("technical present") < 0.0);
}

#[tokio::test]
async fn test_resolution_cached_within_ttl() {
    let (server, engine) = test_engine(EngineConfig::default()).await;
    // Two batches, one search call: the second resolution hits the cache.
    mock_search(&server, "Acme", "ACME", "NMS", 1).await;
    mock_quote(&server, "ACME", "NMS", 42.5).await;
    mock_chart(&server, "ACME", &rising_closes(60)).await;

    engine.analyze_batch(&[positive_story()]).await;
    engine.analyze_batch(&[positive_story()]).await;
}

#[tokio::test]
async fn test_resolution_requeries_after_expiry() {
    let config = EngineConfig {
        resolution_cache_ttl: Duration::from_millis(50),
        ..EngineConfig::default()
    };
    let (server, engine) = test_engine(config).await;
    mock_search(&server, "Acme", "ACME", "NMS", 2).await;
    mock_quote(&server, "ACME", "NMS", 42.5).await;
    mock_chart(&server, "ACME", &rising_closes(60)).await;

    engine.analyze_batch(&[positive_story()]).await;
    tokio::time::sleep(Duration::from_millis(120)).await;
    engine.analyze_batch(&[positive_story()]).await;
}

#[tokio::test]
async fn test_price_at_floor_passes() {
    let (server, engine) = test_engine(EngineConfig::default()).await;
    let engine = engine.with_aliases([("Acme Corp", "ACME")]);
    mock_search_empty(&server).await;
    mock_quote(&server, "ACME", "NMS", 8.0).await;
    mock_chart(&server, "ACME", &rising_closes(60)).await;

    let report = engine.analyze_batch(&[positive_story()]).await;

    assert!(report.skipped.is_empty());
    assert_eq!(report.signals.len(), 1);
    assert_eq!(report.signals[0].action, TradeAction::Buy);
}

#[tokio::test]
async fn test_price_below_floor_is_skipped() {
    let (server, engine) = test_engine(EngineConfig::default()).await;
    let engine = engine.with_aliases([("Acme Corp", "ACME")]);
    mock_search_empty(&server).await;
    mock_quote(&server, "ACME", "NMS", 7.99).await;

    let report = engine.analyze_batch(&[positive_story()]).await;

    assert!(report.signals.is_empty());
    assert_eq!(report.tickers_detected, 0);
    let skip = report
        .skipped
        .iter()
        .find(|s| s.symbol == "ACME")
        .expect("ACME skipped");
    assert_eq!(skip.reason, SkipReason::BelowPriceFloor);
}

#[tokio::test]
async fn test_short_history_falls_back_to_sentiment_only() {
    let config = EngineConfig {
        suppress_holds: false,
        ..EngineConfig::default()
    };
    let (server, engine) = test_engine(config).await;
    let engine = engine.with_aliases([("Acme Corp", "ACME")]);
    mock_search_empty(&server).await;
    mock_quote(&server, "ACME", "NMS", 42.5).await;
    mock_chart(&server, "ACME", &rising_closes(20)).await;

    let report = engine.analyze_batch(&[positive_story()]).await;

    assert_eq!(report.signals.len(), 1);
    let signal = &report.signals[0];
    assert_eq!(signal.technical_component, None);
    assert!(signal.low_confidence);
    // The fallback path must be exact: no partial indicator values leak in.
    assert_eq!(signal.score, signal.sentiment_component);
}

#[tokio::test]
async fn test_empty_and_unresolvable_stories_are_harmless() {
    let (server, engine) = test_engine(EngineConfig::default()).await;
    mock_search_empty(&server).await;

    let stories = vec![
        NewsItem::new(""),
        NewsItem::new("Treasury yields were unchanged on quiet trading"),
    ];
    let report = engine.analyze_batch(&stories).await;

    assert_eq!(report.stories_analyzed, 2);
    assert_eq!(report.tickers_detected, 0);
    assert!(report.signals.is_empty());
}

#[tokio::test]
async fn test_batch_survives_partial_failures() {
    // One resolvable security plus one name whose quote service errors:
    // the failing candidate is skipped, the batch still emits the rest.
    let (server, engine) = test_engine(EngineConfig::default()).await;
    let engine = engine.with_aliases([("Acme Corp", "ACME"), ("Initech", "INIT")]);
    mock_search_empty(&server).await;
    mock_quote(&server, "ACME", "NMS", 42.5).await;
    // No quote mock for INIT: the endpoint 404s and the candidate is skipped.
    mock_chart(&server, "ACME", &rising_closes(60)).await;

    let story = NewsItem::new("Acme Corp and Initech both beat estimates, shares surge")
        .with_published_at(Utc::now());
    let report = engine.analyze_batch(&[story]).await;

    assert_eq!(report.signals.len(), 1);
    assert_eq!(report.signals[0].symbol, "ACME");
    let skip = report
        .skipped
        .iter()
        .find(|s| s.symbol == "INIT")
        .expect("INIT skipped");
    assert_eq!(skip.reason, SkipReason::QuoteUnavailable);
}
