#![allow(dead_code)]

use newsquant::config::EngineConfig;
use newsquant::engine::TradingEngine;
use newsquant::services::YahooFinanceClient;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Engine wired to a mock server standing in for every external service.
pub async fn test_engine(config: EngineConfig) -> (MockServer, TradingEngine) {
    let server = MockServer::start().await;
    let client = Arc::new(YahooFinanceClient::with_base_url(
        server.uri(),
        reqwest::Client::new(),
    ));
    let engine = TradingEngine::new(config, client.clone(), client);
    (server, engine)
}

/// Mock client for wiring service-level tests directly.
pub fn test_client(server: &MockServer) -> Arc<YahooFinanceClient> {
    Arc::new(YahooFinanceClient::with_base_url(
        server.uri(),
        reqwest::Client::new(),
    ))
}

pub async fn mock_search(
    server: &MockServer,
    query: &str,
    symbol: &str,
    exchange: &str,
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path("/v1/finance/search"))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "quotes": [{
                "symbol": symbol,
                "exchange": exchange,
                "shortname": format!("{} Corporation", symbol),
            }]
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Catch-all search returning no matches, for scenarios where dynamic
/// resolution is not under test.
pub async fn mock_search_empty(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/finance/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "quotes": [] })),
        )
        .mount(server)
        .await;
}

pub async fn mock_quote(server: &MockServer, symbol: &str, exchange: &str, price: f64) {
    Mock::given(method("GET"))
        .and(path("/v7/finance/quote"))
        .and(query_param("symbols", symbol))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "quoteResponse": {
                "result": [{
                    "symbol": symbol,
                    "exchange": exchange,
                    "regularMarketPrice": price,
                }]
            }
        })))
        .mount(server)
        .await;
}

pub async fn mock_chart(server: &MockServer, symbol: &str, closes: &[f64]) {
    let timestamps: Vec<i64> = (0..closes.len())
        .map(|i| 1_700_000_000 + i as i64 * 86_400)
        .collect();
    let opens: Vec<f64> = closes.iter().map(|c| c * 0.995).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c * 1.01).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c * 0.99).collect();
    let volumes: Vec<f64> = (0..closes.len())
        .map(|i| 1_000_000.0 + i as f64 * 20_000.0)
        .collect();

    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{}", symbol)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "chart": {
                "result": [{
                    "timestamp": timestamps,
                    "indicators": {
                        "quote": [{
                            "open": opens,
                            "high": highs,
                            "low": lows,
                            "close": closes,
                            "volume": volumes,
                        }]
                    }
                }]
            }
        })))
        .mount(server)
        .await;
}

pub fn rising_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 50.0 * 1.02_f64.powi(i as i32)).collect()
}

pub fn falling_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 200.0 * 0.98_f64.powi(i as i32)).collect()
}
