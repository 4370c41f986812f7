//! Yahoo Finance HTTP implementation of the data-service contracts.

use crate::errors::{EngineError, EngineResult};
use crate::models::Candle;
use crate::services::market_data::{MarketDataProvider, Quote, SymbolMatch, SymbolSearch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = "newsquant/0.1.0";

pub struct YahooFinanceClient {
    http: reqwest::Client,
    base_url: String,
}

impl YahooFinanceClient {
    pub fn new(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different base URL (mock servers in tests).
    pub fn with_base_url(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> EngineResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| EngineError::malformed(format!("bad endpoint url: {}", e)))?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> EngineResult<serde_json::Value> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(EngineError::malformed(format!(
                "service responded with status {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceClient {
    async fn get_history(&self, symbol: &str, limit: usize) -> EngineResult<Vec<Candle>> {
        let url = self.endpoint(
            &format!("/v8/finance/chart/{}", symbol),
            &[("range", "6mo"), ("interval", "1d")],
        )?;
        let body = self.get_json(url).await?;

        let result = &body["chart"]["result"][0];
        let timestamps = result["timestamp"]
            .as_array()
            .ok_or_else(|| EngineError::malformed("chart response missing timestamps"))?;
        let quote = &result["indicators"]["quote"][0];

        let series = |field: &str| -> Vec<Option<f64>> {
            quote[field]
                .as_array()
                .map(|a| a.iter().map(|v| v.as_f64()).collect())
                .unwrap_or_default()
        };
        let opens = series("open");
        let highs = series("high");
        let lows = series("low");
        let closes = series("close");
        let volumes = series("volume");

        let mut candles = Vec::with_capacity(timestamps.len());
        for (i, ts) in timestamps.iter().enumerate() {
            let (Some(ts), Some(open), Some(high), Some(low), Some(close)) = (
                ts.as_i64(),
                opens.get(i).copied().flatten(),
                highs.get(i).copied().flatten(),
                lows.get(i).copied().flatten(),
                closes.get(i).copied().flatten(),
            ) else {
                // Holiday rows come back as nulls; skip them.
                continue;
            };
            let volume = volumes.get(i).copied().flatten().unwrap_or(0.0);
            let timestamp: DateTime<Utc> = DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| EngineError::malformed("bar timestamp out of range"))?;
            candles.push(Candle::new(open, high, low, close, volume, timestamp));
        }

        candles.sort_by_key(|c| c.timestamp);
        if candles.len() > limit {
            candles.drain(..candles.len() - limit);
        }
        Ok(candles)
    }

    async fn get_quote(&self, symbol: &str) -> EngineResult<Quote> {
        let url = self.endpoint("/v7/finance/quote", &[("symbols", symbol)])?;
        let body = self.get_json(url).await?;

        let row = &body["quoteResponse"]["result"][0];
        let last_price = row["regularMarketPrice"]
            .as_f64()
            .ok_or_else(|| EngineError::malformed("quote missing regularMarketPrice"))?;
        let exchange = row["exchange"]
            .as_str()
            .ok_or_else(|| EngineError::malformed("quote missing exchange"))?;

        Ok(Quote {
            symbol: symbol.to_string(),
            exchange: exchange.to_string(),
            last_price,
        })
    }
}

#[async_trait]
impl SymbolSearch for YahooFinanceClient {
    async fn search(&self, query: &str) -> EngineResult<Vec<SymbolMatch>> {
        let url = self.endpoint(
            "/v1/finance/search",
            &[("q", query), ("quotesCount", "5"), ("newsCount", "0")],
        )?;
        let body = self.get_json(url).await?;

        let quotes = body["quotes"].as_array().cloned().unwrap_or_default();
        let matches = quotes
            .iter()
            .filter_map(|row| {
                let symbol = row["symbol"].as_str()?;
                let exchange = row["exchange"].as_str()?;
                let display_name = row["shortname"]
                    .as_str()
                    .or_else(|| row["longname"].as_str())
                    .unwrap_or(symbol);
                Some(SymbolMatch {
                    symbol: symbol.to_string(),
                    exchange: exchange.to_string(),
                    display_name: display_name.to_string(),
                })
            })
            .collect();
        Ok(matches)
    }
}
