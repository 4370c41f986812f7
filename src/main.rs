use chrono::{Duration, Utc};
use dotenvy::dotenv;
use newsquant::config::EngineConfig;
use newsquant::engine::TradingEngine;
use newsquant::logging;
use newsquant::models::NewsItem;
use newsquant::services::YahooFinanceClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = EngineConfig::from_env();
    let yahoo = Arc::new(YahooFinanceClient::new(config.http_timeout));
    let engine = TradingEngine::new(config, yahoo.clone(), yahoo);

    let now = Utc::now();
    let stories = vec![
        NewsItem::new("NVIDIA reports record revenue as AI chip demand soars")
            .with_summary(
                "Quarterly earnings beat expectations with data center revenue surging. \
                 The GPU maker sees strong demand from cloud providers.",
            )
            .with_published_at(now),
        NewsItem::new("Oil prices drop as OPEC fails to agree on production cuts")
            .with_summary(
                "Crude oil fell 4% after members could not reach consensus on limiting output. \
                 Exxon and Chevron shares declined in after-hours trading.",
            )
            .with_published_at(now - Duration::hours(2)),
        NewsItem::new("Federal Reserve signals potential rate cut in upcoming meeting")
            .with_summary(
                "The Fed chair indicated a dovish shift. \
                 Bank stocks rallied on the news while bond yields declined.",
            )
            .with_published_at(now - Duration::hours(1)),
    ];

    let report = engine.analyze_batch(&stories).await;

    println!("{}", report.summary);
    println!();
    for signal in &report.signals {
        println!(
            "  {:4} {:5} | score {:+.4} | confidence {:5.1}% | {} stories",
            signal.action.as_str(),
            signal.symbol,
            signal.score,
            signal.confidence * 100.0,
            signal.story_count,
        );
        if let Some(technical) = signal.technical_component {
            println!(
                "       sentiment {:+.4} | technical {:+.4}",
                signal.sentiment_component, technical
            );
        } else {
            println!(
                "       sentiment {:+.4} | technical unavailable (low confidence)",
                signal.sentiment_component
            );
        }
    }
    for skip in &report.skipped {
        println!("  skipped {}: {}", skip.symbol, skip.reason.describe());
    }

    Ok(())
}
