//! External service clients and contracts.

pub mod market_data;
pub mod yahoo;

pub use market_data::{MarketDataProvider, Quote, SymbolMatch, SymbolSearch};
pub use yahoo::YahooFinanceClient;
