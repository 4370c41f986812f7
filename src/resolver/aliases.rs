//! Static company alias table.
//!
//! Maps lowercased company names, product lines, and key people to tickers.
//! Scanning is longest-match-first; a matched span is consumed so that a
//! shorter alias cannot re-match inside it ("jp morgan" wins over "morgan").

use std::collections::HashMap;

pub const COMPANY_ALIASES: &[(&str, &str)] = &[
    ("apple", "AAPL"),
    ("iphone", "AAPL"),
    ("ipad", "AAPL"),
    ("macbook", "AAPL"),
    ("tim cook", "AAPL"),
    ("app store", "AAPL"),
    ("microsoft", "MSFT"),
    ("windows", "MSFT"),
    ("azure", "MSFT"),
    ("xbox", "MSFT"),
    ("satya nadella", "MSFT"),
    ("linkedin", "MSFT"),
    ("copilot", "MSFT"),
    ("openai", "MSFT"),
    ("google", "GOOGL"),
    ("alphabet", "GOOGL"),
    ("youtube", "GOOGL"),
    ("android", "GOOGL"),
    ("chrome", "GOOGL"),
    ("waymo", "GOOGL"),
    ("sundar pichai", "GOOGL"),
    ("deepmind", "GOOGL"),
    ("amazon", "AMZN"),
    ("aws", "AMZN"),
    ("alexa", "AMZN"),
    ("andy jassy", "AMZN"),
    ("whole foods", "AMZN"),
    ("nvidia", "NVDA"),
    ("geforce", "NVDA"),
    ("cuda", "NVDA"),
    ("jensen huang", "NVDA"),
    ("meta", "META"),
    ("facebook", "META"),
    ("instagram", "META"),
    ("whatsapp", "META"),
    ("zuckerberg", "META"),
    ("metaverse", "META"),
    ("tesla", "TSLA"),
    ("elon musk", "TSLA"),
    ("musk", "TSLA"),
    ("cybertruck", "TSLA"),
    ("model 3", "TSLA"),
    ("model y", "TSLA"),
    ("autopilot", "TSLA"),
    ("netflix", "NFLX"),
    ("advanced micro devices", "AMD"),
    ("radeon", "AMD"),
    ("ryzen", "AMD"),
    ("lisa su", "AMD"),
    ("epyc", "AMD"),
    ("intel", "INTC"),
    ("paypal", "PYPL"),
    ("venmo", "PYPL"),
    ("adobe", "ADBE"),
    ("photoshop", "ADBE"),
    ("creative cloud", "ADBE"),
    ("cisco", "CSCO"),
    ("webex", "CSCO"),
    ("comcast", "CMCSA"),
    ("nbcuniversal", "CMCSA"),
    ("peacock", "CMCSA"),
    ("pepsico", "PEP"),
    ("pepsi", "PEP"),
    ("frito-lay", "PEP"),
    ("gatorade", "PEP"),
    ("costco", "COST"),
    ("t-mobile", "TMUS"),
    ("broadcom", "AVGO"),
    ("vmware", "AVGO"),
    ("texas instruments", "TXN"),
    ("qualcomm", "QCOM"),
    ("snapdragon", "QCOM"),
    ("jpmorgan", "JPM"),
    ("jp morgan", "JPM"),
    ("j.p. morgan", "JPM"),
    ("jamie dimon", "JPM"),
    ("visa", "V"),
    ("johnson & johnson", "JNJ"),
    ("johnson and johnson", "JNJ"),
    ("j&j", "JNJ"),
    ("walmart", "WMT"),
    ("wal-mart", "WMT"),
    ("procter & gamble", "PG"),
    ("procter and gamble", "PG"),
    ("p&g", "PG"),
    ("mastercard", "MA"),
    ("unitedhealth", "UNH"),
    ("unitedhealthcare", "UNH"),
    ("home depot", "HD"),
    ("disney", "DIS"),
    ("walt disney", "DIS"),
    ("disney+", "DIS"),
    ("hulu", "DIS"),
    ("espn", "DIS"),
    ("bank of america", "BAC"),
    ("exxon", "XOM"),
    ("exxonmobil", "XOM"),
    ("exxon mobil", "XOM"),
    ("chevron", "CVX"),
    ("coca-cola", "KO"),
    ("coca cola", "KO"),
    ("pfizer", "PFE"),
    ("merck", "MRK"),
    ("keytruda", "MRK"),
    ("abbott", "ABT"),
    ("abbott laboratories", "ABT"),
    ("verizon", "VZ"),
    ("at&t", "T"),
    ("nike", "NKE"),
    ("jordan brand", "NKE"),
    ("mcdonald's", "MCD"),
    ("mcdonalds", "MCD"),
];

/// Scan `text` for alias hits, longest alias first.
///
/// `extra` aliases (already lowercased) take part in the same ordered scan,
/// so a configured name competes with the built-in table on equal terms.
/// Returns ticker → hit count.
pub fn scan_aliases(text: &str, extra: &[(String, String)]) -> HashMap<String, usize> {
    let mut table: Vec<(&str, &str)> = COMPANY_ALIASES.to_vec();
    for (alias, ticker) in extra {
        table.push((alias.as_str(), ticker.as_str()));
    }
    table.sort_by_key(|(alias, _)| std::cmp::Reverse(alias.len()));

    let mut remaining = text.to_lowercase();
    let mut hits: HashMap<String, usize> = HashMap::new();

    for (alias, ticker) in table {
        let mut count = 0;
        while let Some(pos) = remaining.find(alias) {
            count += 1;
            // Consume the span so shorter aliases cannot re-match it.
            remaining.replace_range(pos..pos + alias.len(), &" ".repeat(alias.len()));
        }
        if count > 0 {
            *hits.entry(ticker.to_string()).or_insert(0) += count;
        }
    }

    hits
}
