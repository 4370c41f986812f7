//! Ticker-shaped token and proper-noun extraction.

use regex::Regex;
use std::sync::OnceLock;

/// All-caps English words and initialisms that look like tickers but are not.
pub const TICKER_DENYLIST: &[&str] = &[
    "A", "I", "AT", "BE", "DO", "GO", "IF", "IN", "IS", "IT", "ON", "OR", "SO", "TO", "UP", "US",
    "AN", "AS", "BY", "OF", "NO", "THE", "AND", "FOR", "NOT", "ALL", "CAN", "WAS", "ONE", "OUT",
    "NEW", "NOW", "HAS", "HAD", "CEO", "CFO", "COO", "CTO", "IPO", "GDP", "CPI", "PPI", "PMI",
    "SEC", "FBI", "DOJ", "IRS", "EPA", "FDA", "FAA", "FCC", "FTC", "NASA", "OPEC", "NATO", "ETF",
    "ESG", "NYSE", "DJIA", "AI", "EV", "EVS", "IOT", "HR", "PR", "VP", "AM", "PM", "YOY",
    "QOQ", "ATH", "EPS", "PE", "ROI", "ROE", "YTD", "USA", "UK", "EU", "UN", "FED", "II",
    "III", "IV", "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV",
    "DEC", "MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN",
];

/// Capitalized words that start sentences or name generic finance concepts,
/// not companies. Filters the proper-noun stage before any external lookup.
pub const PROPER_NOUN_DENYLIST: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday", "January",
    "February", "March", "April", "May", "June", "July", "August", "September", "October",
    "November", "December", "Market", "Markets", "Stock", "Stocks", "Shares", "Share", "Trade",
    "Trading", "Report", "Revenue", "Quarter", "Quarterly", "Annual", "Earnings", "Profit",
    "Growth", "Sales", "Analyst", "Analysts", "Investors", "Investor", "Price", "Prices", "Rate",
    "Rates", "Index", "Funds", "Fund", "Bond", "Bonds", "Wall", "Street", "Exchange", "Global",
    "World", "International", "Today", "Yesterday", "Tomorrow", "According", "Reuters",
    "Bloomberg", "The", "And", "For", "But", "Not", "All", "Can", "Was", "One", "Our", "Out",
    "Its", "Has", "His", "Her", "How", "New", "Now", "Old", "See", "Who", "Did", "Get", "Let",
    "Say", "She", "Too", "Use", "After", "Also", "Most", "Some", "What", "When", "With", "More",
    "From", "Over", "Into", "Just", "Than", "Very", "About", "Before", "Could", "Every", "First",
    "Major", "Other", "Since", "Their", "These", "Those", "Under", "Where", "While", "Would",
    "Should", "North", "South", "East", "West", "Chief", "President", "Chairman", "Board",
    "Company", "Companies", "Data", "Technology", "Technologies", "Capital", "Group", "Inc",
    "Corp", "Corporation", "Limited", "Partners", "Holdings", "Rally", "Rallied", "Decline",
    "Declined", "Surge", "Surged", "Drop", "Dropped", "Rise", "Rising", "Fall", "Falling",
    "Fell", "Gain", "Gained", "Loss", "Lost", "Jump", "Jumped", "Slide", "Boost", "Boosted",
    "Climb", "Climbed", "Plunge", "Plunged", "Beat", "Missed", "Cut", "Raised", "Lower",
    "Higher", "Record", "Sell", "Buy", "Hold", "Yield", "Yields", "Chair", "Dovish", "Hawkish",
    "Bullish", "Bearish", "Warning", "Alert", "Crisis", "Impact", "Shift", "Signal", "Signals",
    "Expected", "Announced", "Reported", "Filed", "Approved", "Denied", "Deal", "Merger",
    "Acquisition", "Partnership", "Launch", "Launched", "Federal", "Reserve", "Central",
    "Treasury", "Congress", "Senate", "Consensus", "Inflation", "Recession", "Unemployment",
    "Economy", "Sector", "Industry", "Regulatory", "Commission", "Authority",
];

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$?[A-Za-z][A-Za-z'.&-]*").expect("static word pattern"))
}

fn capitalized_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b[A-Z][a-z]{1,20}\b").expect("static noun pattern"))
}

fn is_upper_ticker(word: &str) -> bool {
    (1..=5).contains(&word.len()) && word.chars().all(|c| c.is_ascii_uppercase())
}

/// Extract ticker-shaped tokens: `$X`…`$XXXXX` always qualify; bare all-caps
/// words of 2–5 letters qualify unless denylisted.
pub fn extract_ticker_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in word_pattern().find_iter(text) {
        // The pattern admits inner punctuation ("J.P.", "AT&T"); strip any
        // trailing run of it so "AAPL." still qualifies.
        let word = m.as_str().trim_end_matches(['.', '\'', '&', '-']);
        if let Some(stripped) = word.strip_prefix('$') {
            if is_upper_ticker(stripped) {
                tokens.push(stripped.to_string());
            }
            continue;
        }
        if word.len() >= 2 && is_upper_ticker(word) && !TICKER_DENYLIST.contains(&word) {
            tokens.push(word.to_string());
        }
    }
    tokens
}

/// Extract candidate company names: runs of adjacent capitalized words,
/// denylist-filtered. "Acme Corp announced" yields "Acme Corp".
pub fn extract_proper_nouns(text: &str) -> Vec<String> {
    let words: Vec<(usize, usize, &str)> = capitalized_pattern()
        .find_iter(text)
        .map(|m| (m.start(), m.end(), m.as_str()))
        .filter(|(_, _, w)| !PROPER_NOUN_DENYLIST.contains(w))
        .collect();

    let mut phrases = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (start, end, word) in words {
        match current.take() {
            // Adjacent capitalized words (separated by one space) join.
            Some((prev_end, mut phrase)) if start == prev_end + 1 => {
                phrase.push(' ');
                phrase.push_str(word);
                current = Some((end, phrase));
            }
            Some((_, phrase)) => {
                phrases.push(phrase);
                current = Some((end, word.to_string()));
            }
            None => {
                current = Some((end, word.to_string()));
            }
        }
    }
    if let Some((_, phrase)) = current {
        phrases.push(phrase);
    }

    phrases.retain(|p| p.len() >= 3);
    phrases.dedup();
    phrases
}
