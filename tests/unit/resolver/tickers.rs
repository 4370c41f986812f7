//! Unit tests for ticker-token and proper-noun extraction

use newsquant::resolver::tickers::{extract_proper_nouns, extract_ticker_tokens};

#[test]
fn test_extracts_bare_uppercase_tickers() {
    let tokens = extract_ticker_tokens("Shares of AAPL and MSFT rose today");
    assert!(tokens.contains(&"AAPL".to_string()));
    assert!(tokens.contains(&"MSFT".to_string()));
}

#[test]
fn test_dollar_prefix_always_qualifies() {
    let tokens = extract_ticker_tokens("$TSLA and $F moved in opposite directions");
    assert!(tokens.contains(&"TSLA".to_string()));
    assert!(tokens.contains(&"F".to_string()));
}

#[test]
fn test_denylist_filters_common_words() {
    let tokens = extract_ticker_tokens("THE CEO said GDP and CPI data hurt the IPO");
    assert!(tokens.is_empty());
}

#[test]
fn test_bare_single_letter_rejected() {
    let tokens = extract_ticker_tokens("Grade A results");
    assert!(tokens.is_empty());
}

#[test]
fn test_lowercase_words_ignored() {
    let tokens = extract_ticker_tokens("the quick brown fox");
    assert!(tokens.is_empty());
}

#[test]
fn test_proper_noun_run_joins_adjacent_words() {
    let nouns = extract_proper_nouns("Acme Widgets announced a partnership yesterday");
    assert!(nouns.contains(&"Acme Widgets".to_string()));
}

#[test]
fn test_proper_noun_denylist_applies() {
    let nouns = extract_proper_nouns("Investors expect Earnings Growth this Quarter");
    assert!(nouns.is_empty());
}

#[test]
fn test_single_capitalized_name_kept() {
    let nouns = extract_proper_nouns("Uber expands its robotaxi fleet");
    assert!(nouns.contains(&"Uber".to_string()));
}
