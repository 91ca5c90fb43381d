//! Shared lexical patterns used by more than one scorer
//!
//! Every pattern here is a single bounded scan with no nested quantifiers;
//! the regex engine guarantees linear-time matching on arbitrary input.

use regex::Regex;

/// Numeric/statistic mentions: percentages, large-number words, currency,
/// and comma-grouped figures.
pub fn stat_pattern() -> Regex {
    Regex::new(
        r"(?i)\b\d+(?:\.\d+)?\s*(?:%|percent|million|billion|thousand)|[$€£]\d|\b\d{1,3}(?:,\d{3})+\b",
    )
    .unwrap()
}

/// Count statistic mentions in plain text.
pub fn stat_count(text: &str) -> usize {
    stat_pattern().find_iter(text).count()
}

/// True when any phrase in the family occurs in the text, case-insensitively.
pub fn contains_any(text_lower: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text_lower.contains(p))
}
