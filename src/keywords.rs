//! Keyword occurrence counting and density computation
//!
//! Two deliberately separate counting strategies live here. Whole-phrase
//! word-boundary matching feeds the density table callers display;
//! case-insensitive substring counting feeds only the SEO density-band
//! sub-signal. Keep them separate.

use regex::Regex;

/// Lower-case a keyword phrase and collapse internal whitespace.
pub fn normalize(keyword: &str) -> String {
    keyword
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Count whole-phrase, word-boundary, case-insensitive occurrences of a
/// keyword phrase. "marketing" does not match inside "remarketing".
pub fn phrase_occurrences(text: &str, keyword: &str) -> usize {
    let kw = normalize(keyword);
    if kw.is_empty() || text.is_empty() {
        return 0;
    }
    let escaped: Vec<String> = kw.split_whitespace().map(|w| regex::escape(w)).collect();
    let pattern = format!(r"(?i)\b{}\b", escaped.join(r"\s+"));
    // Escaped literals always compile; fall back to 0 matches if not.
    Regex::new(&pattern)
        .map(|re| re.find_iter(text).count())
        .unwrap_or(0)
}

/// Count case-insensitive substring occurrences (non-overlapping).
pub fn substring_occurrences(text: &str, keyword: &str) -> usize {
    let kw = normalize(keyword);
    if kw.is_empty() {
        return 0;
    }
    text.to_lowercase().matches(&kw).count()
}

/// Keyword density as a percentage, rounded to 2 decimals.
///
/// `density = (occurrences * keyword_words / text_words) * 100`. A zero
/// word count or empty keyword yields 0, never an error.
pub fn density(text: &str, keyword: &str) -> f64 {
    let total_words = text.split_whitespace().count();
    let kw = normalize(keyword);
    if total_words == 0 || kw.is_empty() {
        return 0.0;
    }
    let keyword_words = kw.split_whitespace().count();
    let occurrences = phrase_occurrences(text, &kw);
    let raw = (occurrences * keyword_words) as f64 / total_words as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_single_word_keyword() {
        // 4 words, one occurrence: (1 * 1 / 4) * 100 = 25.00
        assert_eq!(density("one two three keyword", "keyword"), 25.0);
    }

    #[test]
    fn density_two_word_phrase() {
        // 100 words with "content marketing" twice: (2 * 2 / 100) * 100 = 4.00
        let filler = "word ".repeat(96);
        let text = format!("content marketing {filler}content marketing");
        assert_eq!(text.split_whitespace().count(), 100);
        assert_eq!(density(&text, "content marketing"), 4.0);
    }

    #[test]
    fn density_is_zero_for_empty_text_or_keyword() {
        assert_eq!(density("", "keyword"), 0.0);
        assert_eq!(density("some text here", ""), 0.0);
        assert_eq!(density("some text here", "   "), 0.0);
    }

    #[test]
    fn density_rounds_to_two_decimals() {
        // 1 occurrence in 3 words: 33.333... -> 33.33
        assert_eq!(density("keyword two three", "keyword"), 33.33);
    }

    #[test]
    fn phrase_matching_is_case_insensitive() {
        assert_eq!(phrase_occurrences("Content MARKETING works", "content marketing"), 1);
    }

    #[test]
    fn phrase_matching_respects_word_boundaries() {
        assert_eq!(phrase_occurrences("remarketing tips", "marketing"), 0);
        assert_eq!(substring_occurrences("remarketing tips", "marketing"), 1);
    }

    #[test]
    fn phrase_matches_across_whitespace_runs() {
        assert_eq!(phrase_occurrences("content  marketing basics", "content marketing"), 1);
    }

    #[test]
    fn regex_metacharacters_in_keyword_are_literal() {
        assert_eq!(phrase_occurrences("we love c++ here", "c++"), 0);
        assert_eq!(substring_occurrences("we love c++ here", "c++"), 1);
        assert_eq!(density("what (not) to do", "to"), 25.0);
    }

    #[test]
    fn keyword_next_to_punctuation_still_matches() {
        assert_eq!(phrase_occurrences("try keyword, then stop", "keyword"), 1);
    }
}
