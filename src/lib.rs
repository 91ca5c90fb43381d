//! Contentiq: Content Quality Scoring Engine
//!
//! This library scores article content along four independent axes -- SEO,
//! AEO (answer engines), GEO (generative engines), and E-E-A-T (trust) --
//! from the article's plain text and semi-structured markup. All scoring is
//! pure and synchronous: identical input always produces identical output,
//! and degenerate input (empty text, malformed markup) scores 0 instead of
//! erroring.

pub mod engine;
pub mod keywords;
pub mod markup;
pub mod patterns;
pub mod reporter;
pub mod scorer;
pub mod tokenizer;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Article content and keyword set supplied by the caller.
///
/// The engine never mutates or retains any of these fields; they only need
/// to live for the duration of one scoring call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    /// Article body with markup stripped
    pub plain_text: String,
    /// Article body as semi-structured markup (headings, lists, links, ...)
    pub markup: String,
    /// Primary keyword (may be empty; an empty keyword yields an SEO score of 0)
    pub primary_keyword: String,
    /// Secondary keywords (may be empty)
    #[serde(default)]
    pub secondary_keywords: Vec<String>,
    /// Author name, used only by the E-E-A-T scorer
    #[serde(default)]
    pub author_name: Option<String>,
}

/// The four quality scores plus the keyword-density table.
///
/// The scores measure different, non-commensurable qualities and are never
/// combined into a single number. Each is an integer in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Traditional search-engine optimization score (0-100)
    pub seo_score: u8,
    /// Answer-engine optimization score (0-100)
    pub aeo_score: u8,
    /// Generative-engine optimization score (0-100)
    pub geo_score: u8,
    /// Experience/Expertise/Authoritativeness/Trust score (0-100)
    pub eeat_score: u8,
    /// Density percentage per supplied keyword, keyed exactly as supplied.
    /// BTreeMap keeps serialized output deterministic.
    pub keyword_density: BTreeMap<String, f64>,
}

/// Public API: score one article. Used by the CLI and by programmatic consumers.
///
/// Pure and infallible: no I/O, no shared state, and no panics for any
/// string input, well-formed or not.
pub fn score_article(input: &ArticleInput) -> ScoreResult {
    engine::ScoringEngine::new().score(input)
}
