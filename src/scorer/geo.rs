//! Generative-engine optimization score - citation-worthiness signals
//!
//! AI search summaries favor content with definitive statements, statistics,
//! external sources, named entities, and comprehensive coverage. All signals
//! here are lexical/structural heuristics; the entity counter is a rough
//! capitalization proxy, not NER.

use super::{ScoreContext, Scorer};
use crate::markup::MarkupFeatures;
use crate::patterns::stat_count;
use crate::tokenizer::Tokens;
use regex::Regex;

fn definitive_pattern() -> Regex {
    Regex::new(
        r"(?i)\b(?:research shows|studies (?:show|indicate)|according to|data (?:shows|indicates)|experts? (?:say|agree|recommend)|evidence suggests|statistics show)\b",
    )
    .unwrap()
}

/// A quoted run of at least 15 characters.
fn quoted_text_pattern() -> Regex {
    Regex::new(r#""[^"\n]{15,}""#).unwrap()
}

/// Scorer for generative-engine citation-worthiness
pub struct GeoScorer;

impl GeoScorer {
    fn emphasis_points(features: &MarkupFeatures, text: &str) -> u32 {
        let mut points = if features.strong_count >= 2 {
            10
        } else if features.strong_count >= 1 {
            6
        } else {
            0
        };
        if definitive_pattern().is_match(text) {
            points += 10;
        }
        points
    }

    fn statistic_points(text: &str) -> u32 {
        match stat_count(text) {
            0 => 0,
            1 => 8,
            2 => 12,
            _ => 18,
        }
    }

    fn citation_link_points(features: &MarkupFeatures) -> u32 {
        match features.absolute_link_count {
            0 => 0,
            1 => 7,
            2 => 10,
            _ => 15,
        }
    }

    /// Highest qualifying tier only, not additive.
    fn comprehensiveness_points(word_count: usize) -> u32 {
        match word_count {
            n if n >= 1500 => 17,
            n if n >= 1000 => 14,
            n if n >= 700 => 10,
            n if n >= 400 => 7,
            n if n >= 200 => 4,
            _ => 0,
        }
    }

    fn heading_density_points(features: &MarkupFeatures) -> u32 {
        let mut points = match features.h2_count {
            n if n >= 4 => 10,
            3 => 8,
            2 => 5,
            _ => 0,
        };
        if features.h3_count >= 2 {
            points += 5;
        }
        points
    }

    /// Rough named-entity proxy: runs of capitalized words, excluding the
    /// word that starts each sentence. Sentence-initial proper nouns are an
    /// accepted miss; mid-sentence capitalized conjuncts an accepted hit.
    fn entity_count(tokens: &Tokens) -> usize {
        let mut count = 0;
        for sentence in &tokens.sentences {
            let mut in_run = false;
            for (i, word) in sentence.split_whitespace().enumerate() {
                let capitalized = word
                    .chars()
                    .find(|c| c.is_alphabetic())
                    .is_some_and(|c| c.is_uppercase());
                if capitalized && i > 0 {
                    if !in_run {
                        count += 1;
                    }
                    in_run = true;
                } else {
                    in_run = false;
                }
            }
        }
        count
    }

    fn entity_points(tokens: &Tokens) -> u32 {
        match Self::entity_count(tokens) {
            0 => 0,
            1 | 2 => 3,
            3 | 4 => 6,
            _ => 10,
        }
    }

    fn quote_points(features: &MarkupFeatures, text: &str) -> u32 {
        let mut points = 0;
        if features.has_blockquote {
            points += 3;
        }
        if quoted_text_pattern().is_match(text) {
            points += 2;
        }
        points
    }
}

impl Scorer for GeoScorer {
    fn name(&self) -> &'static str {
        "geo"
    }

    fn score(&self, ctx: &ScoreContext) -> u8 {
        let features = ctx.features;
        let word_count = ctx.tokens.word_count();

        let mut score: u32 = 0;
        if word_count >= 200 {
            score += 10;
        }
        score += Self::emphasis_points(features, ctx.plain_text);
        score += Self::statistic_points(ctx.plain_text);
        score += Self::citation_link_points(features);
        score += Self::comprehensiveness_points(word_count);
        score += Self::heading_density_points(features);
        score += Self::entity_points(ctx.tokens);
        score += Self::quote_points(features, ctx.plain_text);

        score.min(100) as u8
    }
}
