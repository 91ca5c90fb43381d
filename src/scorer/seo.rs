//! Traditional SEO score - keyword placement, structure, length, media
//!
//! Nine independent additive buckets, summed and clamped to 0-100. An empty
//! primary keyword or empty plain text short-circuits to 0: no partial
//! credit without something to optimize for.

use super::{ScoreContext, Scorer};
use crate::keywords::{normalize, substring_occurrences};
use crate::markup::MarkupFeatures;
use crate::patterns::stat_pattern;

/// Window size (in words) for the front/back keyword-placement checks.
const PLACEMENT_WINDOW: usize = 150;

/// Scorer for traditional search-engine signals
pub struct SeoScorer;

impl SeoScorer {
    fn title_points(features: &MarkupFeatures, keyword: &str) -> u32 {
        let mut points = 0;
        if features.h1_count >= 1 {
            points += 5;
        }
        if let Some(h1) = features.h1_texts.first() {
            let lower = h1.to_lowercase();
            if let Some(pos) = lower.find(keyword) {
                points += 5;
                // Front-loaded: keyword starts in the first half of the title
                if pos < lower.len() / 2 {
                    points += 2;
                }
            }
        }
        points
    }

    /// Density band from the substring-occurrence count. The 0.5-3.0% band
    /// is the sweet spot; anything detectable still earns a floor of 3.
    fn density_band_points(text: &str, keyword: &str, word_count: usize) -> u32 {
        if word_count == 0 {
            return 0;
        }
        let occurrences = substring_occurrences(text, keyword);
        let keyword_words = keyword.split_whitespace().count();
        let density = (occurrences * keyword_words) as f64 / word_count as f64 * 100.0;
        if (0.5..=3.0).contains(&density) {
            8
        } else if (0.3..=4.0).contains(&density) {
            5
        } else if occurrences >= 1 {
            3
        } else {
            0
        }
    }

    fn placement_points(words: &[&str], keyword: &str) -> u32 {
        let mut points = 0;
        let window = PLACEMENT_WINDOW.min(words.len());
        let front = words[..window].join(" ").to_lowercase();
        if front.contains(keyword) {
            points += 5;
        }
        let back = words[words.len() - window..].join(" ").to_lowercase();
        if back.contains(keyword) {
            points += 5;
        }
        points
    }

    fn heading_points(features: &MarkupFeatures, keyword: &str) -> u32 {
        let mut points = 0;
        if features.h2_count >= 1 {
            points += 3;
        }
        if features.h2_count >= 2 {
            points += 2;
        }
        if features.h2_count >= 4 {
            points += 3;
        }
        if features.h3_count >= 1 {
            points += 2;
        }
        if features.h3_count >= 3 {
            points += 2;
        }
        let with_keyword = features
            .h2_texts
            .iter()
            .chain(&features.h3_texts)
            .filter(|t| t.to_lowercase().contains(keyword))
            .count();
        if with_keyword >= 1 {
            points += 2;
        }
        if with_keyword >= 2 {
            points += 2;
        }
        points
    }

    fn length_points(word_count: usize) -> u32 {
        [200, 500, 800, 1200, 1600]
            .iter()
            .filter(|&&threshold| word_count >= threshold)
            .count() as u32
            * 3
    }

    fn formatting_points(features: &MarkupFeatures) -> u32 {
        let mut points = 0;
        if features.list_count >= 1 {
            points += 4;
        }
        if features.list_count >= 2 {
            points += 2;
        }
        if features.strong_count >= 1 {
            points += 2;
        }
        if features.strong_count >= 3 {
            points += 2;
        }
        if features.paragraph_count >= 3 {
            points += 2;
        }
        points
    }

    fn link_points(features: &MarkupFeatures) -> u32 {
        let mut points = 0;
        if features.non_fragment_link_count >= 1 {
            points += 4;
        }
        if features.non_fragment_link_count >= 2 {
            points += 2;
        }
        if features.non_fragment_link_count >= 4 {
            points += 2;
        }
        points
    }

    fn media_points(features: &MarkupFeatures) -> u32 {
        let mut points = 0;
        if features.image_count >= 1 {
            points += 4;
        }
        if features.image_count >= 2 {
            points += 2;
        }
        if features.image_count >= 3 {
            points += 1;
        }
        points
    }

    fn readability_points(features: &MarkupFeatures, sentences: &[&str]) -> u32 {
        let mut points = 0;
        if !features.paragraph_texts.is_empty() {
            let total_words: usize = features
                .paragraph_texts
                .iter()
                .map(|t| t.split_whitespace().count())
                .sum();
            let avg = total_words as f64 / features.paragraph_texts.len() as f64;
            if avg <= 150.0 {
                points += 4;
            } else if avg <= 200.0 {
                points += 2;
            }
        }
        if sentences.len() >= 10 {
            let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
            let avg = total_words as f64 / sentences.len() as f64;
            if (10.0..=25.0).contains(&avg) {
                points += 4;
            } else if (8.0..=30.0).contains(&avg) {
                points += 2;
            }
        }
        points
    }

    fn richness_points(features: &MarkupFeatures, text: &str) -> u32 {
        let mut points = 0;
        if features.question_heading_count >= 1 {
            points += 3;
        }
        if features.question_heading_count >= 2 {
            points += 2;
        }
        if stat_pattern().is_match(text) {
            points += 2;
        }
        points
    }
}

impl Scorer for SeoScorer {
    fn name(&self) -> &'static str {
        "seo"
    }

    fn score(&self, ctx: &ScoreContext) -> u8 {
        if ctx.primary_keyword.trim().is_empty() || ctx.plain_text.trim().is_empty() {
            return 0;
        }
        let keyword = normalize(ctx.primary_keyword);
        let features = ctx.features;
        let word_count = ctx.tokens.word_count();

        let mut score: u32 = 0;
        if word_count >= 100 {
            score += 5;
        }
        score += Self::title_points(features, &keyword);
        score += Self::density_band_points(ctx.plain_text, &keyword, word_count);
        score += Self::placement_points(&ctx.tokens.words, &keyword);
        score += Self::heading_points(features, &keyword);
        score += Self::length_points(word_count);
        score += Self::formatting_points(features);
        score += Self::link_points(features);
        score += Self::media_points(features);
        score += Self::readability_points(features, &ctx.tokens.sentences);
        score += Self::richness_points(features, ctx.plain_text);

        score.min(100) as u8
    }
}
