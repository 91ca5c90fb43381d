//! Answer-engine optimization score - voice search and answer-box signals
//!
//! Rewards question-format headings, concise "direct answer" paragraphs,
//! lists, a clean heading hierarchy, FAQ sections, and definition/how-to
//! phrasing.

use super::{ScoreContext, Scorer};
use crate::markup::MarkupFeatures;
use crate::patterns::contains_any;
use regex::Regex;

const FAQ_PHRASES: &[&str] = &["faq", "frequently asked", "common questions"];

const DEFINITION_PHRASES: &[&str] = &[
    "is defined as",
    "refers to",
    "means that",
    "is a type of",
    "is a form of",
    "is the process of",
];

const HOW_TO_PHRASES: &[&str] = &[
    "how to",
    "steps to",
    "step 1",
    "step one",
    "follow these",
    "guide to",
];

/// A question heading (inner text containing `?`, no nested tags)
/// immediately followed by a paragraph. Two or more of these look like a
/// deliberate Q&A layout.
fn question_then_paragraph() -> Regex {
    Regex::new(r"(?is)<h[23][^>]*>[^<]*\?[^<]*</h[23]\s*>\s*<p\b").unwrap()
}

/// Scorer for answer-engine suitability
pub struct AeoScorer;

impl AeoScorer {
    fn question_heading_points(features: &MarkupFeatures) -> u32 {
        let count = features.question_heading_count;
        let mut points = 0;
        if count >= 1 {
            points += 12;
        }
        if count >= 2 {
            points += 8;
        }
        if count >= 3 {
            points += 5;
        }
        points
    }

    /// Paragraphs sized for a direct answer: 15-80 words.
    fn answer_paragraph_points(features: &MarkupFeatures) -> u32 {
        let count = features
            .paragraph_texts
            .iter()
            .filter(|t| (15..=80).contains(&t.split_whitespace().count()))
            .count();
        let mut points = 0;
        if count >= 1 {
            points += 8;
        }
        if count >= 2 {
            points += 6;
        }
        if count >= 4 {
            points += 6;
        }
        points
    }

    fn list_points(features: &MarkupFeatures) -> u32 {
        let mut points = 0;
        if features.list_count >= 1 {
            points += 8;
        }
        if features.list_count >= 2 {
            points += 5;
        }
        if features.list_item_count >= 5 {
            points += 5;
        }
        points
    }

    fn hierarchy_points(features: &MarkupFeatures) -> u32 {
        let mut points = 0;
        if features.h2_count >= 2 {
            points += 5;
        }
        if features.h2_count >= 4 {
            points += 4;
        }
        if features.h3_count >= 1 {
            points += 3;
        }
        points
    }

    fn faq_points(text_lower: &str, markup: &str) -> u32 {
        let mut points = 0;
        if contains_any(text_lower, FAQ_PHRASES) {
            points += 10;
        }
        if question_then_paragraph().find_iter(markup).count() >= 2 {
            points += 5;
        }
        points
    }

    fn phrasing_points(text_lower: &str) -> u32 {
        let mut points = 0;
        if contains_any(text_lower, DEFINITION_PHRASES) {
            points += 5;
        }
        if contains_any(text_lower, HOW_TO_PHRASES) {
            points += 5;
        }
        points
    }
}

impl Scorer for AeoScorer {
    fn name(&self) -> &'static str {
        "aeo"
    }

    fn score(&self, ctx: &ScoreContext) -> u8 {
        let text_lower = ctx.plain_text.to_lowercase();
        let features = ctx.features;

        let mut score: u32 = 0;
        if ctx.tokens.word_count() >= 300 {
            score += 10;
        }
        score += Self::question_heading_points(features);
        score += Self::answer_paragraph_points(features);
        score += Self::list_points(features);
        score += Self::hierarchy_points(features);
        score += Self::faq_points(&text_lower, ctx.markup);
        score += Self::phrasing_points(&text_lower);

        score.min(100) as u8
    }
}
