//! Scoring engine - derives features once, then runs the four scorers
//!
//! The tokenizer, markup extractor, and keyword analyzer have no
//! dependencies on each other, and neither do the four scorers; the scorers
//! run in parallel purely as a performance optimization. Correctness never
//! depends on ordering.

use crate::keywords;
use crate::markup::extract;
use crate::scorer::{AeoScorer, EeatScorer, GeoScorer, ScoreContext, Scorer, SeoScorer};
use crate::tokenizer::tokenize;
use crate::{ArticleInput, ScoreResult};
use std::collections::BTreeMap;

/// Stateless scoring engine. Holds no configuration and no caches; a single
/// instance can score any number of articles from any number of threads.
#[derive(Debug, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score one article. Pure and infallible: degenerate input produces
    /// zero scores and zero densities, never an error.
    pub fn score(&self, input: &ArticleInput) -> ScoreResult {
        let tokens = tokenize(&input.plain_text);
        let features = extract(&input.markup);
        let ctx = ScoreContext {
            plain_text: &input.plain_text,
            markup: &input.markup,
            primary_keyword: &input.primary_keyword,
            author_name: input.author_name.as_deref(),
            tokens: &tokens,
            features: &features,
        };

        let ((seo_score, aeo_score), (geo_score, eeat_score)) = rayon::join(
            || rayon::join(|| SeoScorer.score(&ctx), || AeoScorer.score(&ctx)),
            || rayon::join(|| GeoScorer.score(&ctx), || EeatScorer.score(&ctx)),
        );

        let mut keyword_density = BTreeMap::new();
        keyword_density.insert(
            input.primary_keyword.clone(),
            keywords::density(&input.plain_text, &input.primary_keyword),
        );
        for keyword in &input.secondary_keywords {
            keyword_density
                .entry(keyword.clone())
                .or_insert_with(|| keywords::density(&input.plain_text, keyword));
        }

        ScoreResult {
            seo_score,
            aeo_score,
            geo_score,
            eeat_score,
            keyword_density,
        }
    }
}
