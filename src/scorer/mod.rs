//! The four independent quality scorers
//!
//! Each scorer is an additive table of capped buckets over the shared
//! [`ScoreContext`]. Scorers are pure and mutually independent: they share
//! no state and may run in any order or in parallel.

pub mod aeo;
pub mod eeat;
pub mod geo;
pub mod seo;

pub use aeo::AeoScorer;
pub use eeat::EeatScorer;
pub use geo::GeoScorer;
pub use seo::SeoScorer;

use crate::markup::MarkupFeatures;
use crate::tokenizer::Tokens;

/// Read-only view of one article, shared by all scorers.
///
/// Some signals (e.g. "research shows") are lexical patterns over the plain
/// text rather than structural markup features, so scorers get the raw
/// strings alongside the derived features.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext<'a> {
    pub plain_text: &'a str,
    pub markup: &'a str,
    pub primary_keyword: &'a str,
    pub author_name: Option<&'a str>,
    pub tokens: &'a Tokens<'a>,
    pub features: &'a MarkupFeatures,
}

/// Trait for quality scorers
pub trait Scorer {
    /// Name of the score axis
    fn name(&self) -> &'static str;

    /// Compute the score for this axis (0-100)
    fn score(&self, ctx: &ScoreContext) -> u8;
}
