//! E-E-A-T score - experience, expertise, authoritativeness, trust
//!
//! Four capped buckets over lexical pattern families plus an always-some-
//! credit authoritativeness bucket (an article without a byline can still
//! earn partial credit).

use super::{ScoreContext, Scorer};
use crate::markup::MarkupFeatures;
use regex::Regex;

/// First-person experience phrasing, four pattern families.
fn experience_patterns() -> Vec<Regex> {
    vec![
        Regex::new(r"(?i)\b(?:in my experience|from my experience|in our experience)\b").unwrap(),
        Regex::new(r"(?i)\b(?:i|we)(?:'ve| have)? (?:used|tested|tried|worked with|built)\b")
            .unwrap(),
        Regex::new(r"(?i)\b(?:i|we) (?:found|noticed|discovered|learned)\b").unwrap(),
        Regex::new(r"(?i)\b(?:first-?hand|hands-?on|personally)\b").unwrap(),
    ]
}

/// Authority and terminology phrasing, four pattern families.
fn expertise_patterns() -> Vec<Regex> {
    vec![
        Regex::new(r"(?i)\b(?:research|study|studies|data|analysis) (?:shows?|indicates?|suggests?|found)\b").unwrap(),
        Regex::new(r"(?i)\b(?:according to|as (?:stated|reported|documented) by)\b").unwrap(),
        Regex::new(r"(?i)\b(?:expert|specialist|certified|peer-reviewed|years of experience)\b")
            .unwrap(),
        Regex::new(r"(?i)\b(?:methodology|framework|benchmark|best practices?|industry standard)\b")
            .unwrap(),
    ]
}

fn transparency_pattern() -> Regex {
    Regex::new(r"(?i)\b(?:disclaimer|disclosure|(?:last )?updated|sources|references|fact[- ]?checked)\b")
        .unwrap()
}

fn balanced_pattern() -> Regex {
    Regex::new(r"(?i)\b(?:however|on the other hand|pros and cons|in contrast|alternatively|that said|drawbacks?)\b")
        .unwrap()
}

/// Verifiable claims: years, percentages, currency amounts.
fn claim_pattern() -> Regex {
    Regex::new(r"(?i)\b(?:19|20)\d{2}\b|\b\d+(?:\.\d+)?%|[$€£]\d").unwrap()
}

fn family_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

/// Scorer for trust and authority signals
pub struct EeatScorer;

impl EeatScorer {
    fn experience_points(text: &str) -> u32 {
        match family_matches(&experience_patterns(), text) {
            0 => 0,
            1 => 10,
            2 => 15,
            _ => 20,
        }
    }

    fn expertise_points(text: &str) -> u32 {
        match family_matches(&expertise_patterns(), text) {
            0 => 0,
            1 => 6,
            2 => 10,
            3 | 4 => 15,
            _ => 20,
        }
    }

    fn authoritativeness_points(
        author_name: Option<&str>,
        features: &MarkupFeatures,
        word_count: usize,
    ) -> u32 {
        // Byline credit is never all-or-nothing
        let mut points = match author_name {
            Some(name) if !name.trim().is_empty() => 10,
            _ => 5,
        };
        points += match features.absolute_link_count {
            0 => 0,
            1 => 5,
            2 => 7,
            _ => 10,
        };
        if word_count >= 1000 {
            points += 5;
        } else if word_count >= 600 {
            points += 3;
        }
        points.min(25)
    }

    fn trustworthiness_points(text: &str, features: &MarkupFeatures) -> u32 {
        let mut points = match features.h2_count {
            n if n >= 3 => 8,
            2 => 5,
            _ => 0,
        };
        if features.h3_count >= 2 {
            points += 4;
        }
        if transparency_pattern().is_match(text) {
            points += 5;
        }
        points += match balanced_pattern().find_iter(text).count() {
            0 => 0,
            1 => 4,
            _ => 6,
        };
        points += match claim_pattern().find_iter(text).count() {
            0 => 0,
            1 | 2 => 3,
            _ => 5,
        };
        points.min(25)
    }
}

impl Scorer for EeatScorer {
    fn name(&self) -> &'static str {
        "eeat"
    }

    fn score(&self, ctx: &ScoreContext) -> u8 {
        let text = ctx.plain_text;
        let features = ctx.features;
        let word_count = ctx.tokens.word_count();

        let mut score: u32 = 0;
        if word_count >= 300 {
            score += 10;
        }
        score += Self::experience_points(text);
        score += Self::expertise_points(text);
        score += Self::authoritativeness_points(ctx.author_name, features, word_count);
        score += Self::trustworthiness_points(text, features);

        score.min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::testutil::{filler, Fixture};

    fn eeat(fixture: &Fixture) -> u8 {
        let tokens = fixture.tokens();
        EeatScorer.score(&fixture.ctx(&tokens))
    }

    #[test]
    fn minimal_article_still_earns_byline_floor() {
        // Authoritativeness always grants some credit: 5 without an author.
        assert_eq!(eeat(&Fixture::new(&filler(50), "", "")), 5);
        assert_eq!(
            eeat(&Fixture::new(&filler(50), "", "").with_author("Dana Author")),
            10
        );
    }

    #[test]
    fn blank_author_name_is_no_author() {
        assert_eq!(eeat(&Fixture::new(&filler(50), "", "").with_author("   ")), 5);
    }

    #[test]
    fn experience_tiers() {
        let one = format!("in my experience this works {}", filler(40));
        let three = format!(
            "in my experience this works and we tested it personally {}",
            filler(40)
        );
        assert_eq!(EeatScorer::experience_points(&one), 10);
        assert_eq!(EeatScorer::experience_points(&three), 20);
        assert_eq!(EeatScorer::experience_points(&filler(40)), 0);
    }

    #[test]
    fn expertise_tiers() {
        let one = "research shows this";
        let five = "research shows this according to an expert whose methodology \
                    and framework follow the industry standard";
        assert_eq!(EeatScorer::expertise_points(one), 6);
        assert_eq!(EeatScorer::expertise_points(five), 20);
        assert_eq!(EeatScorer::expertise_points("nothing relevant"), 0);
    }

    #[test]
    fn authoritativeness_without_author_rich_article() {
        // No author (5) + 3 absolute links (10) + 1000 words (5) = 20
        let text = filler(1000);
        let markup = r#"<a href="https://a.com">1</a><a href="https://b.com">2</a><a href="https://c.com">3</a>"#;
        let fixture = Fixture::new(&text, markup, "");
        assert_eq!(
            EeatScorer::authoritativeness_points(None, &fixture.features, 1000),
            20
        );
        // Whole score: base 10 (>= 300 words) + authoritativeness 20
        assert_eq!(eeat(&fixture), 30);
    }

    #[test]
    fn authoritativeness_word_count_tiers() {
        let features = crate::markup::extract("");
        assert_eq!(EeatScorer::authoritativeness_points(None, &features, 599), 5);
        assert_eq!(EeatScorer::authoritativeness_points(None, &features, 600), 8);
        assert_eq!(EeatScorer::authoritativeness_points(Some("A"), &features, 1000), 15);
    }

    #[test]
    fn trustworthiness_structure_and_language() {
        let text = "however the 2024 study reported 15% gains and $40 costs; \
                    sources are listed; on the other hand results vary";
        let markup = "<h2>a</h2><h2>b</h2><h2>c</h2><h3>x</h3><h3>y</h3>";
        let features = crate::markup::extract(markup);
        // h2 8 + h3 4 + transparency 5 + balanced (2 matches) 6 + claims
        // (2024, 15%, $40 -> 3) 5 = 28 -> capped at 25
        assert_eq!(EeatScorer::trustworthiness_points(text, &features), 25);
    }

    #[test]
    fn trustworthiness_partial() {
        let text = "however nothing else signals trust here";
        let features = crate::markup::extract("<h2>a</h2><h2>b</h2>");
        // h2 5 + balanced 4
        assert_eq!(EeatScorer::trustworthiness_points(text, &features), 9);
    }

    #[test]
    fn full_trust_article_caps_at_one_hundred() {
        let body = format!(
            "in my experience we tested this personally and research shows gains \
             according to an expert whose methodology and framework follow the \
             industry standard however on the other hand the 2024 study found \
             15% gains and $40 costs with sources listed {}",
            filler(1000)
        );
        let markup = r#"<h2>a</h2><h2>b</h2><h2>c</h2><h3>x</h3><h3>y</h3>
            <a href="https://a.com">1</a><a href="https://b.com">2</a><a href="https://c.com">3</a>"#;
        let fixture = Fixture::new(&body, markup, "").with_author("Dana Author");
        // base 10 + experience 20 + expertise 20 + authoritativeness 25 +
        // trust 25 = 100
        assert_eq!(eeat(&fixture), 100);
    }
}
