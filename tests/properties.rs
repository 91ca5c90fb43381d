//! Property tests: invariants that must hold for arbitrary input.

use contentiq::{score_article, ArticleInput};
use proptest::prelude::*;

fn arbitrary_article() -> impl Strategy<Value = ArticleInput> {
    (
        ".{0,400}",
        ".{0,400}",
        ".{0,40}",
        proptest::collection::vec(".{0,20}", 0..4),
        proptest::option::of(".{0,30}"),
    )
        .prop_map(
            |(plain_text, markup, primary_keyword, secondary_keywords, author_name)| {
                ArticleInput {
                    plain_text,
                    markup,
                    primary_keyword,
                    secondary_keywords,
                    author_name,
                }
            },
        )
}

proptest! {
    #[test]
    fn scores_are_always_in_range(input in arbitrary_article()) {
        let result = score_article(&input);
        prop_assert!(result.seo_score <= 100);
        prop_assert!(result.aeo_score <= 100);
        prop_assert!(result.geo_score <= 100);
        prop_assert!(result.eeat_score <= 100);
    }

    #[test]
    fn densities_are_never_negative(input in arbitrary_article()) {
        let result = score_article(&input);
        for density in result.keyword_density.values() {
            prop_assert!(*density >= 0.0);
            prop_assert!(density.is_finite());
        }
    }

    #[test]
    fn scoring_is_deterministic(input in arbitrary_article()) {
        prop_assert_eq!(score_article(&input), score_article(&input));
    }

    #[test]
    fn empty_keyword_always_zeroes_seo(text in ".{0,400}", markup in ".{0,400}") {
        let input = ArticleInput {
            plain_text: text,
            markup,
            primary_keyword: String::new(),
            secondary_keywords: Vec::new(),
            author_name: None,
        };
        prop_assert_eq!(score_article(&input).seo_score, 0);
    }

    #[test]
    fn density_map_covers_every_supplied_keyword(
        text in ".{0,200}",
        primary in ".{1,20}",
        secondaries in proptest::collection::vec(".{1,15}", 0..4),
    ) {
        let input = ArticleInput {
            plain_text: text,
            markup: String::new(),
            primary_keyword: primary.clone(),
            secondary_keywords: secondaries.clone(),
            author_name: None,
        };
        let result = score_article(&input);
        prop_assert!(result.keyword_density.contains_key(&primary));
        for keyword in &secondaries {
            prop_assert!(result.keyword_density.contains_key(keyword));
        }
    }
}
