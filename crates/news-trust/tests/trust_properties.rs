use news_trust::trust::{
    ArticleInput, FixedCredibility, TrustScorer, TrustTier, MAX_COMPOSITE_SCORE,
    NEUTRAL_VOTE_RATIO,
};
use proptest::prelude::*;

fn expected_ratio(up: u64, down: u64) -> u8 {
    let total = (up + down) as f64;
    (100.0 * up as f64 / total).round() as u8
}

proptest! {
    /// Property: no votes always yields the neutral ratio.
    #[test]
    fn no_votes_is_neutral(body in ".{0,200}", credibility in 0u8..=255) {
        let scorer = TrustScorer::new(FixedCredibility(credibility));
        let assessment = scorer.assess(&ArticleInput::new(body));
        prop_assert_eq!(assessment.vote_ratio, NEUTRAL_VOTE_RATIO);
    }

    /// Property: vote ratio is the rounded upvote percentage.
    #[test]
    fn vote_ratio_is_rounded_percentage(up in 0u64..1_000_000, down in 0u64..1_000_000) {
        prop_assume!(up + down > 0);
        let scorer = TrustScorer::new(FixedCredibility(70));
        let assessment = scorer.assess(&ArticleInput::default().with_votes(up, down));
        prop_assert!(assessment.vote_ratio <= 100);
        prop_assert_eq!(assessment.vote_ratio, expected_ratio(up, down));
    }

    /// Property: every sub-score stays inside its documented range.
    #[test]
    fn sub_scores_stay_in_range(
        up in any::<u64>(),
        down in any::<u64>(),
        body in ".{0,1500}",
        credibility in any::<u8>(),
    ) {
        let scorer = TrustScorer::new(FixedCredibility(credibility));
        let article = ArticleInput::new(body).with_votes(up, down);
        let assessment = scorer.assess(&article);

        prop_assert!(assessment.vote_ratio <= 100);
        prop_assert!((50..=89).contains(&assessment.source_credibility));
        prop_assert!((10..=50).contains(&assessment.content_quality));
        prop_assert!(assessment.composite_score <= MAX_COMPOSITE_SCORE);
        prop_assert_eq!(assessment.tier, TrustTier::from_score(assessment.composite_score));
        prop_assert_eq!(assessment.label, assessment.tier.label());
    }

    /// Property: assessment is a pure function of its inputs.
    #[test]
    fn assessment_is_repeatable(up in 0u64..10_000, down in 0u64..10_000, body in ".{0,600}") {
        let scorer = TrustScorer::new(FixedCredibility(64));
        let article = ArticleInput::new(body).with_votes(up, down);
        prop_assert_eq!(scorer.assess(&article), scorer.assess(&article));
    }

    /// Property: more upvotes never lower the composite score.
    #[test]
    fn upvotes_never_lower_score(up in 0u64..1_000, down in 0u64..1_000, extra in 1u64..1_000) {
        let scorer = TrustScorer::new(FixedCredibility(70));
        let before = scorer.assess(&ArticleInput::default().with_votes(up, down));
        let after = scorer.assess(&ArticleInput::default().with_votes(up + extra, down));
        prop_assert!(after.composite_score >= before.composite_score);
    }
}
