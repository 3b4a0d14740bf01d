//! Article trust rating.
//!
//! [`TrustScorer::assess`] folds community votes, body heuristics and source
//! credibility into a composite 0-100 score with a label and display tier.

mod article;
pub mod credibility;
mod policy;
pub mod router;
mod signals;
pub mod views;

#[cfg(test)]
mod tests;

pub use article::ArticleInput;
pub use credibility::{
    CredibilityRegistry, CredibilityRegistryError, FixedCredibility, SourceCredibilityProvider,
};
pub use policy::{TrustTier, MAX_COMPOSITE_SCORE};
pub use router::trust_router;
pub use signals::NEUTRAL_VOTE_RATIO;
pub use views::{SubScoreBar, TrustBadgeView};

use credibility::{CREDIBILITY_CEILING, CREDIBILITY_FLOOR};
use serde::Serialize;

/// Stateless scorer; the only collaborator is the credibility provider.
#[derive(Debug, Clone)]
pub struct TrustScorer<P> {
    provider: P,
}

impl<P> TrustScorer<P>
where
    P: SourceCredibilityProvider,
{
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn assess(&self, article: &ArticleInput) -> TrustAssessment {
        let body = article.body_text.as_str();

        let vote_ratio = signals::vote_ratio(article.upvote_count, article.downvote_count);
        let content_quality = signals::content_quality(body);
        let reference_count = signals::reference_count(body);
        let source_credibility = self
            .provider
            .lookup(article.source_key())
            .clamp(CREDIBILITY_FLOOR, CREDIBILITY_CEILING);

        let composite_score = policy::composite_score(
            vote_ratio,
            source_credibility,
            content_quality,
            reference_count,
        );
        let tier = TrustTier::from_score(composite_score);

        TrustAssessment {
            vote_ratio,
            source_credibility,
            content_quality,
            reference_count,
            composite_score,
            label: tier.label(),
            tier,
        }
    }

    pub fn badge(&self, article: &ArticleInput) -> TrustBadgeView {
        TrustBadgeView::from(&self.assess(article))
    }
}

/// Sub-scores and the composite verdict for one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrustAssessment {
    pub vote_ratio: u8,
    pub source_credibility: u8,
    pub content_quality: u8,
    pub reference_count: usize,
    pub composite_score: u8,
    pub label: &'static str,
    pub tier: TrustTier,
}
