use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::article::ArticleInput;
use super::credibility::SourceCredibilityProvider;
use super::views::TrustBadgeView;
use super::{TrustAssessment, TrustScorer};

/// Assessment plus its badge projection for a single article.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleTrustResponse {
    pub assessment: TrustAssessment,
    pub badge: TrustBadgeView,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchTrustEntry {
    pub article_id: Option<String>,
    pub assessment: TrustAssessment,
    pub badge: TrustBadgeView,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchTrustResponse {
    pub assessed_at: DateTime<Utc>,
    pub count: usize,
    pub results: Vec<BatchTrustEntry>,
}

/// Router builder exposing the trust assessment endpoints.
pub fn trust_router<P>(scorer: Arc<TrustScorer<P>>) -> Router
where
    P: SourceCredibilityProvider + 'static,
{
    Router::new()
        .route("/api/v1/articles/trust", post(assess_handler::<P>))
        .route("/api/v1/articles/trust/batch", post(batch_handler::<P>))
        .with_state(scorer)
}

pub(crate) async fn assess_handler<P>(
    State(scorer): State<Arc<TrustScorer<P>>>,
    Json(article): Json<ArticleInput>,
) -> Json<ArticleTrustResponse>
where
    P: SourceCredibilityProvider + 'static,
{
    let assessment = scorer.assess(&article);
    debug!(
        article_id = article.article_id.as_deref().unwrap_or("-"),
        score = assessment.composite_score,
        tier = assessment.tier.as_str(),
        "assessed article"
    );

    Json(ArticleTrustResponse {
        badge: TrustBadgeView::from(&assessment),
        assessment,
    })
}

pub(crate) async fn batch_handler<P>(
    State(scorer): State<Arc<TrustScorer<P>>>,
    Json(articles): Json<Vec<ArticleInput>>,
) -> Json<BatchTrustResponse>
where
    P: SourceCredibilityProvider + 'static,
{
    let results: Vec<BatchTrustEntry> = articles
        .into_iter()
        .map(|article| {
            let assessment = scorer.assess(&article);
            BatchTrustEntry {
                article_id: article.article_id,
                badge: TrustBadgeView::from(&assessment),
                assessment,
            }
        })
        .collect();

    info!(count = results.len(), "assessed article batch");

    Json(BatchTrustResponse {
        assessed_at: Utc::now(),
        count: results.len(),
        results,
    })
}
