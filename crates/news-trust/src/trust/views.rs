use super::policy::TrustTier;
use super::TrustAssessment;
use serde::Serialize;

const CONTENT_QUALITY_MAX: u8 = 50;
const PERCENT_MAX: u8 = 100;

/// One progress bar in the trust tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubScoreBar {
    pub label: &'static str,
    pub value: u8,
    pub max: u8,
    pub fill_pct: u8,
}

impl SubScoreBar {
    fn new(label: &'static str, value: u8, max: u8) -> Self {
        let fill_pct = (u16::from(value.min(max)) * 100 / u16::from(max)) as u8;
        Self {
            label,
            value,
            max,
            fill_pct,
        }
    }
}

/// Render-ready trust badge: percentage, tooltip heading and sub-score bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustBadgeView {
    pub score: u8,
    pub score_pct: String,
    pub heading: &'static str,
    pub tier: TrustTier,
    pub icon: &'static str,
    pub color: &'static str,
    pub bars: Vec<SubScoreBar>,
    pub reference_count: usize,
}

impl From<&TrustAssessment> for TrustBadgeView {
    fn from(assessment: &TrustAssessment) -> Self {
        let tier = assessment.tier;
        Self {
            score: assessment.composite_score,
            score_pct: format!("{}%", assessment.composite_score),
            heading: tier.label(),
            tier,
            icon: tier.icon(),
            color: tier.color(),
            bars: vec![
                SubScoreBar::new("Community votes", assessment.vote_ratio, PERCENT_MAX),
                SubScoreBar::new(
                    "Source credibility",
                    assessment.source_credibility,
                    PERCENT_MAX,
                ),
                SubScoreBar::new(
                    "Content quality",
                    assessment.content_quality,
                    CONTENT_QUALITY_MAX,
                ),
            ],
            reference_count: assessment.reference_count,
        }
    }
}
