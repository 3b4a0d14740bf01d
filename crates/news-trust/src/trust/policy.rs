use serde::{Deserialize, Serialize};

const VOTE_WEIGHT_TENTHS: u32 = 4;
const CREDIBILITY_WEIGHT_TENTHS: u32 = 3;
const CONTENT_WEIGHT_TENTHS: u32 = 2;
const POINTS_PER_REFERENCE: u32 = 5;
const REFERENCE_BONUS_CAP: u32 = 10;

pub const MAX_COMPOSITE_SCORE: u8 = 100;

/// Display tier derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrustTier {
    High,
    Medium,
    LowMedium,
    Low,
}

impl TrustTier {
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::High,
            60..=79 => Self::Medium,
            40..=59 => Self::LowMedium,
            _ => Self::Low,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "Highly Trustworthy",
            Self::Medium => "Trustworthy",
            Self::LowMedium => "Moderately Trustworthy",
            Self::Low => "Low Trustworthiness",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::LowMedium => "low-medium",
            Self::Low => "low",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::High => "shield-check",
            Self::Medium => "shield",
            Self::LowMedium => "shield-alert",
            Self::Low => "shield-x",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::High => "green",
            Self::Medium => "blue",
            Self::LowMedium => "yellow",
            Self::Low => "red",
        }
    }
}

/// Bonus for cited links: 5 points each, at most 10.
pub(crate) fn reference_bonus(reference_count: usize) -> u32 {
    let capped = reference_count.min((REFERENCE_BONUS_CAP / POINTS_PER_REFERENCE) as usize);
    capped as u32 * POINTS_PER_REFERENCE
}

/// `round(0.4·votes + 0.3·credibility + 0.2·content + bonus)`, computed in
/// tenths so halves round up exactly, then clamped to 100.
///
/// The weights sum to 0.9 and the bonus is additive; the result is not a
/// normalized average.
pub(crate) fn composite_score(
    vote_ratio: u8,
    source_credibility: u8,
    content_quality: u8,
    reference_count: usize,
) -> u8 {
    let tenths = u32::from(vote_ratio) * VOTE_WEIGHT_TENTHS
        + u32::from(source_credibility) * CREDIBILITY_WEIGHT_TENTHS
        + u32::from(content_quality) * CONTENT_WEIGHT_TENTHS
        + reference_bonus(reference_count) * 10;
    let rounded = (tenths + 5) / 10;
    rounded.min(u32::from(MAX_COMPOSITE_SCORE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(TrustTier::from_score(100), TrustTier::High);
        assert_eq!(TrustTier::from_score(80), TrustTier::High);
        assert_eq!(TrustTier::from_score(79), TrustTier::Medium);
        assert_eq!(TrustTier::from_score(60), TrustTier::Medium);
        assert_eq!(TrustTier::from_score(59), TrustTier::LowMedium);
        assert_eq!(TrustTier::from_score(40), TrustTier::LowMedium);
        assert_eq!(TrustTier::from_score(39), TrustTier::Low);
        assert_eq!(TrustTier::from_score(0), TrustTier::Low);
    }

    #[test]
    fn labels_match_tiers() {
        assert_eq!(TrustTier::High.label(), "Highly Trustworthy");
        assert_eq!(TrustTier::Medium.label(), "Trustworthy");
        assert_eq!(TrustTier::LowMedium.label(), "Moderately Trustworthy");
        assert_eq!(TrustTier::Low.label(), "Low Trustworthiness");
    }

    #[test]
    fn tier_serializes_kebab_case() {
        let encoded = serde_json::to_string(&TrustTier::LowMedium).expect("tier encodes");
        assert_eq!(encoded, "\"low-medium\"");
        assert_eq!(TrustTier::LowMedium.as_str(), "low-medium");
    }

    #[test]
    fn reference_bonus_caps_at_ten() {
        assert_eq!(reference_bonus(0), 0);
        assert_eq!(reference_bonus(1), 5);
        assert_eq!(reference_bonus(2), 10);
        assert_eq!(reference_bonus(50), 10);
    }

    #[test]
    fn composite_matches_weighted_formula() {
        // 32 + 21 + 10 + 5
        assert_eq!(composite_score(80, 70, 50, 1), 68);
        // 20 + 15 + 2 = 37
        assert_eq!(composite_score(50, 50, 10, 0), 37);
    }

    #[test]
    fn composite_rounds_half_up() {
        // 0.4 + 15 + 2 = 17.4 -> 17
        assert_eq!(composite_score(1, 50, 10, 0), 17);
        // 0.8 + 15.3 + 2 = 18.1 -> 18
        assert_eq!(composite_score(2, 51, 10, 0), 18);
        // 0.4 + 15.3 + 2 = 17.7 -> 18
        assert_eq!(composite_score(1, 51, 10, 0), 18);
        // 1.2 + 15.3 + 2 = 18.5 -> 19
        assert_eq!(composite_score(3, 51, 10, 0), 19);
    }

    #[test]
    fn composite_peaks_below_ceiling_for_valid_inputs() {
        // 40 + 26.7 + 10 + 10 = 86.7
        assert_eq!(composite_score(100, 89, 50, 10), 87);
    }

    #[test]
    fn composite_is_clamped() {
        assert_eq!(composite_score(255, 255, 255, usize::MAX), MAX_COMPOSITE_SCORE);
    }
}
