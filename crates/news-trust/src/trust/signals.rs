use regex::Regex;
use std::sync::OnceLock;

/// Vote ratio reported when an article has no votes.
pub const NEUTRAL_VOTE_RATIO: u8 = 50;

const LONG_BODY_CHARS: usize = 1000;
const MEDIUM_BODY_CHARS: usize = 500;
const REFERENCE_BONUS: u8 = 20;
const CONTENT_QUALITY_CAP: u8 = 100;

/// Percentage of upvotes among all votes, rounded half up.
pub(crate) fn vote_ratio(upvotes: u64, downvotes: u64) -> u8 {
    let upvotes = u128::from(upvotes);
    let total = upvotes + u128::from(downvotes);
    if total == 0 {
        return NEUTRAL_VOTE_RATIO;
    }

    // round(100 * up / total) == floor((200 * up + total) / (2 * total))
    let ratio = (200 * upvotes + total) / (2 * total);
    ratio.min(100) as u8
}

/// Loose "does this cite anything" test: any `http` or `www` substring.
pub(crate) fn has_references(body: &str) -> bool {
    body.contains("http") || body.contains("www")
}

pub(crate) fn length_tier(body: &str) -> u8 {
    let length = body.chars().count();
    if length > LONG_BODY_CHARS {
        30
    } else if length > MEDIUM_BODY_CHARS {
        20
    } else {
        10
    }
}

pub(crate) fn content_quality(body: &str) -> u8 {
    let bonus = if has_references(body) {
        REFERENCE_BONUS
    } else {
        0
    };
    (length_tier(body) + bonus).min(CONTENT_QUALITY_CAP)
}

fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("reference pattern compiles"))
}

/// Non-overlapping `http(s)://` links followed by at least one non-space character.
pub(crate) fn reference_count(body: &str) -> usize {
    reference_pattern().find_iter(body).count()
}
