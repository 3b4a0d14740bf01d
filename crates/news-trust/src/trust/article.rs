use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

const ID_KEYS: &[&str] = &["id", "_id", "articleId", "article_id"];
const UPVOTE_KEYS: &[&str] = &["upvote", "upvoteCount", "upvote_count"];
const DOWNVOTE_KEYS: &[&str] = &["downvote", "downvoteCount", "downvote_count"];
const BODY_KEYS: &[&str] = &["content", "bodyText", "body_text"];
const VIEW_KEYS: &[&str] = &["views", "viewCount", "view_count"];
const SOURCE_KEYS: &[&str] = &["authorusername", "source", "sourceId", "source_id"];

/// Article fields the trust heuristic reads.
///
/// Decoding never fails on a JSON object: missing fields, `null`, negative or
/// fractional numbers, numeric strings and mistyped values all fall back to a
/// usable default. Each field accepts several upstream names; when more than
/// one is present the first usable one in key order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleInput {
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    #[serde(rename = "upvote")]
    pub upvote_count: u64,
    #[serde(rename = "downvote")]
    pub downvote_count: u64,
    #[serde(rename = "content")]
    pub body_text: String,
    #[serde(rename = "views")]
    pub view_count: u64,
    #[serde(rename = "authorusername", skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl<'de> Deserialize<'de> for ArticleInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_fields(&fields))
    }
}

impl ArticleInput {
    pub fn new(body_text: impl Into<String>) -> Self {
        Self {
            body_text: body_text.into(),
            ..Self::default()
        }
    }

    pub fn with_votes(mut self, upvotes: u64, downvotes: u64) -> Self {
        self.upvote_count = upvotes;
        self.downvote_count = downvotes;
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.view_count = views;
        self
    }

    pub fn with_source(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = Some(source_id.into());
        self
    }

    pub fn with_id(mut self, article_id: impl Into<String>) -> Self {
        self.article_id = Some(article_id.into());
        self
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let count = |keys: &[&str]| first_match(fields, keys, count_from_value).unwrap_or_default();

        Self {
            article_id: first_match(fields, ID_KEYS, identifier_from_value),
            upvote_count: count(UPVOTE_KEYS),
            downvote_count: count(DOWNVOTE_KEYS),
            body_text: first_match(fields, BODY_KEYS, text_from_value).unwrap_or_default(),
            view_count: count(VIEW_KEYS),
            source_id: first_match(fields, SOURCE_KEYS, identifier_from_value),
        }
    }

    /// Key handed to the credibility provider; empty when the article has no source.
    pub fn source_key(&self) -> &str {
        self.source_id.as_deref().map(str::trim).unwrap_or_default()
    }
}

fn first_match<T>(
    fields: &Map<String, Value>,
    keys: &[&str],
    extract: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find_map(extract)
}

fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().map(saturate_float)),
        Value::String(raw) => {
            let trimmed = raw.trim();
            trimmed
                .parse::<u64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(saturate_float))
        }
        _ => None,
    }
}

// Negative and NaN collapse to zero; `as` saturates at u64::MAX.
fn saturate_float(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value.trunc() as u64
    }
}

fn text_from_value(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// Strings and numbers as-is; objects such as `{"id": null, "name": "BBC"}`
/// yield their `id`, then their `name`.
fn identifier_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Object(nested) => ["id", "name"]
            .iter()
            .filter_map(|key| nested.get(*key))
            .find_map(|inner| match inner {
                Value::Object(_) => None,
                other => identifier_from_value(other),
            }),
        _ => None,
    }
}
