use crate::infra::load_credibility_registry;
use clap::Args;
use news_trust::config::AppConfig;
use news_trust::error::AppError;
use news_trust::telemetry;
use news_trust::trust::router::BatchTrustEntry;
use news_trust::trust::{ArticleInput, SourceCredibilityProvider, TrustBadgeView, TrustScorer};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file with one article object or an array of articles (stdin when omitted or "-")
    pub(crate) input: Option<PathBuf>,
    /// Source credibility registry (CSV with `source,credibility` columns)
    #[arg(long)]
    pub(crate) registry: Option<PathBuf>,
    /// Credibility for sources missing from the registry
    #[arg(long, value_parser = crate::infra::parse_credibility)]
    pub(crate) default_credibility: Option<u8>,
    /// Print JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        registry,
        default_credibility,
        json,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(path) = registry {
        config.scoring.credibility_registry = Some(path);
    }
    if let Some(score) = default_credibility {
        config.scoring.default_credibility = score;
    }

    telemetry::init(&config.telemetry)?;

    let scorer = TrustScorer::new(load_credibility_registry(&config.scoring)?);
    let raw = read_input(input)?;
    let articles = parse_articles(&raw)?;
    debug!(count = articles.len(), "scoring articles from input");

    let entries = assess_all(&scorer, articles);
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render_report(&entries));
    }

    Ok(())
}

fn read_input(input: Option<PathBuf>) -> Result<String, AppError> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// Accepts a single article object or an array of them.
pub(crate) fn parse_articles(raw: &str) -> Result<Vec<ArticleInput>, AppError> {
    let value: Value = serde_json::from_str(raw)?;
    let articles = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(articles)
}

pub(crate) fn assess_all<P>(
    scorer: &TrustScorer<P>,
    articles: Vec<ArticleInput>,
) -> Vec<BatchTrustEntry>
where
    P: SourceCredibilityProvider,
{
    articles
        .into_iter()
        .map(|article| {
            let assessment = scorer.assess(&article);
            BatchTrustEntry {
                article_id: article.article_id,
                badge: TrustBadgeView::from(&assessment),
                assessment,
            }
        })
        .collect()
}

pub(crate) fn render_report(entries: &[BatchTrustEntry]) -> String {
    let mut out = String::new();

    if entries.is_empty() {
        out.push_str("No articles to assess\n");
        return out;
    }

    for (index, entry) in entries.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let title = entry
            .article_id
            .as_deref()
            .map(|id| format!("Article {id}"))
            .unwrap_or_else(|| format!("Article #{}", index + 1));
        let badge = &entry.badge;

        out.push_str(&format!("{title}\n"));
        out.push_str(&format!(
            "  Trust score: {} ({}, tier {})\n",
            badge.score_pct,
            badge.heading,
            badge.tier.as_str()
        ));
        for bar in &badge.bars {
            out.push_str(&format!("  - {}: {}/{}\n", bar.label, bar.value, bar.max));
        }
        out.push_str(&format!("  References found: {}\n", badge.reference_count));
    }

    out
}
