use metrics_exporter_prometheus::PrometheusHandle;
use news_trust::config::ScoringConfig;
use news_trust::trust::credibility::{CREDIBILITY_CEILING, CREDIBILITY_FLOOR};
use news_trust::trust::{CredibilityRegistry, CredibilityRegistryError};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured registry, or an empty one that answers with the fallback.
pub(crate) fn load_credibility_registry(
    scoring: &ScoringConfig,
) -> Result<CredibilityRegistry, CredibilityRegistryError> {
    match &scoring.credibility_registry {
        Some(path) => {
            let registry = CredibilityRegistry::from_path(path, scoring.default_credibility)?;
            info!(
                path = %path.display(),
                sources = registry.len(),
                fallback = registry.fallback(),
                "loaded source credibility registry"
            );
            Ok(registry)
        }
        None => {
            warn!(
                fallback = scoring.default_credibility,
                "no credibility registry configured; every source uses the fallback score"
            );
            Ok(CredibilityRegistry::new(scoring.default_credibility))
        }
    }
}

pub(crate) fn parse_credibility(raw: &str) -> Result<u8, String> {
    let value = raw
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("failed to parse '{raw}' as a credibility score ({err})"))?;

    if (CREDIBILITY_FLOOR..=CREDIBILITY_CEILING).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "credibility must be between {CREDIBILITY_FLOOR} and {CREDIBILITY_CEILING}, got {value}"
        ))
    }
}
