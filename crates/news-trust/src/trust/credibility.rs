//! Source reputation lookup.
//!
//! The scorer never draws credibility itself; it asks a
//! [`SourceCredibilityProvider`]. Production wiring uses a
//! [`CredibilityRegistry`] loaded from CSV, tests use [`FixedCredibility`].

use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lowest credibility a source can carry.
pub const CREDIBILITY_FLOOR: u8 = 50;
/// Highest credibility a source can carry.
pub const CREDIBILITY_CEILING: u8 = 89;

/// Reputation lookup keyed by the article's source identifier.
///
/// `source_id` is empty when the article does not name a source.
pub trait SourceCredibilityProvider: Send + Sync {
    fn lookup(&self, source_id: &str) -> u8;
}

impl<P> SourceCredibilityProvider for Arc<P>
where
    P: SourceCredibilityProvider + ?Sized,
{
    fn lookup(&self, source_id: &str) -> u8 {
        (**self).lookup(source_id)
    }
}

impl<P> SourceCredibilityProvider for Box<P>
where
    P: SourceCredibilityProvider + ?Sized,
{
    fn lookup(&self, source_id: &str) -> u8 {
        (**self).lookup(source_id)
    }
}

/// Returns the same score for every source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCredibility(pub u8);

impl SourceCredibilityProvider for FixedCredibility {
    fn lookup(&self, _source_id: &str) -> u8 {
        self.0
    }
}

/// In-memory registry of per-source credibility with a fallback for unknown sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredibilityRegistry {
    scores: HashMap<String, u8>,
    fallback: u8,
}

impl CredibilityRegistry {
    /// Empty registry; the fallback is clamped into the credibility range.
    pub fn new(fallback: u8) -> Self {
        Self {
            scores: HashMap::new(),
            fallback: fallback.clamp(CREDIBILITY_FLOOR, CREDIBILITY_CEILING),
        }
    }

    pub fn from_path(
        path: impl AsRef<Path>,
        fallback: u8,
    ) -> Result<Self, CredibilityRegistryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CredibilityRegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, fallback)
    }

    /// Reads `source,credibility` rows. Later rows override earlier ones.
    pub fn from_reader<R: Read>(reader: R, fallback: u8) -> Result<Self, CredibilityRegistryError> {
        let mut registry = Self::new(fallback);
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        for row in csv_reader.deserialize::<RegistryRow>() {
            let row = row?;
            if row.source.is_empty() {
                continue;
            }
            registry.insert(&row.source, row.credibility)?;
        }

        Ok(registry)
    }

    pub fn insert(&mut self, source_id: &str, score: i64) -> Result<(), CredibilityRegistryError> {
        let in_range = i64::from(CREDIBILITY_FLOOR)..=i64::from(CREDIBILITY_CEILING);
        if !in_range.contains(&score) {
            return Err(CredibilityRegistryError::OutOfRange {
                source_id: source_id.to_string(),
                score,
            });
        }

        // Range checked above.
        self.scores.insert(normalize_source(source_id), score as u8);
        Ok(())
    }

    pub fn fallback(&self) -> u8 {
        self.fallback
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl SourceCredibilityProvider for CredibilityRegistry {
    fn lookup(&self, source_id: &str) -> u8 {
        self.scores
            .get(&normalize_source(source_id))
            .copied()
            .unwrap_or(self.fallback)
    }
}

fn normalize_source(source_id: &str) -> String {
    source_id.trim().to_lowercase()
}

#[derive(Debug, Deserialize)]
struct RegistryRow {
    source: String,
    credibility: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum CredibilityRegistryError {
    #[error("failed to open credibility registry {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid credibility registry data: {0}")]
    Csv(#[from] csv::Error),
    #[error(
        "credibility {score} for source '{source_id}' is outside {}..={}",
        CREDIBILITY_FLOOR,
        CREDIBILITY_CEILING
    )]
    OutOfRange { source_id: String, score: i64 },
}
