//! Scorer trait and common types

use async_trait::async_trait;
use feedback_analyzer_core::SentimentResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Trait for all sentiment scorers
///
/// Scoring never fails from the caller's point of view: implementations
/// degrade to a well-formed result instead of returning an error.
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    /// Score the given feedback text
    async fn analyze(&self, text: &str) -> SentimentResult;

    /// Get the scorer name
    fn name(&self) -> &str;

    /// Which scoring strategy this is
    fn variant(&self) -> ScorerVariant;
}

/// Scorer shared across request handlers
pub type SharedScorer = Arc<dyn SentimentScorer>;

/// Scoring strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerVariant {
    /// Hosted binary classifier over HTTP
    Remote,
    /// Local stemmed-lexicon scoring
    #[default]
    Lexicon,
}

impl ScorerVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Lexicon => "lexicon",
        }
    }
}

impl fmt::Display for ScorerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorerVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "lexicon" => Ok(Self::Lexicon),
            other => Err(format!(
                "unknown scorer '{other}', expected 'remote' or 'lexicon'"
            )),
        }
    }
}
