//! Configuration for scorer selection and construction

use crate::lexicon::{Lexicon, LexiconScorer};
use crate::remote::RemoteClassifier;
use crate::scorer::{ScorerVariant, SharedScorer};
use feedback_analyzer_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Which scorer to deploy and how to build it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Active scoring strategy
    #[serde(default)]
    pub scorer: ScorerVariant,

    /// Hosted classifier settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Lexicon scorer settings
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

impl ScorerConfig {
    /// Parse scorer configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse scorer config: {e}")))
    }
}

/// Hosted classifier settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the inference API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model identifier appended to `/models/`
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on a single upstream call
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl RemoteConfig {
    /// Full inference URL for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.api_base.trim_end_matches('/'),
            self.model.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Lexicon scorer settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Optional tab-separated `word<TAB>score` file merged over the
    /// built-in lexicon
    #[serde(default)]
    pub extra_path: Option<PathBuf>,
}

/// Build the configured scorer.
///
/// `token` is only used by the remote scorer.
pub fn build_scorer(config: &ScorerConfig, token: Option<String>) -> Result<SharedScorer> {
    match config.scorer {
        ScorerVariant::Remote => {
            let classifier = RemoteClassifier::new(&config.remote, token)?;
            if !classifier.has_token() {
                warn!("No inference API token configured, requests will be unauthenticated");
            }
            info!("Using remote classifier at {}", classifier.endpoint());
            Ok(Arc::new(classifier))
        }
        ScorerVariant::Lexicon => {
            let mut lexicon = Lexicon::builtin();
            if let Some(path) = &config.lexicon.extra_path {
                let extra = Lexicon::from_file(path)?;
                info!("Merging {} lexicon entries from {:?}", extra.len(), path);
                lexicon.merge(extra);
            }
            info!("Using lexicon scorer with {} stems", lexicon.len());
            Ok(Arc::new(LexiconScorer::new(lexicon)))
        }
    }
}

fn default_api_base() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_model() -> String {
    "distilbert-base-uncased-finetuned-sst-2-english".to_string()
}

fn default_timeout_ms() -> u64 {
    5_000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::SentimentScorer;
    use std::io::Write;

    #[test]
    fn test_scorer_config_yaml() {
        let yaml = r#"
scorer: remote
remote:
  api_base: https://inference.example.com/
  timeout_ms: 1500
"#;

        let config = ScorerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.scorer, ScorerVariant::Remote);
        assert_eq!(config.remote.timeout(), Duration::from_millis(1500));
        assert_eq!(
            config.remote.endpoint(),
            "https://inference.example.com/models/distilbert-base-uncased-finetuned-sst-2-english"
        );
        assert!(config.lexicon.extra_path.is_none());
    }

    #[test]
    fn test_defaults() {
        let config = ScorerConfig::default();
        assert_eq!(config.scorer, ScorerVariant::Lexicon);
        assert_eq!(config.remote.timeout_ms, 5_000);
    }

    #[tokio::test]
    async fn test_build_lexicon_with_extra_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stellar\t4").unwrap();

        let config = ScorerConfig {
            lexicon: LexiconConfig {
                extra_path: Some(file.path().to_path_buf()),
            },
            ..Default::default()
        };

        let scorer = build_scorer(&config, None).unwrap();
        assert_eq!(scorer.variant(), ScorerVariant::Lexicon);

        let result = scorer.analyze("a stellar candidate").await;
        assert_eq!(result.overall, feedback_analyzer_core::Overall::Positive);
    }

    #[test]
    fn test_build_lexicon_missing_extra_file() {
        let config = ScorerConfig {
            lexicon: LexiconConfig {
                extra_path: Some(PathBuf::from("/nonexistent/lexicon.tsv")),
            },
            ..Default::default()
        };
        assert!(build_scorer(&config, None).is_err());
    }

    #[test]
    fn test_build_remote() {
        let config = ScorerConfig {
            scorer: ScorerVariant::Remote,
            ..Default::default()
        };
        let scorer = build_scorer(&config, Some("token".to_string())).unwrap();
        assert_eq!(scorer.variant(), ScorerVariant::Remote);
        assert_eq!(scorer.name(), "remote");
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(ScorerConfig::from_yaml("scorer: [remote").is_err());
        assert!(ScorerConfig::from_yaml("scorer: vader").is_err());
    }
}
