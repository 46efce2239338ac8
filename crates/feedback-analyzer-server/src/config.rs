//! Server configuration

use feedback_analyzer_scorers::{ScorerConfig, ScorerVariant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Server configuration
///
/// Scorer settings sit at the top level of the YAML file next to the
/// frontend choice. The inference API token is never read from here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Scorer selection and settings
    #[serde(flatten)]
    pub scoring: ScorerConfig,

    /// Frontend served at `/`
    #[serde(default)]
    pub frontend: FrontendVariant,
}

impl ServerConfig {
    /// Load configuration from file, falling back to defaults when the
    /// file does not exist
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply CLI overrides
    pub fn with_overrides(
        mut self,
        scorer: Option<ScorerVariant>,
        frontend: Option<FrontendVariant>,
    ) -> Self {
        if let Some(scorer) = scorer {
            self.scoring.scorer = scorer;
        }

        if let Some(frontend) = frontend {
            self.frontend = frontend;
        }

        self
    }
}

/// Which embedded page is served at `/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontendVariant {
    /// Results appear inline in the chat
    #[default]
    Inline,
    /// Results are deferred into a modal dialog
    Modal,
}

impl FrontendVariant {
    /// Embedded asset backing this variant
    pub fn page(&self) -> &'static str {
        match self {
            Self::Inline => "index.html",
            Self::Modal => "modal.html",
        }
    }
}

impl fmt::Display for FrontendVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => f.write_str("inline"),
            Self::Modal => f.write_str("modal"),
        }
    }
}

impl FromStr for FrontendVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "modal" => Ok(Self::Modal),
            other => Err(format!(
                "unknown frontend '{other}', expected 'inline' or 'modal'"
            )),
        }
    }
}
