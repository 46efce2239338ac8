//! Error types for the feedback analyzer

/// Result type alias using the analyzer's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for analyzer operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Scorer construction or execution errors
    #[error("scorer error: {0}")]
    Scorer(String),

    /// Upstream inference service errors
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Lexicon loading or parsing errors
    #[error("lexicon error: {0}")]
    Lexicon(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Timeout errors
    #[error("operation timed out")]
    Timeout,
}

impl Error {
    /// Create a new scorer error
    pub fn scorer(msg: impl Into<String>) -> Self {
        Self::Scorer(msg.into())
    }

    /// Create a new upstream error
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Create a new lexicon error
    pub fn lexicon(msg: impl Into<String>) -> Self {
        Self::Lexicon(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short, stable name used as a metrics label
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scorer(_) => "scorer",
            Self::Upstream(_) => "upstream",
            Self::Lexicon(_) => "lexicon",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
            Self::Timeout => "timeout",
        }
    }
}
