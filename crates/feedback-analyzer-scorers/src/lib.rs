//! Feedback Analyzer Scorers
//!
//! Two interchangeable ways of turning interview feedback into a
//! [`SentimentResult`](feedback_analyzer_core::SentimentResult):
//! - [`RemoteClassifier`]: delegates to a hosted binary sentiment model
//! - [`LexiconScorer`]: stems tokens locally and sums a fixed affect lexicon
//!
//! Exactly one scorer is deployed at a time; see [`build_scorer`].

pub mod config;
pub mod lexicon;
pub mod remote;
pub mod scorer;

pub use config::{build_scorer, LexiconConfig, RemoteConfig, ScorerConfig};
pub use lexicon::{from_polarity, tokenize, Lexicon, LexiconScorer, NEUTRAL_BAND};
pub use remote::{normalize, RemoteClassifier};
pub use scorer::{ScorerVariant, SentimentScorer, SharedScorer};

