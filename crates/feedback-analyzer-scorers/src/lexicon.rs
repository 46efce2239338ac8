//! Stemmed affect-lexicon scorer
//!
//! Text is split into Unicode words, each word is reduced with the Snowball
//! English stemmer, and the signed scores of all matching stems are summed.
//! The sum is then rescaled into positive/negative/neutral percentages.

use crate::scorer::{ScorerVariant, SentimentScorer};
use feedback_analyzer_core::{Error, Overall, Result, SentimentResult};
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Summed polarity inside `[-NEUTRAL_BAND, NEUTRAL_BAND]` is labelled
/// `Neutral`.
pub const NEUTRAL_BAND: f64 = 0.05;

const BUILTIN_LEXICON: &str = include_str!("data/afinn.tsv");

#[derive(Debug, Clone, Copy)]
struct Entry {
    score: f64,
    /// The source word was already in stemmed form
    base: bool,
}

/// Word polarity table keyed by stem
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Entry>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded affect word list
    pub fn builtin() -> Self {
        let mut lexicon = Self::new();
        for (word, score) in BUILTIN_LEXICON.lines().filter_map(|line| parse_line(line).ok()?) {
            lexicon.insert(word, score);
        }
        lexicon
    }

    /// Build a lexicon from `(word, score)` pairs
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        for (word, score) in entries {
            lexicon.insert(word.as_ref(), score);
        }
        lexicon
    }

    /// Parse tab-separated `word<TAB>score` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_tsv(content: &str) -> Result<Self> {
        let mut lexicon = Self::new();
        for (index, line) in content.lines().enumerate() {
            let parsed = parse_line(line)
                .map_err(|e| Error::lexicon(format!("line {}: {}", index + 1, e)))?;
            if let Some((word, score)) = parsed {
                lexicon.insert(word, score);
            }
        }
        Ok(lexicon)
    }

    /// Load a tab-separated lexicon file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::lexicon(format!("Failed to read lexicon {}: {}", path.display(), e))
        })?;
        Self::from_tsv(&content)
    }

    /// Add a word.
    ///
    /// When two words share a stem, a word that is its own stem replaces an
    /// inflected one; otherwise the first entry is kept.
    pub fn insert(&mut self, word: &str, score: f64) {
        let word = word.trim().to_lowercase();
        let stem = stem(&word);
        let entry = Entry {
            score,
            base: stem == word,
        };

        let keep_existing = self
            .entries
            .get(&stem)
            .is_some_and(|existing| existing.base || !entry.base);
        if !keep_existing {
            self.entries.insert(stem, entry);
        }
    }

    /// Merge `other` into this lexicon, overriding entries with the same stem
    pub fn merge(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    /// Score for an already-stemmed token
    pub fn score_stem(&self, stem: &str) -> Option<f64> {
        self.entries.get(stem).map(|entry| entry.score)
    }

    /// Score for a surface word, stemming it first
    pub fn score_word(&self, word: &str) -> Option<f64> {
        self.score_stem(&stem(&word.to_lowercase()))
    }

    /// Number of distinct stems
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lexicon-based sentiment scorer
pub struct LexiconScorer {
    name: String,
    lexicon: Arc<Lexicon>,
    stemmer: Stemmer,
}

impl LexiconScorer {
    /// Create a scorer over the given lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_name("lexicon", lexicon)
    }

    pub fn with_name(name: impl Into<String>, lexicon: Lexicon) -> Self {
        Self {
            name: name.into(),
            lexicon: Arc::new(lexicon),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Scorer over the embedded lexicon
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Signed sum of the polarity of every stemmed token
    pub fn polarity(&self, text: &str) -> f64 {
        tokenize(text)
            .iter()
            .filter_map(|token| self.lexicon.score_stem(&self.stemmer.stem(token)))
            .sum()
    }

    /// Synchronous scoring entry point
    pub fn score_text(&self, text: &str) -> SentimentResult {
        from_polarity(self.polarity(text))
    }
}

#[async_trait::async_trait]
impl SentimentScorer for LexiconScorer {
    async fn analyze(&self, text: &str) -> SentimentResult {
        self.score_text(text)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn variant(&self) -> ScorerVariant {
        ScorerVariant::Lexicon
    }
}

/// Rescale a summed polarity into percentages and a label.
///
/// A zero sum is reported as fully neutral. Any other sum puts 100% on its
/// own side, so `neutral` is only nonzero in the zero-sum case. The label
/// comes from the sum itself, not the percentages.
pub fn from_polarity(sum: f64) -> SentimentResult {
    let overall = if sum > NEUTRAL_BAND {
        Overall::Positive
    } else if sum < -NEUTRAL_BAND {
        Overall::Negative
    } else {
        Overall::Neutral
    };

    if sum == 0.0 {
        return SentimentResult::graded(0.0, 0.0, 100.0, overall);
    }

    let total = sum.abs();
    let positive = sum.max(0.0) / total * 100.0;
    let negative = (-sum).max(0.0) / total * 100.0;
    let neutral = 100.0 - positive - negative;

    SentimentResult::graded(positive, negative, neutral, overall)
}

/// Lowercased Unicode word tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(|word| word.to_lowercase()).collect()
}

fn stem(word: &str) -> String {
    Stemmer::create(Algorithm::English).stem(word).into_owned()
}

fn parse_line(line: &str) -> std::result::Result<Option<(&str, f64)>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, score) = line
        .split_once('\t')
        .ok_or_else(|| format!("expected 'word<TAB>score', got '{line}'"))?;
    let score: f64 = score
        .trim()
        .parse()
        .map_err(|e| format!("invalid score for '{}': {}", word, e))?;

    if !score.is_finite() {
        return Err(format!("score for '{word}' must be finite"));
    }

    Ok(Some((word.trim(), score)))
}
