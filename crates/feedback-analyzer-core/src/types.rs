//! Core types for the feedback analyzer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback text submitted for scoring
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Free-text interview feedback. A missing field reads as empty text.
    #[serde(default)]
    pub text: String,
}

impl AnalysisRequest {
    /// Create a new request
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decode a request body leniently.
    ///
    /// Bodies that are not valid JSON, or that lack a string `text` field,
    /// decode as an empty request instead of failing.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Overall sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overall {
    Positive,
    Negative,
    Neutral,
}

impl Overall {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Overall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (label, confidence) pair returned by a hosted classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    /// Class label, e.g. `POSITIVE`
    pub label: String,

    /// Confidence (0.0-1.0)
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Result of scoring one piece of feedback
///
/// Percentages are in the 0-100 range. `neutral` is only reported by the
/// lexicon scorer and is omitted from JSON otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Positive percentage
    pub positive: f64,

    /// Negative percentage
    pub negative: f64,

    /// Neutral percentage (lexicon scorer only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral: Option<f64>,

    /// Overall label
    pub overall: Overall,
}

impl SentimentResult {
    /// Binary result without a neutral share.
    ///
    /// The label is `Positive` only when `positive` strictly exceeds
    /// `negative`; ties resolve to `Negative`.
    pub fn binary(positive: f64, negative: f64) -> Self {
        let overall = if positive > negative {
            Overall::Positive
        } else {
            Overall::Negative
        };

        Self {
            positive,
            negative,
            neutral: None,
            overall,
        }
    }

    /// The all-zero `Negative` result returned when a binary scorer cannot
    /// produce a real answer.
    pub fn fallback() -> Self {
        Self::binary(0.0, 0.0)
    }

    /// Three-way result with an explicit neutral share
    pub fn graded(positive: f64, negative: f64, neutral: f64, overall: Overall) -> Self {
        Self {
            positive,
            negative,
            neutral: Some(neutral),
            overall,
        }
    }

    /// Render the chat-style summary shown to the user, with percentages
    /// rounded to two decimal places.
    pub fn summary(&self) -> String {
        let mut out = String::from("Here is your analysis from the feedback:\n");
        out.push_str(&format!("Positive: {:.2}%\n", self.positive));
        out.push_str(&format!("Negative: {:.2}%\n", self.negative));
        if let Some(neutral) = self.neutral {
            out.push_str(&format!("Neutral: {:.2}%\n", neutral));
        }
        out.push_str(&format!("Overall: {}", self.overall));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_binary_tie_is_negative() {
        let result = SentimentResult::binary(50.0, 50.0);
        assert_eq!(result.overall, Overall::Negative);
        assert_eq!(result.neutral, None);
    }

    #[test]
    fn test_fallback_shape() {
        let value = serde_json::to_value(SentimentResult::fallback()).unwrap();
        assert_eq!(
            value,
            json!({ "positive": 0.0, "negative": 0.0, "overall": "Negative" })
        );
    }

    #[test]
    fn test_graded_serializes_neutral() {
        let result = SentimentResult::graded(0.0, 0.0, 100.0, Overall::Neutral);
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["neutral"], json!(100.0));
        assert_eq!(value["overall"], json!("Neutral"));
    }

    #[test]
    fn test_request_lenient_decoding() {
        assert_eq!(
            AnalysisRequest::from_body(br#"{"text":"great"}"#),
            AnalysisRequest::new("great")
        );
        assert_eq!(AnalysisRequest::from_body(b"{}").text, "");
        assert_eq!(AnalysisRequest::from_body(b"not json").text, "");
        assert_eq!(AnalysisRequest::from_body(br#"{"text":42}"#).text, "");
        assert_eq!(AnalysisRequest::from_body(b"").text, "");
    }

    #[test]
    fn test_summary_formatting() {
        let summary = SentimentResult::binary(90.0, 10.0).summary();
        assert_eq!(
            summary,
            "Here is your analysis from the feedback:\n\
             Positive: 90.00%\n\
             Negative: 10.00%\n\
             Overall: Positive"
        );

        let summary = SentimentResult::graded(0.0, 0.0, 100.0, Overall::Neutral).summary();
        assert!(summary.contains("Neutral: 100.00%\n"));
        assert!(summary.ends_with("Overall: Neutral"));
    }

    #[test]
    fn test_summary_rounds_to_two_places() {
        let summary = SentimentResult::binary(99.98765, 0.01234).summary();
        assert!(summary.contains("Positive: 99.99%"));
        assert!(summary.contains("Negative: 0.01%"));
    }
}
